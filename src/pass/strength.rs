//! Heuristic strength estimation.
//!
//! The score depends only on the request shape (length and enabled
//! classes), never on a generated string. It is an illustrative meter,
//! not a cryptanalytic measure.

use std::fmt;

use super::{CharClass, GenerationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    VeryWeak,
    Weak,
    Good,
    VeryGood,
    Strong,
    VeryStrong,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => Tier::VeryStrong,
            s if s >= 55.0 => Tier::Strong,
            s if s >= 45.0 => Tier::VeryGood,
            s if s >= 35.0 => Tier::Good,
            s if s >= 20.0 => Tier::Weak,
            _ => Tier::VeryWeak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::VeryWeak => "Very Weak",
            Tier::Weak => "Weak",
            Tier::Good => "Good",
            Tier::VeryGood => "Very Good",
            Tier::Strong => "Strong",
            Tier::VeryStrong => "Very Strong",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Tier::VeryWeak => "very-weak",
            Tier::Weak => "weak",
            Tier::Good => "good",
            Tier::VeryGood => "very-good",
            Tier::Strong => "strong",
            Tier::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse time-to-crack bucket, a function of progress only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    Seconds,
    HoursDays,
    MonthsYears,
    Centuries,
    Millennia,
}

impl CrackTime {
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0..=19 => CrackTime::Seconds,
            20..=39 => CrackTime::HoursDays,
            40..=59 => CrackTime::MonthsYears,
            60..=79 => CrackTime::Centuries,
            _ => CrackTime::Millennia,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CrackTime::Seconds => "seconds",
            CrackTime::HoursDays => "hours to days",
            CrackTime::MonthsYears => "months to years",
            CrackTime::Centuries => "centuries",
            CrackTime::Millennia => "millennia",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Treatment of short or low-variety requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeakInputPolicy {
    /// Force the tier label down; progress still follows the raw score.
    OverrideTier,
    /// Cap the score before tier and progress are derived.
    #[default]
    CapScore,
}

impl WeakInputPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            WeakInputPolicy::OverrideTier => "override",
            WeakInputPolicy::CapScore => "cap",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "override" => Some(WeakInputPolicy::OverrideTier),
            "cap" => Some(WeakInputPolicy::CapScore),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub tier: Tier,
    pub progress: u8,
    pub crack_time: CrackTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weakness {
    Severe,
    Moderate,
}

impl Weakness {
    fn classify(length: usize, class_count: usize) -> Option<Self> {
        if length < 8 || class_count < 2 {
            Some(Weakness::Severe)
        } else if length < 12 || class_count < 3 {
            Some(Weakness::Moderate)
        } else {
            None
        }
    }

    fn score_cap(self) -> f64 {
        match self {
            Weakness::Severe => 15.0,
            Weakness::Moderate => 30.0,
        }
    }

    fn tier(self) -> Tier {
        match self {
            Weakness::Severe => Tier::VeryWeak,
            Weakness::Moderate => Tier::Weak,
        }
    }
}

fn class_bonus(class: CharClass) -> f64 {
    match class {
        CharClass::Upper => 8.0,
        CharClass::Lower => 6.0,
        CharClass::Digit => 6.0,
        CharClass::Symbol => 12.0,
    }
}

fn length_bonus(length: usize) -> f64 {
    match length {
        25.. => 20.0,
        20.. => 15.0,
        16.. => 10.0,
        12.. => 5.0,
        _ => 0.0,
    }
}

/// Uncapped heuristic score.
pub fn raw_score(request: &GenerationRequest) -> f64 {
    let classes: f64 = request.classes.iter().map(class_bonus).sum();
    request.length as f64 * 1.2 + classes + length_bonus(request.length)
}

fn progress(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}

/// Estimate strength for `request` under `policy`.
pub fn estimate(request: &GenerationRequest, policy: WeakInputPolicy) -> StrengthReport {
    let raw = raw_score(request);
    let weakness = Weakness::classify(request.length, request.classes.len());

    let (score, tier) = match (policy, weakness) {
        (_, None) => (raw, Tier::from_score(raw)),
        (WeakInputPolicy::CapScore, Some(w)) => {
            let capped = raw.min(w.score_cap());
            (capped, Tier::from_score(capped))
        }
        (WeakInputPolicy::OverrideTier, Some(w)) => (raw, w.tier()),
    };

    let progress = progress(score);
    StrengthReport {
        tier,
        progress,
        crack_time: CrackTime::from_progress(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    fn req(length: usize, classes: ClassSet) -> GenerationRequest {
        GenerationRequest { length, classes }
    }

    fn only(class: CharClass) -> ClassSet {
        ClassSet::EMPTY.with(class)
    }

    #[test]
    fn short_single_class_is_very_weak() {
        let report = estimate(&req(4, only(CharClass::Lower)), WeakInputPolicy::CapScore);
        assert_eq!(report.tier, Tier::VeryWeak);
        assert!(report.progress <= 15);
        assert_eq!(report.progress, 11);
        assert_eq!(report.crack_time, CrackTime::Seconds);
    }

    #[test]
    fn moderate_input_is_capped_at_thirty() {
        let classes = only(CharClass::Lower).with(CharClass::Digit);
        let report = estimate(&req(10, classes), WeakInputPolicy::CapScore);
        assert!(report.tier <= Tier::Good);
        assert_eq!(report.tier, Tier::Weak);
        assert_eq!(report.progress, 24);
        assert_eq!(report.crack_time, CrackTime::HoursDays);

        // 11 chars with all classes scores 45.2 raw; the cap holds it at 30.
        let report = estimate(&req(11, ClassSet::ALL), WeakInputPolicy::CapScore);
        assert_eq!(report.progress, 30);
        assert_eq!(report.tier, Tier::Weak);
    }

    #[test]
    fn sixteen_chars_all_classes_is_strong() {
        let r = req(16, ClassSet::ALL);
        assert!((raw_score(&r) - 61.2).abs() < 1e-9);
        let report = estimate(&r, WeakInputPolicy::CapScore);
        assert_eq!(report.tier, Tier::Strong);
        assert_eq!(report.progress, 61);
        assert_eq!(report.crack_time, CrackTime::Centuries);
    }

    #[test]
    fn thirty_chars_all_classes_is_very_strong() {
        let report = estimate(&req(30, ClassSet::ALL), WeakInputPolicy::CapScore);
        assert_eq!(report.tier, Tier::VeryStrong);
        assert_eq!(report.progress, 88);
        assert_eq!(report.crack_time, CrackTime::Millennia);
    }

    #[test]
    fn progress_stays_in_range_for_extreme_lengths() {
        for policy in [WeakInputPolicy::CapScore, WeakInputPolicy::OverrideTier] {
            let huge = estimate(&req(1000, ClassSet::ALL), policy);
            assert_eq!(huge.progress, 100);
            assert_eq!(huge.tier, Tier::VeryStrong);
            assert_eq!(huge.crack_time, CrackTime::Millennia);

            let empty = estimate(&req(0, ClassSet::EMPTY), policy);
            assert_eq!(empty.progress, 0);
            assert_eq!(empty.tier, Tier::VeryWeak);
        }
    }

    #[test]
    fn estimate_is_pure() {
        for length in [0, 7, 8, 11, 12, 19, 25, 64] {
            for bits in 0..16u8 {
                let classes = ClassSet::from_flags(
                    bits & 1 != 0,
                    bits & 2 != 0,
                    bits & 4 != 0,
                    bits & 8 != 0,
                );
                let r = req(length, classes);
                for policy in [WeakInputPolicy::CapScore, WeakInputPolicy::OverrideTier] {
                    assert_eq!(estimate(&r, policy), estimate(&r, policy));
                }
            }
        }
    }

    #[test]
    fn policies_agree_on_tier_but_not_on_meter() {
        // 30 lowercase chars: raw 62, single class is severe.
        let r = req(30, only(CharClass::Lower));
        let capped = estimate(&r, WeakInputPolicy::CapScore);
        let overridden = estimate(&r, WeakInputPolicy::OverrideTier);

        assert_eq!(capped.tier, Tier::VeryWeak);
        assert_eq!(overridden.tier, Tier::VeryWeak);
        assert_eq!(capped.progress, 15);
        assert_eq!(overridden.progress, 62);
        assert_eq!(capped.crack_time, CrackTime::Seconds);
        assert_eq!(overridden.crack_time, CrackTime::Centuries);
    }

    #[test]
    fn override_forces_weak_for_moderate_inputs() {
        // 10 chars, all classes: raw 44 would be Good.
        let r = req(10, ClassSet::ALL);
        let report = estimate(&r, WeakInputPolicy::OverrideTier);
        assert_eq!(report.tier, Tier::Weak);
        assert_eq!(report.progress, 44);
        assert_eq!(report.crack_time, CrackTime::MonthsYears);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_score(19.99), Tier::VeryWeak);
        assert_eq!(Tier::from_score(20.0), Tier::Weak);
        assert_eq!(Tier::from_score(35.0), Tier::Good);
        assert_eq!(Tier::from_score(45.0), Tier::VeryGood);
        assert_eq!(Tier::from_score(55.0), Tier::Strong);
        assert_eq!(Tier::from_score(70.0), Tier::VeryStrong);
    }

    #[test]
    fn crack_time_follows_progress_not_tier() {
        assert_eq!(CrackTime::from_progress(19), CrackTime::Seconds);
        assert_eq!(CrackTime::from_progress(20), CrackTime::HoursDays);
        assert_eq!(CrackTime::from_progress(59), CrackTime::MonthsYears);
        assert_eq!(CrackTime::from_progress(60), CrackTime::Centuries);
        assert_eq!(CrackTime::from_progress(80), CrackTime::Millennia);
        assert_eq!(CrackTime::from_progress(100), CrackTime::Millennia);
    }

    #[test]
    fn length_bonus_steps() {
        assert_eq!(length_bonus(11), 0.0);
        assert_eq!(length_bonus(12), 5.0);
        assert_eq!(length_bonus(16), 10.0);
        assert_eq!(length_bonus(20), 15.0);
        assert_eq!(length_bonus(25), 20.0);
    }
}
