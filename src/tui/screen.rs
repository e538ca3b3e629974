//! The interactive form and its rendering.

use zeroize::Zeroizing;

use crate::pass::{CharClass, ClassSet, GenerationRequest, StrengthReport, Tier};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_rule,
    box_top, meter,
};
use crate::ui::{DisplayPort, Feedback, FeedbackTarget};

use super::text;

const COPY_LABEL: &str = "Copy to Clipboard";

/// Form state plus everything currently on display.
pub struct Screen {
    length: usize,
    classes: ClassSet,
    password: Zeroizing<String>,
    field_feedback: Option<Feedback>,
    button_feedback: Option<Feedback>,
    report: Option<StrengthReport>,
    notice: Option<String>,
    status: Option<String>,
    show_help: bool,
}

impl Screen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length: settings.length.clamp(MIN_LENGTH, MAX_LENGTH),
            classes: settings.classes,
            password: Zeroizing::new(String::new()),
            field_feedback: None,
            button_feedback: None,
            report: None,
            notice: None,
            status: None,
            show_help: false,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Move the length slider by `delta`, staying within bounds.
    pub fn nudge_length(&mut self, delta: isize) {
        let next = self.length.saturating_add_signed(delta);
        self.length = next.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.classes.toggle(class);
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn showing_help(&self) -> bool {
        self.show_help
    }

    /// Full frame as lines, without line terminators.
    pub fn render(&self) -> Vec<String> {
        if self.show_help {
            return text::help_lines();
        }

        let mut lines = Vec::with_capacity(20);

        lines.push(box_top("pwforge"));
        lines.push(box_line(&self.password_line()));
        lines.push(box_rule());
        lines.push(box_line(&self.slider_line()));
        lines.push(box_line(&self.toggles_line()));
        lines.push(box_rule());
        lines.push(box_line(&self.actions_line()));
        lines.push(box_bottom());

        let (progress, label, color) = match self.report {
            Some(r) => (
                r.progress,
                format!(
                    "Password Strength: {} • Crack time: {}",
                    r.tier, r.crack_time
                ),
                tier_color(r.tier),
            ),
            None => (0, "Password Strength: -".to_string(), DIM),
        };
        lines.extend(meter(progress, &label, color));

        if let Some(notice) = &self.notice {
            lines.push(box_top("Notice"));
            lines.push(box_line_center(&format!("{RED}{notice}{RESET}")));
            lines.push(box_line_center(&format!("{DIM}press any key{RESET}")));
            lines.push(box_bottom());
        } else if let Some(status) = &self.status {
            lines.push(format!(" {DIM}{status}{RESET}"));
        }

        lines.push(String::new());
        lines.push(format!(" {DIM}{}{RESET}", text::KEY_HINTS));
        lines
    }

    fn password_line(&self) -> String {
        match self.field_feedback {
            Some(Feedback::Copied) => format!("Password  {GREEN}{}{RESET}", Feedback::Copied.text()),
            Some(Feedback::CopyFailed) => {
                format!("Password  {RED}{}{RESET}", Feedback::CopyFailed.text())
            }
            None if self.password.is_empty() => format!("Password  {DIM}(none yet){RESET}"),
            None => format!("Password  {BOLD}{}{RESET}", self.password.as_str()),
        }
    }

    fn slider_line(&self) -> String {
        let span = MAX_LENGTH - MIN_LENGTH;
        let pos = self.length - MIN_LENGTH;
        let track: String = (0..=span)
            .map(|i| if i == pos { '●' } else { '─' })
            .collect();
        format!(
            "Length    {:>2}   ◀ {} ▶  {DIM}({}-{}){RESET}",
            self.length, track, MIN_LENGTH, MAX_LENGTH
        )
    }

    fn toggles_line(&self) -> String {
        let boxes: Vec<String> = CharClass::ALL
            .iter()
            .map(|c| {
                let mark = if self.classes.contains(*c) { "x" } else { " " };
                format!("[{}] {} ({})", mark, short_label(*c), hotkey(*c))
            })
            .collect();
        boxes.join("   ")
    }

    fn actions_line(&self) -> String {
        let copy = match self.button_feedback {
            Some(Feedback::Copied) => format!("{GREEN}{}{RESET}", Feedback::Copied.text()),
            Some(Feedback::CopyFailed) => format!("{RED}{}{RESET}", Feedback::CopyFailed.text()),
            None => COPY_LABEL.to_string(),
        };
        format!("[Enter] Generate   [c] {copy}   [p] Click password")
    }
}

pub fn hotkey(class: CharClass) -> char {
    match class {
        CharClass::Upper => 'u',
        CharClass::Lower => 'l',
        CharClass::Digit => 'd',
        CharClass::Symbol => 's',
    }
}

fn short_label(class: CharClass) -> &'static str {
    match class {
        CharClass::Upper => "Upper",
        CharClass::Lower => "Lower",
        CharClass::Digit => "Digits",
        CharClass::Symbol => "Symbols",
    }
}

fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::VeryWeak | Tier::Weak => RED,
        Tier::Good | Tier::VeryGood => YELLOW,
        Tier::Strong | Tier::VeryStrong => GREEN,
    }
}

impl DisplayPort for Screen {
    fn options(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }

    fn show_password(&mut self, text: &str) {
        self.password = Zeroizing::new(text.to_owned());
        self.status = None;
    }

    fn show_strength(&mut self, report: &StrengthReport) {
        self.report = Some(*report);
    }

    fn show_feedback(&mut self, target: FeedbackTarget, feedback: Feedback) {
        match target {
            FeedbackTarget::CopyButton => self.button_feedback = Some(feedback),
            FeedbackTarget::PasswordField => self.field_feedback = Some(feedback),
        }
    }

    fn clear_feedback(&mut self, target: FeedbackTarget) {
        match target {
            FeedbackTarget::CopyButton => self.button_feedback = None,
            FeedbackTarget::PasswordField => self.field_feedback = None,
        }
    }

    fn notice(&mut self, message: &str) {
        self.notice = Some(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CrackTime, WeakInputPolicy, estimate};
    use crate::terminal::{BOX_WIDTH, console_width};

    fn screen() -> Screen {
        Screen::new(&Settings::default())
    }

    #[test]
    fn slider_is_bounded() {
        let mut s = screen();
        s.nudge_length(100);
        assert_eq!(s.length(), MAX_LENGTH);
        s.nudge_length(-100);
        assert_eq!(s.length(), MIN_LENGTH);
        s.nudge_length(3);
        assert_eq!(s.length(), MIN_LENGTH + 3);
    }

    #[test]
    fn saved_length_outside_slider_is_clamped() {
        let settings = Settings {
            length: 200,
            ..Settings::default()
        };
        assert_eq!(Screen::new(&settings).length(), MAX_LENGTH);
    }

    #[test]
    fn toggles_feed_options() {
        let mut s = screen();
        s.toggle(CharClass::Symbol);
        s.toggle(CharClass::Upper);
        let req = s.options();
        assert_eq!(req.length, 16);
        assert_eq!(
            req.classes,
            ClassSet::EMPTY.with(CharClass::Lower).with(CharClass::Digit)
        );
    }

    #[test]
    fn box_rows_keep_their_width() {
        let mut s = screen();
        s.show_password("Ab3$Ab3$Ab3$Ab3$Ab3$Ab3$Ab3$Ab3$");
        s.show_strength(&estimate(&s.options(), WeakInputPolicy::CapScore));
        s.show_feedback(FeedbackTarget::CopyButton, Feedback::CopyFailed);
        for length in [MIN_LENGTH, 16, MAX_LENGTH] {
            s.length = length;
            for line in s.render().iter().take(8) {
                assert_eq!(console_width(line), BOX_WIDTH, "{line}");
            }
        }
    }

    #[test]
    fn feedback_replaces_password_text_until_cleared() {
        let mut s = screen();
        s.show_password("secret-value");
        s.show_feedback(FeedbackTarget::PasswordField, Feedback::Copied);
        let frame = s.render().join("\n");
        assert!(frame.contains("Copied!"));
        assert!(!frame.contains("secret-value"));

        s.clear_feedback(FeedbackTarget::PasswordField);
        assert!(s.render().join("\n").contains("secret-value"));
    }

    #[test]
    fn notice_is_rendered_until_dismissed() {
        let mut s = screen();
        s.notice("Please select at least one character type!");
        assert!(s.has_notice());
        assert!(s.render().join("\n").contains("at least one character type"));
        s.dismiss_notice();
        assert!(!s.render().join("\n").contains("at least one character type"));
    }

    #[test]
    fn meter_shows_tier_and_crack_time() {
        let mut s = screen();
        let report = estimate(&s.options(), WeakInputPolicy::CapScore);
        assert_eq!(report.crack_time, CrackTime::Centuries);
        s.show_strength(&report);
        let frame = s.render().join("\n");
        assert!(frame.contains("Password Strength: Strong"));
        assert!(frame.contains("centuries"));
    }
}
