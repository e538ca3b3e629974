//! Password generation.

use log::debug;
use zeroize::Zeroizing;

use super::{GenerationRequest, charset};
use crate::error::{Error, Result};
use crate::rand::RandomSource;

/// How a 32-bit draw is mapped onto the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// `draw % pool.len()`. Pools that do not divide 2^32 give the first
    /// `2^32 % len` characters one extra preimage each, a bias below
    /// 2^-25 for any pool this crate builds.
    #[default]
    Modulo,
    /// Discard draws in the incomplete top bucket, then map by modulo.
    Rejection,
}

impl Sampling {
    pub fn as_str(self) -> &'static str {
        match self {
            Sampling::Modulo => "modulo",
            Sampling::Rejection => "rejection",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "modulo" => Some(Sampling::Modulo),
            "rejection" => Some(Sampling::Rejection),
            _ => None,
        }
    }
}

/// Generate one password for `request`.
///
/// Fails with [`Error::NoCharacterClass`] when no class is enabled; an
/// empty alphabet never yields a string.
pub fn generate<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    sampling: Sampling,
    rng: &mut R,
) -> Result<Zeroizing<String>> {
    if request.classes.is_empty() {
        return Err(Error::NoCharacterClass);
    }

    let chars = charset::build(request.classes);
    let mut pass = Zeroizing::new(String::with_capacity(request.length));

    for _ in 0..request.length {
        let idx = match sampling {
            Sampling::Modulo => random_index(rng.next_u32()?, chars.len()),
            Sampling::Rejection => unbiased_index(rng, chars.len())?,
        };
        pass.push(chars[idx] as char);
    }

    debug!(
        "generated password: length={} classes={} pool={} sampling={}",
        request.length,
        request.classes.len(),
        chars.len(),
        sampling.as_str()
    );
    Ok(pass)
}

#[inline]
fn random_index(draw: u32, len: usize) -> usize {
    draw as usize % len
}

#[inline]
fn unbiased_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Result<usize> {
    let len = len as u64;
    // Largest multiple of len that fits in the 2^32 draw range.
    let zone = ((u32::MAX as u64 + 1) / len) * len;
    loop {
        let draw = rng.next_u32()? as u64;
        if draw < zone {
            return Ok((draw % len) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClass, ClassSet};
    use crate::rand::{OsSource, SequenceSource};

    fn request(length: usize, classes: ClassSet) -> GenerationRequest {
        GenerationRequest { length, classes }
    }

    #[test]
    fn exact_length_and_pool_membership() {
        let sets = [
            ClassSet::ALL,
            ClassSet::EMPTY.with(CharClass::Digit),
            ClassSet::EMPTY.with(CharClass::Symbol).with(CharClass::Lower),
            ClassSet::from_flags(false, true, true, true),
        ];
        for classes in sets {
            let pool = charset::build(classes);
            for length in [1, 4, 17, 32, 200] {
                let pass = generate(&request(length, classes), Sampling::Modulo, &mut OsSource)
                    .unwrap();
                assert_eq!(pass.chars().count(), length);
                assert!(pass.bytes().all(|b| pool.contains(&b)), "{classes}: {}", *pass);
            }
        }
    }

    #[test]
    fn empty_classes_never_yield_a_string() {
        for length in [0, 1, 16] {
            let err = generate(&request(length, ClassSet::EMPTY), Sampling::Modulo, &mut OsSource)
                .unwrap_err();
            assert!(matches!(err, Error::NoCharacterClass));
        }
    }

    #[test]
    fn zero_length_is_empty_string() {
        let pass = generate(&request(0, ClassSet::ALL), Sampling::Modulo, &mut OsSource).unwrap();
        assert!(pass.is_empty());
    }

    #[test]
    fn modulo_mapping_is_deterministic_for_fixed_source() {
        // Pool for Upper+Digit is "A..Z0..9", 36 characters.
        let classes = ClassSet::EMPTY.with(CharClass::Upper).with(CharClass::Digit);
        let mut rng = SequenceSource::new(vec![0, 25, 26, 35, 36, 36 * 1000 + 27]);
        let pass = generate(&request(6, classes), Sampling::Modulo, &mut rng).unwrap();
        assert_eq!(pass.as_str(), "AZ09A1");
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn rejection_discards_draws_in_top_bucket() {
        // Digit pool has 10 characters; 2^32 % 10 == 6, so the top six draws are rejected.
        let classes = ClassSet::EMPTY.with(CharClass::Digit);
        let mut rng = SequenceSource::new(vec![u32::MAX, u32::MAX - 5, 7, u32::MAX - 6, 3]);
        let pass = generate(&request(3, classes), Sampling::Rejection, &mut rng).unwrap();
        assert_eq!(pass.as_str(), &format!("7{}3", (u32::MAX - 6) % 10));
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn outputs_differ_across_calls() {
        let req = request(32, ClassSet::ALL);
        let a = generate(&req, Sampling::Modulo, &mut OsSource).unwrap();
        let b = generate(&req, Sampling::Modulo, &mut OsSource).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn sampling_names_parse_back() {
        for s in [Sampling::Modulo, Sampling::Rejection] {
            assert_eq!(Sampling::parse(s.as_str()), Some(s));
        }
        assert_eq!(Sampling::parse("fast"), None);
    }
}
