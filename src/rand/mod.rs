//! Random sources for password generation.

use ::rand::TryRngCore;
use ::rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Uniform 32-bit draws. One draw is consumed per password position.
pub trait RandomSource {
    fn next_u32(&mut self) -> Result<u32>;
}

/// Operating system CSPRNG (getrandom on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl RandomSource for OsSource {
    #[inline]
    fn next_u32(&mut self) -> Result<u32> {
        OsRng
            .try_next_u32()
            .map_err(|e| Error::Entropy(e.to_string()))
    }
}

pub fn source_name() -> &'static str {
    "OS CSPRNG"
}

/// Scripted source for deterministic tests. Cycles through `values`.
#[cfg(test)]
pub struct SequenceSource {
    values: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty());
        Self { values, pos: 0 }
    }

    pub fn draws(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_u32(&mut self) -> Result<u32> {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        Ok(v)
    }
}
