//! Password generation and strength estimation.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharClass, ClassSet};
pub use generate::{Sampling, generate};
pub use strength::{CrackTime, StrengthReport, Tier, WeakInputPolicy, estimate};

/// Shape of a password: how long, and from which classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}
