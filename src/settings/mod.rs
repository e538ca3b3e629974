//! Persisted generator settings.

mod file;

use crate::error::Result;
use crate::pass::{ClassSet, GenerationRequest, Sampling, WeakInputPolicy};

/// Interactive slider bounds.
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

/// Longest password accepted from flags or the settings file.
pub const MAX_CLI_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub policy: WeakInputPolicy,
    pub sampling: Sampling,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(self)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }

    pub fn config_dir() -> std::path::PathBuf {
        file::config_dir()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassSet::ALL,
            policy: WeakInputPolicy::default(),
            sampling: Sampling::default(),
        }
    }
}
