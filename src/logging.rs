//! Logger setup.
//!
//! `RUST_LOG` selects the filter (default `warn`). The interactive screen
//! owns the terminal, so it logs to a file in the config directory.

use std::fs::{self, File, OpenOptions};
use std::io;

use env_logger::{Builder, Env, Target};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

pub fn init(target: LogTarget) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_secs().format_module_path(true);

    if target == LogTarget::File
        && let Ok(file) = open_log_file()
    {
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (tests, re-entry from CLI into the screen) keeps the first logger.
    let _ = builder.try_init();
}

fn open_log_file() -> io::Result<File> {
    let dir = Settings::config_dir();
    fs::create_dir_all(&dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pwforge.log"))
}
