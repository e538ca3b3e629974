//! Settings file persistence.
//!
//! One line: `length,upper,lower,digit,symbol,policy,sampling`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use log::{debug, warn};

use super::{MAX_CLI_LENGTH, Settings};
use crate::error::{Error, Result};
use crate::pass::{CharClass, ClassSet, Sampling, WeakInputPolicy};

pub fn save(settings: &Settings) -> Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> Result<()> {
    let path = get_path();
    if !path.exists() {
        debug!("no settings at {}, using defaults", path.display());
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Ok(());
    }

    match decode(line.trim()) {
        Ok(loaded) => *settings = loaded,
        Err(e) => {
            warn!("ignoring {}: {}", path.display(), e);
            return Err(e);
        }
    }
    Ok(())
}

pub fn config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("pwforge")
}

#[inline]
fn get_path() -> PathBuf {
    config_dir().join("settings")
}

fn encode(settings: &Settings) -> String {
    let flags: Vec<String> = CharClass::ALL
        .iter()
        .map(|c| settings.classes.contains(*c).to_string())
        .collect();
    format!(
        "{},{},{},{}\n",
        settings.length,
        flags.join(","),
        settings.policy.as_str(),
        settings.sampling.as_str()
    )
}

fn decode(line: &str) -> Result<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 7 {
        return Err(Error::Settings(format!(
            "expected 7 fields, found {}",
            parts.len()
        )));
    }

    let length = parts[0]
        .parse::<usize>()
        .ok()
        .filter(|len| *len <= MAX_CLI_LENGTH)
        .ok_or_else(|| Error::Settings(format!("bad length: {}", parts[0])))?;

    let mut flags = [false; 4];
    for ((flag, class), field) in flags.iter_mut().zip(CharClass::ALL).zip(&parts[1..5]) {
        *flag = field
            .parse()
            .map_err(|_| Error::Settings(format!("bad flag for {}: {}", class.label(), field)))?;
    }
    let classes = ClassSet::from_flags(flags[0], flags[1], flags[2], flags[3]);

    let policy = WeakInputPolicy::parse(parts[5])
        .ok_or_else(|| Error::Settings(format!("bad policy: {}", parts[5])))?;
    let sampling = Sampling::parse(parts[6])
        .ok_or_else(|| Error::Settings(format!("bad sampling: {}", parts[6])))?;

    Ok(Settings {
        length,
        classes,
        policy,
        sampling,
    })
}
