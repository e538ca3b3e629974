//! CLI context - bundles settings and parsed arguments.

use std::io::{self, BufWriter, Write};

use log::debug;
use zeroize::Zeroizing;

use super::{Args, prompts};
use crate::error::{Error, Result};
use crate::pass::{self, CharClass, Sampling};
use crate::rand::OsSource;
use crate::settings::Settings;
use crate::tui;
use crate::ui::{Clipboard, SystemClipboard};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub args: Args,
}

impl Context {
    /// Load saved settings (unless `--default`) and apply flags on top.
    pub fn new(args: Args) -> Self {
        let saved = if args.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        let mut ctx = Self {
            settings: saved,
            args,
        };
        ctx.apply_flags();
        ctx
    }

    fn apply_flags(&mut self) {
        let args = &self.args;
        let settings = &mut self.settings;

        if let Some(len) = args.length {
            settings.length = len as usize;
        }

        let removed = [
            (args.no_upper, CharClass::Upper),
            (args.no_lower, CharClass::Lower),
            (args.no_digits, CharClass::Digit),
            (args.no_symbols, CharClass::Symbol),
        ];
        for (off, class) in removed {
            if off {
                settings.classes.remove(class);
            }
        }

        if let Some(policy) = args.policy {
            settings.policy = policy.into();
        }
        if args.unbiased {
            settings.sampling = Sampling::Rejection;
        }
    }

    /// Run CLI mode to completion.
    pub fn run(&mut self) -> Result<()> {
        if self.args.save {
            // Never persist an empty selection.
            if self.settings.classes.is_empty() {
                return Err(Error::NoCharacterClass);
            }
            self.settings.save_to_file()?;
            prompts::settings_saved(&Settings::config_dir().join("settings").display().to_string());
        }

        if self.args.interactive {
            return tui::run(&self.settings);
        }

        let request = self.settings.request();
        if request.classes.is_empty() {
            return Err(Error::NoCharacterClass);
        }

        debug!(
            "cli: {} password(s), length {}, classes [{}]",
            self.args.number, request.length, request.classes
        );

        let mut rng = OsSource;
        let sampling = self.settings.sampling;
        let count = self.args.number as usize;

        if self.args.board {
            let mut passwords = Vec::with_capacity(count);
            for _ in 0..count {
                passwords.push(pass::generate(&request, sampling, &mut rng)?);
            }
            self.to_clipboard(&passwords)?;
        } else {
            print_passwords((0..count).map(|_| pass::generate(&request, sampling, &mut rng)))?;
        }

        if self.args.strength {
            prompts::strength(&pass::estimate(&request, self.settings.policy));
        }
        Ok(())
    }

    fn to_clipboard(&self, passwords: &[Zeroizing<String>]) -> Result<()> {
        let mut clipboard = match SystemClipboard::new() {
            Ok(c) => c,
            Err(e) => {
                debug!("{e}");
                if prompts::clipboard_fallback_prompt() {
                    return print_passwords(passwords.iter().cloned().map(Ok));
                }
                prompts::aborted();
                return Ok(());
            }
        };

        let mut joined = Zeroizing::new(String::new());
        for (i, p) in passwords.iter().enumerate() {
            if i > 0 {
                joined.push('\n');
            }
            joined.push_str(p);
        }

        clipboard.write(&joined)?;
        prompts::clipboard_copied(passwords.len());
        Ok(())
    }
}

/// Write each password as it is generated. A closed pipe ends output quietly.
fn print_passwords<I>(passwords: I) -> Result<()>
where
    I: IntoIterator<Item = Result<Zeroizing<String>>>,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for pass in passwords {
        let pass = pass?;
        if let Err(e) = writeln!(out, "{}", pass.as_str()) {
            return ignore_broken_pipe(e);
        }
    }
    out.flush().or_else(ignore_broken_pipe)
}

fn ignore_broken_pipe(e: io::Error) -> Result<()> {
    if e.kind() == io::ErrorKind::BrokenPipe {
        Ok(())
    } else {
        Err(e.into())
    }
}
