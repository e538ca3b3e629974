//! One-shot command line mode.

mod args;
mod context;
pub mod prompts;

pub use args::Args;
pub use context::Context;

use clap::Parser;

use crate::logging::{self, LogTarget};

/// Parse `args`, run, and return the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let args = Args::parse_from(args);
    prompts::set_quiet(args.quiet);

    let target = if args.interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(target);

    match Context::new(args).run() {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
