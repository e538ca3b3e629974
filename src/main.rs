use std::env;
use std::process;

mod cli;
mod error;
mod exits;
mod logging;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;
mod ui;

use logging::LogTarget;
use settings::Settings;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => interactive(),
        _ => cli::run(args),
    };
    process::exit(code);
}

fn interactive() -> i32 {
    logging::init(LogTarget::File);

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });

    match tui::run(&settings) {
        Ok(()) => 0,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            1
        }
    }
}
