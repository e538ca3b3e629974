//! Interactive screen.

mod input;
mod screen;
mod text;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use zeroize::Zeroizing;

use crate::error::Result;
use crate::rand::OsSource;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, reset_terminal};
use crate::ui::{Clipboard, Controller, NoClipboard, SystemClipboard};

use input::Action;
use screen::Screen;

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

type App = Controller<Screen, Box<dyn Clipboard>, OsSource>;

/// Run the interactive screen until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
        Ok(c) => Box::new(c),
        Err(e) => {
            warn!("{e}; copy actions will report failure");
            Box::new(NoClipboard(e.to_string()))
        }
    };

    let mut app: App = Controller::new(
        Screen::new(settings),
        clipboard,
        OsSource,
        settings.policy,
        settings.sampling,
    );

    let guard = RawModeGuard::new()?;
    info!("interactive session started");

    if !settings.classes.is_empty() {
        app.generate()?;
    }
    let result = event_loop(&mut app);

    drop(guard);
    reset_terminal();
    info!("interactive session ended");
    result
}

fn event_loop(app: &mut App) -> Result<()> {
    loop {
        draw(app.display())?;

        let timeout = app
            .deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.display().has_notice() {
                app.display_mut().dismiss_notice();
            } else if app.display().showing_help() {
                app.display_mut().toggle_help();
            } else if !handle(app, input::action(key))? {
                return Ok(());
            }
        }

        app.tick(Instant::now());
    }
}

/// Apply one action. Returns false when the user asked to quit.
fn handle(app: &mut App, action: Action) -> Result<bool> {
    match action {
        Action::Generate => app.generate()?,
        Action::Copy => app.copy(Instant::now()),
        Action::ClickPassword => app.click_password(Instant::now()),
        Action::Lengthen => app.display_mut().nudge_length(1),
        Action::Shorten => app.display_mut().nudge_length(-1),
        Action::Toggle(class) => app.display_mut().toggle(class),
        Action::Save => save(app),
        Action::Help => app.display_mut().toggle_help(),
        Action::Quit => return Ok(false),
        Action::Ignore => {}
    }
    Ok(true)
}

fn save(app: &mut App) {
    let settings = Settings {
        length: app.display().length(),
        classes: app.display().classes(),
        policy: app.policy(),
        sampling: app.sampling(),
    };
    match settings.save_to_file() {
        Ok(()) => app.display_mut().set_status("Settings saved"),
        Err(e) => {
            warn!("saving settings failed: {e}");
            app.display_mut().set_status(format!("Error saving settings: {e}"));
        }
    }
}

fn draw(screen: &Screen) -> Result<()> {
    let lines = Zeroizing::new(screen.render());
    let mut frame = Zeroizing::new(String::from("\x1b[H\x1b[2J"));
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            frame.push_str("\r\n");
        }
        frame.push_str(line);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(frame.as_bytes())?;
    out.flush()?;
    Ok(())
}
