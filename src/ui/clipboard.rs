use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Clipboard write primitive. Writes may fail and must be handled.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // X11 serves the selection lazily; reading it back makes the owner
        // hand it over before the process can exit.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("clipboard write of {} chars", text.chars().count());
        Ok(())
    }
}

/// Clipboard that is never available; used when the system one fails to open.
pub struct NoClipboard(pub String);

impl Clipboard for NoClipboard {
    fn write(&mut self, _text: &str) -> Result<()> {
        Err(Error::Clipboard(self.0.clone()))
    }
}

impl<T: Clipboard + ?Sized> Clipboard for Box<T> {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}
