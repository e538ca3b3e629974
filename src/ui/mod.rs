//! Display-independent UI logic: the port the screen implements, the
//! clipboard, copy feedback timing and the event handlers.

mod clipboard;
mod controller;
mod port;
mod timer;

pub use clipboard::{Clipboard, NoClipboard, SystemClipboard};
pub use controller::Controller;
pub use port::{DisplayPort, Feedback, FeedbackTarget, NO_CLASS_NOTICE};
pub use timer::RevertTimer;
