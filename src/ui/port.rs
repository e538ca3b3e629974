use std::time::Duration;

use crate::pass::{GenerationRequest, StrengthReport};

pub const NO_CLASS_NOTICE: &str = "Please select at least one character type!";

/// Which surface is showing copy feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTarget {
    /// The dedicated copy control.
    CopyButton,
    /// The password text itself (copy-on-click).
    PasswordField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Copied,
    CopyFailed,
}

impl Feedback {
    pub fn text(self) -> &'static str {
        match self {
            Feedback::Copied => "Copied!",
            Feedback::CopyFailed => "Copy failed!",
        }
    }

    /// How long `self` stays visible on `target`.
    pub fn duration(self, target: FeedbackTarget) -> Duration {
        match (target, self) {
            (FeedbackTarget::PasswordField, Feedback::Copied) => Duration::from_millis(1500),
            _ => Duration::from_millis(2000),
        }
    }
}

/// Everything the controller needs from a rendering surface.
pub trait DisplayPort {
    /// Current form state.
    fn options(&self) -> GenerationRequest;

    fn show_password(&mut self, text: &str);

    fn show_strength(&mut self, report: &StrengthReport);

    fn show_feedback(&mut self, target: FeedbackTarget, feedback: Feedback);

    fn clear_feedback(&mut self, target: FeedbackTarget);

    /// Blocking notice the user must see before continuing.
    fn notice(&mut self, message: &str);
}
