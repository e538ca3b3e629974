use std::time::Instant;

use log::{info, warn};
use zeroize::Zeroizing;

use super::{Clipboard, DisplayPort, Feedback, FeedbackTarget, NO_CLASS_NOTICE, RevertTimer};
use crate::error::{Error, Result};
use crate::pass::{self, Sampling, WeakInputPolicy};
use crate::rand::RandomSource;

/// Event handlers wiring the generator, estimator and clipboard to a display.
///
/// Handlers run one at a time from a single-threaded event loop. The
/// current password is kept here, separate from what the display shows,
/// so a revert always restores the real value and never a feedback string.
pub struct Controller<D, C, R> {
    display: D,
    clipboard: C,
    rng: R,
    policy: WeakInputPolicy,
    sampling: Sampling,
    password: Option<Zeroizing<String>>,
    timer: RevertTimer,
}

impl<D: DisplayPort, C: Clipboard, R: RandomSource> Controller<D, C, R> {
    pub fn new(
        display: D,
        clipboard: C,
        rng: R,
        policy: WeakInputPolicy,
        sampling: Sampling,
    ) -> Self {
        Self {
            display,
            clipboard,
            rng,
            policy,
            sampling,
            password: None,
            timer: RevertTimer::new(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn policy(&self) -> WeakInputPolicy {
        self.policy
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// When the pending feedback revert is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Generate trigger. An empty class selection raises a notice and
    /// leaves the display untouched.
    pub fn generate(&mut self) -> Result<()> {
        let request = self.display.options();

        let password = match pass::generate(&request, self.sampling, &mut self.rng) {
            Ok(p) => p,
            Err(Error::NoCharacterClass) => {
                info!("generate refused: no character class selected");
                self.display.notice(NO_CLASS_NOTICE);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if let Some(target) = self.timer.cancel() {
            self.display.clear_feedback(target);
        }

        let report = pass::estimate(&request, self.policy);
        self.display.show_password(&password);
        self.display.show_strength(&report);
        self.password = Some(password);

        info!(
            "new password: length={} classes={} tier={} progress={}",
            request.length,
            request.classes.len(),
            report.tier.slug(),
            report.progress
        );
        Ok(())
    }

    /// Copy control.
    pub fn copy(&mut self, now: Instant) {
        self.copy_with_feedback(FeedbackTarget::CopyButton, now);
    }

    /// Click on the displayed password.
    pub fn click_password(&mut self, now: Instant) {
        self.copy_with_feedback(FeedbackTarget::PasswordField, now);
    }

    /// Apply the pending revert once it is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(target) = self.timer.expire(now) {
            self.revert(target);
        }
    }

    fn copy_with_feedback(&mut self, target: FeedbackTarget, now: Instant) {
        let Some(password) = self.password.as_ref() else {
            return;
        };

        let feedback = match self.clipboard.write(password) {
            Ok(()) => {
                info!("copied to clipboard ({:?})", target);
                Feedback::Copied
            }
            Err(e) => {
                warn!("copy failed ({:?}): {}", target, e);
                Feedback::CopyFailed
            }
        };

        if let Some(previous) = self.timer.schedule(now, feedback.duration(target), target)
            && previous != target
        {
            self.revert(previous);
        }
        self.display.show_feedback(target, feedback);
    }

    fn revert(&mut self, target: FeedbackTarget) {
        if target == FeedbackTarget::PasswordField
            && let Some(password) = self.password.as_ref()
        {
            self.display.show_password(password);
        }
        self.display.clear_feedback(target);
    }
}
