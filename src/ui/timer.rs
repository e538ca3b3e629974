use std::time::{Duration, Instant};

use super::FeedbackTarget;

/// A single cancellable revert-after-delay task.
///
/// At most one revert is pending. Scheduling replaces (cancels) the
/// previous one and hands it back so the caller can undo its feedback.
#[derive(Debug, Default)]
pub struct RevertTimer {
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Instant,
    target: FeedbackTarget,
}

impl RevertTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a revert of `target` at `now + delay`. Returns the target of
    /// a cancelled pending revert, if any.
    pub fn schedule(
        &mut self,
        now: Instant,
        delay: Duration,
        target: FeedbackTarget,
    ) -> Option<FeedbackTarget> {
        let cancelled = self.cancel();
        self.pending = Some(Pending {
            due: now + delay,
            target,
        });
        cancelled
    }

    pub fn cancel(&mut self) -> Option<FeedbackTarget> {
        self.pending.take().map(|p| p.target)
    }

    /// Take the pending revert if it is due at `now`.
    pub fn expire(&mut self, now: Instant) -> Option<FeedbackTarget> {
        match self.pending {
            Some(p) if now >= p.due => self.cancel(),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }
}
