use std::time::{Duration, Instant};

/// Quiet period before a search keystroke run is committed.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(400);

/// Coalesces rapid search input: only the last value after the quiet period
/// fires. Time is injected by the caller, which keeps this pure and lets the
/// event loop poll it on its own cadence. The fired value is always the
/// latest text, never a snapshot captured when an earlier keystroke arrived.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a keystroke, replacing any pending text and restarting the
    /// quiet period.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            text: text.into(),
            deadline: now + self.quiet,
        });
    }

    /// Returns the settled text once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.text)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_QUIET)
    }
}
