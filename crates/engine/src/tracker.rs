//! Duplicate suppression for outgoing messages.
//!
//! State is held in memory only; a restart forgets what was sent, so the
//! first observation after startup is always delivered.

/// Remembers the last delivered status message and the last relayed failure.
///
/// Callers record a message only after its delivery succeeded. A failed send
/// is delivered later only if the API reports the same status again; once
/// the poll window moves past the change it is not seen again (at-most-once).
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    last_notified: Option<String>,
    last_failure: Option<String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `message` differs from the last delivered status message.
    pub fn is_new(&self, message: &str) -> bool {
        self.last_notified.as_deref() != Some(message)
    }

    pub fn record_sent(&mut self, message: String) {
        self.last_notified = Some(message);
    }

    pub fn last_notified(&self) -> Option<&str> {
        self.last_notified.as_deref()
    }

    /// `true` unless the same failure text was relayed on the previous
    /// failing iteration.
    pub fn should_report_failure(&self, message: &str) -> bool {
        self.last_failure.as_deref() != Some(message)
    }

    pub fn record_failure(&mut self, message: String) {
        self.last_failure = Some(message);
    }

    /// Forget the last failure after a healthy iteration.
    pub fn clear_failure(&mut self) {
        self.last_failure = None;
    }
}
