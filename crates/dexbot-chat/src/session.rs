//! Correction memory: the single slot holding the most recent query
//! awaiting a possible correction.
//!
//! Two states: `Idle` (empty) and `AwaitingCorrection` (a sanitized query is
//! pending). A new triggering query always supersedes an unconfirmed one;
//! the slot is cleared only after its correction is durably logged.

/// Single-slot memory of the last sanitized classification query.
#[derive(Debug, Default)]
pub struct CorrectionSession {
    pending: Option<String>,
}

impl CorrectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new triggering query, unconditionally superseding any
    /// unconfirmed one.
    pub fn note_query(&mut self, query: impl Into<String>) {
        self.pending = Some(query.into());
    }

    /// The query awaiting correction, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Clear the slot once a correction has been durably recorded.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
