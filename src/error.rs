// ============================================================
// Core Error Types
// ============================================================
// Every core operation (normalise, score, rank, chunk,
// personalise) returns one of these instead of panicking.
//
// Three kinds:
//   Validation — the caller handed us something malformed
//   Processing — something broke inside the pipeline itself
//   Oracle     — the external summariser failed
//
// The CLI and application layers wrap these in anyhow with
// context; the core never formats user-facing messages.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Malformed or missing input supplied by the caller.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Internal failure not attributable to caller misuse.
    #[error("{stage} failed: {reason}")]
    Processing { stage: &'static str, reason: String },

    /// The summarisation oracle could not produce a summary.
    #[error("summarization oracle failed: {reason}")]
    Oracle { reason: String },
}

impl ReviewError {
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn processing(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Processing {
            stage,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn oracle(reason: impl Into<String>) -> Self {
        Self::Oracle {
            reason: reason.into(),
        }
    }

    /// True for errors caused by bad caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
