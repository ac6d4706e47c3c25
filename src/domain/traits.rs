// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams between the pipeline and the things it does not
// own:
//
//   ReviewSource   → where reviews come from (a JSON file today)
//   UnitCodec      → how the summariser counts its input units
//   SummaryOracle  → the summariser itself
//
// The application layer only sees these traits, so a
// generative backend can replace the extractive one without
// touching the scoring code.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::review::Review;
use crate::error::Result;

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Anything that can hand over a batch of already-validated reviews.
///
/// Implementations:
///   - JsonReviewLoader → rows from a JSON array file
pub trait ReviewSource {
    fn load_all(&self) -> anyhow::Result<Vec<Review>>;
}

// ─── UnitCodec ────────────────────────────────────────────────────────────────
/// Converts text to and from the atomic units a summariser
/// measures its input in. The chunker treats units as opaque.
///
/// Implementations:
///   - WhitespaceCodec → one unit per whitespace-separated word
///   - HfTokenizerCodec → token ids from a tokenizer.json
pub trait UnitCodec {
    type Unit: Clone + PartialEq + std::fmt::Debug;

    fn encode(&self, text: &str) -> Result<Vec<Self::Unit>>;

    fn decode(&self, units: &[Self::Unit]) -> Result<String>;
}

// ─── SummaryOracle ────────────────────────────────────────────────────────────
/// Prepended to the summariser input.
pub const TASK_PREFIX: &str = "summarize: ";

/// Placed between consecutive reviews in the summariser input.
pub const REVIEW_SEPARATOR: &str = " [REVIEW] ";

/// Turns one bounded block of text into a shorter summary.
///
/// Callers must never pass more than `max_input_units()` units.
/// Failures are reported, not retried.
pub trait SummaryOracle {
    fn max_input_units(&self) -> usize;

    fn summarize(&self, text: &str) -> Result<String>;
}
