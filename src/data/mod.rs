// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a review file on disk and the text that
// reaches the scorer or the summariser:
//
//   reviews.json
//       │
//       ▼
//   JsonReviewLoader  → reads rows, drops empty text, caps count
//       │
//       ▼
//   Preprocessor      → normalises text, splits words,
//       │               removes stop-words (StopwordFilter)
//       ▼
//   (scoring layer)
//       │
//       ▼
//   Chunker           → splits the summariser input into
//                       pieces under its unit limit
//
// Each module is responsible for exactly one step.

/// Loads review rows from JSON
pub mod loader;

/// Normalises text and splits it into words
pub mod preprocessor;

/// Stop-word lists
pub mod stopwords;

/// Greedy unit-bounded chunking for the summariser
pub mod chunker;
