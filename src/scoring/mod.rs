// ============================================================
// Layer 5 — Scoring
// ============================================================
// The deterministic heart of the system. Every function here
// is a pure computation over the aspect catalog, with no I/O:
//
//   aspect_scorer.rs — per-review aspect scores in [0, 1]
//   ranker.rs        — preference-weighted review ranking
//   personalizer.rs  — preference-weighted sentence reordering
//   coverage.rs      — keyword coverage of the final summary
//
// All components borrow the catalog; none keeps per-call state,
// so independent requests can run side by side.

pub mod aspect_scorer;

pub mod ranker;

pub mod personalizer;

pub mod coverage;
