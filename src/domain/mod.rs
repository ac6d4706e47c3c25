// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that define the core concepts:
// reviews, the aspect catalog, score and preference vectors,
// and the seams to external collaborators.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or model crates
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded product review
pub mod review;

// Aspect catalog and per-review aspect scores
pub mod aspect;

// User preference weights for one request
pub mod preference;

// Abstractions the other layers implement
pub mod traits;
