// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer wires the other layers together for one task.
//
// Rules for this layer:
//   - No scoring math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination, plus turning typed core
//     errors into contextual anyhow errors
//
// Reference: Clean Architecture pattern

// Full pipeline: score → rank → chunk → summarise → personalise
pub mod summarize_use_case;

// Per-review aspect scores only
pub mod score_use_case;
