// ============================================================
// Layer 5 — Aspect Coverage
// ============================================================
// For display: how many of each aspect's keywords literally
// appear (case-insensitive substring) in the final summary.

use serde::Serialize;

use crate::domain::aspect::AspectCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectCoverage {
    pub aspect: String,
    pub keywords_present: usize,
}

/// One entry per catalog aspect, in catalog order.
pub fn coverage(catalog: &AspectCatalog, summary: &str) -> Vec<AspectCoverage> {
    let lowered = summary.to_lowercase();
    catalog
        .aspects()
        .iter()
        .map(|a| AspectCoverage {
            aspect: a.name().to_string(),
            keywords_present: a.keywords_present_in(&lowered),
        })
        .collect()
}
