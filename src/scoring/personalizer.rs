// ============================================================
// Layer 5 — Summary Personalizer
// ============================================================
// Reorders the sentences of a generated summary so the ones
// that talk about what the user cares about come first.
//
// Steps:
//   1. Split on ". " (a fixed delimiter, not a sentence
//      segmenter: "approx. 5 hours" splits after "approx")
//   2. Score each sentence:
//        Σ weight × (distinct aspect keywords found in the
//                    lowercased sentence, substring match)
//   3. Stable sort, highest score first
//   4. Join with ". " and end with exactly one "."
//
// This is a raw weighted hit count, NOT the bounded ratio the
// aspect scorer uses for whole reviews. The two are kept apart
// on purpose: changing either would change observable output.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::aspect::AspectCatalog;
use crate::domain::preference::PreferenceVector;
use crate::error::Result;

pub const SENTENCE_DELIMITER: &str = ". ";

pub struct SummaryPersonalizer<'a> {
    catalog: &'a AspectCatalog,
}

impl<'a> SummaryPersonalizer<'a> {
    pub fn new(catalog: &'a AspectCatalog) -> Self {
        Self { catalog }
    }

    /// Weighted keyword presence for one sentence.
    /// Preferences must already be checked against the catalog.
    pub fn score_sentence(&self, sentence: &str, prefs: &PreferenceVector) -> f64 {
        let lowered = sentence.to_lowercase();
        prefs
            .iter()
            .filter_map(|(name, weight)| {
                self.catalog
                    .get(name)
                    .map(|aspect| aspect.keywords_present_in(&lowered) as f64 * weight)
            })
            .sum()
    }

    /// Reorder `summary` by preference. Empty input gives "".
    pub fn personalize(&self, summary: &str, prefs: &PreferenceVector) -> Result<String> {
        prefs.ensure_known(self.catalog)?;

        let mut scored: Vec<(&str, f64)> = split_sentences(summary)
            .into_iter()
            .map(|s| (s, self.score_sentence(s, prefs)))
            .collect();

        if scored.is_empty() {
            return Ok(String::new());
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut out = scored
            .iter()
            .map(|(s, _)| *s)
            .collect::<Vec<_>>()
            .join(SENTENCE_DELIMITER);
        out.push('.');

        debug!("Personalized summary of {} sentences", scored.len());
        Ok(out)
    }
}

/// Split on the fixed delimiter, dropping trailing periods and
/// empty fragments so reassembly never doubles a ".".
fn split_sentences(summary: &str) -> Vec<&str> {
    summary
        .split(SENTENCE_DELIMITER)
        .map(|s| s.trim().trim_end_matches('.').trim_end())
        .filter(|s| !s.is_empty())
        .collect()
}
