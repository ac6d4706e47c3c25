// ============================================================
// Layer 5 — Aspect Scorer
// ============================================================
// Turns one review into a score in [0, 1] per catalog aspect.
//
//   score = min(1.0, keyword_hits / max(1, word_count) * 5)
//
// word_count is the number of tokens left after stop-word
// removal (punctuation tokens included in linguistic mode).
// The ×5 boost reflects that reviews are short: three or four
// keyword hits in a twenty-word review already saturate.
//
// Every catalog aspect appears in the output, 0.0 when nothing
// matched, so score vectors always share the catalog key set.

use tracing::debug;

use crate::data::preprocessor::Preprocessor;
use crate::domain::aspect::{AspectCatalog, AspectScoreVector};
use crate::domain::review::Review;

/// Keyword hits are multiplied by this before clamping.
pub const SENSITIVITY: f64 = 5.0;

pub struct AspectScorer<'a> {
    catalog: &'a AspectCatalog,
    preprocessor: &'a Preprocessor,
}

/// Normalised review texts and their score vectors, aligned by index.
#[derive(Debug, Clone, Default)]
pub struct PreparedReviews {
    pub texts: Vec<String>,
    pub scores: Vec<AspectScoreVector>,
}

impl<'a> AspectScorer<'a> {
    pub fn new(catalog: &'a AspectCatalog, preprocessor: &'a Preprocessor) -> Self {
        Self {
            catalog,
            preprocessor,
        }
    }

    /// Score raw or normalised text against every catalog aspect.
    pub fn score_aspects(&self, text: &str) -> AspectScoreVector {
        let normalized = self.preprocessor.normalize(text);
        let words = self.preprocessor.tokenize(&normalized);
        let denominator = words.len().max(1) as f64;

        self.catalog
            .aspects()
            .iter()
            .map(|aspect| {
                let hits = words.iter().filter(|w| aspect.matches_token(w)).count();
                let score = (hits as f64 / denominator * SENSITIVITY).min(1.0);
                (aspect.name().to_string(), score)
            })
            .collect()
    }

    /// Normalise and score a batch of reviews in input order.
    pub fn prepare(&self, reviews: &[Review]) -> PreparedReviews {
        let mut prepared = PreparedReviews::default();

        for review in reviews {
            let text = self.preprocessor.normalize(&review.text);
            let scores = self.score_aspects(&text);
            prepared.texts.push(text);
            prepared.scores.push(scores);
        }

        debug!("Prepared {} reviews for summarization", prepared.texts.len());
        prepared
    }
}
