// ============================================================
// Layer 5 — Preference Ranker
// ============================================================
// Orders reviews by how well they match the user's weights.
//
//   relevance = Σ score[aspect] × weight   (aspects in prefs)
//
// Aspects the preference vector leaves out contribute nothing.
// A preference naming an aspect a score vector lacks is an
// error, not a zero.
//
// Sorting is stable and descending, so equal relevance keeps
// input order and identical inputs always rank identically.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::domain::aspect::AspectScoreVector;
use crate::domain::preference::PreferenceVector;
use crate::error::{ReviewError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedReview {
    /// Position in the input batch
    pub index: usize,
    pub text: String,
    pub relevance: f64,
}

/// Ranked and truncated reviews, most relevant first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedReviewSet {
    pub entries: Vec<RankedReview>,
}

impl RankedReviewSet {
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct PreferenceRanker;

impl PreferenceRanker {
    pub fn new() -> Self {
        Self
    }

    /// Weighted sum of one review's aspect scores.
    pub fn relevance(&self, scores: &AspectScoreVector, prefs: &PreferenceVector) -> Result<f64> {
        prefs.iter().try_fold(0.0, |acc, (aspect, weight)| {
            let score = scores.get(aspect).ok_or_else(|| {
                ReviewError::validation(format!(
                    "preference aspect '{aspect}' missing from review scores"
                ))
            })?;
            Ok(acc + score * weight)
        })
    }

    /// Rank `reviews` by relevance and keep the top `limit`.
    pub fn rank(
        &self,
        reviews: &[String],
        scores: &[AspectScoreVector],
        prefs: &PreferenceVector,
        limit: usize,
    ) -> Result<RankedReviewSet> {
        if reviews.len() != scores.len() {
            return Err(ReviewError::validation(format!(
                "got {} reviews but {} score vectors",
                reviews.len(),
                scores.len()
            )));
        }

        let mut entries = reviews
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(index, (text, s))| {
                Ok(RankedReview {
                    index,
                    text: text.clone(),
                    relevance: self.relevance(s, prefs)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // sort_by is stable: ties keep input order
        entries.sort_by(|a, b| b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal));
        entries.truncate(limit);

        debug!("Ranked {} reviews, kept {}", reviews.len(), entries.len());
        Ok(RankedReviewSet { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scores(price: f64, quality: f64) -> AspectScoreVector {
        [("price", price), ("quality", quality)].into_iter().collect()
    }

    fn texts(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picks_highest_weighted_review() {
        let prefs = PreferenceVector::new([("price", 1.0), ("quality", 0.0)]).unwrap();
        let ranked = PreferenceRanker::new()
            .rank(
                &texts(&["reviewA", "reviewB"]),
                &[scores(0.2, 0.0), scores(0.9, 0.0)],
                &prefs,
                1,
            )
            .unwrap();
        assert_eq!(ranked.texts(), ["reviewB"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let prefs = PreferenceVector::new([("price", 1.0)]).unwrap();
        let ranked = PreferenceRanker::new()
            .rank(
                &texts(&["a", "b", "c"]),
                &[scores(0.5, 0.0), scores(0.9, 0.0), scores(0.5, 1.0)],
                &prefs,
                10,
            )
            .unwrap();
        assert_eq!(ranked.texts(), ["b", "a", "c"]);
    }

    #[test]
    fn test_partial_preferences_ignore_missing_aspects() {
        // quality is not weighted at all, so only price decides
        let prefs = PreferenceVector::new([("price", 0.5)]).unwrap();
        let ranked = PreferenceRanker::new()
            .rank(
                &texts(&["a", "b"]),
                &[scores(0.1, 1.0), scores(0.2, 0.0)],
                &prefs,
                2,
            )
            .unwrap();
        assert_eq!(ranked.texts(), ["b", "a"]);
        assert!((ranked.entries[0].relevance - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_empty_preferences_keep_order() {
        let ranked = PreferenceRanker::new()
            .rank(
                &texts(&["a", "b"]),
                &[scores(0.1, 0.0), scores(0.9, 0.0)],
                &PreferenceVector::empty(),
                5,
            )
            .unwrap();
        assert_eq!(ranked.texts(), ["a", "b"]);
    }

    #[test]
    fn test_length_mismatch_is_validation_error() {
        let err = PreferenceRanker::new()
            .rank(&texts(&["a", "b"]), &[scores(0.1, 0.0)], &PreferenceVector::empty(), 5)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_preference_aspect_is_validation_error() {
        let prefs = PreferenceVector::new([("battery", 1.0)]).unwrap();
        let err = PreferenceRanker::new()
            .rank(&texts(&["a"]), &[scores(0.1, 0.0)], &prefs, 5)
            .unwrap_err();
        assert!(err.is_validation());
    }

    proptest! {
        #[test]
        fn rank_is_sorted_truncated_subset(
            raw in proptest::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 0..30),
            w_price in 0.0f64..=1.0,
            w_quality in 0.0f64..=1.0,
            limit in 0usize..40,
        ) {
            let reviews: Vec<String> = (0..raw.len()).map(|i| format!("review{i}")).collect();
            let vectors: Vec<AspectScoreVector> = raw.iter().map(|(p, q)| scores(*p, *q)).collect();
            let prefs = PreferenceVector::new([("price", w_price), ("quality", w_quality)]).unwrap();

            let ranked = PreferenceRanker::new().rank(&reviews, &vectors, &prefs, limit).unwrap();

            prop_assert_eq!(ranked.len(), limit.min(reviews.len()));
            for pair in ranked.entries.windows(2) {
                prop_assert!(pair[0].relevance >= pair[1].relevance);
            }
            let mut seen = std::collections::HashSet::new();
            for entry in &ranked.entries {
                prop_assert_eq!(&reviews[entry.index], &entry.text);
                prop_assert!(seen.insert(entry.index));
            }
        }
    }
}
