// ============================================================
// Layer 2 — ScoreUseCase
// ============================================================
// Scores every review against the catalog without ranking or
// summarising. Useful for inspecting why a review was picked.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::summarize_use_case::PipelineConfig;
use crate::data::preprocessor::Preprocessor;
use crate::domain::aspect::{AspectCatalog, AspectScoreVector};
use crate::domain::review::Review;
use crate::scoring::aspect_scorer::AspectScorer;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredReview {
    pub text:   String,
    pub rating: Option<i64>,
    pub scores: AspectScoreVector,
}

pub struct ScoreUseCase {
    catalog:      AspectCatalog,
    preprocessor: Preprocessor,
}

impl ScoreUseCase {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        Ok(Self {
            catalog:      config.build_catalog().context("Invalid aspect catalog")?,
            preprocessor: config.build_preprocessor().context("Invalid tokenizer settings")?,
        })
    }

    pub fn execute(&self, reviews: &[Review]) -> Vec<ScoredReview> {
        let scorer   = AspectScorer::new(&self.catalog, &self.preprocessor);
        let prepared = scorer.prepare(reviews);

        reviews
            .iter()
            .zip(prepared.texts)
            .zip(prepared.scores)
            .map(|((review, text), scores)| ScoredReview {
                text,
                rating: review.rating,
                scores,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_each_review_in_order() {
        let uc = ScoreUseCase::new(&PipelineConfig::default()).unwrap();
        let reviews = vec![
            Review::new(Some("Sturdy BUILD"), Some(5)).unwrap(),
            Review::new(Some("Slow."), None).unwrap(),
        ];

        let scored = uc.execute(&reviews);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].text, "sturdy build");
        assert_eq!(scored[0].scores.get("durability"), Some(1.0));
        assert_eq!(scored[1].rating, None);
        assert!(scored[1].scores.get("performance").unwrap() > 0.0);
    }

    #[test]
    fn test_scored_review_serializes_scores_in_catalog_order() {
        let uc = ScoreUseCase::new(&PipelineConfig::default()).unwrap();
        let reviews = vec![Review::new(Some("cheap"), None).unwrap()];

        let json = serde_json::to_string(&uc.execute(&reviews)[0]).unwrap();
        assert!(json.contains(r#""scores":{"price":1.0,"durability":0.0,"#));
    }
}
