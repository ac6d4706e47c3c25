// ============================================================
// Layer 2 — SummarizeUseCase
// ============================================================
// Orchestrates one personalised summary, in order:
//
//   Step 1: Check preferences against the catalog  (Layer 3)
//   Step 2: Normalise and score every review        (Layer 5)
//   Step 3: Rank reviews by preference              (Layer 5)
//   Step 4: Build the summariser input text         (here)
//   Step 5: Chunk under the summariser's unit limit (Layer 4)
//   Step 6: Summarise each chunk, join the results  (oracle)
//   Step 7: Reorder summary sentences by preference (Layer 5)
//   Step 8: Compute aspect coverage for display     (Layer 5)
//
// Core errors come back typed (ReviewError); this layer wraps
// them with context for the CLI.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::chunker::Chunker;
use crate::data::preprocessor::{Preprocessor, TokenizerMode};
use crate::data::stopwords::StopwordFilter;
use crate::domain::aspect::{AspectCatalog, CatalogFile};
use crate::domain::preference::PreferenceVector;
use crate::domain::review::Review;
use crate::domain::traits::{SummaryOracle, UnitCodec, REVIEW_SEPARATOR, TASK_PREFIX};
use crate::error;
use crate::scoring::aspect_scorer::AspectScorer;
use crate::scoring::coverage::{coverage, AspectCoverage};
use crate::scoring::personalizer::SummaryPersonalizer;
use crate::scoring::ranker::PreferenceRanker;

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Everything tunable about a run. Serialisable so it can be
// kept in a JSON file; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Rows kept from the review file
    pub max_reviews: usize,
    /// Reviews kept after ranking
    pub rank_limit: usize,
    /// Summariser input limit, in codec units
    pub max_units: usize,
    /// Extractive summary length bounds, in words
    pub min_words: usize,
    pub max_words: usize,
    /// Weight given to aspects the user did not set
    pub default_weight: f64,
    pub tokenizer_mode: TokenizerMode,
    /// None → built-in English stop-words
    pub stopword_language: Option<String>,
    /// None → the stock five-aspect catalog
    pub catalog: Option<CatalogFile>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_reviews:       200,
            rank_limit:        200,
            max_units:         512,
            min_words:         50,
            max_words:         512,
            default_weight:    0.5,
            tokenizer_mode:    TokenizerMode::Linguistic,
            stopword_language: None,
            catalog:           None,
        }
    }
}

impl PipelineConfig {
    pub fn build_catalog(&self) -> error::Result<AspectCatalog> {
        match &self.catalog {
            Some(file) => AspectCatalog::new(file.aspects.clone()),
            None => Ok(AspectCatalog::default()),
        }
    }

    pub fn build_preprocessor(&self) -> error::Result<Preprocessor> {
        let stopwords = match &self.stopword_language {
            Some(lang) => StopwordFilter::for_language(lang)?,
            None => StopwordFilter::english(),
        };
        Ok(Preprocessor::new(self.tokenizer_mode, stopwords))
    }

    /// Default weight for every aspect, then the user's overrides.
    pub fn preferences(
        &self,
        catalog: &AspectCatalog,
        overrides: &PreferenceVector,
    ) -> error::Result<PreferenceVector> {
        PreferenceVector::uniform(catalog, self.default_weight)?.merged_with(overrides)
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub reviews_in:    usize,
    pub reviews_used:  usize,
    pub chunks:        usize,
    pub base_summary:  String,
    pub summary:       String,
    pub coverage:      Vec<AspectCoverage>,
}

// ─── SummarizeUseCase ─────────────────────────────────────────────────────────
pub struct SummarizeUseCase<C, O> {
    config:       PipelineConfig,
    catalog:      AspectCatalog,
    preprocessor: Preprocessor,
    codec:        C,
    oracle:       O,
}

impl<C: UnitCodec, O: SummaryOracle> SummarizeUseCase<C, O> {
    pub fn new(config: PipelineConfig, codec: C, oracle: O) -> Result<Self> {
        let catalog = config
            .build_catalog()
            .context("Invalid aspect catalog")?;
        let preprocessor = config
            .build_preprocessor()
            .context("Invalid tokenizer settings")?;

        Ok(Self { config, catalog, preprocessor, codec, oracle })
    }

    /// Full preference vector: configured default for every
    /// aspect, overridden by what the user set explicitly.
    pub fn preferences(&self, overrides: &PreferenceVector) -> Result<PreferenceVector> {
        self.config
            .preferences(&self.catalog, overrides)
            .context("Invalid preferences")
    }

    /// Run the full pipeline for one set of preferences.
    pub fn execute(&self, reviews: &[Review], prefs: &PreferenceVector) -> Result<SummaryReport> {
        if reviews.is_empty() {
            bail!("No reviews to summarize");
        }

        // ── Step 1: Preferences must name known aspects ──────────────────────
        prefs
            .ensure_known(&self.catalog)
            .context("Invalid preferences")?;

        // ── Step 2: Normalise and score ───────────────────────────────────────
        let scorer   = AspectScorer::new(&self.catalog, &self.preprocessor);
        let prepared = scorer.prepare(reviews);
        tracing::info!("Prepared {} reviews for summarization", prepared.texts.len());

        // ── Step 3: Rank by preference ────────────────────────────────────────
        let ranked = PreferenceRanker::new()
            .rank(&prepared.texts, &prepared.scores, prefs, self.config.rank_limit)
            .context("Failed to rank reviews by preference")?;
        tracing::info!("Selected {} reviews by preference", ranked.len());

        // ── Steps 4–6: Build input, chunk, summarise ─────────────────────────
        let input = build_input_text(&ranked.texts());
        let max_units = self.config.max_units.min(self.oracle.max_input_units());
        let chunker = Chunker::new(max_units).context("Invalid chunk size")?;

        let chunks = chunker
            .chunk(&self.codec, &input)
            .context("Failed to chunk summarizer input")?;
        tracing::info!("Split summarizer input into {} chunks", chunks.len());

        let base_summary = summarize_chunks(&self.oracle, &chunks)
            .context("Failed to generate summary")?;
        tracing::info!("Generated base summary ({} chars)", base_summary.len());

        // ── Step 7: Personalise ───────────────────────────────────────────────
        let summary = SummaryPersonalizer::new(&self.catalog)
            .personalize(&base_summary, prefs)
            .context("Failed to personalize summary")?;
        tracing::info!("Personalized summary");

        // ── Step 8: Coverage for display ──────────────────────────────────────
        let coverage = coverage(&self.catalog, &summary);

        Ok(SummaryReport {
            reviews_in:   reviews.len(),
            reviews_used: ranked.len(),
            chunks:       chunks.len(),
            base_summary,
            summary,
            coverage,
        })
    }
}

/// "summarize: " + reviews joined by " [REVIEW] "
pub fn build_input_text(reviews: &[&str]) -> String {
    format!("{TASK_PREFIX}{}", reviews.join(REVIEW_SEPARATOR))
}

/// Summarise each chunk in order; chunk summaries joined by a space.
/// The first oracle failure aborts the whole summary.
pub fn summarize_chunks<O: SummaryOracle>(oracle: &O, chunks: &[String]) -> error::Result<String> {
    let mut parts = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let part = oracle.summarize(chunk)?;
        if !part.is_empty() {
            parts.push(part);
        }
    }
    Ok(parts.join(" "))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;
    use crate::infra::oracle::ExtractiveOracle;
    use crate::infra::tokenizer_store::WhitespaceCodec;
    use std::cell::RefCell;

    /// Echoes its input and records every chunk it was given.
    struct RecordingOracle {
        limit: usize,
        seen:  RefCell<Vec<String>>,
    }

    impl SummaryOracle for RecordingOracle {
        fn max_input_units(&self) -> usize {
            self.limit
        }

        fn summarize(&self, text: &str) -> error::Result<String> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(text.to_string())
        }
    }

    struct FailingOracle;

    impl SummaryOracle for FailingOracle {
        fn max_input_units(&self) -> usize {
            100
        }

        fn summarize(&self, _text: &str) -> error::Result<String> {
            Err(ReviewError::oracle("model unavailable"))
        }
    }

    fn reviews() -> Vec<Review> {
        [
            "Excellent quality and it feels premium.",
            "Very cheap, great value for the price.",
            "Easy to set up and simple to use.",
        ]
        .iter()
        .map(|t| Review::new(Some(*t), Some(4)).unwrap())
        .collect()
    }

    #[test]
    fn test_build_input_text() {
        assert_eq!(build_input_text(&["a b", "c"]), "summarize: a b [REVIEW] c");
    }

    #[test]
    fn test_price_preference_leads_summary() {
        let config = PipelineConfig { min_words: 200, ..PipelineConfig::default() };
        let oracle = ExtractiveOracle::new(512, config.min_words, config.max_words).unwrap();
        let uc = SummarizeUseCase::new(config, WhitespaceCodec, oracle).unwrap();

        let prefs = PreferenceVector::new([
            ("price", 1.0), ("quality", 0.0), ("durability", 0.0),
            ("ease_of_use", 0.0), ("performance", 0.0),
        ])
        .unwrap();
        let report = uc.execute(&reviews(), &prefs).unwrap();

        assert_eq!(report.reviews_in, 3);
        assert_eq!(report.chunks, 1);
        assert!(report.summary.starts_with("very cheap, great value for the price."));
        let price = report.coverage.iter().find(|c| c.aspect == "price").unwrap();
        assert_eq!(price.keywords_present, 3);
    }

    #[test]
    fn test_chunks_respect_oracle_limit() {
        let oracle = RecordingOracle { limit: 4, seen: RefCell::new(Vec::new()) };
        let uc = SummarizeUseCase::new(PipelineConfig::default(), WhitespaceCodec, oracle).unwrap();

        let report = uc.execute(&reviews(), &PreferenceVector::empty()).unwrap();

        let seen = uc.oracle.seen.borrow();
        assert_eq!(report.chunks, seen.len());
        assert!(seen.len() > 1);
        assert!(seen.iter().all(|c| c.split_whitespace().count() <= 4));
    }

    #[test]
    fn test_rank_limit_caps_reviews_used() {
        let config = PipelineConfig { rank_limit: 1, ..PipelineConfig::default() };
        let oracle = ExtractiveOracle::new(512, 1, 512).unwrap();
        let uc = SummarizeUseCase::new(config, WhitespaceCodec, oracle).unwrap();

        let report = uc.execute(&reviews(), &PreferenceVector::empty()).unwrap();
        assert_eq!(report.reviews_used, 1);
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let uc = SummarizeUseCase::new(PipelineConfig::default(), WhitespaceCodec, FailingOracle).unwrap();
        let err = uc.execute(&reviews(), &PreferenceVector::empty()).unwrap_err();

        let root = err.root_cause().downcast_ref::<ReviewError>().unwrap();
        assert!(matches!(root, ReviewError::Oracle { .. }));
    }

    #[test]
    fn test_unknown_preference_is_rejected() {
        let oracle = ExtractiveOracle::new(512, 1, 512).unwrap();
        let uc = SummarizeUseCase::new(PipelineConfig::default(), WhitespaceCodec, oracle).unwrap();
        let prefs = PreferenceVector::new([("battery", 1.0)]).unwrap();

        let err = uc.execute(&reviews(), &prefs).unwrap_err();
        let root = err.root_cause().downcast_ref::<ReviewError>().unwrap();
        assert!(root.is_validation());
    }

    #[test]
    fn test_empty_review_set_is_an_error() {
        let oracle = ExtractiveOracle::new(512, 1, 512).unwrap();
        let uc = SummarizeUseCase::new(PipelineConfig::default(), WhitespaceCodec, oracle).unwrap();
        assert!(uc.execute(&[], &PreferenceVector::empty()).is_err());
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let cfg: PipelineConfig = serde_json::from_str(r#"{"max_units": 64}"#).unwrap();
        assert_eq!(cfg.max_units, 64);
        assert_eq!(cfg.max_reviews, 200);
        assert_eq!(cfg.tokenizer_mode, TokenizerMode::Linguistic);
    }

    #[test]
    fn test_preferences_fill_unset_aspects() {
        let cfg = PipelineConfig::default();
        let catalog = cfg.build_catalog().unwrap();
        let overrides = PreferenceVector::new([("price", 0.9)]).unwrap();

        let prefs = cfg.preferences(&catalog, &overrides).unwrap();
        assert_eq!(prefs.len(), 5);
        assert_eq!(prefs.get("price"), Some(0.9));
        assert_eq!(prefs.get("performance"), Some(0.5));
    }
}
