// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   summarize — full pipeline, prints the personalised summary
//   score     — per-review aspect scores as JSON lines
//   aspects   — prints the aspect catalog in use
//
// Flags given here override values from --config.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::summarize_use_case::PipelineConfig;
use crate::data::preprocessor::TokenizerMode;
use crate::domain::preference::{PreferenceArg, PreferenceVector};
use crate::infra::config_store::{load_catalog_file, load_config};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank reviews by your preferences and print a personalised summary
    Summarize(SummarizeArgs),

    /// Print aspect scores for every review
    Score(ScoreArgs),

    /// List the aspects and their keywords
    Aspects(CatalogArgs),
}

/// Where the settings and aspect catalog come from.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// JSON config file (see PipelineConfig)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON aspect catalog, replacing the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Split words on whitespace only
    #[arg(long, default_value_t = false)]
    pub whitespace_tokens: bool,

    /// Stop-word language (e.g. "de"); defaults to built-in English
    #[arg(long)]
    pub stopwords: Option<String>,
}

impl CatalogArgs {
    /// Config file (or defaults) with these flags applied on top.
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(path) = &self.catalog {
            config.catalog = Some(load_catalog_file(path)?);
        }
        if self.whitespace_tokens {
            config.tokenizer_mode = TokenizerMode::Whitespace;
        }
        if let Some(lang) = &self.stopwords {
            config.stopword_language = Some(lang.clone());
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// JSON file of rows with `review_text` and `rating`
    #[arg(long)]
    pub reviews: PathBuf,

    /// Aspect weight, e.g. --pref price=1.0 (repeatable).
    /// Unset aspects use the configured default weight.
    #[arg(long = "pref")]
    pub prefs: Vec<PreferenceArg>,

    /// Keep at most this many reviews after ranking
    #[arg(long)]
    pub limit: Option<usize>,

    /// Read at most this many rows from the review file
    #[arg(long)]
    pub max_reviews: Option<usize>,

    /// Summariser input limit per chunk, in units
    #[arg(long)]
    pub max_units: Option<usize>,

    /// HuggingFace tokenizer.json used to count units;
    /// words are units when omitted
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,

    /// Write the effective config to this path
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl SummarizeArgs {
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = self.catalog.resolve()?;

        if let Some(limit) = self.limit {
            config.rank_limit = limit;
        }
        if let Some(max) = self.max_reviews {
            config.max_reviews = max;
        }
        if let Some(units) = self.max_units {
            config.max_units = units;
        }
        Ok(config)
    }

    /// The explicitly given weights only.
    pub fn overrides(&self) -> Result<PreferenceVector> {
        Ok(PreferenceVector::new(
            self.prefs.iter().map(|p| (p.aspect.clone(), p.weight)),
        )?)
    }
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file of rows with `review_text` and `rating`
    #[arg(long)]
    pub reviews: PathBuf,

    /// Read at most this many rows from the review file
    #[arg(long)]
    pub max_reviews: Option<usize>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_parses_repeated_prefs() {
        let cli = Cli::try_parse_from([
            "aspect-summarizer", "summarize", "--reviews", "r.json",
            "--pref", "price=1.0", "--pref", "quality=0.2", "--limit", "3",
        ])
        .unwrap();

        let Commands::Summarize(args) = cli.command else {
            panic!("expected summarize");
        };
        let overrides = args.overrides().unwrap();
        assert_eq!(overrides.get("price"), Some(1.0));
        assert_eq!(overrides.get("quality"), Some(0.2));
        assert_eq!(args.resolve().unwrap().rank_limit, 3);
    }

    #[test]
    fn test_rejects_malformed_pref() {
        let res = Cli::try_parse_from([
            "aspect-summarizer", "summarize", "--reviews", "r.json", "--pref", "price",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_whitespace_flag_switches_mode() {
        let cli = Cli::try_parse_from(["aspect-summarizer", "aspects", "--whitespace-tokens"]).unwrap();
        let Commands::Aspects(args) = cli.command else {
            panic!("expected aspects");
        };
        assert_eq!(args.resolve().unwrap().tokenizer_mode, TokenizerMode::Whitespace);
    }
}
