// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction, and the only
// place that prints. Parses arguments with clap, resolves the
// config, and hands the work to Layer 2 (application).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CatalogArgs, Commands, ScoreArgs, SummarizeArgs};

use crate::application::score_use_case::ScoreUseCase;
use crate::application::summarize_use_case::{PipelineConfig, SummarizeUseCase, SummaryReport};
use crate::data::loader::JsonReviewLoader;
use crate::domain::preference::PreferenceVector;
use crate::domain::review::Review;
use crate::domain::traits::{ReviewSource, SummaryOracle, UnitCodec};
use crate::infra::config_store::save_config;
use crate::infra::oracle::ExtractiveOracle;
use crate::infra::tokenizer_store::{TokenizerStore, WhitespaceCodec};

#[derive(Parser, Debug)]
#[command(
    name = "aspect-summarizer",
    version,
    about = "Rank product reviews by the aspects you care about and summarise them in that order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching handler. Handlers only route
    /// and print; the use cases do the work.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Summarize(args) => run_summarize(args),
            Commands::Score(args)     => run_score(args),
            Commands::Aspects(args)   => run_aspects(args),
        }
    }
}

fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let config = args.resolve()?;
    if let Some(path) = &args.save_config {
        save_config(path, &config)?;
    }

    let reviews   = JsonReviewLoader::new(&args.reviews, config.max_reviews).load_all()?;
    let overrides = args.overrides()?;
    let oracle    = ExtractiveOracle::new(config.max_units, config.min_words, config.max_words)?;

    // The codec decides what a "unit" is when chunking
    let report = match &args.tokenizer {
        Some(path) => {
            let codec = TokenizerStore::new(path).load()?;
            summarize_with(config, codec, oracle, &reviews, &overrides)?
        }
        None => summarize_with(config, WhitespaceCodec, oracle, &reviews, &overrides)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn summarize_with<C: UnitCodec, O: SummaryOracle>(
    config:    PipelineConfig,
    codec:     C,
    oracle:    O,
    reviews:   &[Review],
    overrides: &PreferenceVector,
) -> Result<SummaryReport> {
    let use_case = SummarizeUseCase::new(config, codec, oracle)?;
    let prefs    = use_case.preferences(overrides)?;
    use_case.execute(reviews, &prefs)
}

fn print_report(report: &SummaryReport) {
    println!(
        "Summarised {} of {} reviews in {} chunk(s)\n",
        report.reviews_used, report.reviews_in, report.chunks
    );
    println!("Personalized Summary\n{}", report.summary);
    println!("\nAspect Coverage in Summary");
    for c in &report.coverage {
        println!("  {:<14} {}", c.aspect, c.keywords_present);
    }
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let mut config = args.catalog.resolve()?;
    if let Some(max) = args.max_reviews {
        config.max_reviews = max;
    }

    let reviews  = JsonReviewLoader::new(&args.reviews, config.max_reviews).load_all()?;
    let use_case = ScoreUseCase::new(&config)?;

    for scored in use_case.execute(&reviews) {
        println!("{}", serde_json::to_string(&scored)?);
    }
    Ok(())
}

fn run_aspects(args: CatalogArgs) -> Result<()> {
    let catalog = args.resolve()?.build_catalog()?;
    for aspect in catalog.aspects() {
        println!("{}: {}", aspect.name(), aspect.keywords().join(", "));
    }
    Ok(())
}
