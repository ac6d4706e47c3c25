// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that sit at the edges of the pipeline:
//
//   tokenizer_store.rs — Unit codecs for the summariser input.
//                        Loads a HuggingFace tokenizer.json when
//                        one is given; otherwise words are units.
//
//   oracle.rs          — The in-tree summariser: a
//                        deterministic lead-sentence extractor
//                        behind the SummaryOracle trait.
//
//   config_store.rs    — PipelineConfig and catalog files on
//                        disk (JSON).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Unit codecs and tokenizer loading
pub mod tokenizer_store;

/// Extractive summarisation oracle
pub mod oracle;

/// Config and catalog JSON files
pub mod config_store;
