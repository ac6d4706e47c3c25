// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Provides the unit codecs the chunker counts with.
//
//   WhitespaceCodec  — one unit per whitespace-separated word.
//                      Used when the summariser has no
//                      tokenizer file of its own.
//   HfTokenizerCodec — token ids from a HuggingFace
//                      tokenizer.json, so chunk sizes match the
//                      model's real input limit.
//
// Special tokens are not added on encode. Decode keeps every id,
// including unknown-word and special tokens, so no unit is lost
// between encode and decode.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::domain::traits::UnitCodec;
use crate::error::{self, ReviewError};

// ─── WhitespaceCodec ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCodec;

impl UnitCodec for WhitespaceCodec {
    type Unit = String;

    fn encode(&self, text: &str) -> error::Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn decode(&self, units: &[String]) -> error::Result<String> {
        Ok(units.join(" "))
    }
}

// ─── HfTokenizerCodec ─────────────────────────────────────────────────────────
pub struct HfTokenizerCodec {
    tokenizer: Tokenizer,
}

impl HfTokenizerCodec {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl UnitCodec for HfTokenizerCodec {
    type Unit = u32;

    fn encode(&self, text: &str) -> error::Result<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| ReviewError::processing("tokenization", e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, units: &[u32]) -> error::Result<String> {
        self.tokenizer
            .decode(units, false)
            .map_err(|e| ReviewError::processing("detokenization", e.to_string()))
    }
}

// ─── TokenizerStore ───────────────────────────────────────────────────────────
pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load a previously saved tokenizer from JSON file
    pub fn load(&self) -> Result<HfTokenizerCodec> {
        let tokenizer = Tokenizer::from_file(&self.path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", self.path.display(), e)
        })?;
        tracing::info!("Loaded summariser tokenizer from {}", self.path.display());
        Ok(HfTokenizerCodec::new(tokenizer))
    }
}
