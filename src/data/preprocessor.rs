// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Two jobs, both pure and deterministic:
//
//   normalize() — lowercase, turn line breaks into spaces,
//                 collapse whitespace runs, trim
//   tokenize()  — split normalised text into words and drop
//                 stop-words
//
// Tokenisation has two modes:
//
//   Linguistic — word-level segmentation: punctuation and
//                English clitics become their own tokens
//                ("great!" → "great", "!"; "don't" → "do",
//                "n't"), inner hyphens stay ("user-friendly").
//   Whitespace — a plain whitespace split. This is the
//                fallback; keyword scoring works the same
//                way on either output.
//
// Example:
//   normalize("This Product is GREAT!\n\nVery durable.")
//     → "this product is great! very durable."

use serde::{Deserialize, Serialize};

use crate::data::stopwords::StopwordFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    #[default]
    Linguistic,
    Whitespace,
}

/// Suffixes split off a word as separate tokens, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    mode: TokenizerMode,
    stopwords: StopwordFilter,
}

impl Preprocessor {
    pub fn new(mode: TokenizerMode, stopwords: StopwordFilter) -> Self {
        Self { mode, stopwords }
    }

    /// Lowercase and whitespace-normalise raw text.
    /// Idempotent: normalize(normalize(t)) == normalize(t).
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase().replace(&['\n', '\r'][..], " ");
        lowered.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split normalised text into words, minus stop-words.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        let raw = match self.mode {
            TokenizerMode::Linguistic => word_tokenize(normalized),
            TokenizerMode::Whitespace => normalized
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        };

        raw.into_iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }
}

/// Word-level segmentation of already-normalised text.
fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for piece in text.split_whitespace() {
        // ── Leading punctuation: one token for the whole run ─────────────────
        let core_start = piece
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, _)| i)
            .unwrap_or(piece.len());

        if core_start == piece.len() {
            // Nothing but punctuation, e.g. "--" or "!!!"
            tokens.push(piece.to_string());
            continue;
        }
        if core_start > 0 {
            tokens.push(piece[..core_start].to_string());
        }

        // ── Trailing punctuation ──────────────────────────────────────────────
        let rest = &piece[core_start..];
        let core_end = rest
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(rest.len());
        let core = &rest[..core_end];
        let trailing = &rest[core_end..];

        // ── Clitics ───────────────────────────────────────────────────────────
        match CLITICS
            .iter()
            .find(|c| core.len() > c.len() && core.ends_with(*c))
        {
            Some(clitic) => {
                let stem = &core[..core.len() - clitic.len()];
                tokens.push(stem.to_string());
                tokens.push(clitic.to_string());
            }
            None => tokens.push(core.to_string()),
        }

        if !trailing.is_empty() {
            tokens.push(trailing.to_string());
        }
    }

    tokens
}
