// ============================================================
// Layer 6 — Extractive Summarisation Oracle
// ============================================================
// A deterministic stand-in for a generative summariser.
// It takes the leading sentences of each chunk until it has
// at least `min_words` words, never going past `max_words`.
//
// The input arrives in the form the pipeline builds for any
// summariser:
//
//   "summarize: review one [REVIEW] review two [REVIEW] ..."
//
// so the task prefix and review separators are stripped first.
// Output sentences are joined with ". " and end in ".", which
// is what the personaliser expects to split on.

use crate::domain::traits::{SummaryOracle, REVIEW_SEPARATOR, TASK_PREFIX};
use crate::error::{ReviewError, Result};

#[derive(Debug, Clone)]
pub struct ExtractiveOracle {
    max_input_units: usize,
    min_words: usize,
    max_words: usize,
}

impl ExtractiveOracle {
    pub fn new(max_input_units: usize, min_words: usize, max_words: usize) -> Result<Self> {
        if max_words == 0 {
            return Err(ReviewError::validation("max_words must be positive"));
        }
        if min_words > max_words {
            return Err(ReviewError::validation(format!(
                "min_words ({min_words}) exceeds max_words ({max_words})"
            )));
        }
        Ok(Self {
            max_input_units,
            min_words,
            max_words,
        })
    }
}

impl SummaryOracle for ExtractiveOracle {
    fn max_input_units(&self) -> usize {
        self.max_input_units
    }

    fn summarize(&self, text: &str) -> Result<String> {
        let body = text.trim_start();
        let body = body.strip_prefix(TASK_PREFIX.trim_end()).unwrap_or(body);
        let body = body.replace(REVIEW_SEPARATOR.trim(), " ");

        let mut picked: Vec<String> = Vec::new();
        let mut words = 0usize;

        for sentence in body.split_terminator(['.', '!', '?']) {
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            if words + tokens.len() > self.max_words {
                if picked.is_empty() {
                    // First sentence alone is too long: cut it
                    picked.push(tokens[..self.max_words].join(" "));
                }
                break;
            }

            words += tokens.len();
            picked.push(tokens.join(" "));

            if words >= self.min_words {
                break;
            }
        }

        if picked.is_empty() {
            return Ok(String::new());
        }

        let mut summary = picked.join(". ");
        summary.push('.');
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix_and_separators() {
        let oracle = ExtractiveOracle::new(512, 100, 512).unwrap();
        let out = oracle
            .summarize("summarize: cheap and sturdy. [REVIEW] fast charging!")
            .unwrap();
        assert_eq!(out, "cheap and sturdy. fast charging.");
    }

    #[test]
    fn test_stops_after_min_words() {
        let oracle = ExtractiveOracle::new(512, 3, 50).unwrap();
        let out = oracle.summarize("one two three. four five. six").unwrap();
        assert_eq!(out, "one two three.");
    }

    #[test]
    fn test_never_exceeds_max_words() {
        let oracle = ExtractiveOracle::new(512, 2, 4).unwrap();
        let out = oracle.summarize("a b c d e f. g h").unwrap();
        assert_eq!(out, "a b c d.");
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        let oracle = ExtractiveOracle::new(512, 1, 10).unwrap();
        assert_eq!(oracle.summarize("summarize: ").unwrap(), "");
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(ExtractiveOracle::new(512, 10, 5).is_err());
        assert!(ExtractiveOracle::new(512, 0, 0).is_err());
    }
}
