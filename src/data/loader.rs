// ============================================================
// Layer 4 — Review Loader
// ============================================================
// Loads review rows from a JSON array file:
//
//   [
//     {"review_text": "Cheap but sturdy.", "rating": 4},
//     {"review_text": null,                "rating": 2},
//     ...
//   ]
//
// Both columns (`review_text`, `rating`) must appear in the
// file; a file where no row carries one of them is rejected
// outright. A row without a rating gets `None`. Rows whose text
// is missing, null or blank are dropped, and the result is capped
// at `max_reviews` rows in file order.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::{fs, path::PathBuf};

use crate::domain::review::Review;
use crate::domain::traits::ReviewSource;

pub const REQUIRED_COLUMNS: [&str; 2] = ["review_text", "rating"];

/// Loads reviews from a single JSON file.
/// Implements the ReviewSource trait from Layer 3.
pub struct JsonReviewLoader {
    path: PathBuf,
    max_reviews: usize,
}

impl JsonReviewLoader {
    pub fn new(path: impl Into<PathBuf>, max_reviews: usize) -> Self {
        Self {
            path: path.into(),
            max_reviews,
        }
    }
}

impl ReviewSource for JsonReviewLoader {
    fn load_all(&self) -> Result<Vec<Review>> {
        if !self.path.exists() {
            bail!("File not found: {}", self.path.display());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let reviews = parse_rows(&raw, self.max_reviews)
            .with_context(|| format!("Failed to load review data from '{}'", self.path.display()))?;

        tracing::info!(
            "Successfully loaded {} reviews from {}",
            reviews.len(),
            self.path.display()
        );
        Ok(reviews)
    }
}

/// Parse the JSON body into at most `max_reviews` reviews.
pub fn parse_rows(raw: &str, max_reviews: usize) -> Result<Vec<Review>> {
    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(raw).context("Expected a JSON array of row objects")?;

    // Columns are checked per file, not per row
    if let Some(col) = REQUIRED_COLUMNS
        .iter()
        .find(|c| !rows.iter().any(|row| row.contains_key(**c)))
    {
        bail!(
            "Review data is missing column '{col}'; rows must contain columns: {:?}",
            REQUIRED_COLUMNS
        );
    }

    let mut reviews = Vec::new();
    let mut dropped = 0usize;

    for (i, row) in rows.iter().enumerate() {
        if reviews.len() == max_reviews {
            break;
        }

        let text = row.get("review_text").and_then(Value::as_str);
        let rating = row.get("rating").and_then(|v| parse_rating(i, v));

        // Null or blank text → drop the row, keep going
        match Review::new(text, rating) {
            Ok(review) => reviews.push(review),
            Err(e) => {
                dropped += 1;
                tracing::debug!("Dropping row {i}: {e}");
            }
        }
    }

    if dropped > 0 {
        tracing::warn!("Dropped {dropped} rows without review text");
    }

    Ok(reviews)
}

/// Integer ratings pass through; whole-number floats (`4.0`) are
/// accepted. Anything else is logged and treated as absent.
fn parse_rating(row: usize, value: &Value) -> Option<i64> {
    if value.is_null() {
        return None;
    }
    if let Some(r) = value.as_i64() {
        return Some(r);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
        _ => {
            tracing::warn!("Row {row}: ignoring unusable rating {value}");
            None
        }
    }
}
