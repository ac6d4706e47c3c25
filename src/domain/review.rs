// ============================================================
// Layer 3 — Review Domain Type
// ============================================================
// A single product review as the pipeline sees it.
// By the time a Review exists its text is guaranteed to be
// present and non-blank; rows that fail that check never
// make it past the loader.
//
// The rating is optional: the scoring pipeline never reads it,
// it is only carried along for display.

use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Raw review text exactly as loaded
    pub text: String,

    /// Star rating, when the source provides one
    pub rating: Option<i64>,
}

impl Review {
    /// Build a review, rejecting missing or blank text.
    ///
    /// Example:
    ///   let r = Review::new(Some("Great value"), Some(5))?;
    pub fn new(text: Option<impl Into<String>>, rating: Option<i64>) -> Result<Self> {
        let text: String = text
            .map(Into::into)
            .ok_or_else(|| ReviewError::validation("review text is missing"))?;

        if text.trim().is_empty() {
            return Err(ReviewError::validation("review text is empty"));
        }

        Ok(Self { text, rating })
    }
}
