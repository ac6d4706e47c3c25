// ============================================================
// Layer 3 — Preference Vector
// ============================================================
// How much the user cares about each aspect for one request.
// Weights are conventionally in [0.0, 1.0] (slider range) but
// are NOT clamped here; only non-finite values are rejected.
//
// A preference vector may be partial: aspects it omits simply
// take no part in the weighted sums. It may not, however, name
// an aspect the scores or catalog don't know about — that is
// caught by the consumers (ranker, personaliser).

use std::str::FromStr;

use serde::Serialize;

use crate::domain::aspect::AspectCatalog;
use crate::error::{ReviewError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreferenceVector {
    weights: Vec<(String, f64)>,
}

impl PreferenceVector {
    /// An empty vector: nothing weighted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from (aspect, weight) pairs. Later duplicates
    /// overwrite earlier ones, keeping the first position.
    pub fn new<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Result<Self> {
        let mut weights: Vec<(String, f64)> = Vec::new();
        for (name, weight) in pairs {
            let name = name.into();
            if !weight.is_finite() {
                return Err(ReviewError::validation(format!(
                    "preference weight for '{name}' must be finite, got {weight}"
                )));
            }
            match weights.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = weight,
                None => weights.push((name, weight)),
            }
        }
        Ok(Self { weights })
    }

    /// Same weight for every aspect in the catalog.
    pub fn uniform(catalog: &AspectCatalog, weight: f64) -> Result<Self> {
        Self::new(catalog.names().map(|n| (n.to_string(), weight)))
    }

    pub fn get(&self, aspect: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(n, _)| n == aspect)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(n, w)| (n.as_str(), *w))
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Every weighted aspect must exist in `catalog`.
    pub fn ensure_known(&self, catalog: &AspectCatalog) -> Result<()> {
        for (name, _) in &self.weights {
            if catalog.get(name).is_none() {
                return Err(ReviewError::validation(format!(
                    "preference names unknown aspect '{name}'"
                )));
            }
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`: weights in `other` win.
    pub fn merged_with(&self, other: &PreferenceVector) -> Result<Self> {
        Self::new(
            self.weights
                .iter()
                .chain(other.weights.iter())
                .map(|(n, w)| (n.clone(), *w)),
        )
    }
}

/// One `aspect=weight` pair as written on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceArg {
    pub aspect: String,
    pub weight: f64,
}

impl FromStr for PreferenceArg {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self> {
        let (aspect, weight) = s
            .split_once('=')
            .ok_or_else(|| ReviewError::validation(format!("expected aspect=weight, got '{s}'")))?;

        let aspect = aspect.trim();
        if aspect.is_empty() {
            return Err(ReviewError::validation(format!("missing aspect name in '{s}'")));
        }

        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| ReviewError::validation(format!("weight in '{s}' is not a number")))?;

        Ok(Self {
            aspect: aspect.to_string(),
            weight,
        })
    }
}
