// ============================================================
// Layer 3 — Aspect Catalog
// ============================================================
// The table of product aspects and the keywords that signal
// them. Built and validated once at startup, then shared by
// reference with every component that scores text:
//
//   AspectScorer        → token membership per aspect
//   SummaryPersonalizer → keyword presence per sentence
//   coverage()          → keyword presence in the final summary
//
// Nothing mutates a catalog after construction, so a single
// instance can be read from any number of threads. Tests build
// their own small catalogs instead of touching a global.

use rustc_hash::FxHashSet;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ReviewError, Result};

/// Serialisable form of one aspect, used for config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectSpec {
    pub name: String,
    pub keywords: Vec<String>,
}

/// A named product dimension with its keyword set.
#[derive(Debug, Clone)]
pub struct Aspect {
    name: String,
    /// Keywords in declaration order, lowercased and de-duplicated
    keywords: Vec<String>,
    /// Same keywords, for O(1) token membership
    lookup: FxHashSet<String>,
}

impl Aspect {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact token membership (used by the aspect scorer).
    pub fn matches_token(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    /// Number of distinct keywords occurring anywhere in `lowered`.
    /// The caller lowercases once; this is a plain substring test.
    pub fn keywords_present_in(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .count()
    }
}

/// Ordered, validated set of aspects.
#[derive(Debug, Clone)]
pub struct AspectCatalog {
    aspects: Vec<Aspect>,
}

/// On-disk shape: `{"aspects": [{"name": .., "keywords": [..]}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub aspects: Vec<AspectSpec>,
}

impl AspectCatalog {
    /// Build a catalog, validating names and keyword sets.
    ///
    /// Rejects: an empty catalog, blank or duplicate aspect
    /// names, and aspects whose keyword list is empty after
    /// dropping blank entries.
    pub fn new(specs: Vec<AspectSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(ReviewError::validation("aspect catalog has no aspects"));
        }

        let mut seen = FxHashSet::default();
        let mut aspects = Vec::with_capacity(specs.len());

        for spec in specs {
            let name = spec.name.trim().to_string();
            if name.is_empty() {
                return Err(ReviewError::validation("aspect name must not be empty"));
            }
            if !seen.insert(name.clone()) {
                return Err(ReviewError::validation(format!(
                    "duplicate aspect name '{name}'"
                )));
            }

            let mut lookup = FxHashSet::default();
            let mut keywords = Vec::new();
            for kw in spec.keywords {
                let kw = kw.trim().to_lowercase();
                if !kw.is_empty() && lookup.insert(kw.clone()) {
                    keywords.push(kw);
                }
            }
            if keywords.is_empty() {
                return Err(ReviewError::validation(format!(
                    "aspect '{name}' has no keywords"
                )));
            }

            aspects.push(Aspect { name, keywords, lookup });
        }

        Ok(Self { aspects })
    }

    /// Parse and validate a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| ReviewError::validation(format!("invalid catalog JSON: {e}")))?;
        Self::new(file.aspects)
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn get(&self, name: &str) -> Option<&Aspect> {
        self.aspects.iter().find(|a| a.name == name)
    }

    /// Aspect names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aspects.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

impl Default for AspectCatalog {
    /// The five stock aspects for consumer products.
    fn default() -> Self {
        let table: [(&str, &[&str]); 5] = [
            ("price", &["price", "cost", "expensive", "cheap", "affordable", "value", "worth"]),
            ("durability", &["durable", "sturdy", "break", "broken", "last", "quality", "build"]),
            ("ease_of_use", &["easy", "simple", "complicated", "difficult", "user-friendly", "intuitive"]),
            ("quality", &["quality", "excellent", "poor", "great", "bad", "premium", "superior"]),
            ("performance", &["performance", "fast", "slow", "efficient", "powerful", "weak"]),
        ];

        let aspects = table
            .iter()
            .map(|(name, kws)| Aspect {
                name: name.to_string(),
                keywords: kws.iter().map(|k| k.to_string()).collect(),
                lookup: kws.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self { aspects }
    }
}

// ─── AspectScoreVector ───────────────────────────────────────────────────────
/// Per-review aspect scores, one entry per catalog aspect in
/// catalog order. Values lie in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct AspectScoreVector {
    entries: Vec<(String, f64)>,
}

impl AspectScoreVector {
    pub(crate) fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, aspect: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == aspect)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialises as a JSON object keyed by aspect, in catalog order.
impl Serialize for AspectScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for AspectScoreVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }
}
