// ============================================================
// Layer 4 — Stop-word Filter
// ============================================================
// Decides which tokens are too common to count toward aspect
// scores. The default is a compact built-in English list; any
// other language comes from the `stop-words` crate.
//
// The built-in list deliberately contains no aspect keywords.
// The larger ISO list shipped with `stop-words` does (e.g.
// "value", "last"), which would silently zero those aspects.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::{ReviewError, Result};

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stop-words
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// No filtering at all.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load the `stop-words` crate list for a language code or name.
    /// Unknown languages are an error rather than a silent default.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                return Err(ReviewError::validation(format!(
                    "no stop-word list for language '{other}'"
                )))
            }
        };

        Ok(Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Expects an already-lowercased token.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_filters_function_words() {
        let f = StopwordFilter::english();
        for w in ["the", "and", "but", "is", "not", "very"] {
            assert!(f.is_stopword(w), "{w} should be a stop-word");
        }
    }

    #[test]
    fn test_english_keeps_default_aspect_keywords() {
        let f = StopwordFilter::english();
        let cat = crate::domain::aspect::AspectCatalog::default();
        for aspect in cat.aspects() {
            for kw in aspect.keywords() {
                assert!(!f.is_stopword(kw), "keyword {kw} must survive filtering");
            }
        }
    }

    #[test]
    fn test_empty_filter() {
        let f = StopwordFilter::empty();
        assert!(f.is_empty());
        assert!(!f.is_stopword("the"));
    }

    #[test]
    fn test_language_lookup() {
        let de = StopwordFilter::for_language("de").unwrap();
        assert!(!de.is_empty());
        assert!(StopwordFilter::for_language("klingon").is_err());
    }
}
