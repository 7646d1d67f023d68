//! Stopword filtering
//!
//! Backed by the `stop-words` crate, with support for extending the list.

use rustc_hash::FxHashSet;
use stop_words::get;

use super::Language;

/// Case-insensitive stopword set
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Lowercased stopwords
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for a language
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stopword_list())
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// A filter that never matches
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add extra stopwords
    pub fn extend(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("are"));
        assert!(!filter.is_stopword("mammal"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new(Language::German);

        assert!(filter.is_stopword("und"));
        assert!(filter.is_stopword("Die"));
        assert!(!filter.is_stopword("hund"));
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(&["Lorem"]);
        assert!(filter.is_stopword("lorem"));
        assert!(!filter.is_stopword("the"));

        filter.extend(&["ipsum"]);
        assert!(filter.is_stopword("IPSUM"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
