//! Stopword filtering.
//!
//! Backed by the `stop-words` crate for the default English list, with
//! support for caller-supplied custom lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of stopwords used to reject tokens during candidate selection.
///
/// Membership is tested against the lowercased lemma: the filter stores
/// every word lowercase and lowercases the probe, so `"The"`, `"the"` and
/// `"THE"` all match a listed `"the"`.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The standard English stopword list.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// An empty filter that rejects nothing.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from an explicit word list.
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Add words to the filter.
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check whether a word is a stopword.
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
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // lowercased probe
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("keyword"));
        assert!(!filter.is_stopword("graph"));
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words")); // stored lowercase
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
        assert!(!filter.is_stopword("a"));
    }
}
