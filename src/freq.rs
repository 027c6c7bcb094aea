//! Frequency model: lemma counts and candidate bigrams.

use rustc_hash::FxHashMap;

use crate::ingest::IngestResult;

/// An ordered pair of adjacent candidate ids.
pub type Bigram = (u32, u32);

/// Frequency distribution over lemmas, flattened across all documents.
#[derive(Debug, Clone, Default)]
pub struct FreqDist {
    counts: FxHashMap<String, u64>,
    total: u64,
}

impl FreqDist {
    /// Count every token in every document's token sequence.
    pub fn from_doc_tokens(doc_tokens: &[Vec<String>]) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        let mut total = 0u64;
        for tokens in doc_tokens {
            for token in tokens {
                *counts.entry(token.clone()).or_insert(0) += 1;
                total += 1;
            }
        }
        Self { counts, total }
    }

    /// Occurrence count for a lemma (zero when unseen).
    pub fn count(&self, lemma: &str) -> u64 {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total tokens counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Candidate bigrams plus their ordered-pair frequency distribution.
#[derive(Debug, Clone, Default)]
pub struct BigramModel {
    /// Every candidate bigram occurrence, in document order.
    pub bigrams: Vec<Bigram>,
    /// Frequency per distinct ordered bigram.
    pub freq: FxHashMap<Bigram, u64>,
}

impl BigramModel {
    /// Slide a width-2 window over each document's modified text.
    ///
    /// Each modified text is re-split on single spaces, producing `len - 1`
    /// bigrams per document with no wraparound. Only bigrams whose members
    /// are both candidates are kept.
    pub fn from_portfolio(ingest: &IngestResult) -> Self {
        let mut bigrams: Vec<Bigram> = Vec::new();
        let mut freq: FxHashMap<Bigram, u64> = FxHashMap::default();

        for doc in &ingest.mod_portfolio {
            let tokens: Vec<&str> = doc.split(' ').collect();
            for pair in tokens.windows(2) {
                let (Some(a), Some(b)) = (
                    ingest.candidate_id(pair[0]),
                    ingest.candidate_id(pair[1]),
                ) else {
                    continue;
                };
                bigrams.push((a, b));
                *freq.entry((a, b)).or_insert(0) += 1;
            }
        }

        Self { bigrams, freq }
    }

    /// Frequency of an ordered bigram (zero when unseen).
    pub fn count(&self, bigram: Bigram) -> u64 {
        self.freq.get(&bigram).copied().unwrap_or(0)
    }
}
