//! Portfolio ingestion.
//!
//! Runs normalization, annotation, and filtering over every document and
//! accumulates the candidate vocabulary, per-document token sequences, and
//! the space-joined "modified text" per document. The output is an immutable
//! [`IngestResult`] consumed by the frequency model and graph builder.

use rustc_hash::FxHashMap;

use crate::nlp::annotator::Annotator;
use crate::nlp::filter::TokenFilter;
use crate::nlp::normalizer::normalize;
use crate::types::ExtractorConfig;

/// Everything ingestion produces, fixed once construction completes.
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// Candidate lemmas in first-seen order; a candidate's position is its id.
    pub candidates: Vec<String>,
    /// Lemma -> dense candidate id.
    pub candidate_ids: FxHashMap<String, u32>,
    /// Per-document modified text: accepted lemmas joined by single spaces.
    pub mod_portfolio: Vec<String>,
    /// Per-document accepted lemma sequences (doc-token filter, superset of
    /// candidates).
    pub doc_tokens: Vec<Vec<String>>,
    /// Number of documents ingested.
    pub num_docs: usize,
}

impl IngestResult {
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Look up a candidate id by lemma.
    pub fn candidate_id(&self, lemma: &str) -> Option<u32> {
        self.candidate_ids.get(lemma).copied()
    }
}

/// Runs the ingestion pass over a portfolio.
#[derive(Debug)]
pub struct DocumentIngestor<'a, A> {
    config: &'a ExtractorConfig,
    annotator: A,
}

impl<'a, A: Annotator> DocumentIngestor<'a, A> {
    pub fn new(config: &'a ExtractorConfig, annotator: A) -> Self {
        Self { config, annotator }
    }

    /// Ingest every document in order.
    ///
    /// Candidate ids are assigned densely in order of first appearance across
    /// the whole portfolio. Documents are processed sequentially; the
    /// annotator is invoked once per document.
    pub fn ingest<S: AsRef<str>>(&self, portfolio: &[S]) -> IngestResult {
        let filter = TokenFilter::new(self.config);

        let mut candidates: Vec<String> = Vec::new();
        let mut candidate_ids: FxHashMap<String, u32> = FxHashMap::default();
        let mut mod_portfolio: Vec<String> = Vec::with_capacity(portfolio.len());
        let mut doc_tokens: Vec<Vec<String>> = Vec::with_capacity(portfolio.len());

        for raw in portfolio {
            let normalized = normalize(raw.as_ref());
            let annotated = self.annotator.annotate(&normalized);

            for token in &annotated {
                if let Some(lemma) = filter.candidate(token) {
                    if !candidate_ids.contains_key(lemma) {
                        let id = candidates.len() as u32;
                        candidate_ids.insert(lemma.to_string(), id);
                        candidates.push(lemma.to_string());
                    }
                }
            }

            let tokens: Vec<String> = annotated
                .iter()
                .filter_map(|t| filter.doc_token(t))
                .map(str::to_string)
                .collect();

            mod_portfolio.push(tokens.join(" "));
            doc_tokens.push(tokens);
        }

        IngestResult {
            candidates,
            candidate_ids,
            mod_portfolio,
            num_docs: doc_tokens.len(),
            doc_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::annotator::BasicAnnotator;
    use crate::nlp::stopwords::StopwordFilter;

    fn ingest(portfolio: &[&str], stopwords: &[&str]) -> IngestResult {
        let config =
            ExtractorConfig::new().with_stopwords(StopwordFilter::from_list(stopwords));
        DocumentIngestor::new(&config, BasicAnnotator::new()).ingest(portfolio)
    }

    #[test]
    fn test_candidate_ids_dense_first_seen() {
        let result = ingest(
            &["graph keyword graph", "keyword ranking graph"],
            &[],
        );

        assert_eq!(result.candidates, vec!["graph", "keyword", "ranking"]);
        assert_eq!(result.candidate_id("graph"), Some(0));
        assert_eq!(result.candidate_id("keyword"), Some(1));
        assert_eq!(result.candidate_id("ranking"), Some(2));
        assert_eq!(result.num_candidates(), 3);
        assert_eq!(result.num_docs, 2);
    }

    #[test]
    fn test_modified_text_joins_with_spaces() {
        let result = ingest(&["The quick brown fox."], &["the"]);

        assert_eq!(result.mod_portfolio, vec!["quick brown fox"]);
        assert_eq!(result.doc_tokens, vec![vec!["quick", "brown", "fox"]]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_excluded() {
        let result = ingest(&["a an ox the graph"], &["the", "an"]);

        // "a" fails the length rule, "an"/"the" are stopwords.
        assert_eq!(result.doc_tokens[0], vec!["ox", "graph"]);
        assert_eq!(result.candidates, vec!["ox", "graph"]);
    }

    #[test]
    fn test_empty_portfolio() {
        let result = ingest(&[], &[]);

        assert_eq!(result.num_docs, 0);
        assert_eq!(result.num_candidates(), 0);
        assert!(result.mod_portfolio.is_empty());
    }

    #[test]
    fn test_all_stopword_document() {
        let result = ingest(&["the the the"], &["the"]);

        assert_eq!(result.num_docs, 1);
        assert_eq!(result.num_candidates(), 0);
        assert_eq!(result.mod_portfolio, vec![""]);
        assert!(result.doc_tokens[0].is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let result = ingest(&["alpha beta", "gamma delta"], &[]);

        assert_eq!(result.doc_tokens[0], vec!["alpha", "beta"]);
        assert_eq!(result.doc_tokens[1], vec!["gamma", "delta"]);
    }
}
