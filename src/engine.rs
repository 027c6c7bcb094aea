//! The keyword extraction engine.
//!
//! [`KeywordPortfolio`] drives the whole pipeline once at construction:
//! ingestion, the frequency model, graph construction, and metric builds run
//! to completion before the value is returned. Ranking methods then operate
//! any number of times against the built graph.

use rustc_hash::FxHashMap;

use crate::error::{ExtractError, Result};
use crate::freq::{BigramModel, FreqDist};
use crate::graph::cooc::CoocGraph;
use crate::graph::csr::CsrGraph;
use crate::ingest::{DocumentIngestor, IngestResult};
use crate::metrics;
use crate::nlp::annotator::{Annotator, BasicAnnotator};
use crate::pagerank::PageRank;
use crate::types::{ExtractorConfig, RankEntry, Summary};

/// Enter a tracing span for a build stage (when the `tracing` feature is
/// enabled). When disabled the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("build_stage", stage = $name).entered();
    };
}

/// Keyword candidates and their co-occurrence graph for one portfolio.
///
/// Single-owner, single-threaded: the graph and metric maps are private
/// mutable state. Callers sharing an instance across threads must serialize
/// access themselves.
///
/// ```
/// use portfolio_rank::KeywordPortfolio;
///
/// let engine = KeywordPortfolio::new(&[
///     "Graph ranking extracts keywords.",
///     "Keyword graphs rank candidates.",
/// ]);
/// let ranked = engine.rank_pagerank();
/// assert!(!ranked.is_empty());
/// ```
#[derive(Debug)]
pub struct KeywordPortfolio {
    ingest: IngestResult,
    token_freq: FreqDist,
    graph: CoocGraph,
    node_weight: FxHashMap<u32, u64>,
    doc_occurrence: FxHashMap<u32, u32>,
    pagerank: PageRank,
}

impl KeywordPortfolio {
    /// Build an engine with the default configuration (English stopwords, no
    /// tag restriction) and the built-in [`BasicAnnotator`].
    pub fn new<S: AsRef<str>>(portfolio: &[S]) -> Self {
        Self::with_config(portfolio, ExtractorConfig::default(), BasicAnnotator::new())
    }

    /// Build an engine with an explicit configuration and annotator.
    ///
    /// Runs the full pipeline: ingest, frequency model, graph build, metric
    /// builds. The returned engine is fully usable; no lazy work remains.
    pub fn with_config<S: AsRef<str>, A: Annotator>(
        portfolio: &[S],
        config: ExtractorConfig,
        annotator: A,
    ) -> Self {
        trace_stage!("ingest");
        let ingest = DocumentIngestor::new(&config, annotator).ingest(portfolio);

        trace_stage!("frequency");
        let token_freq = FreqDist::from_doc_tokens(&ingest.doc_tokens);
        let bigrams = BigramModel::from_portfolio(&ingest);

        trace_stage!("graph");
        let graph = CoocGraph::from_bigrams(&ingest.candidates, &bigrams);

        trace_stage!("metrics");
        let node_weight = metrics::node_weights(&graph);
        let doc_occurrence = metrics::doc_occurrence(&graph, &ingest.doc_tokens);

        Self {
            ingest,
            token_freq,
            graph,
            node_weight,
            doc_occurrence,
            pagerank: PageRank::default(),
        }
    }

    /// Override the PageRank parameters used by [`Self::rank_pagerank`].
    pub fn with_pagerank(mut self, pagerank: PageRank) -> Self {
        self.pagerank = pagerank;
        self
    }

    pub fn num_docs(&self) -> usize {
        self.ingest.num_docs
    }

    /// Number of candidates found at ingestion time. Unlike the graph's node
    /// count this does not shrink on removal.
    pub fn num_candidates(&self) -> usize {
        self.ingest.num_candidates()
    }

    /// Candidate lemmas in first-seen (id) order.
    pub fn candidates(&self) -> &[String] {
        &self.ingest.candidates
    }

    /// Per-document modified texts (accepted lemmas joined by spaces).
    pub fn modified_portfolio(&self) -> &[String] {
        &self.ingest.mod_portfolio
    }

    /// The co-occurrence graph in its current (possibly mutated) state.
    pub fn graph(&self) -> &CoocGraph {
        &self.graph
    }

    /// Candidate and document counts.
    pub fn summary(&self) -> Summary {
        Summary {
            num_candidates: self.num_candidates(),
            num_docs: self.num_docs(),
        }
    }

    /// Visualization placeholder. Intentionally produces nothing.
    pub fn plot(&self) {}

    /// Stable descending sort shared by every ranking method.
    ///
    /// Entries with equal scores keep their input order.
    pub fn sort_by_score(mut entries: Vec<RankEntry>) -> Vec<RankEntry> {
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries
    }

    /// Rank candidates by the harmonic mean of three normalized features:
    /// degree / max degree, incident weight / max incident weight, and
    /// document occurrence / document count.
    ///
    /// Only nodes with degree > 0 are ranked. Fails with
    /// [`ExtractError::DegenerateGraph`] when the graph has no edges or the
    /// portfolio has no documents.
    pub fn rank_harmonic(&self) -> Result<Vec<RankEntry>> {
        if self.num_docs() == 0 {
            return Err(ExtractError::degenerate("portfolio has no documents"));
        }
        let max_degree = self
            .graph
            .node_ids()
            .map(|id| self.graph.degree(id))
            .max()
            .unwrap_or(0);
        if max_degree == 0 {
            return Err(ExtractError::degenerate("graph has no edges"));
        }
        let max_weight = self.node_weight.values().copied().max().unwrap_or(0);
        if max_weight == 0 {
            return Err(ExtractError::degenerate("graph has zero total edge weight"));
        }

        let num_docs = self.num_docs() as f64;
        let entries: Vec<RankEntry> = self
            .graph
            .node_ids()
            .filter(|&id| self.graph.degree(id) > 0)
            .map(|id| {
                let degree = self.graph.degree(id) as f64 / max_degree as f64;
                let weight = self.node_weight.get(&id).copied().unwrap_or(0) as f64
                    / max_weight as f64;
                let coverage =
                    self.doc_occurrence.get(&id).copied().unwrap_or(0) as f64 / num_docs;
                let score = harmonic_mean([degree, weight, coverage]);
                RankEntry::new(self.graph.lemma(id).unwrap_or_default(), score)
            })
            .collect();

        Ok(Self::sort_by_score(entries))
    }

    /// Rank candidates by weighted PageRank over the current graph.
    ///
    /// The CSR snapshot is rebuilt on every call, so removals are always
    /// reflected.
    pub fn rank_pagerank(&self) -> Vec<RankEntry> {
        let csr = CsrGraph::from_cooc(&self.graph);
        let result = self.pagerank.run(&csr);

        let entries: Vec<RankEntry> = csr
            .graph_ids
            .iter()
            .zip(result.scores.iter())
            .map(|(&id, &score)| RankEntry::new(self.graph.lemma(id).unwrap_or_default(), score))
            .collect();

        Self::sort_by_score(entries)
    }

    /// Rank candidates by the RAKE ratio: degree divided by raw frequency.
    ///
    /// Plain degree, not weighted degree. Fails with
    /// [`ExtractError::ZeroFrequency`] instead of dividing by a zero count.
    pub fn rank_rake(&self) -> Result<Vec<RankEntry>> {
        let mut entries = Vec::with_capacity(self.graph.node_count());
        for id in self.graph.node_ids() {
            let lemma = self.graph.lemma(id).unwrap_or_default();
            let freq = self.token_freq.count(lemma);
            if freq == 0 {
                return Err(ExtractError::ZeroFrequency {
                    lemma: lemma.to_string(),
                });
            }
            entries.push(RankEntry::new(lemma, self.graph.degree(id) as f64 / freq as f64));
        }
        Ok(Self::sort_by_score(entries))
    }

    /// A node's neighbors, sorted by edge weight descending.
    ///
    /// Equal-weight neighbors keep ascending id (first-seen) order.
    pub fn neighbors(&self, lemma: &str) -> Result<Vec<String>> {
        let id = self
            .graph
            .node_id(lemma)
            .ok_or_else(|| ExtractError::not_found(lemma))?;

        let mut neighbors: Vec<(u32, u64)> = self.graph.neighbors(id).collect();
        neighbors.sort_by_key(|&(n, _)| n);
        neighbors.sort_by(|a, b| b.1.cmp(&a.1)); // stable: id order survives ties

        Ok(neighbors
            .into_iter()
            .map(|(n, _)| self.graph.lemma(n).unwrap_or_default().to_string())
            .collect())
    }

    /// Remove a single node and its incident edges.
    ///
    /// Node weight and document occurrence are stale afterwards until
    /// [`Self::rebuild_metrics`] runs.
    pub fn remove_node(&mut self, lemma: &str) -> Result<()> {
        let id = self
            .graph
            .node_id(lemma)
            .ok_or_else(|| ExtractError::not_found(lemma))?;
        self.graph.remove_node(id);
        Ok(())
    }

    /// Remove several nodes.
    ///
    /// Every name is validated before any removal happens, so a
    /// [`ExtractError::NodeNotFound`] leaves the graph untouched.
    pub fn remove_nodes<S: AsRef<str>>(&mut self, lemmas: &[S]) -> Result<()> {
        let ids = lemmas
            .iter()
            .map(|lemma| {
                self.graph
                    .node_id(lemma.as_ref())
                    .ok_or_else(|| ExtractError::not_found(lemma.as_ref()))
            })
            .collect::<Result<Vec<u32>>>()?;

        for id in ids {
            self.graph.remove_node(id);
        }
        Ok(())
    }

    /// Recompute node weight and document occurrence for the current node
    /// set. Call after structural mutation.
    pub fn rebuild_metrics(&mut self) {
        self.node_weight = metrics::node_weights(&self.graph);
        self.doc_occurrence = metrics::doc_occurrence(&self.graph, &self.ingest.doc_tokens);
    }
}

/// Harmonic mean of the given features.
///
/// Returns 0.0 when any feature is non-positive; the mean is undefined there
/// and such a node should rank last.
fn harmonic_mean<const N: usize>(values: [f64; N]) -> f64 {
    if values.iter().any(|&v| v <= 0.0) {
        return 0.0;
    }
    N as f64 / values.iter().map(|v| 1.0 / v).sum::<f64>()
}
