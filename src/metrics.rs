//! Derived per-node metrics.
//!
//! Node weight (sum of incident edge weights) and document occurrence
//! (number of documents containing the lemma). Both are snapshots of the
//! graph's current node set: after a structural mutation they are stale
//! until explicitly recomputed.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::cooc::CoocGraph;

/// Sum of incident edge weights for every live node.
pub fn node_weights(graph: &CoocGraph) -> FxHashMap<u32, u64> {
    graph
        .node_ids()
        .map(|id| (id, graph.neighbors(id).map(|(_, w)| w).sum()))
        .collect()
}

/// Number of documents whose token sequence contains each live node's lemma.
///
/// Membership, not frequency: a document contributes at most 1 per node.
pub fn doc_occurrence(graph: &CoocGraph, doc_tokens: &[Vec<String>]) -> FxHashMap<u32, u32> {
    let doc_sets: Vec<FxHashSet<&str>> = doc_tokens
        .iter()
        .map(|tokens| tokens.iter().map(String::as_str).collect())
        .collect();

    graph
        .node_ids()
        .map(|id| {
            let lemma = graph.lemma(id).unwrap_or_default();
            let count = doc_sets.iter().filter(|set| set.contains(lemma)).count();
            (id, count as u32)
        })
        .collect()
}
