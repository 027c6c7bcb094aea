//! Mutable co-occurrence graph.
//!
//! Undirected simple graph whose nodes are keyword candidates and whose
//! edges are adjacent-candidate bigrams, weighted by bigram frequency.
//! Adjacency uses FxHashMap for O(1) edge lookups; node ids are the dense
//! candidate ids, and removal leaves tombstones so surviving ids stay stable.

use rustc_hash::FxHashMap;

use crate::freq::BigramModel;

/// A live node: its lemma and its adjacency list.
#[derive(Debug, Clone)]
struct Node {
    lemma: String,
    /// Neighbor id -> edge weight.
    edges: FxHashMap<u32, u64>,
}

impl Node {
    fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// Undirected weighted graph over candidate lemmas.
#[derive(Debug, Clone, Default)]
pub struct CoocGraph {
    /// Maps lemma -> node id (live nodes only).
    lemma_to_id: FxHashMap<String, u32>,
    /// Node storage indexed by id; `None` marks a removed node.
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl CoocGraph {
    /// Build the graph from the candidate vocabulary and the bigram model.
    ///
    /// Every candidate becomes a node (isolated nodes permitted). Each
    /// unordered candidate pair seen as a bigram becomes one edge whose
    /// weight is the sum of both orderings' frequencies, making the weight
    /// independent of bigram iteration order. Self-pairs are skipped.
    pub fn from_bigrams(candidates: &[String], bigrams: &BigramModel) -> Self {
        let mut graph = Self {
            lemma_to_id: FxHashMap::with_capacity_and_hasher(
                candidates.len(),
                Default::default(),
            ),
            nodes: Vec::with_capacity(candidates.len()),
            live: 0,
        };

        for (id, lemma) in candidates.iter().enumerate() {
            graph.lemma_to_id.insert(lemma.clone(), id as u32);
            graph.nodes.push(Some(Node::new(lemma.clone())));
            graph.live += 1;
        }

        for &(a, b) in bigrams.freq.keys() {
            if a == b {
                continue;
            }
            let weight = bigrams.count((a, b)) + bigrams.count((b, a));
            graph.set_edge(a, b, weight);
        }

        graph
    }

    /// Set the weight of the undirected edge between two live nodes.
    ///
    /// Assigning the same pair twice (in either order) overwrites.
    fn set_edge(&mut self, a: u32, b: u32, weight: u64) {
        if let Some(Some(node)) = self.nodes.get_mut(a as usize) {
            node.edges.insert(b, weight);
        }
        if let Some(Some(node)) = self.nodes.get_mut(b as usize) {
            node.edges.insert(a, weight);
        }
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .flatten()
            .map(|n| n.edges.len())
            .sum::<usize>()
            / 2
    }

    /// Highest id ever assigned, plus one. Removed ids stay unassigned.
    pub fn id_bound(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemma_to_id.contains_key(lemma)
    }

    pub fn node_id(&self, lemma: &str) -> Option<u32> {
        self.lemma_to_id.get(lemma).copied()
    }

    /// Lemma of a live node.
    pub fn lemma(&self, id: u32) -> Option<&str> {
        self.nodes
            .get(id as usize)?
            .as_ref()
            .map(|n| n.lemma.as_str())
    }

    /// Number of distinct neighbors of a live node.
    pub fn degree(&self, id: u32) -> usize {
        self.nodes
            .get(id as usize)
            .and_then(Option::as_ref)
            .map_or(0, |n| n.edges.len())
    }

    /// Iterate a node's neighbors with edge weights, in arbitrary order.
    pub fn neighbors(&self, id: u32) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.nodes
            .get(id as usize)
            .and_then(Option::as_ref)
            .into_iter()
            .flat_map(|n| n.edges.iter().map(|(&k, &v)| (k, v)))
    }

    /// Weight of the edge between two nodes, if present.
    pub fn edge_weight(&self, a: u32, b: u32) -> Option<u64> {
        self.nodes
            .get(a as usize)?
            .as_ref()?
            .edges
            .get(&b)
            .copied()
    }

    /// Iterate live node ids in ascending (first-seen) order.
    pub fn node_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| i as u32)
    }

    /// Remove a node and all its incident edges.
    ///
    /// Returns `false` when the id names no live node. Surviving node ids
    /// are unchanged.
    pub fn remove_node(&mut self, id: u32) -> bool {
        let Some(slot) = self.nodes.get_mut(id as usize) else {
            return false;
        };
        let Some(node) = slot.take() else {
            return false;
        };

        for (&neighbor, _) in &node.edges {
            if let Some(Some(other)) = self.nodes.get_mut(neighbor as usize) {
                other.edges.remove(&id);
            }
        }
        self.lemma_to_id.remove(&node.lemma);
        self.live -= 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(bigrams: &[(u32, u32)]) -> BigramModel {
        let mut m = BigramModel {
            bigrams: bigrams.to_vec(),
            freq: FxHashMap::default(),
        };
        for &b in bigrams {
            *m.freq.entry(b).or_insert(0) += 1;
        }
        m
    }

    fn lemmas(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_nodes_from_candidates() {
        let graph = CoocGraph::from_bigrams(&lemmas(&["a1", "b1", "c1"]), &model(&[]));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_id("b1"), Some(1));
        assert_eq!(graph.lemma(2), Some("c1"));
        assert_eq!(graph.degree(0), 0); // isolated nodes permitted
    }

    #[test]
    fn test_edge_weight_is_bigram_frequency() {
        let graph = CoocGraph::from_bigrams(
            &lemmas(&["a1", "b1"]),
            &model(&[(0, 1), (0, 1), (0, 1)]),
        );

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(3));
        assert_eq!(graph.edge_weight(1, 0), Some(3));
    }

    #[test]
    fn test_both_orderings_sum_into_one_edge() {
        // (a,b) twice and (b,a) once collapse to one edge of weight 3.
        let graph = CoocGraph::from_bigrams(
            &lemmas(&["a1", "b1"]),
            &model(&[(0, 1), (0, 1), (1, 0)]),
        );

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(3));
    }

    #[test]
    fn test_self_pairs_skipped() {
        let graph = CoocGraph::from_bigrams(&lemmas(&["a1"]), &model(&[(0, 0)]));

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), 0);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph = CoocGraph::from_bigrams(
            &lemmas(&["a1", "b1", "c1"]),
            &model(&[(0, 1), (1, 2)]),
        );
        assert_eq!(graph.degree(1), 2);

        assert!(graph.remove_node(1));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.degree(2), 0);
        assert!(!graph.contains("b1"));
        // Surviving ids are stable.
        assert_eq!(graph.node_id("c1"), Some(2));
    }

    #[test]
    fn test_remove_missing_node() {
        let mut graph = CoocGraph::from_bigrams(&lemmas(&["a1"]), &model(&[]));

        assert!(graph.remove_node(0));
        assert!(!graph.remove_node(0)); // already removed
        assert!(!graph.remove_node(99)); // never existed
        assert!(graph.is_empty());
    }

    #[test]
    fn test_node_ids_skip_tombstones() {
        let mut graph =
            CoocGraph::from_bigrams(&lemmas(&["a1", "b1", "c1"]), &model(&[(0, 1)]));
        graph.remove_node(1);

        let ids: Vec<u32> = graph.node_ids().collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
