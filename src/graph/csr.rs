//! Compressed Sparse Row (CSR) projection of the co-occurrence graph.
//!
//! PageRank repeatedly iterates over every edge; CSR stores edges
//! contiguously so that iteration is cache-friendly. The projection is a
//! snapshot: it is rebuilt from the live graph before each PageRank run, so
//! node removals are always reflected.

use rustc_hash::FxHashMap;

use super::cooc::CoocGraph;

/// A read-only CSR snapshot of a [`CoocGraph`].
///
/// Rows are indexed by a compact `0..num_nodes` range; `graph_ids[i]` maps a
/// row back to the originating graph node id.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes in the snapshot.
    pub num_nodes: usize,
    /// Row pointers: row i's edges are at indices `row_ptr[i]..row_ptr[i+1]`.
    pub row_ptr: Vec<usize>,
    /// Column indices (target rows) for each edge.
    pub col_idx: Vec<u32>,
    /// Edge weights.
    pub weights: Vec<f64>,
    /// Degree for each row.
    pub degree: Vec<u32>,
    /// Total incident weight for each row.
    pub total_weight: Vec<f64>,
    /// Graph node id for each row.
    pub graph_ids: Vec<u32>,
}

impl CsrGraph {
    /// Snapshot the live nodes of a co-occurrence graph.
    pub fn from_cooc(graph: &CoocGraph) -> Self {
        let graph_ids: Vec<u32> = graph.node_ids().collect();
        let row_of: FxHashMap<u32, u32> = graph_ids
            .iter()
            .enumerate()
            .map(|(row, &id)| (id, row as u32))
            .collect();

        let num_nodes = graph_ids.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut degree = Vec::with_capacity(num_nodes);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for &id in &graph_ids {
            // Sort edges for deterministic iteration.
            let mut edges: Vec<(u32, u64)> = graph.neighbors(id).collect();
            edges.sort_by_key(|&(target, _)| target);

            degree.push(edges.len() as u32);
            total_weight.push(edges.iter().map(|&(_, w)| w as f64).sum());

            for (target, weight) in edges {
                col_idx.push(row_of[&target]);
                weights.push(weight as f64);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            degree,
            total_weight,
            graph_ids,
        }
    }

    /// Iterate over the neighbors of a row.
    pub fn neighbors(&self, row: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[row as usize];
        let end = self.row_ptr[row as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Total incident weight of a row.
    pub fn node_total_weight(&self, row: u32) -> f64 {
        self.total_weight[row as usize]
    }

    /// Rows with no edges.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&r| self.degree[r as usize] == 0)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            degree: Vec::new(),
            total_weight: Vec::new(),
            graph_ids: Vec::new(),
        }
    }
}
