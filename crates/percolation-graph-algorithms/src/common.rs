//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of an undirected graph for algorithm execution.

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Nodes are the dense indices `0..node_count`. Every undirected edge `{u, v}`
/// is stored twice, once in the row of `u` and once in the row of `v`, so
/// `neighbors` returns the full neighborhood of a node.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor node indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Get the neighbors of a node
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Build a view from an undirected edge list of dense indices.
    ///
    /// Each `(u, v)` contributes both directions.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        Self::from_adjacency_list(adjacency)
    }

    /// Flatten per-node adjacency lists into CSR form
    pub fn from_adjacency_list(adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for neighbors in adjacency {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
        }
    }
}
