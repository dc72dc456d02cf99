//! Percolation indicator
//!
//! Flags the phase transition from a fragmented graph to one dominated by a
//! single giant component.

use crate::graph::SimilarityGraph;
use serde::{Deserialize, Serialize};

/// Giant-component ratio at or above which the graph is percolating
pub const PERCOLATION_CUTOFF: f64 = 0.6;

/// Ratio of the largest component to the whole graph, and the derived flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercolationIndicator {
    /// `largest / total`, 0 when the graph is empty
    pub ratio: f64,
    /// `ratio >= PERCOLATION_CUTOFF`
    pub is_percolating: bool,
}

impl PercolationIndicator {
    pub fn new(largest_component: usize, total_nodes: usize) -> Self {
        let ratio = if total_nodes > 0 {
            largest_component as f64 / total_nodes as f64
        } else {
            0.0
        };

        Self {
            ratio,
            is_percolating: ratio >= PERCOLATION_CUTOFF,
        }
    }

    /// Ratio as a whole percentage, rounded
    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0).round() as u32
    }
}

/// Summary statistics of one similarity graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub words: usize,
    pub edges: usize,
    pub density: f64,
    pub largest_component: usize,
    pub component_count: usize,
    pub ratio: f64,
    pub is_percolating: bool,
}

impl GraphStats {
    pub fn new(graph: &SimilarityGraph, largest_component: usize, component_count: usize) -> Self {
        let indicator = PercolationIndicator::new(largest_component, graph.node_count());

        Self {
            words: graph.node_count(),
            edges: graph.edge_count(),
            density: graph.density(),
            largest_component,
            component_count,
            ratio: indicator.ratio,
            is_percolating: indicator.is_percolating,
        }
    }

    pub fn indicator(&self) -> PercolationIndicator {
        PercolationIndicator {
            ratio: self.ratio,
            is_percolating: self.is_percolating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive() {
        // 3 / 5 == 0.6 exactly
        let indicator = PercolationIndicator::new(3, 5);
        assert_eq!(indicator.ratio, 0.6);
        assert!(indicator.is_percolating);
        assert_eq!(indicator.percent(), 60);
    }

    #[test]
    fn test_below_cutoff() {
        let indicator = PercolationIndicator::new(59, 100);
        assert!(!indicator.is_percolating);

        let indicator = PercolationIndicator::new(1, 2);
        assert_eq!(indicator.ratio, 0.5);
        assert!(!indicator.is_percolating);
    }

    #[test]
    fn test_full_graph() {
        let indicator = PercolationIndicator::new(10, 10);
        assert_eq!(indicator.ratio, 1.0);
        assert!(indicator.is_percolating);
    }

    #[test]
    fn test_empty_graph() {
        let indicator = PercolationIndicator::new(0, 0);
        assert_eq!(indicator.ratio, 0.0);
        assert!(!indicator.is_percolating);
    }

    #[test]
    fn test_graph_stats() {
        use crate::graph::{GraphNode, SimilarityEdge};

        let graph = SimilarityGraph {
            nodes: (0..5).map(|i| GraphNode::new(format!("w{}", i), i)).collect(),
            edges: vec![
                SimilarityEdge::new("w0", "w1", 0.9),
                SimilarityEdge::new("w1", "w2", 0.9),
            ],
        };

        let stats = GraphStats::new(&graph, 3, 3);
        assert_eq!(stats.words, 5);
        assert_eq!(stats.edges, 2);
        assert!((stats.density - 0.2).abs() < 1e-12);
        assert!(stats.is_percolating);
        assert_eq!(stats.indicator(), PercolationIndicator::new(3, 5));
    }
}
