//! Similarity graph
//!
//! One node per vocabulary item and one undirected edge per pair of items
//! whose embeddings are similar enough. Edges are irreflexive and there is
//! at most one per unordered pair.

pub mod builder;
pub mod edge;
pub mod node;

use serde::{Deserialize, Serialize};

pub use builder::build_similarity_graph;
pub use edge::SimilarityEdge;
pub use node::GraphNode;

/// A similarity graph over the active vocabulary
///
/// Serializes in node/link form: `{ "nodes": [...], "links": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityGraph {
    /// Nodes in vocabulary order
    pub nodes: Vec<GraphNode>,

    /// Edges in pair order `(i, j)` with `i < j`
    #[serde(rename = "links")]
    pub edges: Vec<SimilarityEdge>,
}

impl SimilarityGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Fraction of possible edges present: `2|E| / (n(n-1))`, 0 for fewer than two nodes
    pub fn density(&self) -> f64 {
        let n = self.nodes.len();
        if n > 1 {
            (self.edges.len() * 2) as f64 / (n * (n - 1)) as f64
        } else {
            0.0
        }
    }

    /// Look up a node by label
    pub fn node(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Labels directly connected to `label`
    pub fn neighbors<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges.iter().filter_map(move |e| {
            if e.source == label {
                Some(e.target.as_str())
            } else if e.target == label {
                Some(e.source.as_str())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_one() -> SimilarityGraph {
        SimilarityGraph {
            nodes: ["a", "b", "c", "d"]
                .iter()
                .enumerate()
                .map(|(i, l)| GraphNode::new(*l, i))
                .collect(),
            edges: vec![
                SimilarityEdge::new("a", "b", 0.9),
                SimilarityEdge::new("a", "c", 0.8),
                SimilarityEdge::new("b", "c", 0.7),
            ],
        }
    }

    #[test]
    fn test_density() {
        let graph = triangle_plus_one();
        // 2 * 3 / (4 * 3)
        assert!((graph.density() - 0.5).abs() < 1e-12);
        assert_eq!(SimilarityGraph::default().density(), 0.0);

        let single = SimilarityGraph {
            nodes: vec![GraphNode::new("a", 0)],
            edges: vec![],
        };
        assert_eq!(single.density(), 0.0);
    }

    #[test]
    fn test_lookup_and_neighbors() {
        let graph = triangle_plus_one();
        assert_eq!(graph.node("c").map(|n| n.index), Some(2));
        assert!(graph.node("z").is_none());

        let mut neighbors: Vec<&str> = graph.neighbors("b").collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["a", "c"]);
        assert_eq!(graph.neighbors("d").count(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(triangle_plus_one()).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(json["links"].as_array().unwrap().len(), 3);
        assert_eq!(json["links"][0]["value"], 0.9);
    }
}
