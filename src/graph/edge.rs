//! Edge implementation for the similarity graph

use serde::{Deserialize, Serialize};

/// An undirected similarity edge
///
/// `source` precedes `target` in vocabulary order. Serializes as
/// `{ "source", "target", "value" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEdge {
    /// Endpoint that comes first in the vocabulary
    pub source: String,

    /// Endpoint that comes second in the vocabulary
    pub target: String,

    /// Cosine similarity of the two embeddings
    #[serde(rename = "value")]
    pub similarity: f64,
}

impl SimilarityEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, similarity: f64) -> Self {
        SimilarityEdge {
            source: source.into(),
            target: target.into(),
            similarity,
        }
    }

    /// Check if this edge connects two specific labels (in either order)
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_undirected() {
        let edge = SimilarityEdge::new("dog", "cat", 0.7);

        assert!(edge.connects("dog", "cat"));
        assert!(edge.connects("cat", "dog"));
        assert!(!edge.connects("dog", "car"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(SimilarityEdge::new("dog", "cat", 0.5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "source": "dog", "target": "cat", "value": 0.5 })
        );
    }
}
