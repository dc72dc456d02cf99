//! Similarity graph construction
//!
//! Exhaustive pairwise comparison: every unordered pair of labels is scored by
//! cosine similarity and kept as an edge when it reaches the threshold.

use super::{GraphNode, SimilarityEdge, SimilarityGraph};
use crate::embed::Embeddings;
use crate::error::{PercolationError, PercolationResult};
use crate::vector::cosine_similarity;
use std::collections::HashSet;
use tracing::debug;

/// Resolve each label to its vector, checking the caller's contract
fn resolve_vectors<'a, S: AsRef<str>>(
    labels: &[S],
    embeddings: &'a Embeddings,
) -> PercolationResult<Vec<&'a [f64]>> {
    let mut seen = HashSet::with_capacity(labels.len());
    let mut vectors = Vec::with_capacity(labels.len());
    let mut dimension = None;

    for label in labels {
        let label = label.as_ref();
        if !seen.insert(label) {
            return Err(PercolationError::DuplicateLabel(label.to_string()));
        }

        let vector = embeddings
            .get(label)
            .ok_or_else(|| PercolationError::MissingEmbedding(label.to_string()))?;

        match dimension {
            None => dimension = Some(vector.len()),
            Some(expected) if expected != vector.len() => {
                return Err(PercolationError::DimensionMismatch {
                    label: label.to_string(),
                    expected,
                    got: vector.len(),
                });
            }
            Some(_) => {}
        }

        vectors.push(vector.as_slice());
    }

    Ok(vectors)
}

/// Build the similarity graph for `labels`.
///
/// Nodes keep the input order. For every pair `i < j` an edge is emitted when
/// the cosine similarity is `>= threshold`; the threshold is not clamped.
/// Every label must be unique and have an embedding of a common dimension.
pub fn build_similarity_graph<S: AsRef<str>>(
    labels: &[S],
    embeddings: &Embeddings,
    threshold: f64,
) -> PercolationResult<SimilarityGraph> {
    let vectors = resolve_vectors(labels, embeddings)?;

    let nodes: Vec<GraphNode> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| GraphNode::new(label.as_ref(), index))
        .collect();

    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let similarity = cosine_similarity(vectors[i], vectors[j]);
            if similarity >= threshold {
                edges.push(SimilarityEdge::new(
                    nodes[i].label.as_str(),
                    nodes[j].label.as_str(),
                    similarity,
                ));
            }
        }
    }

    debug!(
        "Built similarity graph: {} nodes, {} edges at threshold {}",
        nodes.len(),
        edges.len(),
        threshold
    );

    Ok(SimilarityGraph { nodes, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::synthesize_embeddings;
    use std::collections::HashSet;

    fn embeddings_of(pairs: &[(&str, Vec<f64>)]) -> Embeddings {
        pairs
            .iter()
            .map(|(label, v)| (label.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_complete_graph_at_low_threshold() {
        let labels = ["dog", "cat", "car"];
        let embeddings = synthesize_embeddings(&labels, 4, 1);

        let graph = build_similarity_graph(&labels, &embeddings, -2.0).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.edges[0].connects("dog", "cat"));
        assert!(graph.edges[1].connects("dog", "car"));
        assert!(graph.edges[2].connects("cat", "car"));
    }

    #[test]
    fn test_no_edges_above_one() {
        let labels = ["dog", "cat", "car"];
        let embeddings = synthesize_embeddings(&labels, 4, 1);

        let graph = build_similarity_graph(&labels, &embeddings, 1.0 + 1e-9).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let embeddings = embeddings_of(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![1.0, 0.0]),
            ("c", vec![0.0, 1.0]),
        ]);

        let graph = build_similarity_graph(&["a", "b", "c"], &embeddings, 1.0).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].similarity, 1.0);

        let graph = build_similarity_graph(&["a", "b", "c"], &embeddings, 0.0).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_edge_invariants() {
        let labels = crate::vocabulary::vocabulary(80);
        let embeddings = synthesize_embeddings(&labels, 16, 42);
        let threshold = 0.3;

        let graph = build_similarity_graph(&labels, &embeddings, threshold).unwrap();

        let mut pairs = HashSet::new();
        for edge in &graph.edges {
            assert!(edge.similarity >= threshold);
            assert_ne!(edge.source, edge.target);
            let key = if edge.source < edge.target {
                (edge.source.clone(), edge.target.clone())
            } else {
                (edge.target.clone(), edge.source.clone())
            };
            assert!(pairs.insert(key), "duplicate edge {:?}", edge);
        }
    }

    #[test]
    fn test_nodes_keep_input_order() {
        let labels = ["zebra", "apple", "mommy"];
        let embeddings = synthesize_embeddings(&labels, 4, 9);
        let graph = build_similarity_graph(&labels, &embeddings, 0.5).unwrap();

        for (i, node) in graph.nodes.iter().enumerate() {
            assert_eq!(node.index, i);
            assert_eq!(node.label, labels[i]);
        }
    }

    #[test]
    fn test_zero_vector_never_connects() {
        let embeddings = embeddings_of(&[("a", vec![0.0, 0.0]), ("b", vec![1.0, 0.0])]);

        let graph = build_similarity_graph(&["a", "b"], &embeddings, 0.0).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].similarity, 0.0);

        let graph = build_similarity_graph(&["a", "b"], &embeddings, 0.1).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_labels() {
        let labels: Vec<String> = Vec::new();
        let graph = build_similarity_graph(&labels, &Embeddings::new(), 0.3).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_embedding() {
        let embeddings = synthesize_embeddings(&["dog"], 4, 1);
        let err = build_similarity_graph(&["dog", "cat"], &embeddings, 0.3).unwrap_err();
        assert!(matches!(err, PercolationError::MissingEmbedding(ref l) if l == "cat"));
    }

    #[test]
    fn test_duplicate_label() {
        let embeddings = synthesize_embeddings(&["dog"], 4, 1);
        let err = build_similarity_graph(&["dog", "dog"], &embeddings, 0.3).unwrap_err();
        assert!(matches!(err, PercolationError::DuplicateLabel(ref l) if l == "dog"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let embeddings = embeddings_of(&[("a", vec![1.0, 0.0]), ("b", vec![1.0, 0.0, 0.0])]);
        let err = build_similarity_graph(&["a", "b"], &embeddings, 0.3).unwrap_err();
        assert!(matches!(
            err,
            PercolationError::DimensionMismatch { expected: 2, got: 3, .. }
        ));
    }
}
