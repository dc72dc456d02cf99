//! Graph algorithms module
//!
//! Component analysis is implemented in the `percolation-graph-algorithms`
//! crate. This module provides the integration/adapter layer: it turns a
//! label-keyed [`SimilarityGraph`] into a dense, index-keyed [`GraphView`]
//! before any traversal runs.

use crate::error::{PercolationError, PercolationResult};
use crate::graph::SimilarityGraph;
use percolation_graph_algorithms::GraphView;
use std::collections::HashMap;

// Re-export algorithms
pub use percolation_graph_algorithms::{
    bfs_component, weakly_connected_components, WccResult,
};

/// Build a GraphView from the similarity graph for algorithm execution
///
/// Node `i` of the view is the `i`-th node of the graph, whatever its
/// display index. Every edge contributes both directions.
pub fn build_view(graph: &SimilarityGraph) -> PercolationResult<GraphView> {
    let node_to_index: HashMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.label.as_str(), idx))
        .collect();

    let resolve = |label: &str| {
        node_to_index
            .get(label)
            .copied()
            .ok_or_else(|| PercolationError::UnknownEdgeEndpoint(label.to_string()))
    };

    let edges = graph
        .edges
        .iter()
        .map(|edge| -> PercolationResult<(usize, usize)> {
            Ok((resolve(edge.source.as_str())?, resolve(edge.target.as_str())?))
        })
        .collect::<PercolationResult<Vec<_>>>()?;

    Ok(GraphView::from_edges(graph.node_count(), &edges))
}

/// Size of the largest connected component (0 for an empty graph)
pub fn largest_component_size(graph: &SimilarityGraph) -> PercolationResult<usize> {
    let view = build_view(graph)?;
    Ok(percolation_graph_algorithms::largest_component_size(&view))
}

/// Sizes of all connected components, largest first
pub fn component_sizes(graph: &SimilarityGraph) -> PercolationResult<Vec<usize>> {
    let view = build_view(graph)?;
    Ok(weakly_connected_components(&view).sizes())
}

/// Labels in the same component as `label`, in BFS order starting at `label`
///
/// Returns `Ok(None)` when `label` is not a node of the graph.
pub fn component_of(graph: &SimilarityGraph, label: &str) -> PercolationResult<Option<Vec<String>>> {
    let Some(position) = graph.nodes.iter().position(|n| n.label == label) else {
        return Ok(None);
    };

    let view = build_view(graph)?;
    let members = bfs_component(&view, position).map(|order| {
        order
            .into_iter()
            .map(|idx| graph.nodes[idx].label.clone())
            .collect()
    });

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphNode, SimilarityEdge};

    fn graph(labels: &[&str], edges: &[(&str, &str)]) -> SimilarityGraph {
        SimilarityGraph {
            nodes: labels
                .iter()
                .enumerate()
                .map(|(i, l)| GraphNode::new(*l, i))
                .collect(),
            edges: edges
                .iter()
                .map(|(s, t)| SimilarityEdge::new(*s, *t, 1.0))
                .collect(),
        }
    }

    #[test]
    fn test_build_view() {
        let g = graph(&["a", "b", "c"], &[("a", "c")]);
        let view = build_view(&g).unwrap();

        assert_eq!(view.node_count, 3);
        assert_eq!(view.neighbors(0), &[2]);
        assert_eq!(view.neighbors(2), &[0]);
        assert!(view.neighbors(1).is_empty());
    }

    #[test]
    fn test_largest_component_size() {
        let g = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("d", "e")],
        );
        assert_eq!(largest_component_size(&g).unwrap(), 3);
        assert_eq!(component_sizes(&g).unwrap(), vec![3, 2]);
    }

    #[test]
    fn test_isolated_nodes() {
        let g = graph(&["a", "b", "c"], &[]);
        assert_eq!(largest_component_size(&g).unwrap(), 1);
        assert_eq!(component_sizes(&g).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_graph() {
        let g = SimilarityGraph::default();
        assert_eq!(largest_component_size(&g).unwrap(), 0);
        assert!(component_sizes(&g).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_endpoint() {
        let g = graph(&["a", "b"], &[("a", "zzz")]);
        let err = largest_component_size(&g).unwrap_err();
        assert!(matches!(err, PercolationError::UnknownEdgeEndpoint(ref l) if l == "zzz"));
    }

    #[test]
    fn test_component_of() {
        let g = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c")]);

        let members = component_of(&g, "c").unwrap().unwrap();
        assert_eq!(members[0], "c");
        assert_eq!(members.len(), 3);

        assert_eq!(component_of(&g, "d").unwrap(), Some(vec!["d".to_string()]));
        assert_eq!(component_of(&g, "nope").unwrap(), None);
    }

    #[test]
    fn test_component_of_ignores_display_index() {
        // Display indices need not match node positions
        let g = SimilarityGraph {
            nodes: vec![
                GraphNode::new("a", 10),
                GraphNode::new("b", 11),
                GraphNode::new("c", 1),
            ],
            edges: vec![SimilarityEdge::new("a", "b", 0.9)],
        };

        assert_eq!(
            component_of(&g, "a").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(component_of(&g, "c").unwrap(), Some(vec!["c".to_string()]));
        assert_eq!(largest_component_size(&g).unwrap(), 2);
    }
}
