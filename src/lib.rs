//! Semantic Percolation
//!
//! A deterministic simulator of "semantic percolation": synthetic word
//! embeddings are turned into a similarity graph by thresholding pairwise
//! cosine similarity, and the graph is watched for the emergence of a giant
//! connected component.
//!
//! # Pipeline
//!
//! Data flows strictly forward, and every stage is a pure function of its
//! inputs:
//!
//! 1. [`rng::RandomSource`]: seeded mulberry32 stream in [0, 1)
//! 2. [`embed::synthesize_embeddings`]: category-biased unit vectors
//! 3. [`graph::build_similarity_graph`]: exhaustive pairwise cosine similarity
//! 4. [`algo::largest_component_size`]: BFS over an explicit adjacency view
//! 5. [`percolation::PercolationIndicator`]: giant-component ratio >= 0.6
//!
//! ## Example Usage
//!
//! ```rust
//! use semantic_percolation::{
//!     build_similarity_graph, largest_component_size, synthesize_embeddings,
//!     PercolationIndicator,
//! };
//!
//! let labels = ["dog", "cat", "car"];
//! let embeddings = synthesize_embeddings(&labels, 4, 1);
//!
//! let graph = build_similarity_graph(&labels, &embeddings, -2.0).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//!
//! let giant = largest_component_size(&graph).unwrap();
//! assert_eq!(giant, 3);
//! assert!(PercolationIndicator::new(giant, graph.node_count()).is_percolating);
//! ```

pub mod algo;
pub mod config;
pub mod embed;
pub mod error;
pub mod graph;
pub mod percolation;
pub mod rng;
pub mod simulation;
pub mod vector;
pub mod vocabulary;

// Re-export main types for convenience
pub use algo::{component_of, component_sizes, largest_component_size};
pub use config::SimulationConfig;
pub use embed::{categorize, synthesize_embeddings, Embeddings, SemanticCategory};
pub use error::{PercolationError, PercolationResult};
pub use graph::{build_similarity_graph, GraphNode, SimilarityEdge, SimilarityGraph};
pub use percolation::{GraphStats, PercolationIndicator, PERCOLATION_CUTOFF};
pub use rng::RandomSource;
pub use simulation::{
    critical_threshold, threshold_range, Simulation, SimulationReport, SweepPoint, MAX_SWEEP_POINTS,
};
pub use vocabulary::{vocabulary, WORD_CAP};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
