//! Vector math for synthetic embeddings
//!
//! This module provides the similarity primitives used when
//! building the similarity graph.

pub mod similarity;

pub use similarity::{cosine_similarity, dot, norm, normalize};
