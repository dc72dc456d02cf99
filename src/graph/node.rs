//! Node implementation for the similarity graph

use serde::{Deserialize, Serialize};

/// Golden angle in degrees, used to spread node hues around the color wheel
const GOLDEN_ANGLE: f64 = 137.508;

/// A vocabulary item in the similarity graph
///
/// Nodes have:
/// - A unique label (the word)
/// - A stable index (position in the active vocabulary)
///
/// Serializes as `{ "id": label, "idx": index }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    /// The word this node stands for
    #[serde(rename = "id")]
    pub label: String,

    /// Position in the vocabulary. Presentation only.
    #[serde(rename = "idx")]
    pub index: usize,
}

impl GraphNode {
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        GraphNode {
            label: label.into(),
            index,
        }
    }

    /// Hue in degrees [0, 360), distinct for neighboring indices
    pub fn hue(&self) -> f64 {
        (self.index as f64 * GOLDEN_ANGLE) % 360.0
    }
}
