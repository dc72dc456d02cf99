//! Synthetic embedding generation
//!
//! Each word is embedded as a noisy perturbation of the center of its
//! semantic category, so words of the same category drift closer together.
//! The whole process is driven by a single seeded [`RandomSource`].

pub mod category;

use crate::rng::RandomSource;
use crate::vector::normalize;
use indexmap::IndexMap;
use tracing::debug;

pub use category::{categorize, SemanticCategory, CATEGORY_COUNT};

/// Scale of the per-word noise vector
pub const NOISE_SCALE: f64 = 0.35;
/// Weight of the category center in each raw vector
pub const CENTER_WEIGHT: f64 = 0.8;
/// Scale of the secondary per-component jitter
pub const JITTER_SCALE: f64 = 0.05;

/// Label -> unit vector, in vocabulary order
pub type Embeddings = IndexMap<String, Vec<f64>>;

/// Generate one random unit center per semantic category
fn category_centers(rng: &mut RandomSource, dimension: usize) -> Vec<Vec<f64>> {
    (0..CATEGORY_COUNT)
        .map(|_| {
            let mut center: Vec<f64> = (0..dimension).map(|_| rng.next_signed()).collect();
            normalize(&mut center);
            center
        })
        .collect()
}

/// Synthesize a unit-norm embedding for every label.
///
/// Deterministic for a given `(labels, dimension, seed)`. For each label the
/// noise components are drawn first, then one jitter draw per component while
/// mixing in the category center. A repeated label is overwritten by its last
/// occurrence.
pub fn synthesize_embeddings<S: AsRef<str>>(
    labels: &[S],
    dimension: usize,
    seed: i64,
) -> Embeddings {
    let mut rng = RandomSource::new(seed);
    let centers = category_centers(&mut rng, dimension);

    let mut embeddings = Embeddings::with_capacity(labels.len());
    for label in labels {
        let label = label.as_ref();
        let center = &centers[categorize(label).index()];

        let noise: Vec<f64> = (0..dimension)
            .map(|_| rng.next_signed() * NOISE_SCALE)
            .collect();

        let mut vector: Vec<f64> = noise
            .iter()
            .zip(center.iter())
            .map(|(n, c)| n + c * CENTER_WEIGHT + rng.next_signed() * JITTER_SCALE)
            .collect();
        normalize(&mut vector);

        embeddings.insert(label.to_string(), vector);
    }

    debug!(
        "Synthesized {} embeddings (dimension {}, seed {})",
        embeddings.len(),
        dimension,
        seed
    );

    embeddings
}
