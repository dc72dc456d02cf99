//! Dense vector arithmetic
//!
//! Dot products, norms, normalization and cosine similarity over `f64` slices.

/// Dot product of two equal-length vectors
pub fn dot(va: &[f64], vb: &[f64]) -> f64 {
    va.iter().zip(vb.iter()).map(|(a, b)| a * b).sum()
}

/// Euclidean (L2) norm
pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length in place.
///
/// A zero vector is left unchanged: its divisor is taken as 1.
pub fn normalize(v: &mut [f64]) {
    let mut n = norm(v);
    if n == 0.0 {
        n = 1.0;
    }
    for x in v.iter_mut() {
        *x /= n;
    }
}

/// Cosine similarity in [-1, 1].
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(va: &[f64], vb: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in va.iter().zip(vb.iter()) {
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b).sqrt()
}
