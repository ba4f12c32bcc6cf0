//! Vector math over fixed-length embeddings
//!
//! Pure, synchronous functions; callers are responsible for supplying
//! embeddings of a single dimensionality per ranking operation.

use homematch_common::{HomeMatchError, Result};

use crate::types::Embedding;

/// Compute cosine similarity between two equal-length vectors
///
/// Returns dot(a,b) / (‖a‖·‖b‖) in [-1, 1]. If either magnitude is exactly
/// zero the result is 0 (defined degenerate case, not an error). Vectors of
/// differing length are a usage error.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(HomeMatchError::length_mismatch(a.len(), b.len()));
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Compute the normalized mean of a non-empty set of equal-length embeddings
///
/// Used to combine multiple query embeddings into one representative vector.
/// A zero-magnitude mean is returned as-is (the zero vector) rather than
/// normalized.
pub fn centroid(embeddings: &[Embedding]) -> Result<Embedding> {
    let first = embeddings
        .first()
        .ok_or_else(|| HomeMatchError::empty_input("centroid of zero embeddings"))?;

    let dim = first.len();
    let mut mean = vec![0.0; dim];
    for embedding in embeddings {
        if embedding.len() != dim {
            return Err(HomeMatchError::length_mismatch(dim, embedding.len()));
        }
        for (acc, value) in mean.iter_mut().zip(embedding.iter()) {
            *acc += value;
        }
    }

    let count = embeddings.len() as f64;
    for value in mean.iter_mut() {
        *value /= count;
    }

    let magnitude = mean.iter().map(|v| v * v).sum::<f64>().sqrt();
    if magnitude == 0.0 {
        return Ok(mean);
    }

    for value in mean.iter_mut() {
        *value /= magnitude;
    }

    Ok(mean)
}
