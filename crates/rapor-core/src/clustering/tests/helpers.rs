//! Helper functions for creating test data (REAL data, NO mocks).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::{FeatureVector, Period, StudentId};

pub fn period() -> Period {
    Period::new("Ganjil", "2024/2025").unwrap()
}

/// Deterministic RNG for reproducible runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// One-dimensional vectors (averaged-score mode), student ids 1..=n.
pub fn one_d(scores: &[f64]) -> Vec<FeatureVector> {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| FeatureVector::new(StudentId(i as u64 + 1), period(), vec![*s]))
        .collect()
}

/// Multi-dimensional vectors, student ids 1..=n.
pub fn vectors(rows: &[&[f64]]) -> Vec<FeatureVector> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| FeatureVector::new(StudentId(i as u64 + 1), period(), r.to_vec()))
        .collect()
}

/// Three well separated groups of five students over four subjects.
pub fn create_clustered_vectors() -> Vec<FeatureVector> {
    let mut out = Vec::new();
    let mut id = 1u64;
    for base in [30.0, 60.0, 90.0] {
        for i in 0..5 {
            let values = (0..4).map(|s| base + i as f64 + s as f64 * 0.5).collect();
            out.push(FeatureVector::new(StudentId(id), period(), values));
            id += 1;
        }
    }
    out
}
