//! Jaccard similarity over sets of shingles or words.
use std::hash::Hash;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// Overlap of two sets, `|A∩B| / |A∪B|`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JaccardResult {
    /// Number of distinct items in both sets.
    pub intersection: usize,
    /// Number of distinct items in either set.
    pub union: usize,
    /// `intersection / union`, in `[0,1]`.
    pub score: f64,
}

/// Computes the Jaccard similarity of two item sequences, treating each as a set.
///
/// Two empty inputs are considered identical and score `1.0`.
pub fn jaccard<I, T>(lhs: I, rhs: I) -> JaccardResult
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    if a.is_empty() && b.is_empty() {
        tracing::debug!("jaccard: both sets empty");
        return JaccardResult {
            intersection: 0,
            union: 0,
            score: 1.,
        };
    }

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return JaccardResult {
            intersection,
            union,
            score: 0.,
        };
    }
    let score = intersection as f64 / union as f64;
    tracing::debug!(
        lhs = a.len(),
        rhs = b.len(),
        intersection,
        union,
        score,
        "jaccard"
    );
    JaccardResult {
        intersection,
        union,
        score,
    }
}
