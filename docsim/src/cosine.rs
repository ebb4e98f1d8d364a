//! TF-IDF cosine similarity over a two-document corpus.
use serde::{Deserialize, Serialize};

use crate::tfidf::{Idf, Tf};

/// Intermediate sums and the resulting cosine score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CosineResult {
    /// Dot product of the two weight vectors.
    pub dot: f64,
    /// Squared norm of the left-side vector.
    pub na2: f64,
    /// Squared norm of the right-side vector.
    pub nb2: f64,
    /// `dot / (|a| |b|)`, in `[0,1]`; `0` if either vector is zero.
    pub score: f64,
}

/// Computes the cosine similarity of two token sequences weighted by TF-IDF,
/// where the corpus consists of exactly these two documents.
///
/// A term's weight in a document is its raw count times `1 + ln(2 / df)`,
/// so terms shared by both sides weigh `1` and terms unique to one side
/// weigh `1 + ln 2`.
pub fn cosine_tfidf<S>(lhs: &[S], rhs: &[S]) -> CosineResult
where
    S: AsRef<str>,
{
    let tf_a = Tf::from_terms(lhs.iter().map(AsRef::as_ref));
    let tf_b = Tf::from_terms(rhs.iter().map(AsRef::as_ref));

    let mut idf = Idf::new();
    idf.add(tf_a.terms());
    idf.add(tf_b.terms());

    // Accumulated in sorted term order.
    let mut terms: Vec<&str> = tf_a.terms().chain(tf_b.terms()).collect();
    terms.sort_unstable();
    terms.dedup();

    let (mut dot, mut na2, mut nb2) = (0f64, 0f64, 0f64);
    for &term in &terms {
        let weight = idf.idf(term);
        let wa = tf_a.tf(term) as f64 * weight;
        let wb = tf_b.tf(term) as f64 * weight;
        dot += wa * wb;
        na2 += wa * wa;
        nb2 += wb * wb;
    }

    let score = if na2 > 0. && nb2 > 0. {
        (dot / (na2.sqrt() * nb2.sqrt())).min(1.)
    } else {
        0.
    };
    tracing::debug!(
        lhs = lhs.len(),
        rhs = rhs.len(),
        lhs_terms = tf_a.len(),
        rhs_terms = tf_b.len(),
        docs = idf.num_docs(),
        dot,
        na2,
        nb2,
        score,
        "cosine_tfidf"
    );
    CosineResult {
        dot,
        na2,
        nb2,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_self_similarity() {
        let t = vec!["quick", "brown", "fox", "quick", "dog"];
        let r = cosine_tfidf(&t, &t);
        assert!((r.score - 1.).abs() < EPS);
        assert_eq!(r.na2, r.nb2);
        assert!(r.score <= 1.);
    }

    #[test]
    fn test_disjoint() {
        let a = vec!["alpha", "beta"];
        let b = vec!["uno", "dos"];
        let r = cosine_tfidf(&a, &b);
        assert_eq!(r.dot, 0.);
        assert_eq!(r.score, 0.);
        let w = 1. + 2f64.ln();
        assert!((r.na2 - 2. * w * w).abs() < EPS);
        assert!((r.nb2 - 2. * w * w).abs() < EPS);
    }

    #[test]
    fn test_weights() {
        // "a" is shared (idf 1), "b" and "c" are unique (idf 1 + ln 2).
        let a = vec!["a", "a", "b"];
        let b = vec!["a", "c"];
        let r = cosine_tfidf(&a, &b);
        let w = 1. + 2f64.ln();
        assert!((r.dot - 2.).abs() < EPS);
        assert!((r.na2 - (4. + w * w)).abs() < EPS);
        assert!((r.nb2 - (1. + w * w)).abs() < EPS);
        let expected = 2. / ((4. + w * w).sqrt() * (1. + w * w).sqrt());
        assert!((r.score - expected).abs() < EPS);
    }

    #[test]
    fn test_symmetric() {
        let a = vec!["red", "green", "blue", "green"];
        let b = vec!["green", "yellow", "blue"];
        let ab = cosine_tfidf(&a, &b);
        let ba = cosine_tfidf(&b, &a);
        assert!((ab.score - ba.score).abs() < EPS);
        assert_eq!(ab.na2, ba.nb2);
        assert_eq!(ab.nb2, ba.na2);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<&str> = vec![];
        let some = vec!["word"];
        assert_eq!(cosine_tfidf(&empty, &empty).score, 0.);
        assert_eq!(cosine_tfidf(&empty, &some).score, 0.);
        assert_eq!(cosine_tfidf(&some, &empty).score, 0.);
    }
}
