//! Pairwise comparison of stored documents.
use serde::{Deserialize, Serialize};

use crate::cosine::{cosine_tfidf, CosineResult};
use crate::errors::Result;
use crate::jaccard::{jaccard, JaccardResult};
use crate::normalizer::{shingles, tokenize, SHINGLE_SIZE};
use crate::segment::{compare_segments, MatchingSegment};
use crate::store::ContentProvider;

/// Weight of the near-duplicate score in the final score.
pub const NEAR_DUPLICATE_WEIGHT: f64 = 0.6;

/// Weight of the topic similarity in the final score.
pub const TOPIC_WEIGHT: f64 = 0.4;

/// Request to compare two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Left-side document id.
    pub id1: String,
    /// Right-side document id.
    pub id2: String,
}

/// Scores and diagnostics of comparing two documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResult {
    /// Length of the left-side raw text in bytes.
    pub doc1_text_content_length: usize,
    /// Length of the right-side raw text in bytes.
    pub doc2_text_content_length: usize,
    /// Number of tokens of the left-side document.
    pub doc1_tokens_length: usize,
    /// Number of tokens of the right-side document.
    pub doc2_tokens_length: usize,
    /// Number of shingles of the left-side document.
    pub doc1_shingles_length: usize,
    /// Number of shingles of the right-side document.
    pub doc2_shingles_length: usize,
    /// Jaccard similarity of the shingle sets.
    pub jaccard: JaccardResult,
    /// TF-IDF cosine similarity of the tokens.
    pub cosine: CosineResult,
    /// Equal to `jaccard.score`.
    pub near_duplicate: f64,
    /// Equal to `cosine.score`.
    pub topic_similarity: f64,
    /// Weighted blend of the near-duplicate and topic scores.
    #[serde(rename = "final")]
    pub final_score: f64,
    /// Sentence pairs with a high word overlap.
    pub matching_segments: Vec<MatchingSegment>,
}

/// Blends the two scores into the final score.
#[inline(always)]
pub fn blend_scores(near_duplicate: f64, topic_similarity: f64) -> f64 {
    NEAR_DUPLICATE_WEIGHT * near_duplicate + TOPIC_WEIGHT * topic_similarity
}

/// Compares two raw texts.
pub fn compare_texts(lhs: &str, rhs: &str) -> CompareResult {
    let tokens_a = tokenize(lhs);
    let tokens_b = tokenize(rhs);
    let shingles_a = shingles(&tokens_a, SHINGLE_SIZE);
    let shingles_b = shingles(&tokens_b, SHINGLE_SIZE);

    let jaccard = jaccard(&shingles_a, &shingles_b);
    let cosine = cosine_tfidf(&tokens_a, &tokens_b);
    let near_duplicate = jaccard.score;
    let topic_similarity = cosine.score;
    let final_score = blend_scores(near_duplicate, topic_similarity);

    // Sentences are split on punctuation, so this works on the raw texts.
    let matching_segments = compare_segments(lhs, rhs);

    CompareResult {
        doc1_text_content_length: lhs.len(),
        doc2_text_content_length: rhs.len(),
        doc1_tokens_length: tokens_a.len(),
        doc2_tokens_length: tokens_b.len(),
        doc1_shingles_length: shingles_a.len(),
        doc2_shingles_length: shingles_b.len(),
        jaccard,
        cosine,
        near_duplicate,
        topic_similarity,
        final_score,
        matching_segments,
    }
}

/// Compares and ranks documents served by a [`ContentProvider`].
pub struct Comparator<P> {
    provider: P,
}

impl<P> Comparator<P>
where
    P: ContentProvider,
{
    /// Creates an instance over `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Gets the underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Compares the documents `id1` and `id2`.
    ///
    /// Fails without computing anything if either document does not exist.
    pub fn compare_two(&self, id1: &str, id2: &str) -> Result<CompareResult> {
        let doc1 = self.provider.get(id1)?;
        let doc2 = self.provider.get(id2)?;
        let result = compare_texts(&doc1, &doc2);
        tracing::info!(
            id1,
            id2,
            near_duplicate = result.near_duplicate,
            topic_similarity = result.topic_similarity,
            final_score = result.final_score,
            matching_segments = result.matching_segments.len(),
            "compared documents"
        );
        Ok(result)
    }

    /// Handles a [`CompareRequest`].
    pub fn compare(&self, request: &CompareRequest) -> Result<CompareResult> {
        self.compare_two(&request.id1, &request.id2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical() {
        let text = "the quick brown fox jumps over the lazy dog";
        let r = compare_texts(text, text);
        assert_eq!(r.doc1_text_content_length, 43);
        assert_eq!(r.doc1_tokens_length, 7);
        assert_eq!(r.doc1_shingles_length, 3);
        assert_eq!(r.jaccard.intersection, 3);
        assert_eq!(r.near_duplicate, 1.);
        assert!((r.topic_similarity - 1.).abs() < EPS);
        assert!((r.final_score - 1.).abs() < EPS);
    }

    #[test]
    fn test_disjoint() {
        let r = compare_texts("alpha beta gamma delta epsilon", "uno dos tres cuatro cinco");
        assert_eq!(r.doc1_shingles_length, 1);
        assert_eq!(r.doc2_shingles_length, 1);
        assert_eq!(r.jaccard.intersection, 0);
        assert_eq!(r.jaccard.union, 2);
        assert_eq!(r.near_duplicate, 0.);
        assert_eq!(r.topic_similarity, 0.);
        assert_eq!(r.final_score, 0.);
        assert!(r.matching_segments.is_empty());
    }

    #[test]
    fn test_empty_documents() {
        let r = compare_texts("", "");
        assert_eq!(r.jaccard.score, 1.);
        assert_eq!(r.cosine.score, 0.);
        assert!((r.final_score - 0.6).abs() < EPS);
        assert!(r.matching_segments.is_empty());
    }

    #[test]
    fn test_weights() {
        let r = compare_texts("one two three", "one two four");
        // Fewer than five tokens, so tokens are compared as shingles.
        assert_eq!(r.jaccard.intersection, 2);
        assert_eq!(r.jaccard.union, 4);
        let expected = 0.6 * 0.5 + 0.4 * r.topic_similarity;
        assert!((r.final_score - expected).abs() < EPS);
    }

    #[test]
    fn test_compare_two() {
        let store = MemoryStore::new();
        store.insert("a", "Cats are great pets. Dogs bark loudly.");
        store.insert("b", "Great pets are cats. Something else entirely.");

        let comparator = Comparator::new(&store);
        let r = comparator.compare_two("a", "b").unwrap();
        assert_eq!(r.matching_segments.len(), 1);
        assert_eq!(r.matching_segments[0].text_a, "Cats are great pets");

        let r = comparator
            .compare(&CompareRequest {
                id1: "b".to_string(),
                id2: "a".to_string(),
            })
            .unwrap();
        assert_eq!(r.matching_segments[0].text_a, "Great pets are cats");
    }

    #[test]
    fn test_compare_two_not_found() {
        let store = MemoryStore::new();
        store.insert("a", "text");
        let comparator = Comparator::new(store);
        assert!(comparator.compare_two("a", "missing").unwrap_err().is_not_found());
        assert!(comparator.compare_two("missing", "a").unwrap_err().is_not_found());
    }
}
