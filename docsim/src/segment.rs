//! Sentence-level matching between two raw texts.
use serde::{Deserialize, Serialize};

use crate::jaccard::jaccard;

/// Word-level Jaccard score a sentence pair must exceed to be reported.
pub const SEGMENT_THRESHOLD: f64 = 0.5;

/// A pair of sentences, one from each document, with their word-level Jaccard score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSegment {
    /// Sentence from the left-side document.
    pub text_a: String,
    /// Sentence from the right-side document.
    pub text_b: String,
    /// Jaccard score of the lowercased word sets.
    pub score: f64,
}

/// Splits raw text into trimmed, non-empty sentences ending at `.`, `!`, or `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn words(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Reports every sentence pair across the two texts whose word sets overlap
/// by more than [`SEGMENT_THRESHOLD`].
///
/// The texts must be raw, not normalized, since normalization strips the punctuation
/// sentences are split on. All pairs are tried, so a sentence may appear in several
/// matches. Matches are ordered by the position of the left sentence, then the right.
pub fn compare_segments(lhs: &str, rhs: &str) -> Vec<MatchingSegment> {
    let segments_a: Vec<_> = sentences(lhs).into_iter().map(|s| (s, words(s))).collect();
    let segments_b: Vec<_> = sentences(rhs).into_iter().map(|s| (s, words(s))).collect();

    let mut matches = vec![];
    for (seg_a, words_a) in &segments_a {
        for (seg_b, words_b) in &segments_b {
            let score = jaccard(words_a, words_b).score;
            if score > SEGMENT_THRESHOLD {
                matches.push(MatchingSegment {
                    text_a: seg_a.to_string(),
                    text_b: seg_b.to_string(),
                    score,
                });
            }
        }
    }
    tracing::debug!(
        lhs = segments_a.len(),
        rhs = segments_b.len(),
        matches = matches.len(),
        "compare_segments"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences() {
        assert_eq!(
            sentences("One. Two!Three?  Four...  "),
            vec!["One", "Two", "Three", "Four"]
        );
        assert_eq!(sentences("no terminator"), vec!["no terminator"]);
        assert!(sentences("").is_empty());
        assert!(sentences(" . ! ? ").is_empty());
    }

    #[test]
    fn test_compare_segments() {
        let a = "Cats are great pets. Dogs bark loudly.";
        let b = "Great pets are cats. Something else entirely.";
        let matches = compare_segments(a, b);
        assert_eq!(
            matches,
            vec![MatchingSegment {
                text_a: "Cats are great pets".to_string(),
                text_b: "Great pets are cats".to_string(),
                score: 1.,
            }]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // {a, b, c} vs {a, b, d}: 2 / 4 = 0.5, not reported.
        assert!(compare_segments("a b c.", "a b d.").is_empty());
        // {a, b, c, d} vs {a, b, c, e}: 3 / 5 = 0.6, reported.
        let matches = compare_segments("a b c d.", "a b c e.");
        assert_eq!(matches.len(), 1);
        assert!((matches[0].score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_all_pairs_without_dedup() {
        let a = "The same line. The same line.";
        let b = "the same line!";
        let matches = compare_segments(a, b);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.score == 1.));
    }

    #[test]
    fn test_punctuation_inside_words_counts() {
        // Commas stay attached to words, so these differ.
        assert!(compare_segments("red, green", "red green").is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(compare_segments("", "").is_empty());
        assert!(compare_segments("Some text.", "").is_empty());
    }

    #[test]
    fn test_serialize() {
        let m = MatchingSegment {
            text_a: "x".to_string(),
            text_b: "y".to_string(),
            score: 0.75,
        };
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"textA":"x","textB":"y","score":0.75}"#
        );
    }
}
