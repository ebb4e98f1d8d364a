//! Pairwise document similarity for near-duplicate and plagiarism detection.
//!
//! A pair of documents is scored two ways: Jaccard overlap of their
//! 5-token shingles (copy-paste style overlap) and TF-IDF cosine of their
//! token multisets (shared vocabulary). The two are blended into a final
//! score, and sentences that match across the documents are reported.
//!
//! ```
//! use docsim::{Comparator, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.insert("a", "The quick brown fox jumps over the lazy dog.");
//! store.insert("b", "The quick brown fox jumps over the lazy dog.");
//!
//! let result = Comparator::new(&store).compare_two("a", "b").unwrap();
//! assert_eq!(result.near_duplicate, 1.0);
//! ```
#![deny(missing_docs)]

pub mod compare;
pub mod cosine;
pub mod errors;
pub mod jaccard;
pub mod normalizer;
pub mod rank;
pub mod segment;
pub mod store;
pub mod tfidf;

pub(crate) mod shingling;

pub use compare::{compare_texts, CompareRequest, CompareResult, Comparator};
pub use cosine::{cosine_tfidf, CosineResult};
pub use errors::{DocsimError, Result};
pub use jaccard::{jaccard, JaccardResult};
pub use rank::{RankRequest, RankRow, RankedCandidate};
pub use segment::{compare_segments, MatchingSegment};
pub use store::{ContentProvider, MemoryStore, TextDirectory};
