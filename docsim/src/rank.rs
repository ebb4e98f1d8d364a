//! Ranking a document's neighbors by final score.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compare::{CompareResult, Comparator};
use crate::errors::Result;
use crate::store::ContentProvider;

/// Number of results returned when no valid `top_k` is given.
pub const DEFAULT_TOP_K: usize = 10;

/// Largest accepted `top_k`.
pub const MAX_TOP_K: usize = 100;

/// Request to rank the neighbors of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    /// Document whose neighbors are ranked.
    pub target_id: String,
    /// Maximum number of results; see [`resolve_top_k`].
    ///
    /// Values that are not integers in the `i64` range read as `None`.
    #[serde(default, deserialize_with = "lenient_top_k")]
    pub top_k: Option<i64>,
}

fn lenient_top_k<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_i64))
}

/// A candidate and its scores against the target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// Candidate document id.
    pub id: String,
    /// Final score against the target.
    #[serde(rename = "final")]
    pub final_score: f64,
    /// Near-duplicate score against the target.
    pub near_duplicate: f64,
    /// Topic similarity against the target.
    pub topic_similarity: f64,
}

impl RankedCandidate {
    fn new(id: String, result: &CompareResult) -> Self {
        Self {
            id,
            final_score: result.final_score,
            near_duplicate: result.near_duplicate,
            topic_similarity: result.topic_similarity,
        }
    }
}

/// A ranked candidate with scores in whole percents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRow {
    /// Candidate document id.
    pub id: String,
    /// Final score in percent.
    pub final_percent: u32,
    /// Near-duplicate score in percent.
    pub near_duplicate_percent: u32,
    /// Topic similarity in percent.
    pub topic_similarity_percent: u32,
}

impl From<&RankedCandidate> for RankRow {
    fn from(c: &RankedCandidate) -> Self {
        Self {
            id: c.id.clone(),
            final_percent: to_percent(c.final_score),
            near_duplicate_percent: to_percent(c.near_duplicate),
            topic_similarity_percent: to_percent(c.topic_similarity),
        }
    }
}

/// Converts a score in `[0,1]` to a percentage, rounding halves up.
#[inline(always)]
pub fn to_percent(score: f64) -> u32 {
    (score * 100. + 0.5).floor() as u32
}

/// Resolves the requested number of results.
///
/// Values in `[1, MAX_TOP_K]` are used as they are; anything else, including `None`,
/// falls back to [`DEFAULT_TOP_K`].
pub fn resolve_top_k(top_k: Option<i64>) -> usize {
    match top_k {
        Some(k) if (1..=MAX_TOP_K as i64).contains(&k) => k as usize,
        _ => DEFAULT_TOP_K,
    }
}

/// Sorts candidates by final score in descending order and keeps the first `top_k`.
///
/// Equal scores are ordered by id so that the output does not depend on the
/// order in which candidates were scored.
pub fn sort_and_truncate(candidates: &mut Vec<RankedCandidate>, top_k: usize) {
    candidates.sort_unstable_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| a.id.cmp(&b.id))
    });
    candidates.truncate(top_k);
}

impl<P> Comparator<P>
where
    P: ContentProvider,
{
    fn score_candidate(&self, target: &str, candidate: &str) -> Option<RankedCandidate> {
        if candidate == target {
            return None;
        }
        match self.compare_two(target, candidate) {
            Ok(result) => Some(RankedCandidate::new(candidate.to_string(), &result)),
            Err(e) => {
                tracing::debug!(target_id = target, candidate, error = %e, "skipped candidate");
                None
            }
        }
    }

    /// Ranks `candidates` by their final score against `target`.
    ///
    /// The target itself and candidates that fail to compare (e.g., no longer exist)
    /// are skipped, so fewer than `top_k` results may be returned.
    pub fn rank_similar<I, S>(
        &self,
        target: &str,
        candidates: I,
        top_k: Option<i64>,
    ) -> Vec<RankedCandidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let top_k = resolve_top_k(top_k);
        let mut ranked: Vec<_> = candidates
            .into_iter()
            .filter_map(|c| self.score_candidate(target, c.as_ref()))
            .collect();
        let num_scored = ranked.len();
        sort_and_truncate(&mut ranked, top_k);
        tracing::info!(target_id = target, num_scored, top_k, "ranked candidates");
        ranked
    }

    /// Parallel version of [`Self::rank_similar`] on the rayon thread pool.
    ///
    /// The output is identical to the sequential version.
    pub fn rank_similar_in_parallel<I, S>(
        &self,
        target: &str,
        candidates: I,
        top_k: Option<i64>,
    ) -> Vec<RankedCandidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Send + Sync,
    {
        let top_k = resolve_top_k(top_k);
        let candidates: Vec<S> = candidates.into_iter().collect();
        let mut ranked: Vec<_> = candidates
            .par_iter()
            .filter_map(|c| self.score_candidate(target, c.as_ref()))
            .collect();
        let num_scored = ranked.len();
        sort_and_truncate(&mut ranked, top_k);
        tracing::info!(
            target_id = target,
            num_scored,
            top_k,
            "ranked candidates in parallel"
        );
        ranked
    }

    /// Ranks every document of the provider against `target`.
    ///
    /// Fails only if the provider cannot list its documents.
    pub fn rank_against_all(
        &self,
        target: &str,
        top_k: Option<i64>,
    ) -> Result<Vec<RankedCandidate>> {
        let ids = self.provider().ids()?;
        Ok(self.rank_similar(target, ids, top_k))
    }

    /// Parallel version of [`Self::rank_against_all`].
    pub fn rank_against_all_in_parallel(
        &self,
        target: &str,
        top_k: Option<i64>,
    ) -> Result<Vec<RankedCandidate>> {
        let ids = self.provider().ids()?;
        Ok(self.rank_similar_in_parallel(target, ids, top_k))
    }

    /// Handles a [`RankRequest`] against every document of the provider.
    pub fn rank(&self, request: &RankRequest) -> Result<Vec<RankRow>> {
        let ranked = self.rank_against_all_in_parallel(&request.target_id, request.top_k)?;
        Ok(ranked.iter().map(RankRow::from).collect())
    }
}
