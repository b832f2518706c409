//! Fixed ranking pipeline: score, normalize, select.
//!
//! The pipeline is a plain ordered list of stage functions over one
//! [`RankState`]. There is no branching and no retry; an empty candidate
//! batch flows through every stage and yields an empty result.

use serde::{Deserialize, Serialize};
use titlefit_core::{
    Candidate, ChannelProfile, ProfileSet, ScoredCandidate, ScoringWeights, Suggestion,
};

use crate::error::RankError;
use crate::normalize::normalize_scores;
use crate::scorer::score_title;
use crate::select::select_top;

/// State threaded through the stages of one ranking run.
#[derive(Debug, Clone)]
pub struct RankState<'a> {
    pub profile: &'a ChannelProfile,
    pub weights: &'a ScoringWeights,
    pub candidates: Vec<ScoredCandidate>,
    pub requested: usize,
}

/// One pipeline stage.
pub type Stage = for<'a> fn(RankState<'a>) -> RankState<'a>;

/// The stages in execution order.
pub const STAGES: [(&str, Stage); 3] = [
    ("score", score_stage),
    ("normalize", normalize_stage),
    ("select", select_stage),
];

fn score_stage(mut state: RankState<'_>) -> RankState<'_> {
    for candidate in &mut state.candidates {
        candidate.score = score_title(&candidate.candidate.title, state.profile, state.weights);
    }
    state
}

fn normalize_stage(mut state: RankState<'_>) -> RankState<'_> {
    state.candidates = normalize_scores(std::mem::take(&mut state.candidates));
    state
}

fn select_stage(mut state: RankState<'_>) -> RankState<'_> {
    state.candidates = select_top(std::mem::take(&mut state.candidates), state.requested);
    state
}

/// Run every stage over `state` and strip scores from the survivors.
#[must_use]
pub fn run_pipeline(state: RankState<'_>) -> Vec<Suggestion> {
    let state = STAGES.iter().fold(state, |state, (name, stage)| {
        let state = stage(state);
        tracing::debug!(
            stage = *name,
            candidates = state.candidates.len(),
            "ranking stage done"
        );
        state
    });
    state.candidates.into_iter().map(Suggestion::from).collect()
}

/// Rank `candidates` for `profile` and keep the best `requested`.
#[must_use]
pub fn rank_candidates(
    profile: &ChannelProfile,
    candidates: Vec<Candidate>,
    requested: usize,
    weights: &ScoringWeights,
) -> Vec<Suggestion> {
    let candidates = candidates
        .into_iter()
        .map(|candidate| ScoredCandidate {
            candidate,
            score: 0.0,
        })
        .collect();
    run_pipeline(RankState {
        profile,
        weights,
        candidates,
        requested,
    })
}

/// A ranking request for an already generated candidate batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRequest {
    pub channel_id: String,
    #[serde(default)]
    pub summary: String,
    pub requested_count: usize,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Resolve the request's channel in `profiles` and rank its candidates.
///
/// # Errors
///
/// Returns [`RankError::UnknownChannel`] if the channel has no profile and
/// [`RankError::InvalidInput`] if `requested_count` is zero.
pub fn rank_request(
    profiles: &ProfileSet,
    request: &RankRequest,
    weights: &ScoringWeights,
) -> Result<Vec<Suggestion>, RankError> {
    let profile = resolve_profile(profiles, &request.channel_id, request.requested_count)?;
    let suggestions = rank_candidates(
        profile,
        request.candidates.clone(),
        request.requested_count,
        weights,
    );
    tracing::info!(
        channel = %request.channel_id,
        candidates = request.candidates.len(),
        selected = suggestions.len(),
        "ranked candidates"
    );
    Ok(suggestions)
}

pub(crate) fn resolve_profile<'a>(
    profiles: &'a ProfileSet,
    channel_id: &str,
    requested_count: usize,
) -> Result<&'a ChannelProfile, RankError> {
    if requested_count == 0 {
        return Err(RankError::InvalidInput(
            "requested_count must be at least 1".to_string(),
        ));
    }
    profiles
        .get(channel_id)
        .ok_or_else(|| RankError::UnknownChannel(channel_id.to_string()))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
