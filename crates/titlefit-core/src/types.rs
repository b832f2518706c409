use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the historical dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalRecord {
    pub channel_id: String,
    pub title: String,
    /// Observed popularity (views in the sampling period). Finite and non-negative.
    pub popularity_metric: f64,
}

impl HistoricalRecord {
    pub fn new(
        channel_id: impl Into<String>,
        title: impl Into<String>,
        popularity_metric: f64,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            title: title.into(),
            popularity_metric,
        }
    }
}

/// A frequent first word of a channel's titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opener {
    pub word: String,
    /// Share of style-cohort titles opening with `word`, in `[0, 1]`.
    pub rate: f64,
}

/// Aggregate style statistics and keyword lists for one channel.
///
/// Built once per profile run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub num_items: usize,
    pub mean_metric: f64,
    pub median_metric: f64,
    pub avg_title_words: f64,
    pub avg_title_chars: f64,
    pub number_rate: f64,
    pub question_rate: f64,
    pub exclamation_rate: f64,
    pub colon_rate: f64,
    pub top_openers: Vec<Opener>,
    /// Most high-cohort-skewed tokens first.
    pub top_keywords: Vec<String>,
    /// Tail of the same ratio ordering: the most low-cohort-skewed tokens.
    pub low_keywords: Vec<String>,
    /// 75th-percentile popularity threshold separating the cohorts.
    #[serde(default)]
    pub metric_threshold: f64,
    /// Number of records at or above `metric_threshold`.
    #[serde(default)]
    pub high_count: usize,
}

/// All channel profiles of one snapshot, keyed by channel id.
pub type ProfileSet = BTreeMap<String, ChannelProfile>;

/// A generated title awaiting ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    #[serde(default)]
    pub explanation: String,
}

impl Candidate {
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
        }
    }
}

/// A candidate carrying its score while it moves through the ranking stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

/// A selected title as returned to callers. Never carries the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub explanation: String,
}

impl From<ScoredCandidate> for Suggestion {
    fn from(scored: ScoredCandidate) -> Self {
        Self {
            title: scored.candidate.title,
            explanation: scored.candidate.explanation,
        }
    }
}
