use serde::{Deserialize, Serialize};

/// Coefficients of the candidate scoring heuristic.
///
/// Penalties are stored as positive magnitudes and subtracted by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplied by the absolute word-count deviation from the channel average.
    pub length_penalty: f64,
    pub digit_bonus: f64,
    pub question_penalty: f64,
    pub exclamation_penalty: f64,
    /// Added per token occurrence found in `top_keywords`.
    pub top_keyword_bonus: f64,
    /// Subtracted per token occurrence found in `low_keywords`.
    pub low_keyword_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length_penalty: 0.5,
            digit_bonus: 2.0,
            question_penalty: 1.0,
            exclamation_penalty: 1.0,
            top_keyword_bonus: 1.5,
            low_keyword_penalty: 0.5,
        }
    }
}
