//! Heuristic fitness score of a candidate title against a channel profile.

use titlefit_core::{has_digit, tokenize, word_count, ChannelProfile, ScoringWeights};

/// Score `title` against `profile`. Higher is better; the value is unbounded.
///
/// Every term is independent:
/// - word-count deviation from `avg_title_words` times `length_penalty`
/// - `digit_bonus` when the title contains a digit
/// - `question_penalty` / `exclamation_penalty` for `?` / `!`
/// - `top_keyword_bonus` per token occurrence in `top_keywords`,
///   `low_keyword_penalty` per occurrence in `low_keywords`
#[must_use]
pub fn score_title(title: &str, profile: &ChannelProfile, weights: &ScoringWeights) -> f64 {
    let mut score = 0.0;

    #[allow(clippy::cast_precision_loss)]
    let words = word_count(title) as f64;
    score -= weights.length_penalty * (words - profile.avg_title_words).abs();

    if has_digit(title) {
        score += weights.digit_bonus;
    }
    if title.contains('?') {
        score -= weights.question_penalty;
    }
    if title.contains('!') {
        score -= weights.exclamation_penalty;
    }

    for token in tokenize(title) {
        if profile.top_keywords.contains(&token) {
            score += weights.top_keyword_bonus;
        }
        if profile.low_keywords.contains(&token) {
            score -= weights.low_keyword_penalty;
        }
    }

    score
}
