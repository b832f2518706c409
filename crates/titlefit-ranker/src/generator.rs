//! End-to-end title suggestion around an external generator.

use titlefit_core::{ProfileSet, ScoringWeights, Suggestion};

use crate::error::{GeneratorError, RankError};
use crate::parse::parse_candidates;
use crate::pipeline::{rank_candidates, resolve_profile, RankRequest};
use crate::prompt::compose_prompt;

/// Source of raw candidate text for a prompt.
///
/// Implementations block until the generator responds. Retries, if any,
/// belong to the implementation.
pub trait TitleGenerator {
    /// Produce raw text for `prompt`, ideally a JSON array of
    /// `{title, explanation}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] when no response could be obtained.
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

impl<F> TitleGenerator for F
where
    F: Fn(&str) -> Result<String, GeneratorError>,
{
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestOptions {
    pub weights: ScoringWeights,
    /// Candidates asked of the generator and kept from its output.
    pub max_candidates: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_candidates: 10,
        }
    }
}

/// Compose a prompt, call `generator`, parse its output, and rank the result.
///
/// Any candidates already on `request` are ignored. Unparsable generator
/// output ranks as an empty batch.
///
/// # Errors
///
/// Returns [`RankError::UnknownChannel`] or [`RankError::InvalidInput`] for a
/// bad request and [`RankError::Generator`] if the generator fails.
pub fn suggest_titles(
    profiles: &ProfileSet,
    generator: &dyn TitleGenerator,
    request: &RankRequest,
    options: &SuggestOptions,
) -> Result<Vec<Suggestion>, RankError> {
    let profile = resolve_profile(profiles, &request.channel_id, request.requested_count)?;

    let num_candidates = options.max_candidates.max(request.requested_count);
    let prompt = compose_prompt(
        &request.channel_id,
        &request.summary,
        profile,
        num_candidates,
    );
    let raw = generator.generate(&prompt)?;
    let candidates = parse_candidates(&raw, num_candidates);

    let parsed = candidates.len();
    let suggestions = rank_candidates(
        profile,
        candidates,
        request.requested_count,
        &options.weights,
    );
    tracing::info!(
        channel = %request.channel_id,
        parsed,
        selected = suggestions.len(),
        "suggested titles"
    );
    Ok(suggestions)
}
