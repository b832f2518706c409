//! Min-max rescaling of a scored batch.

use titlefit_core::ScoredCandidate;

/// Rescale every score into `[0, 1]`.
///
/// The minimum maps to `0.0` and the maximum to `1.0`. When all scores are
/// equal the range is treated as `1`, so every score becomes `0.0`. An empty
/// batch is returned unchanged.
#[must_use]
pub fn normalize_scores(mut batch: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    if batch.is_empty() {
        return batch;
    }

    let min = batch.iter().map(|c| c.score).fold(f64::INFINITY, f64::min);
    let max = batch
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    for candidate in &mut batch {
        candidate.score = (candidate.score - min) / range;
    }
    batch
}
