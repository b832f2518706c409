use titlefit_core::ScoredCandidate;

/// Keep the `n` best candidates, highest score first.
///
/// The sort is stable: equal scores keep their incoming order.
#[must_use]
pub fn select_top(mut batch: Vec<ScoredCandidate>, n: usize) -> Vec<ScoredCandidate> {
    batch.sort_by(|a, b| b.score.total_cmp(&a.score));
    batch.truncate(n);
    batch
}
