//! Small numeric helpers over popularity values and title sets.

use titlefit_core::{has_digit, word_count};

/// Arithmetic mean. `0.0` for an empty slice.
#[must_use]
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Median, averaging the two middle values for even lengths. `0.0` when empty.
#[must_use]
pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Quantile `q` in `[0, 1]` using linear interpolation between closest ranks.
///
/// The position is `(n - 1) * q`; `0.0` for an empty slice.
#[must_use]
pub(crate) fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    #[allow(clippy::cast_precision_loss)]
    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    #[allow(clippy::cast_precision_loss)]
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Surface-level style statistics over a set of titles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TitleStyle {
    pub avg_words: f64,
    pub avg_chars: f64,
    pub number_rate: f64,
    pub question_rate: f64,
    pub exclamation_rate: f64,
    pub colon_rate: f64,
}

impl TitleStyle {
    pub(crate) fn from_titles(titles: &[&str]) -> Self {
        if titles.is_empty() {
            return Self::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let n = titles.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let share = |pred: &dyn Fn(&str) -> bool| {
            titles.iter().filter(|t| pred(t)).count() as f64 / n
        };
        #[allow(clippy::cast_precision_loss)]
        let total_words: f64 = titles.iter().map(|t| word_count(t) as f64).sum();
        #[allow(clippy::cast_precision_loss)]
        let total_chars: f64 = titles.iter().map(|t| t.chars().count() as f64).sum();

        Self {
            avg_words: total_words / n,
            avg_chars: total_chars / n,
            number_rate: share(&has_digit),
            question_rate: share(&|t: &str| t.contains('?')),
            exclamation_rate: share(&|t: &str| t.contains('!')),
            colon_rate: share(&|t: &str| t.contains(':')),
        }
    }
}
