//! Differential keyword weighting between the high and low cohorts.
//!
//! A TF-IDF model (raw counts, smoothed idf, L2-normalised rows) is fitted
//! over the union of both cohorts' tokenized titles. Each token is ranked by
//! `(high_avg + EPSILON) / (low_avg + EPSILON)` where the averages are the
//! token's summed weight divided by cohort size.

use std::collections::{BTreeMap, HashMap, HashSet};

use titlefit_core::tokenize;

/// Added to both sides of the ratio so absent tokens do not divide by zero.
pub const EPSILON: f64 = 1e-6;

/// Keywords taken from each end of the ratio ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordLists {
    pub top: Vec<String>,
    pub low: Vec<String>,
}

/// A vocabulary token with its cohort averages and ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub term: String,
    pub high_avg: f64,
    pub low_avg: f64,
    pub ratio: f64,
}

/// Rank the joint vocabulary of `high` and `low`, most high-skewed first.
///
/// The vocabulary is enumerated in lexicographic order before a stable sort,
/// so equal ratios keep alphabetical order. An empty cohort contributes zero
/// averages.
#[must_use]
pub fn rank_terms(high: &[&str], low: &[&str]) -> Vec<TermWeight> {
    let high_docs: Vec<Vec<String>> = high.iter().map(|t| tokenize(t)).collect();
    let low_docs: Vec<Vec<String>> = low.iter().map(|t| tokenize(t)).collect();

    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in high_docs.iter().chain(&low_docs) {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }
    if doc_freq.is_empty() {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let n_docs = (high_docs.len() + low_docs.len()) as f64;
    let idf: HashMap<&str, f64> = doc_freq
        .iter()
        .map(|(&term, &df)| {
            #[allow(clippy::cast_precision_loss)]
            let df = df as f64;
            (term, ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
        })
        .collect();

    let high_sum = cohort_weight_sums(&high_docs, &idf);
    let low_sum = cohort_weight_sums(&low_docs, &idf);
    #[allow(clippy::cast_precision_loss)]
    let high_n = high_docs.len().max(1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let low_n = low_docs.len().max(1) as f64;

    let mut ranked: Vec<TermWeight> = doc_freq
        .keys()
        .map(|&term| {
            let high_avg = high_sum.get(term).copied().unwrap_or(0.0) / high_n;
            let low_avg = low_sum.get(term).copied().unwrap_or(0.0) / low_n;
            TermWeight {
                term: term.to_string(),
                high_avg,
                low_avg,
                ratio: (high_avg + EPSILON) / (low_avg + EPSILON),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    ranked
}

/// Take up to `limit` tokens from each end of [`rank_terms`].
///
/// `low` keeps the ordering's tail as-is. With fewer than `2 * limit` tokens
/// the two lists overlap.
#[must_use]
pub fn differential_keywords(high: &[&str], low: &[&str], limit: usize) -> KeywordLists {
    let ranked = rank_terms(high, low);
    let top = ranked.iter().take(limit).map(|t| t.term.clone()).collect();
    let tail_start = ranked.len().saturating_sub(limit);
    let low = ranked[tail_start..].iter().map(|t| t.term.clone()).collect();
    KeywordLists { top, low }
}

/// Sum of L2-normalised TF-IDF weights per term across one cohort's documents.
fn cohort_weight_sums<'a>(
    docs: &'a [Vec<String>],
    idf: &HashMap<&str, f64>,
) -> HashMap<&'a str, f64> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for doc in docs {
        let mut counts: HashMap<&str, f64> = HashMap::new();
        for term in doc {
            *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
        }
        let weighted: Vec<(&str, f64)> = counts
            .into_iter()
            .map(|(term, tf)| (term, tf * idf.get(term).copied().unwrap_or(0.0)))
            .collect();
        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue;
        }
        for (term, weight) in weighted {
            *sums.entry(term).or_insert(0.0) += weight / norm;
        }
    }
    sums
}
