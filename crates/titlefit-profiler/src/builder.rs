//! Per-channel profile construction.

use std::collections::HashMap;

use titlefit_core::{ChannelProfile, HistoricalRecord, Opener, ProfileSet};

use crate::keywords::differential_keywords;
use crate::stats::{mean, median, quantile, TitleStyle};

/// Popularity quantile separating the high cohort from the low cohort.
pub const HIGH_COHORT_QUANTILE: f64 = 0.75;

/// Below this many high-cohort records, style statistics use the whole channel.
pub const MIN_STYLE_COHORT: usize = 3;

pub const TOP_OPENERS: usize = 5;

pub const KEYWORD_LIMIT: usize = 20;

/// Build one profile per channel present in `records`.
///
/// Channels are grouped by exact `channel_id`. An empty input yields an
/// empty set.
#[must_use]
pub fn build_profiles(records: &[HistoricalRecord]) -> ProfileSet {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&HistoricalRecord>> = HashMap::new();
    for record in records {
        let group = groups.entry(record.channel_id.as_str()).or_insert_with(|| {
            order.push(record.channel_id.as_str());
            Vec::new()
        });
        group.push(record);
    }

    let mut profiles = ProfileSet::new();
    for channel_id in order {
        let Some(group) = groups.get(channel_id) else {
            continue;
        };
        let profile = build_channel_profile(group);
        tracing::debug!(
            channel = channel_id,
            items = profile.num_items,
            threshold = profile.metric_threshold,
            high = profile.high_count,
            top_keywords = profile.top_keywords.len(),
            "built channel profile"
        );
        profiles.insert(channel_id.to_string(), profile);
    }

    tracing::info!(
        records = records.len(),
        channels = profiles.len(),
        "built channel profiles"
    );
    profiles
}

/// Build the profile for a single channel's records.
#[must_use]
pub fn build_channel_profile(records: &[&HistoricalRecord]) -> ChannelProfile {
    let metrics: Vec<f64> = records.iter().map(|r| r.popularity_metric).collect();
    let threshold = quantile(&metrics, HIGH_COHORT_QUANTILE);

    let (high, low): (Vec<&HistoricalRecord>, Vec<&HistoricalRecord>) = records
        .iter()
        .copied()
        .partition(|r| r.popularity_metric >= threshold);

    let high_titles: Vec<&str> = high.iter().map(|r| r.title.as_str()).collect();
    let low_titles: Vec<&str> = low.iter().map(|r| r.title.as_str()).collect();

    let style_titles: Vec<&str> = if high.len() < MIN_STYLE_COHORT {
        records.iter().map(|r| r.title.as_str()).collect()
    } else {
        high_titles.clone()
    };
    let style = TitleStyle::from_titles(&style_titles);
    let keywords = differential_keywords(&high_titles, &low_titles, KEYWORD_LIMIT);

    ChannelProfile {
        num_items: records.len(),
        mean_metric: mean(&metrics),
        median_metric: median(&metrics),
        avg_title_words: style.avg_words,
        avg_title_chars: style.avg_chars,
        number_rate: style.number_rate,
        question_rate: style.question_rate,
        exclamation_rate: style.exclamation_rate,
        colon_rate: style.colon_rate,
        top_openers: top_openers(&style_titles, TOP_OPENERS),
        top_keywords: keywords.top,
        low_keywords: keywords.low,
        metric_threshold: threshold,
        high_count: high.len(),
    }
}

/// Most frequent lower-cased first words. Equal counts keep first-seen order.
///
/// Rates are relative to all of `titles`, including ones with no words.
fn top_openers(titles: &[&str], k: usize) -> Vec<Opener> {
    if titles.is_empty() {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for title in titles {
        let Some(first) = title.split_whitespace().next() else {
            continue;
        };
        let word = first.to_lowercase();
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    #[allow(clippy::cast_precision_loss)]
    let total = titles.len() as f64;
    counts
        .into_iter()
        .take(k)
        .map(|(word, count)| {
            #[allow(clippy::cast_precision_loss)]
            let rate = count as f64 / total;
            Opener { word, rate }
        })
        .collect()
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
