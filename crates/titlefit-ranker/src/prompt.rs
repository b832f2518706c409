//! Deterministic instruction text for the external title generator.

use std::fmt::Write as _;

use titlefit_core::ChannelProfile;

/// Keywords from each list quoted in the prompt.
const PROMPT_KEYWORDS: usize = 10;

/// Below this many high-cohort titles the style statistics describe the whole channel.
const MIN_STYLE_COHORT: usize = 3;

/// Compose the generator instruction for one channel and video summary.
///
/// The same inputs always produce the same text. The profile's averages,
/// rates, openers, and keyword lists are embedded verbatim.
#[must_use]
pub fn compose_prompt(
    channel_id: &str,
    summary: &str,
    profile: &ChannelProfile,
    num_candidates: usize,
) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You suggest compelling video titles for channel {channel_id}."
    );
    let subject = if profile.high_count >= MIN_STYLE_COHORT {
        "High-performing titles"
    } else {
        "Titles"
    };
    let _ = writeln!(
        prompt,
        "{subject} on this channel average {:.0} words and {:.0} characters.",
        profile.avg_title_words, profile.avg_title_chars
    );
    let _ = writeln!(
        prompt,
        "{} of them contain a number, {} a question mark, {} an exclamation mark, and {} a colon.",
        percent(profile.number_rate),
        percent(profile.question_rate),
        percent(profile.exclamation_rate),
        percent(profile.colon_rate),
    );

    if !profile.top_openers.is_empty() {
        let openers: Vec<String> = profile
            .top_openers
            .iter()
            .map(|o| format!("\"{}\" ({})", o.word, percent(o.rate)))
            .collect();
        let _ = writeln!(prompt, "Common opening words: {}.", openers.join(", "));
    }
    if !profile.top_keywords.is_empty() {
        let _ = writeln!(
            prompt,
            "High-performing words include: {}.",
            leading(&profile.top_keywords)
        );
    }
    if !profile.low_keywords.is_empty() {
        let _ = writeln!(
            prompt,
            "Avoid low-performing words such as: {}.",
            trailing(&profile.low_keywords)
        );
    }

    let _ = writeln!(prompt, "Video summary: \"{}\"", summary.trim());
    let _ = writeln!(
        prompt,
        "Propose {num_candidates} distinct titles, each with a one-sentence explanation grounded in these patterns."
    );
    prompt.push_str(
        "Respond only with a JSON array of objects with string keys \"title\" and \"explanation\".",
    );
    prompt
}

fn percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

fn leading(words: &[String]) -> String {
    words
        .iter()
        .take(PROMPT_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The low list is stored in descending-ratio order, so its strongest words sit at the end.
fn trailing(words: &[String]) -> String {
    words
        .iter()
        .rev()
        .take(PROMPT_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
