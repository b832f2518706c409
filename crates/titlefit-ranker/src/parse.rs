//! Extraction of candidates from raw generator output.

use serde::Deserialize;
use titlefit_core::Candidate;

#[derive(Debug, Deserialize)]
struct RawCandidate {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Pull the first JSON array of `{title, explanation}` objects out of `raw`.
///
/// Surrounding prose and code fences are skipped. Entries with a blank title
/// are dropped, a missing explanation becomes empty, and at most `cap`
/// candidates are kept. Never fails: unusable output yields an empty list.
#[must_use]
pub fn parse_candidates(raw: &str, cap: usize) -> Vec<Candidate> {
    for (start, _) in raw.match_indices('[') {
        let mut stream =
            serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Vec<RawCandidate>>();
        if let Some(Ok(entries)) = stream.next() {
            let candidates: Vec<Candidate> = entries
                .into_iter()
                .filter_map(|entry| {
                    let title = entry.title?.trim().to_string();
                    if title.is_empty() {
                        return None;
                    }
                    let explanation = entry.explanation.unwrap_or_default().trim().to_string();
                    Some(Candidate { title, explanation })
                })
                .take(cap)
                .collect();
            tracing::debug!(count = candidates.len(), "parsed generator candidates");
            return candidates;
        }
    }

    tracing::warn!(
        length = raw.len(),
        "no candidate array found in generator output"
    );
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let raw = r#"[{"title": "10 Rust Tips", "explanation": "numbers perform"}]"#;
        assert_eq!(
            parse_candidates(raw, 5),
            vec![Candidate::new("10 Rust Tips", "numbers perform")]
        );
    }

    #[test]
    fn skips_prose_and_code_fences() {
        let raw = "Sure! Here are [some] ideas:\n```json\n[\n  {\"title\": \"A\", \"explanation\": \"x\"},\n  {\"title\": \"B\", \"explanation\": \"y\"}\n]\n```\nEnjoy.";
        let parsed = parse_candidates(raw, 5);
        let titles: Vec<&str> = parsed.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn drops_blank_titles_and_defaults_explanation() {
        let raw = r#"[{"title": "  "}, {"title": " Kept "}, {"explanation": "no title"}]"#;
        assert_eq!(parse_candidates(raw, 5), vec![Candidate::new("Kept", "")]);
    }

    #[test]
    fn truncates_to_cap() {
        let raw = r#"[{"title": "a"}, {"title": "b"}, {"title": "c"}]"#;
        assert_eq!(parse_candidates(raw, 2).len(), 2);
    }

    #[test]
    fn fails_safe_on_garbage() {
        assert!(parse_candidates("", 5).is_empty());
        assert!(parse_candidates("no json here", 5).is_empty());
        assert!(parse_candidates("[1, 2, 3]", 5).is_empty());
        assert!(parse_candidates(r#"[{"title": "unterminated"#, 5).is_empty());
        assert!(parse_candidates(r#"{"title": "object not array"}"#, 5).is_empty());
    }
}
