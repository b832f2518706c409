use super::*;

fn profile() -> ChannelProfile {
    ChannelProfile {
        num_items: 10,
        mean_metric: 36.5,
        median_metric: 27.5,
        avg_title_words: 5.0,
        avg_title_chars: 35.0,
        number_rate: 1.0,
        question_rate: 0.0,
        exclamation_rate: 0.0,
        colon_rate: 0.0,
        top_openers: Vec::new(),
        top_keywords: vec!["launch".to_string()],
        low_keywords: vec!["vlog".to_string()],
        metric_threshold: 67.5,
        high_count: 3,
    }
}

fn profiles() -> ProfileSet {
    let mut set = ProfileSet::new();
    set.insert("A".to_string(), profile());
    set
}

fn titles(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn stages_run_in_fixed_order() {
    let names: Vec<&str> = STAGES.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["score", "normalize", "select"]);
}

#[test]
fn best_candidate_comes_first_and_scores_are_stripped() {
    let candidates = vec![
        Candidate::new("My weekend vlog, again!", "casual"),
        Candidate::new("5 Launch Tricks Pros Use", "numbers and keyword"),
        Candidate::new("Should you even bother?", "question"),
    ];
    let out = rank_candidates(&profile(), candidates, 2, &ScoringWeights::default());

    assert_eq!(
        titles(&out),
        vec!["5 Launch Tricks Pros Use", "Should you even bother?"]
    );
    assert_eq!(out[0].explanation, "numbers and keyword");
}

#[test]
fn equal_scores_keep_generator_order() {
    let candidates = vec![
        Candidate::new("alpha beta gamma delta epsilon", ""),
        Candidate::new("zeta eta theta iota kappa", ""),
        Candidate::new("lambda omicron sigma tau upsilon", ""),
    ];
    let out = rank_candidates(&profile(), candidates, 3, &ScoringWeights::default());
    assert_eq!(
        titles(&out),
        vec![
            "alpha beta gamma delta epsilon",
            "zeta eta theta iota kappa",
            "lambda omicron sigma tau upsilon",
        ]
    );
}

#[test]
fn empty_batch_yields_empty_result() {
    let out = rank_candidates(&profile(), Vec::new(), 5, &ScoringWeights::default());
    assert!(out.is_empty());
}

#[test]
fn output_is_capped_at_requested_count() {
    let candidates = (0..8)
        .map(|i| Candidate::new(format!("Launch number {i} today"), ""))
        .collect();
    let out = rank_candidates(&profile(), candidates, 3, &ScoringWeights::default());
    assert_eq!(out.len(), 3);
}

#[test]
fn rank_request_resolves_channel() {
    let request = RankRequest {
        channel_id: "A".to_string(),
        summary: "a video about launches".to_string(),
        requested_count: 1,
        candidates: vec![
            Candidate::new("Daily vlog", ""),
            Candidate::new("7 Launch Lessons From Year One", ""),
        ],
    };
    let out = rank_request(&profiles(), &request, &ScoringWeights::default()).unwrap();
    assert_eq!(titles(&out), vec!["7 Launch Lessons From Year One"]);
}

#[test]
fn rank_request_unknown_channel_is_error() {
    let request = RankRequest {
        channel_id: "missing".to_string(),
        summary: String::new(),
        requested_count: 3,
        candidates: vec![Candidate::new("Anything", "")],
    };
    let err = rank_request(&profiles(), &request, &ScoringWeights::default()).unwrap_err();
    assert!(matches!(err, RankError::UnknownChannel(ref id) if id == "missing"));
}

#[test]
fn rank_request_rejects_zero_count() {
    let request = RankRequest {
        channel_id: "A".to_string(),
        summary: String::new(),
        requested_count: 0,
        candidates: Vec::new(),
    };
    let err = rank_request(&profiles(), &request, &ScoringWeights::default()).unwrap_err();
    assert!(matches!(err, RankError::InvalidInput(_)));
}

#[test]
fn rank_request_deserializes_without_candidates() {
    let request: RankRequest =
        serde_json::from_str(r#"{"channel_id": "A", "requested_count": 2}"#).unwrap();
    assert!(request.candidates.is_empty());
    let out = rank_request(&profiles(), &request, &ScoringWeights::default()).unwrap();
    assert!(out.is_empty());
}
