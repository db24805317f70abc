use super::*;

fn words(text: &str) -> Vec<WordTimestamp> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, w)| WordTimestamp::new(w, i as f64 * 0.5, i as f64 * 0.5 + 0.4))
        .collect()
}

fn scene(n: u32, excerpt: &str) -> SceneRecord {
    SceneRecord {
        scene_number: n,
        script_excerpt: Some(excerpt.to_string()),
        ..SceneRecord::default()
    }
}

const TRANSCRIPT: &str =
    "The empire rose in silence. Its bankers wrote the rules. Then the war came.";

#[test]
fn normalize_strips_punctuation_and_whitespace() {
    assert_eq!(
        normalize_text("  Hello,   World! It's  fine_ok "),
        "hello world its fine_ok"
    );
    assert_eq!(normalize_text("...!"), "");
}

#[test]
fn exact_excerpts_align_sequentially() {
    let w = words(TRANSCRIPT);
    let scenes = [
        scene(1, "The empire rose in silence."),
        scene(2, "Its bankers wrote the rules."),
        scene(3, "Then the war came."),
    ];
    let out = align_scenes(&scenes, &w, &AlignConfig::default()).unwrap();
    assert_eq!(out.len(), 3);
    for s in &out {
        assert_eq!(s.alignment_method, AlignmentMethod::FuzzyMatch);
        assert_eq!(s.alignment_score, Some(1.0));
    }
    assert_eq!(out[0].start_time, Some(0.0));
    assert_eq!(out[0].end_time, Some(2.4));
    assert_eq!(out[1].start_time, Some(2.5));
    assert_eq!(out[1].end_time, Some(4.9));
    assert_eq!(out[1].duration, Some(2.4));
    assert_eq!(out[2].start_time, Some(5.0));
    assert_eq!(out[2].word_count, 4);
}

#[test]
fn empty_excerpt_is_no_narration_and_left_alone() {
    let w = words(TRANSCRIPT);
    let scenes = [scene(1, "The empire rose in silence."), scene(2, "  ")];
    let out = align_scenes(&scenes, &w, &AlignConfig::default()).unwrap();
    assert_eq!(out[1].alignment_method, AlignmentMethod::NoNarration);
    assert_eq!(out[1].start_time, None);
    assert_eq!(out[1].end_time, None);
}

#[test]
fn failed_scene_is_interpolated_between_neighbours() {
    let w = words(TRANSCRIPT);
    let scenes = [
        scene(1, "The empire rose in silence."),
        scene(2, "zzzz qqqq xxxx"),
        scene(3, "Then the war came."),
    ];
    let out = align_scenes(&scenes, &w, &AlignConfig::default()).unwrap();
    assert_eq!(out[1].alignment_method, AlignmentMethod::Interpolated);
    assert_eq!(out[1].start_time, Some(2.4));
    assert_eq!(out[1].end_time, Some(5.0));
    assert_eq!(out[1].duration, Some(2.6));
    assert_eq!(out[2].alignment_method, AlignmentMethod::FuzzyMatch);
    assert_eq!(out[2].start_time, Some(5.0));
}

#[test]
fn trailing_failure_extends_to_audio_end() {
    let w = words(TRANSCRIPT);
    let scenes = [
        scene(1, "The empire rose in silence."),
        scene(2, "zzzz qqqq xxxx"),
    ];
    let out = align_scenes(&scenes, &w, &AlignConfig::default()).unwrap();
    assert_eq!(out[1].alignment_method, AlignmentMethod::Interpolated);
    assert_eq!(out[1].start_time, Some(2.4));
    assert_eq!(out[1].end_time, Some(6.9));
}

#[test]
fn empty_transcript_spreads_scenes_over_fallback_gap() {
    let scenes = [scene(1, "alpha beta"), scene(2, "gamma delta")];
    let out = align_scenes(&scenes, &[], &AlignConfig::default()).unwrap();
    assert_eq!(out[0].start_time, Some(0.0));
    assert_eq!(out[0].end_time, Some(5.0));
    assert_eq!(out[1].start_time, Some(5.0));
    assert_eq!(out[1].end_time, Some(10.0));
    assert!(out.iter().all(|s| s.alignment_method == AlignmentMethod::Interpolated));
}

#[test]
fn marginal_match_is_low_confidence() {
    let w = vec![WordTimestamp::new("abcdeuvwxy", 1.0, 2.0)];
    let out = align_scenes(&[scene(1, "abcdefghij")], &w, &AlignConfig::default()).unwrap();
    assert_eq!(out[0].alignment_method, AlignmentMethod::LowConfidence);
    assert_eq!(out[0].alignment_score, Some(0.5));
    assert_eq!(out[0].start_time, Some(1.0));
    assert_eq!(out[0].end_time, Some(2.0));
}

#[test]
fn anchor_matches_excerpt_running_past_transcript_end() {
    let w = words("one two three four five six seven");
    let excerpt = "one two three four five six seven eight nine ten eleven twelve";
    let out = align_scenes(&[scene(1, excerpt)], &w, &AlignConfig::default()).unwrap();
    assert_eq!(out[0].alignment_method, AlignmentMethod::FuzzyMatch);
    assert_eq!(out[0].alignment_score, Some(0.6947));
    assert_eq!(out[0].start_time, Some(0.0));
    assert_eq!(out[0].end_time, Some(3.4));
    assert_eq!(out[0].word_count, 12);
}

#[test]
fn invalid_inputs_are_rejected() {
    let bad_words = vec![WordTimestamp::new("x", 2.0, 1.0)];
    let err = align_scenes(&[scene(1, "x")], &bad_words, &AlignConfig::default()).unwrap_err();
    assert!(matches!(err, StoryframeError::Alignment(_)));

    let cfg = AlignConfig {
        min_match_ratio: 0.0,
        ..AlignConfig::default()
    };
    let err = align_scenes(&[], &[], &cfg).unwrap_err();
    assert!(matches!(err, StoryframeError::Config(_)));
}

#[test]
fn aligned_scene_serializes_flat() {
    let w = words(TRANSCRIPT);
    let out = align_scenes(&[scene(7, "Then the war came.")], &w, &AlignConfig::default()).unwrap();
    let v = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(v["scene_number"], 7);
    assert_eq!(v["alignment_method"], "fuzzy_match");
    assert_eq!(v["start_time"], 5.0);
}
