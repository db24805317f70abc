use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let cfg = StoryframeConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, StoryframeConfig::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let s = r#"{
        "sequencer": { "max_consecutive_same_style": 5 },
        "timing": { "pre_roll": 0.5 },
        "render": { "fps": 24 }
    }"#;
    let cfg = StoryframeConfig::from_reader(s.as_bytes()).unwrap();
    assert_eq!(cfg.sequencer.max_consecutive_same_style, 5);
    assert_eq!(cfg.sequencer.echo_cluster_max, 3);
    assert_eq!(cfg.timing.pre_roll, 0.5);
    assert_eq!(cfg.timing.post_hold, 0.5);
    assert_eq!(cfg.render.fps, 24);
    assert_eq!(cfg.render.width, 1920);
}

#[test]
fn invalid_values_fail_validation() {
    let s = r#"{ "timing": { "min_display": 20.0 } }"#;
    let err = StoryframeConfig::from_reader(s.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("configuration error:"));
}

#[test]
fn unknown_sections_are_rejected() {
    assert!(StoryframeConfig::from_reader(r#"{ "webhooks": {} }"#.as_bytes()).is_err());
}
