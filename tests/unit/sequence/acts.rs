use super::*;

#[test]
fn default_breakpoints_validate() {
    ActTimestamps::default().validate().unwrap();
}

#[test]
fn act_lookup_uses_half_open_intervals() {
    let t = ActTimestamps::default();
    assert_eq!(t.act_at(0.0), Act::Act1);
    assert_eq!(t.act_at(89.99), Act::Act1);
    assert_eq!(t.act_at(90.0), Act::Act2);
    assert_eq!(t.act_at(720.0), Act::Act4);
    assert_eq!(t.act_at(1319.0), Act::Act5);
    assert_eq!(t.act_at(1320.0), Act::Act6);
    assert_eq!(t.act_at(5000.0), Act::Act6);
}

#[test]
fn non_monotonic_breakpoints_are_rejected() {
    let t = ActTimestamps {
        act3_end: 300.0,
        ..ActTimestamps::default()
    };
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn non_positive_breakpoints_are_rejected() {
    let t = ActTimestamps {
        act1_end: 0.0,
        ..ActTimestamps::default()
    };
    assert!(t.validate().is_err());

    let t = ActTimestamps {
        act6_end: f64::NAN,
        ..ActTimestamps::default()
    };
    assert!(t.validate().is_err());
}

#[test]
fn scaling_keeps_proportions() {
    let t = ActTimestamps::default().scaled_to(300.0).unwrap();
    assert_eq!(t.total_seconds(), 300.0);
    assert!((t.act1_end - 18.0).abs() < 1e-9);
    assert!((t.act5_end - 264.0).abs() < 1e-9);
    t.validate().unwrap();
    assert!(ActTimestamps::default().scaled_to(0.0).is_err());
}

#[test]
fn labels_parse_in_common_spellings() {
    assert_eq!(Act::parse("act3").unwrap(), Act::Act3);
    assert_eq!(Act::parse("Act 5").unwrap(), Act::Act5);
    assert_eq!(Act::parse(" 2 ").unwrap(), Act::Act2);
    assert!(Act::parse("act7").is_err());
    assert!(Act::parse("finale").is_err());
}

#[test]
fn echo_eligibility_is_middle_acts_only() {
    let eligible: Vec<Act> = Act::ALL.into_iter().filter(|a| a.allows_echo()).collect();
    assert_eq!(eligible, vec![Act::Act3, Act::Act4, Act::Act5]);
}

#[test]
fn serde_labels_are_lowercase() {
    assert_eq!(serde_json::to_string(&Act::Act4).unwrap(), "\"act4\"");
    let a: Act = serde_json::from_str("\"act6\"").unwrap();
    assert_eq!(a, Act::Act6);
}
