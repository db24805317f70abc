use super::*;

#[test]
fn cycle_visits_every_composition_once() {
    let mut c = Composition::Wide;
    let mut seen = vec![c];
    for _ in 0..6 {
        c = c.next_in_cycle();
        assert!(!seen.contains(&c));
        seen.push(c);
    }
    assert_eq!(c.next_in_cycle(), Composition::Wide);
}

#[test]
fn ken_burns_table_matches_framing() {
    assert_eq!(Composition::Wide.ken_burns(), KenBurnsDirection::SlowZoomIn);
    assert_eq!(Composition::Medium.ken_burns(), KenBurnsDirection::SlowPanRight);
    assert_eq!(Composition::Closeup.ken_burns(), KenBurnsDirection::SlowZoomOut);
    assert_eq!(
        Composition::Environmental.ken_burns(),
        KenBurnsDirection::SlowPanLeft
    );
    assert_eq!(Composition::LowAngle.ken_burns(), KenBurnsDirection::SlowTiltUp);
}

#[test]
fn only_pans_have_alternates() {
    assert_eq!(
        KenBurnsDirection::SlowPanRight.pan_alternate(),
        Some(KenBurnsDirection::SlowPanLeft)
    );
    assert_eq!(
        KenBurnsDirection::SlowPanLeft.pan_alternate(),
        Some(KenBurnsDirection::SlowPanRight)
    );
    assert_eq!(KenBurnsDirection::SlowZoomIn.pan_alternate(), None);
    assert_eq!(KenBurnsDirection::SlowTiltUp.pan_alternate(), None);
}

#[test]
fn labels_round_trip_through_parse() {
    for c in Composition::CYCLE {
        assert_eq!(Composition::parse(c.as_str()), Some(c));
    }
    for s in VisualStyle::ALL {
        assert_eq!(VisualStyle::parse(&s.as_str().to_uppercase()), Some(s));
    }
    assert_eq!(Composition::parse("dutch_angle"), None);
}

#[test]
fn serde_uses_snake_case_labels() {
    assert_eq!(
        serde_json::to_string(&Composition::LowAngle).unwrap(),
        "\"low_angle\""
    );
    assert_eq!(
        serde_json::to_string(&KenBurnsDirection::SlowPanLeft).unwrap(),
        "\"slow_pan_left\""
    );
    assert_eq!(
        serde_json::to_string(&VisualStyle::Echo).unwrap(),
        "\"echo\""
    );
}
