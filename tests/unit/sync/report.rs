use super::*;
use crate::scene::record::SceneRecord;

fn aligned(n: u32, start: f64, end: f64, score: f64, method: AlignmentMethod) -> AlignedScene {
    AlignedScene {
        scene: SceneRecord {
            scene_number: n,
            ..SceneRecord::default()
        },
        start_time: Some(start),
        end_time: Some(end),
        alignment_score: Some(score),
        alignment_method: method,
        word_count: 5,
        duration: Some(end - start),
    }
}

fn silent(n: u32) -> AlignedScene {
    AlignedScene {
        scene: SceneRecord {
            scene_number: n,
            ..SceneRecord::default()
        },
        start_time: None,
        end_time: None,
        alignment_score: None,
        alignment_method: AlignmentMethod::NoNarration,
        word_count: 0,
        duration: None,
    }
}

#[test]
fn clean_alignment_is_good() {
    let scenes = [
        aligned(1, 0.0, 4.0, 0.95, AlignmentMethod::FuzzyMatch),
        aligned(2, 4.0, 8.0, 0.85, AlignmentMethod::FuzzyMatch),
        silent(3),
        aligned(4, 8.5, 12.25, 0.9, AlignmentMethod::FuzzyMatch),
    ];
    let r = validate_alignment(&scenes);
    assert_eq!(r.quality, Quality::Good);
    assert_eq!(r.total_scenes, 4);
    assert_eq!(r.count(AlignmentMethod::FuzzyMatch), 3);
    assert_eq!(r.count(AlignmentMethod::NoNarration), 1);
    assert_eq!(r.avg_alignment_score, 0.9);
    assert_eq!(r.total_duration, 12.25);
    assert!(r.issues.is_empty());
}

#[test]
fn overlap_and_gap_make_it_acceptable() {
    let scenes = [
        aligned(1, 0.0, 4.2, 0.95, AlignmentMethod::FuzzyMatch),
        aligned(2, 4.0, 8.0, 0.95, AlignmentMethod::FuzzyMatch),
        aligned(3, 12.0, 14.0, 0.95, AlignmentMethod::FuzzyMatch),
    ];
    let r = validate_alignment(&scenes);
    assert_eq!(r.overlaps, 1);
    assert_eq!(r.large_gaps, 1);
    assert_eq!(r.quality, Quality::Acceptable);
    assert_eq!(
        r.issues[0].to_string(),
        "scene 1 overlaps with scene 2: 4.20 > 4.00"
    );
    assert_eq!(r.issues[1].to_string(), "gap of 4.0s between scene 2 and 3");
}

#[test]
fn small_overlap_is_tolerated() {
    let scenes = [
        aligned(1, 0.0, 4.04, 0.95, AlignmentMethod::FuzzyMatch),
        aligned(2, 4.0, 8.0, 0.95, AlignmentMethod::FuzzyMatch),
    ];
    assert_eq!(validate_alignment(&scenes).overlaps, 0);
}

#[test]
fn all_interpolated_fails() {
    let scenes = [
        aligned(1, 0.0, 5.0, 0.1, AlignmentMethod::Interpolated),
        aligned(2, 5.0, 10.0, 0.1, AlignmentMethod::Interpolated),
    ];
    let r = validate_alignment(&scenes);
    assert_eq!(r.quality, Quality::Failed);
    assert_eq!(r.issues[0], AlignmentIssue::NothingMatched { interpolated: 2 });
    assert_eq!(r.avg_alignment_score, 0.0);
}

#[test]
fn few_matches_need_review() {
    let mut scenes = vec![aligned(1, 0.0, 2.0, 0.9, AlignmentMethod::FuzzyMatch)];
    for n in 2..=5 {
        let t = n as f64 * 2.0;
        scenes.push(aligned(n, t - 2.0, t, 0.2, AlignmentMethod::Interpolated));
    }
    assert_eq!(validate_alignment(&scenes).quality, Quality::NeedsReview);
}

#[test]
fn many_low_scores_are_acceptable_at_best() {
    let scenes: Vec<_> = (0..6)
        .map(|i| {
            let t = i as f64 * 2.0;
            aligned(i + 1, t, t + 2.0, 0.65, AlignmentMethod::FuzzyMatch)
        })
        .collect();
    let r = validate_alignment(&scenes);
    assert_eq!(r.low_score_count, 6);
    assert_eq!(r.quality, Quality::Acceptable);
}

#[test]
fn empty_input_is_good() {
    let r = validate_alignment(&[]);
    assert_eq!(r.quality, Quality::Good);
    assert_eq!(r.total_duration, 0.0);
}
