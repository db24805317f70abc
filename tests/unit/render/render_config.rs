use super::*;
use crate::scene::record::SceneRecord;
use crate::sync::transitions::TransitionKind;

fn aligned(scene: SceneRecord, start: f64, end: f64) -> AlignedScene {
    AlignedScene {
        scene,
        start_time: Some(start),
        end_time: Some(end),
        alignment_score: Some(1.0),
        alignment_method: AlignmentMethod::FuzzyMatch,
        word_count: 6,
        duration: Some(end - start),
    }
}

fn record(n: u32, image: Option<u32>, act: Act, style: VisualStyle, c: Composition) -> SceneRecord {
    SceneRecord {
        scene_number: n,
        image_index: image,
        act: Some(act),
        style: Some(style),
        composition: Some(c),
        ..SceneRecord::default()
    }
}

#[test]
fn file_names_follow_entry_kind() {
    assert_eq!(image_file_name(3, Some(2)), "Scene_03_02.png");
    assert_eq!(image_file_name(12, None), "scene_012.png");
    assert_eq!(image_file_name(12, Some(0)), "scene_012.png");
}

#[test]
fn builds_joined_manifest() {
    let scenes = [
        aligned(
            record(1, Some(1), Act::Act1, VisualStyle::Dossier, Composition::Wide),
            1.0,
            6.0,
        ),
        aligned(
            record(1, Some(2), Act::Act1, VisualStyle::Schema, Composition::Medium),
            6.2,
            12.0,
        ),
        aligned(
            record(2, Some(1), Act::Act2, VisualStyle::Dossier, Composition::Closeup),
            12.4,
            20.0,
        ),
    ];
    let cfg = StoryframeConfig::default();
    let rc = build_render_config(
        "vid-42",
        Path::new("/audio/vid-42.mp3"),
        Path::new("/images"),
        &scenes,
        &cfg,
    )
    .unwrap();

    assert_eq!(rc.video_id, "vid-42");
    assert_eq!(rc.fps, 30);
    assert_eq!(rc.resolution, Resolution { width: 1920, height: 1080 });
    assert_eq!(rc.scene_count, 3);
    assert_eq!(rc.scenes[1].image_path, Path::new("/images/Scene_01_02.png"));
    assert_eq!(rc.total_duration_seconds, 20.5);

    assert_eq!(rc.scenes[0].transition_in.kind, TransitionKind::FadeFromBlack);
    assert_eq!(rc.scenes[0].transition_out.duration, 0.8);
    assert_eq!(rc.scenes[1].transition_out.kind, TransitionKind::DipToBlack);
    assert_eq!(rc.scenes[2].transition_out.kind, TransitionKind::FadeToBlack);

    assert_eq!(rc.scenes[0].ken_burns.direction, KenBurnsDirection::SlowZoomIn);
    assert_eq!(rc.scenes[1].ken_burns.direction, KenBurnsDirection::SlowPanRight);
    assert_eq!(rc.scenes[2].ken_burns.direction, KenBurnsDirection::SlowZoomOut);
    assert_eq!(rc.scenes[0].narration_start, 1.0);

    for pair in rc.scenes.windows(2) {
        assert!(pair[1].display_start >= pair[0].display_end);
    }
}

#[test]
fn sequencer_direction_wins_over_fallback() {
    let mut r = record(1, None, Act::Act1, VisualStyle::Dossier, Composition::Medium);
    r.ken_burns = Some(KenBurnsDirection::SlowPanLeft);
    let rc = build_render_config(
        "v",
        Path::new("a.mp3"),
        Path::new("img"),
        &[aligned(r, 0.0, 4.0)],
        &StoryframeConfig::default(),
    )
    .unwrap();
    assert_eq!(rc.scenes[0].ken_burns.direction, KenBurnsDirection::SlowPanLeft);
}

#[test]
fn fallback_flips_repeated_pans() {
    assert_eq!(
        fallback_direction(Some(Composition::Medium), Some(KenBurnsDirection::SlowPanRight)),
        KenBurnsDirection::SlowPanLeft
    );
    assert_eq!(
        fallback_direction(Some(Composition::Medium), None),
        KenBurnsDirection::SlowPanRight
    );
    assert_eq!(fallback_direction(None, None), KenBurnsDirection::SlowZoomIn);
}

#[test]
fn write_json_creates_parent_directories() {
    let dir = std::env::temp_dir().join(format!("storyframe-render-{}", std::process::id()));
    let path = dir.join("nested").join("render_config.json");
    let rc = build_render_config(
        "v",
        Path::new("a.mp3"),
        Path::new("img"),
        &[],
        &StoryframeConfig::default(),
    )
    .unwrap();
    rc.write_json(&path).unwrap();
    let back: RenderConfig =
        serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(back, rc);
    assert_eq!(back.scene_count, 0);
    std::fs::remove_dir_all(&dir).unwrap();
}
