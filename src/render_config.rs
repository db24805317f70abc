use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::config::StoryframeConfig;
use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::foundation::math::round_to;
use crate::sequence::acts::Act;
use crate::sequence::style::{Composition, KenBurnsDirection, VisualStyle};
use crate::sync::align::{AlignedScene, AlignmentMethod};
use crate::sync::motion::{KenBurnsMotion, motion_for};
use crate::sync::timing::adjust_timing;
use crate::sync::transitions::{Transition, assign_transitions};

/// Output video format.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Frames per second.
    pub fps: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fps: 30,
            width: 1920,
            height: 1080,
        }
    }
}

impl RenderSettings {
    /// Reject a zero frame rate or an empty frame.
    pub fn validate(&self) -> StoryframeResult<()> {
        if self.fps == 0 {
            return Err(StoryframeError::config("fps must be > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(StoryframeError::config("width and height must be > 0"));
        }
        Ok(())
    }
}

/// Output frame size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Everything the renderer needs for one image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderScene {
    /// Scene number in the script.
    pub scene_number: u32,
    /// Image number within the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_index: Option<u32>,
    /// Where the generated image lives.
    pub image_path: PathBuf,
    /// First visible second.
    pub display_start: f64,
    /// Last visible second.
    pub display_end: f64,
    /// Visible seconds.
    pub display_duration: f64,
    /// Narration start, 0 when unknown.
    pub narration_start: f64,
    /// Narration end, 0 when unknown.
    pub narration_end: f64,
    /// How the narration window was found.
    pub alignment_method: AlignmentMethod,
    /// Visual style.
    pub style: Option<VisualStyle>,
    /// Framing directive.
    pub composition: Option<Composition>,
    /// Act.
    pub act: Option<Act>,
    /// Camera move.
    pub ken_burns: KenBurnsMotion,
    /// Transition into this image.
    pub transition_in: Transition,
    /// Transition out of this image.
    pub transition_out: Transition,
}

/// Per-video render manifest.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    /// Video identifier.
    pub video_id: String,
    /// Narration audio file.
    pub audio_path: PathBuf,
    /// End of the last image, in seconds.
    pub total_duration_seconds: f64,
    /// Frames per second.
    pub fps: u32,
    /// Frame size.
    pub resolution: Resolution,
    /// Number of images.
    pub scene_count: usize,
    /// Images in timeline order.
    pub scenes: Vec<RenderScene>,
}

impl RenderConfig {
    /// Write pretty-printed JSON to `path`, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> StoryframeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory '{}'", parent.display()))?;
        }
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, self)
            .map_err(|e| StoryframeError::serde(format!("encode render config: {e}")))?;
        w.write_all(b"\n")
            .and_then(|()| w.flush())
            .with_context(|| format!("write '{}'", path.display()))?;
        Ok(())
    }
}

/// File name of the generated image for a scene.
///
/// Per-image entries are `Scene_{scene:02}_{image:02}.png`; whole-scene entries are
/// `scene_{scene:03}.png`.
pub fn image_file_name(scene_number: u32, image_index: Option<u32>) -> String {
    match image_index {
        Some(i) if i > 0 => format!("Scene_{scene_number:02}_{i:02}.png"),
        _ => format!("scene_{scene_number:03}.png"),
    }
}

/// Join aligned scenes with display timing, camera motion and transitions.
#[tracing::instrument(skip(audio_path, image_dir, scenes, config), fields(scenes = scenes.len()))]
pub fn build_render_config(
    video_id: &str,
    audio_path: &Path,
    image_dir: &Path,
    scenes: &[AlignedScene],
    config: &StoryframeConfig,
) -> StoryframeResult<RenderConfig> {
    config.render.validate()?;
    config.motion.validate()?;
    config.transitions.validate()?;

    let windows = adjust_timing(scenes, &config.timing)?;
    let records: Vec<_> = scenes.iter().map(|s| s.scene.clone()).collect();
    let transitions = assign_transitions(&records, &config.transitions);

    let mut prev_direction: Option<KenBurnsDirection> = None;
    let mut out = Vec::with_capacity(scenes.len());
    for ((s, w), t) in scenes.iter().zip(&windows).zip(&transitions) {
        let direction = s
            .scene
            .ken_burns
            .unwrap_or_else(|| fallback_direction(s.scene.composition, prev_direction));
        prev_direction = Some(direction);

        out.push(RenderScene {
            scene_number: s.scene.scene_number,
            image_index: s.scene.image_index,
            image_path: image_dir.join(image_file_name(s.scene.scene_number, s.scene.image_index)),
            display_start: round_to(w.display_start, 4),
            display_end: round_to(w.display_end, 4),
            display_duration: w.display_duration,
            narration_start: round_to(s.start_time.unwrap_or(0.0), 4),
            narration_end: round_to(s.end_time.unwrap_or(0.0), 4),
            alignment_method: s.alignment_method,
            style: s.scene.style,
            composition: s.scene.composition,
            act: s.scene.act,
            ken_burns: motion_for(direction, w.display_duration, &config.motion),
            transition_in: t.transition_in,
            transition_out: t.transition_out,
        });
    }

    let total = windows.last().map_or(0.0, |w| w.display_end);
    tracing::debug!(video_id, total_seconds = total, "render config built");

    Ok(RenderConfig {
        video_id: video_id.to_string(),
        audio_path: audio_path.to_path_buf(),
        total_duration_seconds: round_to(total, 4),
        fps: config.render.fps,
        resolution: Resolution {
            width: config.render.width,
            height: config.render.height,
        },
        scene_count: out.len(),
        scenes: out,
    })
}

/// Move for a scene the sequencer never saw: the composition's move, with pans flipped when the
/// previous image panned the same way.
fn fallback_direction(
    composition: Option<Composition>,
    prev: Option<KenBurnsDirection>,
) -> KenBurnsDirection {
    let base = composition.unwrap_or(Composition::Wide).ken_burns();
    match base.pan_alternate() {
        Some(alternate) if prev == Some(base) => alternate,
        _ => base,
    }
}

#[cfg(test)]
#[path = "../tests/unit/render/render_config.rs"]
mod tests;
