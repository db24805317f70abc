use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::foundation::math::round_to;
use crate::sequence::style::KenBurnsDirection;

/// Ken Burns move amplitudes and speed calibration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Display duration (seconds) at which the move runs at speed 1.0.
    pub reference_duration: f64,
    /// Durations shorter than this are treated as this long when computing speed.
    pub min_display: f64,
    /// Scale reached by zoom moves.
    pub zoom_scale: f64,
    /// Horizontal travel of pans, in pixels either side of centre.
    pub pan_offset: f64,
    /// Vertical travel of tilts, in pixels either side of centre.
    pub tilt_offset: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reference_duration: 11.0,
            min_display: 3.0,
            zoom_scale: 1.15,
            pan_offset: 40.0,
            tilt_offset: 30.0,
        }
    }
}

impl MotionConfig {
    /// Reject non-positive durations and a zoom that shrinks the frame.
    pub fn validate(&self) -> StoryframeResult<()> {
        if !(self.reference_duration.is_finite() && self.reference_duration > 0.0) {
            return Err(StoryframeError::config("reference_duration must be > 0"));
        }
        if !(self.min_display.is_finite() && self.min_display > 0.0) {
            return Err(StoryframeError::config("min_display must be > 0"));
        }
        if !(self.zoom_scale.is_finite() && self.zoom_scale >= 1.0) {
            return Err(StoryframeError::config("zoom_scale must be >= 1"));
        }
        if !(self.pan_offset.is_finite() && self.tilt_offset.is_finite()) {
            return Err(StoryframeError::config("pan and tilt offsets must be finite"));
        }
        Ok(())
    }
}

/// Fully parameterised camera move for one image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KenBurnsMotion {
    /// Move chosen by the sequencer.
    pub direction: KenBurnsDirection,
    /// Playback speed; below 1.0 for images held longer than the reference duration.
    pub speed_multiplier: f64,
    /// Scale at display start.
    pub start_scale: f64,
    /// Scale at display end.
    pub end_scale: f64,
    /// Horizontal offset at display start.
    pub start_x_offset: f64,
    /// Horizontal offset at display end.
    pub end_x_offset: f64,
    /// Vertical offset at display start.
    pub start_y_offset: f64,
    /// Vertical offset at display end.
    pub end_y_offset: f64,
}

/// Motion parameters for `direction` over an image shown for `display_duration` seconds.
pub fn motion_for(
    direction: KenBurnsDirection,
    display_duration: f64,
    cfg: &MotionConfig,
) -> KenBurnsMotion {
    let safe = if display_duration.is_finite() {
        display_duration.max(cfg.min_display)
    } else {
        cfg.min_display
    };
    let mut m = KenBurnsMotion {
        direction,
        speed_multiplier: round_to(cfg.reference_duration / safe, 3),
        start_scale: 1.0,
        end_scale: 1.0,
        start_x_offset: 0.0,
        end_x_offset: 0.0,
        start_y_offset: 0.0,
        end_y_offset: 0.0,
    };
    match direction {
        KenBurnsDirection::SlowZoomIn => m.end_scale = cfg.zoom_scale,
        KenBurnsDirection::SlowZoomOut => m.start_scale = cfg.zoom_scale,
        KenBurnsDirection::SlowPanRight => {
            m.start_x_offset = -cfg.pan_offset;
            m.end_x_offset = cfg.pan_offset;
        }
        KenBurnsDirection::SlowPanLeft => {
            m.start_x_offset = cfg.pan_offset;
            m.end_x_offset = -cfg.pan_offset;
        }
        KenBurnsDirection::SlowTiltUp => {
            m.start_y_offset = cfg.tilt_offset;
            m.end_y_offset = -cfg.tilt_offset;
        }
    }
    m
}

#[cfg(test)]
#[path = "../../tests/unit/sync/motion.rs"]
mod tests;
