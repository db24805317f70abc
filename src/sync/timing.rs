use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::foundation::math::round_to;
use crate::sync::align::AlignedScene;

/// Display timing rules, in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Image appears this long before its narration starts.
    pub pre_roll: f64,
    /// Image stays this long after its narration ends.
    pub post_hold: f64,
    /// Shortest time any image is on screen.
    pub min_display: f64,
    /// Longest time any image is on screen.
    pub max_display: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pre_roll: 0.3,
            post_hold: 0.5,
            min_display: 3.0,
            max_display: 18.0,
        }
    }
}

impl TimingConfig {
    /// Reject negative or non-finite durations and an empty display range.
    pub fn validate(&self) -> StoryframeResult<()> {
        for (name, v) in [
            ("pre_roll", self.pre_roll),
            ("post_hold", self.post_hold),
            ("min_display", self.min_display),
            ("max_display", self.max_display),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(StoryframeError::config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.min_display <= 0.0 {
            return Err(StoryframeError::config("min_display must be > 0"));
        }
        if self.max_display < self.min_display {
            return Err(StoryframeError::config(
                "max_display must be >= min_display",
            ));
        }
        Ok(())
    }
}

/// When an image is on screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayWindow {
    /// First second the image is visible.
    pub display_start: f64,
    /// Last second the image is visible.
    pub display_end: f64,
    /// `display_end - display_start`, rounded to 4 decimals.
    pub display_duration: f64,
}

/// Turn narration windows into non-overlapping display windows.
///
/// Stages, each over the whole list: pre-roll (clamped at zero), post-hold (never past the next
/// scene's start), minimum display (pushing the next scene back when needed), maximum display,
/// overlap resolution. A scene pushed back by overlap resolution still keeps `min_display`.
/// Scenes without narration timing follow the previous scene for `min_display` seconds.
#[tracing::instrument(skip(scenes, cfg), fields(scenes = scenes.len()))]
pub fn adjust_timing(
    scenes: &[AlignedScene],
    cfg: &TimingConfig,
) -> StoryframeResult<Vec<DisplayWindow>> {
    cfg.validate()?;
    let n = scenes.len();

    let pre_rolled: Vec<Option<f64>> = scenes
        .iter()
        .map(|s| s.start_time.map(|t| (t - cfg.pre_roll).max(0.0)))
        .collect();

    let mut starts = vec![0.0; n];
    let mut ends = vec![0.0; n];
    for i in 0..n {
        let start = match pre_rolled[i] {
            Some(s) => s,
            None if i > 0 => ends[i - 1],
            None => 0.0,
        };
        let end = match scenes[i].end_time {
            Some(e) => match pre_rolled.get(i + 1).copied().flatten() {
                Some(next_start) => (e + cfg.post_hold).min(next_start),
                None => e + cfg.post_hold,
            },
            None => start + cfg.min_display,
        };
        starts[i] = start;
        ends[i] = end;
    }

    for i in 0..n {
        if ends[i] - starts[i] < cfg.min_display {
            ends[i] = starts[i] + cfg.min_display;
            if i + 1 < n && ends[i] > starts[i + 1] {
                starts[i + 1] = ends[i];
            }
        }
    }

    for i in 0..n {
        if ends[i] - starts[i] > cfg.max_display {
            ends[i] = starts[i] + cfg.max_display;
        }
    }

    for i in 1..n {
        if starts[i] < ends[i - 1] {
            starts[i] = ends[i - 1];
        }
        if ends[i] - starts[i] < cfg.min_display {
            ends[i] = starts[i] + cfg.min_display;
        }
    }

    let windows: Vec<DisplayWindow> = starts
        .into_iter()
        .zip(ends)
        .map(|(display_start, display_end)| DisplayWindow {
            display_start,
            display_end,
            display_duration: round_to(display_end - display_start, 4),
        })
        .collect();

    tracing::debug!(
        total_seconds = windows.last().map_or(0.0, |w| w.display_end),
        "display timing adjusted"
    );
    Ok(windows)
}

#[cfg(test)]
#[path = "../../tests/unit/sync/timing.rs"]
mod tests;
