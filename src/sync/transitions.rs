use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::scene::record::SceneRecord;

/// Transition durations, in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Crossfade between images of the same style.
    pub crossfade: f64,
    /// Crossfade when the visual style changes.
    pub style_change_fade: f64,
    /// Dip to black between acts.
    pub act_dip_to_black: f64,
    /// Fade in from black on the first image.
    pub open_fade: f64,
    /// Fade out to black on the last image.
    pub close_fade: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            crossfade: 0.4,
            style_change_fade: 0.8,
            act_dip_to_black: 1.5,
            open_fade: 1.0,
            close_fade: 1.0,
        }
    }
}

impl TransitionConfig {
    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> StoryframeResult<()> {
        for (name, v) in [
            ("crossfade", self.crossfade),
            ("style_change_fade", self.style_change_fade),
            ("act_dip_to_black", self.act_dip_to_black),
            ("open_fade", self.open_fade),
            ("close_fade", self.close_fade),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(StoryframeError::config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Kind of cut between two images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Opening fade.
    FadeFromBlack,
    /// Closing fade.
    FadeToBlack,
    /// Act boundary.
    DipToBlack,
    /// Dissolve between images.
    Crossfade,
}

/// A transition and how long it takes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// What the transition looks like.
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Seconds.
    pub duration: f64,
}

impl Transition {
    fn new(kind: TransitionKind, duration: f64) -> Self {
        Self { kind, duration }
    }
}

/// Transitions on both sides of one image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTransitions {
    /// Into this image.
    pub transition_in: Transition,
    /// Out of this image.
    pub transition_out: Transition,
}

/// Pick the transition from `current` into `next` (`None` when `current` is last).
///
/// An act change dips to black; a style change within an act uses the longer crossfade; anything
/// else is a quick crossfade. Unknown acts or styles never count as a change.
pub fn determine_transition(
    current: &SceneRecord,
    next: Option<&SceneRecord>,
    cfg: &TransitionConfig,
) -> Transition {
    let Some(next) = next else {
        return Transition::new(TransitionKind::FadeToBlack, cfg.close_fade);
    };
    if let (Some(a), Some(b)) = (current.act, next.act) {
        if a != b {
            return Transition::new(TransitionKind::DipToBlack, cfg.act_dip_to_black);
        }
    }
    if let (Some(a), Some(b)) = (current.style, next.style) {
        if a != b {
            return Transition::new(TransitionKind::Crossfade, cfg.style_change_fade);
        }
    }
    Transition::new(TransitionKind::Crossfade, cfg.crossfade)
}

/// Transitions for every image; each `transition_in` repeats the previous `transition_out`.
pub fn assign_transitions(scenes: &[SceneRecord], cfg: &TransitionConfig) -> Vec<SceneTransitions> {
    let mut out: Vec<SceneTransitions> = Vec::with_capacity(scenes.len());
    for (i, scene) in scenes.iter().enumerate() {
        let transition_in = match out.last() {
            Some(prev) => prev.transition_out,
            None => Transition::new(TransitionKind::FadeFromBlack, cfg.open_fade),
        };
        let transition_out = determine_transition(scene, scenes.get(i + 1), cfg);
        out.push(SceneTransitions {
            transition_in,
            transition_out,
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sync/transitions.rs"]
mod tests;
