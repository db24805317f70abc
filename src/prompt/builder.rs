use crate::foundation::error::StoryframeResult;
use crate::prompt::accent::AccentColor;
use crate::prompt::templates::{
    ACCENT_PLACEHOLDER, STYLE_PREFIX, composition_directive, style_suffix,
};
use crate::scene::record::SceneRecord;
use crate::sequence::acts::Act;
use crate::sequence::config::SequencerConfig;
use crate::sequence::sequencer::assign_styles;
use crate::sequence::style::{Composition, KenBurnsDirection, VisualStyle};

/// Fully assembled image prompt plus the visual decisions behind it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImagePrompt {
    /// 0-based image position.
    pub index: usize,
    /// Act of the position.
    pub act: Act,
    /// Visual style.
    pub style: VisualStyle,
    /// Framing directive.
    pub composition: Composition,
    /// Camera move.
    pub ken_burns: KenBurnsDirection,
    /// Accent color used in the prompt.
    pub accent_color: AccentColor,
    /// Text sent to the image model.
    pub prompt: String,
}

/// `PREFIX DESCRIPTION, DIRECTIVE, SUFFIX` with the accent color substituted.
pub fn build_prompt(
    scene_description: &str,
    style: VisualStyle,
    composition: Composition,
    accent: &AccentColor,
) -> String {
    let prefix = STYLE_PREFIX.replace(ACCENT_PLACEHOLDER, accent.as_str());
    let suffix = style_suffix(style).replace(ACCENT_PLACEHOLDER, accent.as_str());
    let description = scene_description.trim_end_matches([',', ' ']);

    let mut out = String::with_capacity(prefix.len() + description.len() + suffix.len() + 128);
    out.push_str(&prefix);
    out.push(' ');
    out.push_str(description);
    out.push_str(", ");
    out.push_str(composition_directive(composition));
    out.push_str(&suffix);
    out
}

/// Sequence every scene and build its prompt.
#[tracing::instrument(skip(scenes, config), fields(scenes = scenes.len()))]
pub fn generate_prompts(
    scenes: &[SceneRecord],
    accent: &AccentColor,
    config: &SequencerConfig,
    seed: Option<u64>,
) -> StoryframeResult<Vec<ImagePrompt>> {
    if scenes.is_empty() {
        return Ok(Vec::new());
    }

    let assignments = assign_styles(scenes.len(), config, seed)?;
    let prompts = scenes
        .iter()
        .zip(assignments)
        .map(|(scene, a)| ImagePrompt {
            index: a.index,
            act: a.act,
            style: a.style,
            composition: a.composition,
            ken_burns: a.ken_burns,
            accent_color: accent.clone(),
            prompt: build_prompt(&scene.scene_description, a.style, a.composition, accent),
        })
        .collect();
    Ok(prompts)
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/builder.rs"]
mod tests;
