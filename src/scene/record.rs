use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize as _;

use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::sequence::acts::Act;
use crate::sequence::sequencer::Assignment;
use crate::sequence::style::{Composition, KenBurnsDirection, VisualStyle};

/// One image position of a scene plan, as ingested from upstream JSON.
///
/// Upstream producers disagree on field names (`style` / `visual_style`, `act` / `parent_act`,
/// `composition` / `composition_hint`) and sometimes send both. The canonical key wins unless it
/// is missing, null or blank; the aliases are resolved here and nowhere else.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawSceneRecord")]
pub struct SceneRecord {
    /// Scene number in the script (1-based upstream, 0 when absent).
    pub scene_number: u32,
    /// Image number within the scene, when a scene spans several images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_index: Option<u32>,
    /// What the image depicts.
    pub scene_description: String,
    /// Narration text spoken while the image is on screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_excerpt: Option<String>,
    /// Visual style, when already decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<VisualStyle>,
    /// Act, when already decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act: Option<Act>,
    /// Framing directive, when already decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Composition>,
    /// Camera move, when already decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ken_burns: Option<KenBurnsDirection>,
}

/// Wire shape of [`SceneRecord`] with every alias kept apart.
#[derive(serde::Deserialize)]
struct RawSceneRecord {
    #[serde(default)]
    scene_number: u32,
    #[serde(default)]
    image_index: Option<u32>,
    #[serde(default)]
    scene_description: String,
    #[serde(default)]
    script_excerpt: Option<String>,
    #[serde(default, deserialize_with = "de_style")]
    style: Option<VisualStyle>,
    #[serde(default, deserialize_with = "de_style")]
    visual_style: Option<VisualStyle>,
    #[serde(default, deserialize_with = "de_act")]
    act: Option<Act>,
    #[serde(default, deserialize_with = "de_act")]
    parent_act: Option<Act>,
    #[serde(default, deserialize_with = "de_composition")]
    composition: Option<Composition>,
    #[serde(default, deserialize_with = "de_composition")]
    composition_hint: Option<Composition>,
    #[serde(default)]
    ken_burns: Option<KenBurnsDirection>,
}

impl From<RawSceneRecord> for SceneRecord {
    fn from(raw: RawSceneRecord) -> Self {
        Self {
            scene_number: raw.scene_number,
            image_index: raw.image_index,
            scene_description: raw.scene_description,
            script_excerpt: raw.script_excerpt,
            style: raw.style.or(raw.visual_style),
            act: raw.act.or(raw.parent_act),
            composition: raw.composition.or(raw.composition_hint),
            ken_burns: raw.ken_burns,
        }
    }
}

impl SceneRecord {
    /// Record with only a description, as used for prompt generation.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            scene_description: description.into(),
            ..Self::default()
        }
    }

    /// Narration words, empty when the image has no narration.
    pub fn excerpt(&self) -> &str {
        self.script_excerpt.as_deref().unwrap_or("")
    }

    /// Fill the visual fields that are still undecided from a sequencer assignment.
    pub fn fill_from(&mut self, a: &Assignment) {
        self.act.get_or_insert(a.act);
        self.style.get_or_insert(a.style);
        self.composition.get_or_insert(a.composition);
        self.ken_burns.get_or_insert(a.ken_burns);
    }

    /// Whether style, act and composition are all known.
    pub fn is_sequenced(&self) -> bool {
        self.style.is_some() && self.act.is_some() && self.composition.is_some()
    }
}

/// Parse a JSON array of scene records.
pub fn load_scenes<R: std::io::Read>(r: R) -> StoryframeResult<Vec<SceneRecord>> {
    serde_json::from_reader(r)
        .map_err(|e| StoryframeError::validation(format!("parse scene JSON: {e}")))
}

/// Parse a JSON array of scene records from disk.
pub fn load_scenes_from_path(path: impl AsRef<Path>) -> StoryframeResult<Vec<SceneRecord>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        StoryframeError::validation(format!("open scene JSON '{}': {e}", path.display()))
    })?;
    load_scenes(BufReader::new(f))
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Label {
    Number(u64),
    Text(String),
}

fn de_style<'de, D>(d: D) -> Result<Option<VisualStyle>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(d)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => VisualStyle::parse(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown style '{s}'"))),
    }
}

fn de_composition<'de, D>(d: D) -> Result<Option<Composition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(d)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Composition::parse(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown composition '{s}'"))),
    }
}

fn de_act<'de, D>(d: D) -> Result<Option<Act>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Label>::deserialize(d)? {
        None => Ok(None),
        Some(Label::Number(0)) => Ok(None),
        Some(Label::Number(n)) => Act::from_number(n)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown act number {n}"))),
        Some(Label::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Label::Text(s)) => Act::parse(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(e.to_string())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/record.rs"]
mod tests;
