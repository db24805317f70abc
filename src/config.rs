use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::render_config::RenderSettings;
use crate::sequence::config::SequencerConfig;
use crate::sync::align::AlignConfig;
use crate::sync::motion::MotionConfig;
use crate::sync::timing::TimingConfig;
use crate::sync::transitions::TransitionConfig;

/// Every tunable of the pipeline, as loaded from one JSON file.
///
/// All sections are optional; missing ones keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryframeConfig {
    /// Style sequencing.
    pub sequencer: SequencerConfig,
    /// Transcript alignment.
    pub align: AlignConfig,
    /// Display timing.
    pub timing: TimingConfig,
    /// Ken Burns motion.
    pub motion: MotionConfig,
    /// Transitions.
    pub transitions: TransitionConfig,
    /// Output format.
    pub render: RenderSettings,
}

impl StoryframeConfig {
    /// Parse from JSON and validate every section.
    pub fn from_reader<R: std::io::Read>(r: R) -> StoryframeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| StoryframeError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StoryframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StoryframeError::config(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every section.
    pub fn validate(&self) -> StoryframeResult<()> {
        self.sequencer.validate()?;
        self.align.validate()?;
        self.timing.validate()?;
        self.motion.validate()?;
        self.transitions.validate()?;
        self.render.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
