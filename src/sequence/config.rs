use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::sequence::acts::{Act, ActTimestamps};
use crate::sequence::style::VisualStyle;

/// Base draw weights for the three styles within one act.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleWeights {
    /// Weight of the primary style.
    pub dossier: f64,
    /// Weight of the secondary style.
    pub schema: f64,
    /// Weight of the tertiary style (ignored outside acts 3-5).
    pub echo: f64,
}

impl StyleWeights {
    /// Construct from the three raw weights.
    pub const fn new(dossier: f64, schema: f64, echo: f64) -> Self {
        Self {
            dossier,
            schema,
            echo,
        }
    }

    /// Weight for `style`.
    pub fn get(&self, style: VisualStyle) -> f64 {
        match style {
            VisualStyle::Dossier => self.dossier,
            VisualStyle::Schema => self.schema,
            VisualStyle::Echo => self.echo,
        }
    }
}

/// Per-act base weights, tuned for the narrative arc.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActStyleWeights {
    /// Act 1.
    pub act1: StyleWeights,
    /// Act 2.
    pub act2: StyleWeights,
    /// Act 3.
    pub act3: StyleWeights,
    /// Act 4.
    pub act4: StyleWeights,
    /// Act 5.
    pub act5: StyleWeights,
    /// Act 6.
    pub act6: StyleWeights,
}

impl Default for ActStyleWeights {
    fn default() -> Self {
        Self {
            act1: StyleWeights::new(0.90, 0.10, 0.00),
            act2: StyleWeights::new(0.70, 0.30, 0.00),
            act3: StyleWeights::new(0.45, 0.20, 0.35),
            act4: StyleWeights::new(0.35, 0.20, 0.45),
            act5: StyleWeights::new(0.50, 0.35, 0.15),
            act6: StyleWeights::new(0.65, 0.35, 0.00),
        }
    }
}

impl ActStyleWeights {
    /// Weights for `act`.
    pub fn for_act(&self, act: Act) -> StyleWeights {
        match act {
            Act::Act1 => self.act1,
            Act::Act2 => self.act2,
            Act::Act3 => self.act3,
            Act::Act4 => self.act4,
            Act::Act5 => self.act5,
            Act::Act6 => self.act6,
        }
    }
}

/// Tunables for the style sequencer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Act breakpoints; `act6_end` is the total duration.
    pub act_timestamps: ActTimestamps,
    /// Base style weights per act.
    pub weights: ActStyleWeights,
    /// Longest allowed run of any single style.
    pub max_consecutive_same_style: usize,
    /// Smallest allowed Echo cluster.
    pub echo_cluster_min: usize,
    /// Largest allowed Echo cluster.
    pub echo_cluster_max: usize,
    /// Longest Schema run outside act 5.
    pub schema_cluster_max_default: usize,
    /// Longest Schema run inside act 5.
    pub schema_cluster_max_act5: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            act_timestamps: ActTimestamps::default(),
            weights: ActStyleWeights::default(),
            max_consecutive_same_style: 4,
            echo_cluster_min: 2,
            echo_cluster_max: 3,
            schema_cluster_max_default: 1,
            schema_cluster_max_act5: 2,
        }
    }
}

impl SequencerConfig {
    /// Default tunables with act breakpoints rescaled to `total_seconds`.
    pub fn for_duration(total_seconds: f64) -> StoryframeResult<Self> {
        Ok(Self {
            act_timestamps: ActTimestamps::default().scaled_to(total_seconds)?,
            ..Self::default()
        })
    }

    /// Mean Echo cluster length, used to correct the cluster start probability.
    pub fn avg_echo_cluster(&self) -> f64 {
        (self.echo_cluster_min + self.echo_cluster_max) as f64 / 2.0
    }

    /// Reject configurations that would make the sequencing rules contradictory.
    pub fn validate(&self) -> StoryframeResult<()> {
        self.act_timestamps.validate()?;

        for act in Act::ALL {
            let w = self.weights.for_act(act);
            for style in VisualStyle::ALL {
                let v = w.get(style);
                if !v.is_finite() || v < 0.0 {
                    return Err(StoryframeError::config(format!(
                        "{act} {style} weight must be finite and >= 0 (got {v})"
                    )));
                }
            }
            // With both alternatives available the all-zero fallback can never fire.
            if w.dossier <= 0.0 || w.schema <= 0.0 {
                return Err(StoryframeError::config(format!(
                    "{act} dossier and schema weights must be > 0"
                )));
            }
        }

        if self.max_consecutive_same_style < 2 {
            return Err(StoryframeError::config(
                "max_consecutive_same_style must be >= 2",
            ));
        }
        if self.echo_cluster_min == 0 {
            return Err(StoryframeError::config("echo_cluster_min must be >= 1"));
        }
        if self.echo_cluster_min > self.echo_cluster_max {
            return Err(StoryframeError::config(
                "echo_cluster_min must be <= echo_cluster_max",
            ));
        }
        if self.echo_cluster_max > self.max_consecutive_same_style {
            return Err(StoryframeError::config(
                "echo_cluster_max must be <= max_consecutive_same_style",
            ));
        }
        if self.schema_cluster_max_default == 0 || self.schema_cluster_max_act5 == 0 {
            return Err(StoryframeError::config(
                "schema cluster limits must be >= 1",
            ));
        }
        if self.schema_cluster_max_act5 > self.max_consecutive_same_style
            || self.schema_cluster_max_default > self.max_consecutive_same_style
        {
            return Err(StoryframeError::config(
                "schema cluster limits must be <= max_consecutive_same_style",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/config.rs"]
mod tests;
