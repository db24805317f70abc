use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::foundation::fingerprint::{PlanFingerprint, StableHasher};
use crate::foundation::math::round_to;
use crate::foundation::rng::{Rng64, resolve_seed};
use crate::sequence::acts::Act;
use crate::sequence::config::SequencerConfig;
use crate::sequence::style::{Composition, KenBurnsDirection, VisualStyle};

/// Discount applied to continuing a Schema run outside act 5.
const SCHEMA_CONTINUE_DISCOUNT: f64 = 0.2;

/// Visual decisions for one image position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Assignment {
    /// 0-based position in the timeline.
    pub index: usize,
    /// Start time of the position in seconds, rounded to centiseconds.
    pub timestamp: f64,
    /// Act containing the position.
    pub act: Act,
    /// Chosen visual style.
    pub style: VisualStyle,
    /// Framing directive.
    pub composition: Composition,
    /// Camera move.
    pub ken_burns: KenBurnsDirection,
}

/// Where the trailing history sits relative to an Echo cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The previous position was not Echo.
    NotInCluster,
    /// The history ends with an Echo run of this length, below the maximum.
    InEchoCluster(usize),
    /// The Echo run reached its maximum; the next position must be Dossier.
    ForcedExit,
}

impl RunState {
    /// Derive the state from the already-decided positions.
    pub fn from_history(history: &[Assignment], config: &SequencerConfig) -> Self {
        match trailing_run(history, VisualStyle::Echo) {
            0 => RunState::NotInCluster,
            run if run >= config.echo_cluster_max => RunState::ForcedExit,
            run => RunState::InEchoCluster(run),
        }
    }
}

/// Assign style, composition and Ken Burns direction to every image position.
///
/// The pass is forward-only: each decision sees the finalized history before it and nothing is
/// revised. With `seed` set the output is fully reproducible; without it a fresh seed is drawn and
/// logged.
#[tracing::instrument(skip(config))]
pub fn assign_styles(
    total_images: usize,
    config: &SequencerConfig,
    seed: Option<u64>,
) -> StoryframeResult<Vec<Assignment>> {
    if total_images == 0 {
        return Err(StoryframeError::config("total_images must be > 0"));
    }
    config.validate()?;

    let seed = resolve_seed(seed);
    tracing::debug!(seed, "sequencer seed");

    let mut seq = Sequencer::new(total_images, config, seed);
    let assignments = seq.run();

    let stats = summarize(&assignments);
    tracing::debug!(
        dossier = stats.dossier,
        schema = stats.schema,
        echo = stats.echo,
        echo_clusters = stats.echo_clusters,
        longest_dossier_run = stats.longest_dossier_run,
        longest_schema_run = stats.longest_schema_run,
        longest_echo_run = stats.longest_echo_run,
        "sequence assigned"
    );
    Ok(assignments)
}

struct Sequencer<'a> {
    config: &'a SequencerConfig,
    total_images: usize,
    image_duration: f64,
    acts: Vec<Act>,
    rng: Rng64,
}

impl<'a> Sequencer<'a> {
    fn new(total_images: usize, config: &'a SequencerConfig, seed: u64) -> Self {
        let image_duration = config.act_timestamps.total_seconds() / total_images as f64;
        let acts = (0..total_images)
            .map(|i| config.act_timestamps.act_at(i as f64 * image_duration))
            .collect();
        Self {
            config,
            total_images,
            image_duration,
            acts,
            rng: Rng64::new(seed),
        }
    }

    fn run(&mut self) -> Vec<Assignment> {
        let mut history = Vec::with_capacity(self.total_images);
        for i in 0..self.total_images {
            let timestamp = i as f64 * self.image_duration;
            let style = self.select_style(i, &history);
            let composition = select_composition(style, &history);
            let ken_burns = select_ken_burns(composition, &history);
            history.push(Assignment {
                index: i,
                timestamp: round_to(timestamp, 2),
                act: self.acts[i],
                style,
                composition,
                ken_burns,
            });
        }
        history
    }

    fn select_style(&mut self, i: usize, history: &[Assignment]) -> VisualStyle {
        if i == 0 || i + 1 == self.total_images {
            return VisualStyle::Dossier;
        }

        let cfg = self.config;
        let act = self.acts[i];

        match RunState::from_history(history, cfg) {
            RunState::InEchoCluster(run) if run < cfg.echo_cluster_min => {
                return VisualStyle::Echo;
            }
            RunState::ForcedExit => return VisualStyle::Dossier,
            RunState::InEchoCluster(_) => {
                let w = if act.allows_echo() {
                    cfg.weights.for_act(act).echo
                } else {
                    0.0
                };
                if w > 0.0 && self.rng.next_f64_01() < w {
                    return VisualStyle::Echo;
                }
                // Leaving a cluster always lands on Dossier.
                return VisualStyle::Dossier;
            }
            RunState::NotInCluster => {}
        }

        let base = cfg.weights.for_act(act);
        let mut weights = [
            (VisualStyle::Dossier, base.dossier),
            (VisualStyle::Schema, base.schema),
            (VisualStyle::Echo, base.echo),
        ];
        let echo = VisualStyle::Echo.slot();
        let schema = VisualStyle::Schema.slot();

        if !act.allows_echo() {
            weights[echo].1 = 0.0;
        }

        // A cluster must fit before the act boundary and before the forced final Dossier.
        if weights[echo].1 > 0.0 {
            let min = cfg.echo_cluster_min;
            if i + min >= self.total_images || self.remaining_in_act(i) < min {
                weights[echo].1 = 0.0;
            }
        }

        // Starting a cluster commits several positions to Echo.
        if weights[echo].1 > 0.0 {
            weights[echo].1 /= cfg.avg_echo_cluster();
        }

        let remaining_to_end = self.total_images - 1 - i;
        for (style, w) in weights.iter_mut() {
            if *w == 0.0 {
                continue;
            }
            let mut limit = cfg.max_consecutive_same_style;
            if *style == VisualStyle::Dossier && remaining_to_end > 0 && remaining_to_end <= limit {
                limit -= 1;
            }
            if trailing_run(history, *style) >= limit {
                *w = 0.0;
            }
        }

        if history.last().map(|a| a.style) == Some(VisualStyle::Schema) {
            let run = trailing_run(history, VisualStyle::Schema);
            let mut limit = if act == Act::Act5 {
                cfg.schema_cluster_max_act5
            } else {
                cfg.schema_cluster_max_default
            };
            // A run that began outside act 5 keeps the stricter limit.
            if history[history.len() - run].act != Act::Act5 {
                limit = limit.min(cfg.schema_cluster_max_default);
            }
            if run >= limit {
                weights[schema].1 = 0.0;
            } else if act != Act::Act5 {
                weights[schema].1 *= SCHEMA_CONTINUE_DISCOUNT;
            }
        }

        self.rng
            .pick_weighted(&weights)
            .unwrap_or(VisualStyle::Dossier)
    }

    /// Positions left in the current act, counting `i` itself.
    fn remaining_in_act(&self, i: usize) -> usize {
        let act = self.acts[i];
        self.acts[i..].iter().take_while(|a| **a == act).count()
    }
}

/// Length of the run of `style` at the tail of `history`.
pub fn trailing_run(history: &[Assignment], style: VisualStyle) -> usize {
    history
        .iter()
        .rev()
        .take_while(|a| a.style == style)
        .count()
}

fn select_composition(style: VisualStyle, history: &[Assignment]) -> Composition {
    history
        .iter()
        .rev()
        .find(|a| a.style == style)
        .map(|a| a.composition.next_in_cycle())
        .unwrap_or(Composition::CYCLE[0])
}

fn select_ken_burns(composition: Composition, history: &[Assignment]) -> KenBurnsDirection {
    let base = composition.ken_burns();
    let Some(alternate) = base.pan_alternate() else {
        return base;
    };
    let last_same = history.iter().rev().find(|a| a.composition == composition);
    match last_same {
        Some(prev) if prev.ken_burns == base => alternate,
        _ => base,
    }
}

/// Maximal runs of one style, in timeline order.
pub fn style_runs(assignments: &[Assignment]) -> Vec<(VisualStyle, usize)> {
    let mut runs: Vec<(VisualStyle, usize)> = Vec::new();
    for a in assignments {
        match runs.last_mut() {
            Some((style, len)) if *style == a.style => *len += 1,
            _ => runs.push((a.style, 1)),
        }
    }
    runs
}

/// Distribution summary of a computed sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SequenceStats {
    /// Number of positions.
    pub total: usize,
    /// Dossier positions.
    pub dossier: usize,
    /// Schema positions.
    pub schema: usize,
    /// Echo positions.
    pub echo: usize,
    /// Number of Echo clusters.
    pub echo_clusters: usize,
    /// Longest run of any style.
    pub longest_run: usize,
    /// Longest Dossier run.
    pub longest_dossier_run: usize,
    /// Longest Schema run.
    pub longest_schema_run: usize,
    /// Longest Echo run, i.e. the largest cluster.
    pub longest_echo_run: usize,
}

impl SequenceStats {
    /// Share of positions using `style`, in `[0, 1]`.
    pub fn fraction(&self, style: VisualStyle) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = match style {
            VisualStyle::Dossier => self.dossier,
            VisualStyle::Schema => self.schema,
            VisualStyle::Echo => self.echo,
        };
        n as f64 / self.total as f64
    }

    /// Longest run of `style`.
    pub fn longest_run_of(&self, style: VisualStyle) -> usize {
        match style {
            VisualStyle::Dossier => self.longest_dossier_run,
            VisualStyle::Schema => self.longest_schema_run,
            VisualStyle::Echo => self.longest_echo_run,
        }
    }
}

/// Count styles and runs in `assignments`.
pub fn summarize(assignments: &[Assignment]) -> SequenceStats {
    let mut stats = SequenceStats {
        total: assignments.len(),
        ..SequenceStats::default()
    };
    for a in assignments {
        match a.style {
            VisualStyle::Dossier => stats.dossier += 1,
            VisualStyle::Schema => stats.schema += 1,
            VisualStyle::Echo => stats.echo += 1,
        }
    }
    for (style, len) in style_runs(assignments) {
        let longest = match style {
            VisualStyle::Dossier => &mut stats.longest_dossier_run,
            VisualStyle::Schema => &mut stats.longest_schema_run,
            VisualStyle::Echo => {
                stats.echo_clusters += 1;
                &mut stats.longest_echo_run
            }
        };
        *longest = (*longest).max(len);
        stats.longest_run = stats.longest_run.max(len);
    }
    stats
}

/// Stable fingerprint over every field of a sequence.
pub fn fingerprint_sequence(assignments: &[Assignment]) -> PlanFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(assignments.len() as u64);
    for a in assignments {
        h.write_u64(a.index as u64);
        h.write_f64(a.timestamp);
        h.write_u8(a.act.number());
        h.write_str(a.style.as_str());
        h.write_str(a.composition.as_str());
        h.write_str(a.ken_burns.as_str());
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
