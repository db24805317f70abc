use std::collections::BTreeMap;

use crate::foundation::math::round_to;
use crate::sync::align::{AlignedScene, AlignmentMethod};

/// End-to-start overlap tolerated between neighbouring scenes, in seconds.
const OVERLAP_TOLERANCE: f64 = 0.05;
/// Silence between neighbouring scenes that is reported as a gap, in seconds.
const MAX_GAP: f64 = 3.0;
/// Fuzzy scores below this count as low.
const LOW_SCORE: f64 = 0.7;
/// Low scores tolerated before the alignment needs review.
const LOW_SCORE_LIMIT: usize = 5;
/// Issues tolerated before the alignment needs review.
const ISSUE_LIMIT: usize = 5;
/// Share of narrated scenes that must be matched from the transcript.
const MIN_MATCHED_SHARE: f64 = 0.3;

/// Overall verdict on an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// No issues.
    Good,
    /// A few issues or low scores.
    Acceptable,
    /// Too many issues, or too few scenes matched from the transcript.
    NeedsReview,
    /// Nothing matched; every narrated scene was interpolated.
    Failed,
}

/// A problem found between two neighbouring scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignmentIssue {
    /// The first scene ends after the next one starts.
    Overlap {
        /// Earlier scene.
        scene: u32,
        /// Later scene.
        next_scene: u32,
        /// End of the earlier scene.
        end: f64,
        /// Start of the later scene.
        next_start: f64,
    },
    /// Silence between two scenes.
    Gap {
        /// Earlier scene.
        scene: u32,
        /// Later scene.
        next_scene: u32,
        /// Seconds between them.
        seconds: f64,
    },
    /// No narrated scene matched the transcript.
    NothingMatched {
        /// Scenes that had to be interpolated.
        interpolated: usize,
    },
}

impl std::fmt::Display for AlignmentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentIssue::Overlap {
                scene,
                next_scene,
                end,
                next_start,
            } => write!(
                f,
                "scene {scene} overlaps with scene {next_scene}: {end:.2} > {next_start:.2}"
            ),
            AlignmentIssue::Gap {
                scene,
                next_scene,
                seconds,
            } => write!(
                f,
                "gap of {seconds:.1}s between scene {scene} and {next_scene}"
            ),
            AlignmentIssue::NothingMatched { interpolated } => write!(
                f,
                "all {interpolated} scenes interpolated; no text matched the transcript"
            ),
        }
    }
}

/// Summary of an alignment pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlignmentReport {
    /// Scenes inspected.
    pub total_scenes: usize,
    /// Scene count per method.
    pub methods: BTreeMap<String, usize>,
    /// Mean score over fuzzy matches, rounded to 3 decimals.
    pub avg_alignment_score: f64,
    /// Fuzzy matches scoring below 0.7.
    pub low_score_count: usize,
    /// Last known end time, rounded to centiseconds.
    pub total_duration: f64,
    /// Overlap issues.
    pub overlaps: usize,
    /// Gap issues.
    pub large_gaps: usize,
    /// All issues, most severe first.
    pub issues: Vec<AlignmentIssue>,
    /// Verdict.
    pub quality: Quality,
}

impl AlignmentReport {
    /// Scenes aligned with `method`.
    pub fn count(&self, method: AlignmentMethod) -> usize {
        self.methods.get(method.as_str()).copied().unwrap_or(0)
    }
}

/// Check an alignment for overlaps, gaps and weak matches, and grade it.
pub fn validate_alignment(scenes: &[AlignedScene]) -> AlignmentReport {
    let mut issues = Vec::new();

    for pair in scenes.windows(2) {
        if let (Some(end), Some(next_start)) = (pair[0].end_time, pair[1].start_time) {
            if end > next_start + OVERLAP_TOLERANCE {
                issues.push(AlignmentIssue::Overlap {
                    scene: pair[0].scene.scene_number,
                    next_scene: pair[1].scene.scene_number,
                    end,
                    next_start,
                });
            }
        }
    }
    for pair in scenes.windows(2) {
        if let (Some(end), Some(next_start)) = (pair[0].end_time, pair[1].start_time) {
            let gap = next_start - end;
            if gap > MAX_GAP {
                issues.push(AlignmentIssue::Gap {
                    scene: pair[0].scene.scene_number,
                    next_scene: pair[1].scene.scene_number,
                    seconds: gap,
                });
            }
        }
    }

    let scores: Vec<f64> = scenes
        .iter()
        .filter(|s| s.alignment_method == AlignmentMethod::FuzzyMatch)
        .map(|s| s.alignment_score.unwrap_or(0.0))
        .collect();
    let avg_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let low_score_count = scores.iter().filter(|s| **s < LOW_SCORE).count();

    let mut methods = BTreeMap::new();
    for s in scenes {
        *methods
            .entry(s.alignment_method.as_str().to_string())
            .or_insert(0) += 1;
    }
    let count = |m: AlignmentMethod| methods.get(m.as_str()).copied().unwrap_or(0);

    let total_duration = scenes.iter().rev().find_map(|s| s.end_time).unwrap_or(0.0);

    let overlaps = issues
        .iter()
        .filter(|i| matches!(i, AlignmentIssue::Overlap { .. }))
        .count();
    let large_gaps = issues.len() - overlaps;

    let active = scenes.len() - count(AlignmentMethod::NoNarration);
    let matched = count(AlignmentMethod::FuzzyMatch) + count(AlignmentMethod::LowConfidence);

    let quality = if active > 0 && matched == 0 {
        issues.insert(
            0,
            AlignmentIssue::NothingMatched {
                interpolated: count(AlignmentMethod::Interpolated),
            },
        );
        Quality::Failed
    } else if active > 0 && (matched as f64) < active as f64 * MIN_MATCHED_SHARE {
        Quality::NeedsReview
    } else if !issues.is_empty() || low_score_count >= LOW_SCORE_LIMIT {
        if issues.len() < ISSUE_LIMIT {
            Quality::Acceptable
        } else {
            Quality::NeedsReview
        }
    } else {
        Quality::Good
    };

    AlignmentReport {
        total_scenes: scenes.len(),
        methods,
        avg_alignment_score: round_to(avg_score, 3),
        low_score_count,
        total_duration: round_to(total_duration, 2),
        overlaps,
        large_gaps,
        issues,
        quality,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sync/report.rs"]
mod tests;
