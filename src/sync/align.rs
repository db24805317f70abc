use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::foundation::math::round_to;
use crate::scene::record::SceneRecord;
use crate::sync::similarity::similarity_ratio;

/// Seconds appended after the last aligned scene when the transcript gives no end.
const FALLBACK_GAP_SECONDS: f64 = 10.0;

/// One transcribed word with its timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordTimestamp {
    /// The word as transcribed, punctuation included.
    pub word: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl WordTimestamp {
    /// Construct a word entry.
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }
}

/// Tunables for matching narration excerpts against a transcript.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Similarity needed for a confident match.
    pub min_match_ratio: f64,
    /// Search ahead this many times the excerpt length.
    pub search_window_multiplier: usize,
    /// Number of leading words used by the anchor fallback.
    pub anchor_size: usize,
    /// Similarity needed for the leading words to count as an anchor.
    pub anchor_threshold: f64,
    /// Fraction of `min_match_ratio` still accepted as a low-confidence match.
    pub low_confidence_factor: f64,
    /// Lower bound on the search window, in words.
    pub min_search_words: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            min_match_ratio: 0.6,
            search_window_multiplier: 3,
            anchor_size: 6,
            anchor_threshold: 0.55,
            low_confidence_factor: 0.7,
            min_search_words: 500,
        }
    }
}

impl AlignConfig {
    /// Reject thresholds outside `(0, 1]` and empty windows.
    pub fn validate(&self) -> StoryframeResult<()> {
        for (name, v) in [
            ("min_match_ratio", self.min_match_ratio),
            ("anchor_threshold", self.anchor_threshold),
            ("low_confidence_factor", self.low_confidence_factor),
        ] {
            if !v.is_finite() || v <= 0.0 || v > 1.0 {
                return Err(StoryframeError::config(format!(
                    "{name} must be in (0, 1] (got {v})"
                )));
            }
        }
        if self.search_window_multiplier == 0 {
            return Err(StoryframeError::config(
                "search_window_multiplier must be >= 1",
            ));
        }
        if self.anchor_size == 0 {
            return Err(StoryframeError::config("anchor_size must be >= 1"));
        }
        Ok(())
    }

    fn low_confidence_ratio(&self) -> f64 {
        self.min_match_ratio * self.low_confidence_factor
    }
}

/// How a scene's narration window was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMethod {
    /// Matched at or above the confidence threshold.
    FuzzyMatch,
    /// Matched below the threshold but close enough to keep its timing.
    LowConfidence,
    /// Timing estimated from the aligned neighbours.
    Interpolated,
    /// No usable match; not yet interpolated.
    Failed,
    /// The scene has no narration.
    NoNarration,
}

impl AlignmentMethod {
    /// Stable snake_case label.
    pub fn as_str(self) -> &'static str {
        match self {
            AlignmentMethod::FuzzyMatch => "fuzzy_match",
            AlignmentMethod::LowConfidence => "low_confidence",
            AlignmentMethod::Interpolated => "interpolated",
            AlignmentMethod::Failed => "failed",
            AlignmentMethod::NoNarration => "no_narration",
        }
    }

    /// Whether the timing came from the transcript itself.
    pub fn is_matched(self) -> bool {
        matches!(
            self,
            AlignmentMethod::FuzzyMatch | AlignmentMethod::LowConfidence
        )
    }
}

impl std::fmt::Display for AlignmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scene together with the narration window it was matched to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AlignedScene {
    /// The input record.
    #[serde(flatten)]
    pub scene: SceneRecord,
    /// Narration start in seconds.
    pub start_time: Option<f64>,
    /// Narration end in seconds.
    pub end_time: Option<f64>,
    /// Best similarity found, rounded to 4 decimals.
    pub alignment_score: Option<f64>,
    /// How the window was found.
    pub alignment_method: AlignmentMethod,
    /// Normalized words in the excerpt.
    pub word_count: usize,
    /// `end_time - start_time`, rounded to 4 decimals.
    pub duration: Option<f64>,
}

impl AlignedScene {
    fn unaligned(scene: &SceneRecord, method: AlignmentMethod, score: Option<f64>) -> Self {
        Self {
            scene: scene.clone(),
            start_time: None,
            end_time: None,
            alignment_score: score,
            alignment_method: method,
            word_count: 0,
            duration: None,
        }
    }
}

/// Lowercase, drop everything but word characters and whitespace, collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct Transcript<'a> {
    words: &'a [WordTimestamp],
    normalized: Vec<String>,
}

impl<'a> Transcript<'a> {
    fn new(words: &'a [WordTimestamp]) -> Self {
        Self {
            words,
            normalized: words.iter().map(|w| normalize_text(&w.word)).collect(),
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn text(&self, from: usize, to: usize) -> String {
        self.normalized[from..to.min(self.len())].join(" ")
    }

    /// Slide a window the size of the excerpt over `[from, limit)`.
    fn best_match(&self, excerpt: &[String], from: usize, limit: usize) -> (usize, f64) {
        let excerpt_text = excerpt.join(" ");
        let mut best = (from, 0.0);
        for i in from..limit {
            if i + excerpt.len() > self.len() {
                break;
            }
            let score = similarity_ratio(&excerpt_text, &self.text(i, i + excerpt.len()));
            if score > best.1 {
                best = (i, score);
            }
        }
        best
    }

    /// Locate the excerpt by its leading words, then score the full excerpt from there.
    fn anchor_match(
        &self,
        excerpt: &[String],
        from: usize,
        limit: usize,
        cfg: &AlignConfig,
    ) -> (usize, f64) {
        let mut best = (from, 0.0);
        if excerpt.len() < cfg.anchor_size || self.len() < cfg.anchor_size {
            return best;
        }
        let anchor_text = excerpt[..cfg.anchor_size].join(" ");
        let excerpt_text = excerpt.join(" ");
        let end = limit.min(self.len() - cfg.anchor_size + 1);

        for i in from..end {
            let score = similarity_ratio(&anchor_text, &self.text(i, i + cfg.anchor_size));
            if score < cfg.anchor_threshold {
                continue;
            }
            let available = (i + excerpt.len()).min(self.len()) - i;
            if available < excerpt.len() / 2 {
                continue;
            }
            let full = similarity_ratio(&excerpt_text, &self.text(i, i + excerpt.len()));
            if full > best.1 {
                best = (i, full);
            }
        }
        best
    }
}

/// Match every scene's narration excerpt to a span of transcript words, in order.
///
/// Each scene is searched from the end of the previous match. A scene is tried with a full
/// sliding window, then a leading-words anchor, then both again around the position its index
/// predicts. Scenes that still fail are filled in by [`interpolate_failed`].
#[tracing::instrument(skip(scenes, words, cfg), fields(scenes = scenes.len(), words = words.len()))]
pub fn align_scenes(
    scenes: &[SceneRecord],
    words: &[WordTimestamp],
    cfg: &AlignConfig,
) -> StoryframeResult<Vec<AlignedScene>> {
    cfg.validate()?;
    validate_words(words)?;

    let transcript = Transcript::new(words);
    let total_words = transcript.len();
    let words_per_scene = total_words as f64 / scenes.len().max(1) as f64;
    let mut pointer = 0usize;
    let mut aligned = Vec::with_capacity(scenes.len());

    for (scene_idx, scene) in scenes.iter().enumerate() {
        let excerpt: Vec<String> = normalize_text(scene.excerpt())
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .collect();
        if excerpt.is_empty() {
            aligned.push(AlignedScene::unaligned(
                scene,
                AlignmentMethod::NoNarration,
                None,
            ));
            continue;
        }

        let search_ahead = (excerpt.len() * cfg.search_window_multiplier)
            .max((words_per_scene * 2.0) as usize)
            .max(cfg.min_search_words);
        let limit = (pointer + search_ahead).min(total_words);

        let (mut best_start, mut best_score) = transcript.best_match(&excerpt, pointer, limit);

        if best_score < cfg.min_match_ratio {
            let (start, score) = transcript.anchor_match(&excerpt, pointer, limit, cfg);
            if score > best_score {
                (best_start, best_score) = (start, score);
            }
        }

        if best_score < cfg.min_match_ratio {
            let estimated = (scene_idx as f64 * words_per_scene) as usize;
            let est_from = estimated.saturating_sub(words_per_scene as usize);
            let est_to = (estimated + (words_per_scene * 2.0) as usize).min(total_words);

            let (start, est_score) = transcript.best_match(&excerpt, est_from, est_to);
            if est_score > best_score {
                (best_start, best_score) = (start, est_score);
            }
            if est_score < cfg.min_match_ratio {
                let (start, score) = transcript.anchor_match(&excerpt, est_from, est_to, cfg);
                if score > best_score {
                    (best_start, best_score) = (start, score);
                }
            }
        }

        let method = if best_score >= cfg.min_match_ratio {
            AlignmentMethod::FuzzyMatch
        } else if best_score >= cfg.low_confidence_ratio() {
            AlignmentMethod::LowConfidence
        } else {
            AlignmentMethod::Failed
        };

        if method.is_matched() && best_start < total_words {
            let span = excerpt.len().min(total_words - best_start);
            let match_end = best_start + span - 1;
            let start = words[best_start].start;
            let end = words[match_end].end;
            aligned.push(AlignedScene {
                scene: scene.clone(),
                start_time: Some(start),
                end_time: Some(end),
                alignment_score: Some(round_to(best_score, 4)),
                alignment_method: method,
                word_count: excerpt.len(),
                duration: Some(round_to(end - start, 4)),
            });
            pointer = match_end + 1;
        } else {
            let excerpt_preview = excerpt[..excerpt.len().min(10)].join(" ");
            let transcript_preview = if pointer < total_words {
                transcript.text(pointer, pointer + 10)
            } else {
                "(past end)".to_string()
            };
            tracing::warn!(
                scene = scene.scene_number,
                best_score = round_to(best_score, 3),
                excerpt_len = excerpt.len(),
                pointer,
                total_words,
                excerpt = %excerpt_preview,
                transcript = %transcript_preview,
                "scene alignment failed"
            );
            let mut failed = AlignedScene::unaligned(
                scene,
                AlignmentMethod::Failed,
                Some(round_to(best_score, 4)),
            );
            failed.word_count = excerpt.len();
            aligned.push(failed);
            pointer = (pointer + words_per_scene as usize).min(total_words);
        }
    }

    interpolate_failed(&mut aligned, words);

    let matched = aligned
        .iter()
        .filter(|s| s.alignment_method.is_matched())
        .count();
    tracing::debug!(matched, total = aligned.len(), "alignment finished");
    Ok(aligned)
}

/// Spread unaligned scenes evenly over the gap between their aligned neighbours.
///
/// The gap closes at the next aligned start, or at the end of the audio (last word end) when no
/// aligned scene follows. Without audio beyond the previous end the gap is ten seconds. Scenes
/// without narration are left untouched.
pub fn interpolate_failed(scenes: &mut [AlignedScene], words: &[WordTimestamp]) {
    let audio_end = words.last().map_or(0.0, |w| w.end);

    for i in 0..scenes.len() {
        if scenes[i].start_time.is_some()
            || scenes[i].alignment_method == AlignmentMethod::NoNarration
        {
            continue;
        }

        let prev_end = scenes[..i]
            .iter()
            .rev()
            .find_map(|s| s.end_time)
            .unwrap_or(0.0);
        let next_start = scenes[i + 1..]
            .iter()
            .find_map(|s| s.start_time)
            .unwrap_or(if audio_end > prev_end {
                audio_end
            } else {
                prev_end + FALLBACK_GAP_SECONDS
            });

        let gap_count = scenes[i..]
            .iter()
            .take_while(|s| {
                s.start_time.is_none() && s.alignment_method != AlignmentMethod::NoNarration
            })
            .count();
        let segment = (next_start - prev_end) / gap_count.max(1) as f64;

        for (pos, scene) in scenes[i..i + gap_count].iter_mut().enumerate() {
            scene.start_time = Some(round_to(prev_end + pos as f64 * segment, 4));
            scene.end_time = Some(round_to(prev_end + (pos + 1) as f64 * segment, 4));
            scene.alignment_method = AlignmentMethod::Interpolated;
            scene.duration = Some(round_to(segment, 4));
        }
    }
}

fn validate_words(words: &[WordTimestamp]) -> StoryframeResult<()> {
    for (i, w) in words.iter().enumerate() {
        if !w.start.is_finite() || !w.end.is_finite() || w.start < 0.0 || w.end < w.start {
            return Err(StoryframeError::alignment(format!(
                "word {i} ('{}') has invalid timing {}..{}",
                w.word, w.start, w.end
            )));
        }
    }
    Ok(())
}

/// Parse a JSON array of word timestamps.
pub fn load_words<R: std::io::Read>(r: R) -> StoryframeResult<Vec<WordTimestamp>> {
    serde_json::from_reader(r)
        .map_err(|e| StoryframeError::alignment(format!("parse word timestamps: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sync/align.rs"]
mod tests;
