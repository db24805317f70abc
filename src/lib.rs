//! Storyframe plans the visual identity of narrated documentary videos.
//!
//! Given how many images a video needs, it decides which of three visual styles each image
//! uses, how it is framed and how the camera moves, under hard rules on run lengths and Echo
//! clusters. Around that core it assembles image prompts, classifies topics and frameworks,
//! aligns scenes to a word-level narration transcript and writes the render manifest:
//!
//! - Sequence a video with [`assign_styles`]
//! - Build prompts with [`generate_prompts`]
//! - Align narration with [`align_scenes`], then [`build_render_config`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Keyword classifiers.
pub mod classify;
/// Aggregate configuration.
pub mod config;
/// Image prompt assembly.
pub mod prompt;
/// Render manifest.
pub mod render_config;
/// Boundary scene model.
pub mod scene;
/// Visual-identity sequencing.
pub mod sequence;
/// Narration alignment and display timing.
pub mod sync;

pub use crate::foundation::error::{StoryframeError, StoryframeResult};
pub use crate::foundation::fingerprint::PlanFingerprint;

pub use crate::classify::framework::{Framework, FrameworkClassifier, KeywordFrameworkClassifier};
pub use crate::classify::topic::{KeywordTopicClassifier, TopicClassifier};
pub use crate::config::StoryframeConfig;
pub use crate::prompt::accent::{AccentColor, TopicCategory, resolve_accent_color};
pub use crate::prompt::builder::{ImagePrompt, build_prompt, generate_prompts};
pub use crate::render_config::{
    RenderConfig, RenderScene, RenderSettings, build_render_config, image_file_name,
};
pub use crate::scene::record::{SceneRecord, load_scenes, load_scenes_from_path};
pub use crate::sequence::acts::{Act, ActTimestamps};
pub use crate::sequence::config::{ActStyleWeights, SequencerConfig, StyleWeights};
pub use crate::sequence::sequencer::{
    Assignment, RunState, SequenceStats, assign_styles, fingerprint_sequence, style_runs,
    summarize, trailing_run,
};
pub use crate::sequence::style::{Composition, KenBurnsDirection, VisualStyle};
pub use crate::sync::align::{
    AlignConfig, AlignedScene, AlignmentMethod, WordTimestamp, align_scenes, interpolate_failed,
    load_words, normalize_text,
};
pub use crate::sync::motion::{KenBurnsMotion, MotionConfig, motion_for};
pub use crate::sync::report::{AlignmentIssue, AlignmentReport, Quality, validate_alignment};
pub use crate::sync::similarity::similarity_ratio;
pub use crate::sync::timing::{DisplayWindow, TimingConfig, adjust_timing};
pub use crate::sync::transitions::{
    SceneTransitions, Transition, TransitionConfig, TransitionKind, assign_transitions,
    determine_transition,
};
