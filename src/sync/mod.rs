//! Narration alignment and display timing.
//!
//! Scenes are matched against word-level transcript timestamps, then turned into display windows,
//! camera moves and transitions for the renderer.

/// Excerpt-to-transcript matching.
pub mod align;
/// Ken Burns motion parameters.
pub mod motion;
/// Alignment quality report.
pub mod report;
/// Character-level string similarity.
pub mod similarity;
/// Display windows from narration windows.
pub mod timing;
/// Transitions between images.
pub mod transitions;
