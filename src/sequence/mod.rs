//! Visual-identity sequencing: which style, framing and camera move each image gets.

/// Narrative acts and their breakpoints.
pub mod acts;
/// Sequencer tunables.
pub mod config;
/// The forward-only assignment pass.
pub mod sequencer;
/// Styles, compositions and Ken Burns directions.
pub mod style;
