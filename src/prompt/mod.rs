//! Image prompt assembly.

/// Accent colours and topic categories.
pub mod accent;
/// Prompt text assembly.
pub mod builder;
/// Fixed prompt fragments.
pub mod templates;
