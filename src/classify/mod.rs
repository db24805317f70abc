//! Keyword classifiers for topics and analytical frameworks.

/// Framework classification.
pub mod framework;
/// Topic classification.
pub mod topic;
