//! Boundary scene model.

/// Scene records as ingested from upstream JSON.
pub mod record;
