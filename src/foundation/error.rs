/// Convenience result type used across storyframe.
pub type StoryframeResult<T> = Result<T, StoryframeError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoryframeError {
    /// Invalid caller-supplied configuration (act breakpoints, weights, limits, counts).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed boundary data such as scene records.
    #[error("validation error: {0}")]
    Validation(String),

    /// Transcript alignment inputs that cannot be processed.
    #[error("alignment error: {0}")]
    Alignment(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryframeError {
    /// Build a [`StoryframeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StoryframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryframeError::Alignment`] value.
    pub fn alignment(msg: impl Into<String>) -> Self {
        Self::Alignment(msg.into())
    }

    /// Build a [`StoryframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
