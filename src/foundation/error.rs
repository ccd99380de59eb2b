/// Convenience result type used across the crate.
pub type StoryboardResult<T> = Result<T, StoryboardError>;

/// Top-level error taxonomy for scene recording and timeline handling.
#[derive(thiserror::Error, Debug)]
pub enum StoryboardError {
    /// Invalid literal data (tables, ranges, run times).
    #[error("validation error: {0}")]
    Validation(String),

    /// Placement arithmetic that cannot be carried out (unknown ids, empty groups).
    #[error("layout error: {0}")]
    Layout(String),

    /// Inconsistent timeline structure or an out-of-range sample time.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Malformed color literal.
    #[error("color error: {0}")]
    Color(String),

    /// Errors when serializing or deserializing timelines or config.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryboardError {
    /// Build a [`StoryboardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryboardError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`StoryboardError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`StoryboardError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`StoryboardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StoryboardError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
