/// Convenience result type used across the crate.
pub type TarotResult<T> = Result<T, TarotError>;

/// Top-level error taxonomy used by the deck APIs.
#[derive(thiserror::Error, Debug)]
pub enum TarotError {
    /// Invalid user-provided data (ids, configuration values, CLI arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing card textures.
    #[error("render error: {0}")]
    Render(String),

    /// Malformed or incomplete translation content.
    #[error("content error: {0}")]
    Content(String),

    /// Errors while reading or writing the persisted preference store.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TarotError {
    /// Build a [`TarotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TarotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TarotError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`TarotError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`TarotError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
