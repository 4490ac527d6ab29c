/// Convenience result type used across the badge engine.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Each variant names the render stage that failed. Every failure aborts the whole render; none
/// of them is retried inside the engine.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// Background artwork is missing or cannot be decoded.
    #[error("background error: {0}")]
    Background(String),

    /// Font data cannot be read or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Finished canvas cannot be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Build a [`BadgeError::Background`] value.
    pub fn background(msg: impl Into<String>) -> Self {
        Self::Background(msg.into())
    }

    /// Build a [`BadgeError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`BadgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BadgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BadgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
