/// Convenience result type used across deckgen.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by the build pipeline.
///
/// Only [`DeckError::Config`] and [`DeckError::Serialize`] are produced on the fatal paths of a
/// normal build; missing screenshots and failed markup conversions are handled locally.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Invalid in-code or user-provided build data (unknown icon, bad color, bad diagram).
    #[error("configuration error: {0}")]
    Config(String),

    /// Failures while producing or reading a generated bitmap.
    #[error("asset error: {0}")]
    Asset(String),

    /// Geometry that cannot be placed on the slide canvas.
    #[error("layout error: {0}")]
    Layout(String),

    /// A markup source could not be turned into a slide.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// Failures while writing the final container.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DeckError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DeckError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`DeckError::Conversion`] value.
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }

    /// Build a [`DeckError::Serialize`] value.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }

    /// Return `true` for errors caused by invalid build data rather than the environment.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
