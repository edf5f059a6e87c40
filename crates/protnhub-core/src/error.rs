//! Error types for Prot'n'Hub operations.
//!
//! Empty inputs and edgeless graphs are not errors: they surface as an
//! analysis status and an empty scene. These types cover the remaining
//! failures.

use thiserror::Error;

/// Result type for Prot'n'Hub operations.
pub type Result<T> = std::result::Result<T, ProtnhubError>;

/// Errors that can occur during Prot'n'Hub operations.
#[derive(Debug, Clone, Error)]
pub enum ProtnhubError {
    /// Layout-related errors.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    /// Query parameter errors.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ProtnhubError {
    fn from(e: std::io::Error) -> Self {
        ProtnhubError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ProtnhubError {
    fn from(e: serde_json::Error) -> Self {
        ProtnhubError::Serialization(e.to_string())
    }
}

/// Layout-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The layout does not cover a node present in the graph.
    #[error("No position computed for node: {0}")]
    MissingPosition(String),
    /// The simulation produced a non-finite coordinate.
    #[error("Non-finite coordinate for node: {0}")]
    NonFinite(String),
}

/// Query parameter errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// No protein name or identifier supplied.
    #[error("Protein identifier is empty")]
    EmptyIdentifier,
    /// Unknown species preset name.
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl ProtnhubError {
    pub fn missing_position(name: impl Into<String>) -> Self {
        ProtnhubError::Layout(LayoutError::MissingPosition(name.into()))
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ProtnhubError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        ProtnhubError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
