//! Error types for loading Aspect Models.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for model loading.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while loading or checking an Aspect Model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not a valid Aspect Model JSON document.
    #[error("invalid aspect model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two properties of the same owner share a name.
    #[error("duplicate property '{name}' in {owner}")]
    DuplicateProperty {
        /// Owning Aspect or Entity name.
        owner: String,
        /// Repeated property name.
        name: String,
    },

    /// A property or characteristic has an empty name.
    #[error("empty name in {owner}")]
    EmptyName {
        /// Owning element name.
        owner: String,
    },
}
