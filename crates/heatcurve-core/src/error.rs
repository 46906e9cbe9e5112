//! Core error types for heatcurve-core.
//!
//! The curve itself has exactly one failure mode ([`CurveError::DegenerateInput`]);
//! the remaining types cover configuration and profile files.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for heatcurve-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Curve fitting errors
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Curve profile import/export errors
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while fitting a line through two points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Both points share the same outside temperature, so the slope is undefined.
    #[error("Point 1 and Point 2 must have different outside temperatures.")]
    DegenerateInput,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration directory could not be determined or created
    #[error("Cannot prepare configuration directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Curve profile errors.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile was written by an incompatible version
    #[error("Incompatible profile version {found} (supported: {supported})")]
    IncompatibleVersion { found: String, supported: String },

    /// Version string could not be parsed
    #[error("Malformed profile version: {0}")]
    MalformedVersion(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
