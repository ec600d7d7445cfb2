use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A misconfigured random source.
///
/// Generators never substitute a default draw: an exhausted or out-of-range
/// source is a programmer error and surfaces immediately.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    #[error("random source exhausted after {drawn} draws")]
    Exhausted { drawn: usize },

    #[error("random draw {value} is outside [0, 1)")]
    InvalidDraw { value: f64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
