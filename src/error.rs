//! Crate-level error type and `Result` alias.
//! Covers dimension preconditions, unknown kernel/align-mode names coming from
//! the host or CLI, batch shape problems, and configuration loading.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid dimension: {name} must be a positive integer, got: {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("Value out of range: {name}={value}, expected {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unsupported interpolation kernel: {0}")]
    UnsupportedKernel(String),

    #[error("Unsupported align mode: {0}")]
    UnsupportedAlignMode(String),

    #[error("Image batch shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_dimension(name: &'static str, value: usize) -> Self {
        Error::InvalidDimension {
            name,
            value: i64::try_from(value).unwrap_or(i64::MAX),
        }
    }
}
