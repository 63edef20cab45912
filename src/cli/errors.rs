use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid value for {arg}: {value}. Must be a positive integer")]
    NonPositive { arg: &'static str, value: i64 },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Library(#[from] aspect_resize::Error),
}
