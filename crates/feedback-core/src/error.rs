use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Could not score text {index}: {reason}")]
    Scoring { index: usize, reason: String },

    #[error("Cannot group {texts} texts with {scores} scores")]
    Mismatch { texts: usize, scores: usize },

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("No feedback text to analyze")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

pub type Result<T> = std::result::Result<T, Error>;
