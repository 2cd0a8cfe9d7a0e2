use thiserror::Error;

pub type Result<T> = std::result::Result<T, SightingError>;

#[derive(Error, Debug)]
pub enum SightingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid data format at line {line}: {message}")]
    Format { line: u64, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No sightings to analyze")]
    EmptyDataset,

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SightingError {
    pub fn format(line: u64, message: impl Into<String>) -> Self {
        SightingError::Format {
            line,
            message: message.into(),
        }
    }
}
