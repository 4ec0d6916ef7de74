use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Source error: {0}")]
    Source(#[from] anyhow::Error),

    #[error("Column '{column}' has non-numeric value '{value}'")]
    Parse { column: String, value: String },

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
