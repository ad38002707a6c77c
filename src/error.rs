use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("No scheme_data provided")]
    MissingSchemeData,

    #[error("Unknown request type: {0}")]
    UnknownRequest(String),

    #[error("Scheme not found: {0}")]
    SchemeNotFound(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
