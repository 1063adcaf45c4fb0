use engine::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load the configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// PostgreSQL driver error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// Model endpoint transport error.
    #[error("Model endpoint error: {0}")]
    ModelEndpoint(#[from] reqwest::Error),

    #[error("Unknown connection target: {0} (expected \"db\" or \"model\")")]
    UnknownTarget(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
