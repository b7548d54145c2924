//! Error type for the opsboard command line

use opsboard_kanban::BoardError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by CLI commands. `main` turns all of them into exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("replay script {}: {message}", path.display())]
    Script { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl From<figment::Error> for CliError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
