use std::io;
use std::path::PathBuf;

use circle_core::config::ConfigError;
use circle_core::remote::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] circle_core::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to read snapshot file {path}: {source}")]
    SnapshotFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Contact ID or name cannot be empty")]
    EmptyContactQuery,
    #[error("Contact not found for id/name: {0}")]
    ContactNotFound(String),
}
