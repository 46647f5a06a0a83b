use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to delete directory: {}", .0.display())]
    DirectoryDeletion(PathBuf),

    #[error("Drive download failed: {0}")]
    Download(String),
}
