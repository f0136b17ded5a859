use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the user's home directory can't be resolved
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Error when the azgit config directory can't be created
    #[error("failed to ensure azgit config directory {} exists: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Error when an INI file is missing or malformed
    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: ini::Error,
    },
    /// Error when the identity store can't be written
    #[error("failed to write {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
