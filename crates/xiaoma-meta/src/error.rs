//! Error types for xiaoma-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] xiaoma_fs::Error),

    #[error("Invalid workflow manifest at {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid injection descriptor at {path}: {message}")]
    InjectionParse { path: PathBuf, message: String },

    #[error("Invalid subagent selection '{value}': expected all, none, or a comma-separated file list")]
    InvalidSelection { value: String },
}
