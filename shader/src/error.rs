use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShaderError>;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Invalid configuration: {0}.")]
    InvalidConfig(String),

    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Invalid source pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Shader directory `{}` does not exist or is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read `{}`: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove stale output `{}`: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
