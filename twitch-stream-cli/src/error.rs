use std::path::PathBuf;

use stream_resolver::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vlc app wasn't found on your path")]
    VlcNotFound,

    #[error("media player not found at {}", .0.display())]
    PlayerNotFound(PathBuf),

    #[error("impossible to execute {}: {source}", path.display())]
    PlayerLaunch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
