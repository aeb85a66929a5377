use std::path::PathBuf;

use thiserror::Error;

/// The main error type for turbo-group operations
#[derive(Debug, Error)]
pub enum TurboGroupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Group \"{group}\" not found in {config_file}.\nAvailable groups: {available}")]
    GroupNotFound {
        group: String,
        config_file: String,
        available: String,
    },
}

/// Result type alias for turbo-group operations
pub type TurboGroupResult<T> = Result<T, TurboGroupError>;
