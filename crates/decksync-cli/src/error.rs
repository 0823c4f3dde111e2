use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] decksync_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Row numbers start at 1")]
    InvalidRowNumber,
    #[error("Nothing to change: pass --mode and/or --recursive")]
    EmptyRowChange,
    #[error("Nothing to change: pass --token and/or --namespace")]
    EmptyNotionChange,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Exit status: 2 for rejected input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(error) if error.is_validation() => 2,
            Self::InvalidRowNumber | Self::EmptyRowChange | Self::EmptyNotionChange => 2,
            _ => 1,
        }
    }
}
