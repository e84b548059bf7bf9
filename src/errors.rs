use std::path::PathBuf;

use thiserror::Error;

/// Which rule of a `GenerationConfig` was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Minimum 4 characters required")]
    TooShort(usize),

    #[error("Maximum characters can be 16")]
    TooLong(usize),

    #[error("At least select one character class")]
    NoCharacterClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] Violation),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
