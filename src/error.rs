//! Error types for dsynth

use std::io;
use thiserror::Error;

/// Main error type for dsynth
#[derive(Error, Debug)]
pub enum SynthError {
    /// The phrase could not be interpreted as text
    #[error("Invalid phrase: {0}")]
    InvalidInput(String),

    /// A word has no entry in the pronunciation dictionary
    #[error("The word '{0}' is not in the dictionary")]
    UnknownWord(String),

    /// Dictionary, unit directory or audio player could not be used
    #[error("External resource unavailable: {0}")]
    ExternalResource(String),

    #[error("Volume must be an integer between 0 and 100, got {0}")]
    InvalidVolume(i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for dsynth operations
pub type Result<T> = std::result::Result<T, SynthError>;

impl From<String> for SynthError {
    fn from(s: String) -> Self {
        SynthError::Other(s)
    }
}

impl From<&str> for SynthError {
    fn from(s: &str) -> Self {
        SynthError::Other(s.to_string())
    }
}

impl From<hound::Error> for SynthError {
    fn from(e: hound::Error) -> Self {
        SynthError::Audio(format!("WAV error: {}", e))
    }
}
