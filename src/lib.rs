//! dsynth - diphone concatenation text-to-speech
//!
//! Synthesises a phrase by normalising it into words, looking the words up in
//! a pronunciation dictionary, turning the phonemes into diphone unit names
//! and concatenating the matching prerecorded units into one waveform.

pub mod audio;
pub mod config;
pub mod error;
pub mod speech;
pub mod text;
pub mod utterance;

pub use error::{Result, SynthError};
pub use utterance::Utterance;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "dsynth";
