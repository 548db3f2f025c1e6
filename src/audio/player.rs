//! Playback through a system audio player
//!
//! The composed buffer is written to a temporary WAV file and handed to
//! whichever command-line player is installed:
//! - paplay (PulseAudio / PipeWire)
//! - aplay (ALSA)
//! - afplay (macOS)

use crate::audio::{write_wav, AudioBuffer};
use crate::{Result, SynthError};
use log::{debug, info};
use std::process::{Command, Stdio};

/// Players probed in order when none is configured
const CANDIDATES: &[&str] = &["paplay", "aplay", "afplay"];

/// A resolved command-line audio player
#[derive(Debug, Clone)]
pub struct Player {
    program: String,
}

impl Player {
    /// Resolve a player from the configured name
    ///
    /// `auto` probes the known players; any other name is used as given.
    pub fn from_config(name: &str) -> Result<Self> {
        if name.is_empty() || name == "auto" {
            return Self::find();
        }
        debug!("Using configured player: {}", name);
        Ok(Self {
            program: name.to_string(),
        })
    }

    /// Find the first installed player
    pub fn find() -> Result<Self> {
        for &program in CANDIDATES {
            if Self::is_available(program) {
                info!("Found audio player: {}", program);
                return Ok(Self {
                    program: program.to_string(),
                });
            }
        }

        Err(SynthError::ExternalResource(format!(
            "No audio player found. Tried: {}",
            CANDIDATES.join(", ")
        )))
    }

    fn is_available(program: &str) -> bool {
        // afplay has no version flag, so probe the PATH instead
        Command::new("which")
            .arg(program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Play the buffer and wait for the player to finish
    pub fn play(&self, audio: &AudioBuffer) -> Result<()> {
        let file = tempfile::Builder::new()
            .prefix("dsynth-")
            .suffix(".wav")
            .tempfile()?;
        write_wav(file.path(), audio)?;

        debug!(
            "Playing {:.2}s of audio with {}",
            audio.duration(),
            self.program
        );

        let status = Command::new(&self.program)
            .arg(file.path())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                SynthError::ExternalResource(format!(
                    "Failed to start {}: {}",
                    self.program, e
                ))
            })?;

        if !status.success() {
            return Err(SynthError::ExternalResource(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
