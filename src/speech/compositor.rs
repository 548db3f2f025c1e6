//! Diphone concatenation
//!
//! Units are looked up in the store and appended in order. A diphone with no
//! recorded unit is skipped, so a sparse unit set degrades the output instead
//! of aborting synthesis. This is the opposite policy to the phoneme
//! resolver, which stops at the first unknown word.

use crate::audio::AudioBuffer;
use crate::speech::crossfade::{Crossfader, DEFAULT_CROSSFADE_MS};
use crate::speech::UnitStore;
use crate::text::DiphoneId;
use crate::{Result, SynthError};
use log::{debug, warn};

/// Output rate when no unit was found at all
pub const FALLBACK_SAMPLE_RATE: u32 = 16000;

/// Output volume as a percentage of the recorded level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    /// Accepts 0 through 100 inclusive
    pub fn new(percent: i32) -> Result<Self> {
        match u8::try_from(percent) {
            Ok(p) if p <= 100 => Ok(Self(p)),
            _ => Err(SynthError::InvalidVolume(percent)),
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Linear gain factor
    pub fn factor(&self) -> f32 {
        self.0 as f32 / 100.0
    }
}

/// Per-call synthesis options
#[derive(Debug, Clone, PartialEq)]
pub struct SynthOptions {
    /// Blend adjacent units instead of butting them together
    pub crossfade: bool,
    /// Overlap length used when `crossfade` is set
    pub crossfade_ms: f32,
    /// Output volume, applied after concatenation
    pub volume: Option<Volume>,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            crossfade: false,
            crossfade_ms: DEFAULT_CROSSFADE_MS,
            volume: None,
        }
    }
}

/// Concatenative synthesiser over a loaded unit store
pub struct Synthesizer {
    units: UnitStore,
    fallback_rate: u32,
}

impl Synthesizer {
    pub fn new(units: UnitStore) -> Self {
        Self {
            units,
            fallback_rate: FALLBACK_SAMPLE_RATE,
        }
    }

    /// Rate used for an output that contains no units
    pub fn with_fallback_rate(mut self, rate: u32) -> Self {
        if rate > 0 {
            self.fallback_rate = rate;
        }
        self
    }

    pub fn units(&self) -> &UnitStore {
        &self.units
    }

    /// Build one waveform from a diphone sequence
    ///
    /// The output takes the sample rate of the last unit used. Units whose
    /// rate differs from the one before are still appended, with a warning.
    ///
    /// With cross-fade on, the overlap is sized in milliseconds at the rate
    /// of the incoming unit, so it is recomputed whenever the rate changes.
    pub fn compose(&self, diphones: &[DiphoneId], options: &SynthOptions) -> Result<AudioBuffer> {
        let volume = options.volume;

        let found: Vec<(&DiphoneId, &AudioBuffer)> = diphones
            .iter()
            .filter_map(|d| match self.units.get(d) {
                Some(unit) => Some((d, unit)),
                None => {
                    debug!("No unit for {}, skipping", d);
                    None
                }
            })
            .collect();

        if found.len() < diphones.len() {
            warn!(
                "{} of {} diphone units missing from the store",
                diphones.len() - found.len(),
                diphones.len()
            );
        }

        let Some((_, first)) = found.first() else {
            let mut empty = AudioBuffer::empty(self.fallback_rate)?;
            if let Some(volume) = volume {
                empty.rescale(volume.factor());
            }
            return Ok(empty);
        };

        let fader_for = |rate: u32| {
            options
                .crossfade
                .then(|| Crossfader::new(options.crossfade_ms, rate))
        };
        let mut crossfader = fader_for(first.sample_rate());

        let total: usize = found.iter().map(|(_, unit)| unit.len()).sum();
        let mut samples = Vec::with_capacity(total);
        let mut rate = first.sample_rate();
        let mut tail_len = 0;
        let mut blended = 0;

        for (diphone, unit) in &found {
            if unit.sample_rate() != rate {
                warn!(
                    "Unit {} is {} Hz but the previous unit was {} Hz",
                    diphone,
                    unit.sample_rate(),
                    rate
                );
                rate = unit.sample_rate();
                crossfader = fader_for(rate);
            }

            tail_len = match &crossfader {
                Some(fader) => {
                    let tail = fader.join(&mut samples, tail_len, unit.samples());
                    if tail < unit.len() {
                        blended += 1;
                    }
                    tail
                }
                None => {
                    samples.extend_from_slice(unit.samples());
                    unit.len()
                }
            };
        }

        debug!(
            "Composed {} units ({} cross-faded) into {} samples at {} Hz",
            found.len(),
            blended,
            samples.len(),
            rate
        );

        let mut audio = AudioBuffer::new(rate, samples)?;
        if let Some(volume) = volume {
            audio.rescale(volume.factor());
        }
        Ok(audio)
    }
}
