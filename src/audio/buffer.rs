//! Mono PCM buffer shared by every audio stage

use crate::{Result, SynthError};

/// Mono audio with samples normalised to [-1.0, 1.0]
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Create a buffer, rejecting a zero sample rate
    pub fn new(sample_rate: u32, samples: Vec<f32>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(SynthError::Audio(
                "Sample rate must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            sample_rate,
            samples,
        })
    }

    /// Create a buffer with no samples
    pub fn empty(sample_rate: u32) -> Result<Self> {
        Self::new(sample_rate, Vec::new())
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Multiply every sample by `factor`
    ///
    /// Gain is not tracked, so rescaling twice compounds the factor.
    pub fn rescale(&mut self, factor: f32) {
        for sample in self.samples.iter_mut() {
            *sample *= factor;
        }
    }
}
