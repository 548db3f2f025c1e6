//! WAV file I/O

use crate::audio::AudioBuffer;
use crate::Result;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;
use std::path::Path;

/// Decode a WAV file into a mono buffer
///
/// Integer PCM is normalised by its bit depth. Multi-channel files are
/// averaged down to one channel.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let max = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    debug!(
        "Read {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );

    AudioBuffer::new(spec.sample_rate, samples)
}

/// Write a buffer as 16-bit mono PCM
pub fn write_wav(path: impl AsRef<Path>, audio: &AudioBuffer) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for &sample in audio.samples() {
        let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        writer.write_sample(scaled)?;
    }
    writer.finalize()?;

    debug!(
        "Wrote {} samples to {}",
        audio.len(),
        path.as_ref().display()
    );
    Ok(())
}
