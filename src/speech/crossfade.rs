//! Linear cross-fade at unit boundaries

/// Default overlap between adjacent units
pub const DEFAULT_CROSSFADE_MS: f32 = 10.0;

/// Joins units by overlapping the tail of one with the head of the next
#[derive(Debug, Clone)]
pub struct Crossfader {
    /// Overlap length in samples
    fade_samples: usize,
}

impl Crossfader {
    /// Create a crossfader for `fade_ms` milliseconds at `sample_rate`
    pub fn new(fade_ms: f32, sample_rate: u32) -> Self {
        let fade_samples = (fade_ms.max(0.0) * sample_rate as f32 / 1000.0).round() as usize;
        Self { fade_samples }
    }

    pub fn fade_samples(&self) -> usize {
        self.fade_samples
    }

    /// Gain of the incoming unit at overlap position `i`
    ///
    /// Rises linearly from 0; the outgoing unit gets `1 - gain`.
    fn fade_in(&self, i: usize) -> f32 {
        i as f32 / self.fade_samples as f32
    }

    /// Append `next` to `output`, blending across the boundary
    ///
    /// `tail_len` is how many samples at the end of `output` belong to the
    /// previous unit alone, i.e. were not already blended into the unit
    /// before it. When that tail or `next` is shorter than the overlap,
    /// `next` is appended as is. Returns the tail length `next` leaves
    /// behind for the following join.
    pub fn join(&self, output: &mut Vec<f32>, tail_len: usize, next: &[f32]) -> usize {
        let n = self.fade_samples;
        if n == 0 || tail_len < n || next.len() < n || output.len() < n {
            output.extend_from_slice(next);
            return next.len();
        }

        let start = output.len() - n;
        for (i, (out, &incoming)) in output[start..].iter_mut().zip(&next[..n]).enumerate() {
            let gain = self.fade_in(i);
            *out = *out * (1.0 - gain) + incoming * gain;
        }
        output.extend_from_slice(&next[n..]);
        next.len() - n
    }
}
