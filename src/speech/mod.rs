//! Audio side of the pipeline: unit store and concatenation

pub mod compositor;
pub mod crossfade;
pub mod units;

pub use compositor::{SynthOptions, Synthesizer, Volume, FALLBACK_SAMPLE_RATE};
pub use crossfade::{Crossfader, DEFAULT_CROSSFADE_MS};
pub use units::UnitStore;
