//! Audio buffers and the file/device collaborators around them

pub mod buffer;
pub mod player;
pub mod wav;

pub use buffer::AudioBuffer;
pub use player::Player;
pub use wav::{read_wav, write_wav};
