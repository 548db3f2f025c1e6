//! Text side of the pipeline: phrase -> tokens -> phonemes -> diphones

pub mod dictionary;
pub mod diphones;
pub mod normalizer;
pub mod phonemes;

pub use dictionary::{CmuDict, Lookup, Pronunciation, PronunciationDictionary};
pub use diphones::{sequence, DiphoneId};
pub use normalizer::{normalize, Token, PUNCTUATION};
pub use phonemes::{resolve, PAUSE};
