//! A phrase on its way to diphone unit names
//!
//! Each stage returns a fresh sequence; nothing is cached on the utterance,
//! so the intermediate tokens and phonemes are dropped once the caller is
//! done with them.

use crate::text::{normalize, resolve, sequence, DiphoneId, PronunciationDictionary, Token};
use crate::{Result, SynthError};
use log::debug;
use std::ffi::OsStr;

#[derive(Debug, Clone)]
pub struct Utterance {
    phrase: String,
}

impl Utterance {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }

    /// Accept a raw command-line argument, which may not be text at all
    pub fn from_os_str(phrase: &OsStr) -> Result<Self> {
        phrase.to_str().map(Self::new).ok_or_else(|| {
            SynthError::InvalidInput(format!(
                "{:?} is not valid UTF-8 text",
                phrase.to_string_lossy()
            ))
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Words and punctuation, optionally spelled out letter by letter
    pub fn word_seq(&self, spell: bool) -> Vec<Token> {
        normalize(&self.phrase, spell)
    }

    /// Phonemes for a token sequence, bounded by pauses
    pub fn phone_seq<D>(&self, tokens: &[Token], dict: &D) -> Result<Vec<String>>
    where
        D: PronunciationDictionary + ?Sized,
    {
        resolve(tokens, dict)
    }

    /// Adjacent phoneme pairs as diphone unit names
    pub fn diphone_seq<S: AsRef<str>>(&self, phones: &[S]) -> Vec<DiphoneId> {
        sequence(phones)
    }

    /// Run every text stage in order
    pub fn diphones<D>(&self, spell: bool, dict: &D) -> Result<Vec<DiphoneId>>
    where
        D: PronunciationDictionary + ?Sized,
    {
        let tokens = self.word_seq(spell);
        let phones = self.phone_seq(&tokens, dict)?;
        let diphones = self.diphone_seq(&phones);
        debug!(
            "{:?}: {} tokens, {} phonemes, {} diphones",
            self.phrase,
            tokens.len(),
            phones.len(),
            diphones.len()
        );
        Ok(diphones)
    }
}
