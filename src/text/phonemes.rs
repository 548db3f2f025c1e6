//! Token sequence to phoneme sequence

use crate::text::dictionary::{Lookup, PronunciationDictionary};
use crate::text::Token;
use crate::{Result, SynthError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Silence marker used for punctuation and utterance boundaries
pub const PAUSE: &str = "pau";

/// Stress markers on CMU vowels (`AY1` -> `AY`)
static STRESS_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("stress digit regex is valid"));

/// Resolve tokens into phonemes
///
/// Punctuation becomes [`PAUSE`]; words take their first dictionary
/// pronunciation. Stress digits are stripped and the result is wrapped in a
/// leading and trailing pause, even when punctuation already put one there.
///
/// Fails with [`SynthError::UnknownWord`] on the first word the dictionary
/// does not know.
pub fn resolve<D>(tokens: &[Token], dict: &D) -> Result<Vec<String>>
where
    D: PronunciationDictionary + ?Sized,
{
    let mut phones = Vec::with_capacity(tokens.len() * 4 + 2);
    phones.push(PAUSE.to_string());

    for token in tokens {
        match token {
            Token::Punct(_) => phones.push(PAUSE.to_string()),
            Token::Word(word) => match dict.lookup(word) {
                Lookup::Found([primary, ..]) => {
                    phones.extend(primary.iter().map(|p| strip_stress(p)));
                }
                _ => return Err(SynthError::UnknownWord(word.clone())),
            },
        }
    }

    phones.push(PAUSE.to_string());
    debug!("Resolved {} tokens into {} phonemes", tokens.len(), phones.len());
    Ok(phones)
}

fn strip_stress(phone: &str) -> String {
    STRESS_DIGITS.replace_all(phone, "").into_owned()
}
