//! Phrase normalisation into word and punctuation tokens

use log::debug;
use std::fmt;

/// Punctuation marks that become their own token and are spoken as a pause
pub const PUNCTUATION: [char; 5] = [',', '.', ':', '!', '?'];

/// One unit of a normalised phrase, in reading order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A lowercased word, or a single letter in spelling mode
    Word(String),
    /// One of [`PUNCTUATION`]
    Punct(char),
}

impl Token {
    pub fn is_punct(&self) -> bool {
        matches!(self, Token::Punct(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => f.write_str(word),
            Token::Punct(ch) => write!(f, "{}", ch),
        }
    }
}

/// Split a phrase into lowercase tokens
///
/// Every punctuation mark gets a space inserted before it so it splits off
/// from the preceding word. Nothing is inserted after a mark, so `"a,b"`
/// yields `a` and `,b`. Marks outside [`PUNCTUATION`] are not separated.
///
/// With `spell` set, each word token is replaced by one token per character;
/// punctuation tokens are left as they are. A mark glued to the front of a
/// word (`,b`) becomes a punctuation token when spelled out.
pub fn normalize(phrase: &str, spell: bool) -> Vec<Token> {
    let lower = phrase.to_lowercase();

    let mut spaced = String::with_capacity(lower.len() + 8);
    for ch in lower.chars() {
        if PUNCTUATION.contains(&ch) {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let tokens: Vec<Token> = spaced.split_whitespace().map(classify).collect();

    let tokens = if spell { spell_out(tokens) } else { tokens };
    debug!("Normalised {:?} into {} tokens", phrase, tokens.len());
    tokens
}

fn classify(piece: &str) -> Token {
    let mut chars = piece.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if PUNCTUATION.contains(&ch) => Token::Punct(ch),
        _ => Token::Word(piece.to_string()),
    }
}

fn spell_out(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .flat_map(|token| match token {
            Token::Word(word) => word
                .chars()
                .map(|ch| classify(ch.encode_utf8(&mut [0; 4])))
                .collect::<Vec<_>>(),
            punct => vec![punct],
        })
        .collect()
}
