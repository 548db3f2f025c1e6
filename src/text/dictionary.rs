//! Pronunciation dictionary
//!
//! The resolver only needs `lookup`, so the dictionary sits behind a trait and
//! is built once by the caller. [`CmuDict`] reads the CMU Pronouncing
//! Dictionary text format:
//!
//! ```text
//! ;;; comment
//! HI  HH AY1
//! READ  R EH1 D
//! READ(2)  R IY1 D
//! ```

use crate::{Result, SynthError};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One pronunciation: phoneme symbols, possibly with stress digits
pub type Pronunciation = Vec<String>;

/// Outcome of a dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Candidate pronunciations, primary entry first
    Found(&'a [Pronunciation]),
    NotFound,
}

/// Read-only word to pronunciations mapping
pub trait PronunciationDictionary {
    /// Look up a lowercase word
    fn lookup(&self, word: &str) -> Lookup<'_>;
}

/// In-memory CMU-style dictionary
#[derive(Debug, Default, Clone)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl CmuDict {
    /// Load a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading pronunciation dictionary from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            SynthError::ExternalResource(format!(
                "Failed to read dictionary {}: {}",
                path.display(),
                e
            ))
        })?;

        let dict = Self::parse(&contents);
        info!(
            "Loaded {} dictionary words from {}",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// Parse dictionary text; malformed lines are skipped
    pub fn parse(contents: &str) -> Self {
        let mut dict = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(headword) = fields.next() else {
                continue;
            };
            let phones: Pronunciation = fields
                .take_while(|f| !f.starts_with('#'))
                .map(str::to_string)
                .collect();
            if phones.is_empty() {
                continue;
            }

            dict.insert(strip_variant(headword), phones);
        }

        dict
    }

    /// Build a dictionary from `(word, phonemes)` pairs
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut dict = Self::default();
        for (word, phones) in entries {
            dict.insert(word, phones.iter().map(|p| p.to_string()).collect());
        }
        dict
    }

    /// Append a pronunciation; earlier ones stay primary
    pub fn insert(&mut self, word: &str, phones: Pronunciation) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phones);
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationDictionary for CmuDict {
    fn lookup(&self, word: &str) -> Lookup<'_> {
        match self.entries.get(word) {
            Some(prons) if !prons.is_empty() => Lookup::Found(prons),
            _ => Lookup::NotFound,
        }
    }
}

/// `READ(2)` -> `READ`
fn strip_variant(headword: &str) -> &str {
    match headword.find('(') {
        Some(idx) if idx > 0 && headword.ends_with(')') => &headword[..idx],
        _ => headword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
;;; sample
HI  HH AY1
READ  R EH1 D
READ(2)  R IY1 D
hello HH AH0 L OW1
EMPTY
";

    #[test]
    fn test_parse_and_lookup() {
        let dict = CmuDict::parse(SAMPLE);
        assert_eq!(dict.len(), 3);

        match dict.lookup("hi") {
            Lookup::Found(prons) => assert_eq!(prons[0], vec!["HH", "AY1"]),
            Lookup::NotFound => panic!("hi should be found"),
        }
        assert_eq!(dict.lookup("empty"), Lookup::NotFound);
        assert_eq!(dict.lookup("xyzzy"), Lookup::NotFound);
    }

    #[test]
    fn test_variants_keep_file_order() {
        let dict = CmuDict::parse(SAMPLE);
        match dict.lookup("read") {
            Lookup::Found(prons) => {
                assert_eq!(prons.len(), 2);
                assert_eq!(prons[0], vec!["R", "EH1", "D"]);
                assert_eq!(prons[1], vec!["R", "IY1", "D"]);
            }
            Lookup::NotFound => panic!("read should be found"),
        }
    }

    #[test]
    fn test_lookup_is_lowercase_only() {
        let dict = CmuDict::parse(SAMPLE);
        assert!(matches!(dict.lookup("hello"), Lookup::Found(_)));
        assert_eq!(dict.lookup("HELLO"), Lookup::NotFound);
    }

    #[test]
    fn test_from_entries() {
        let dict = CmuDict::from_entries([("a", &["AH0"][..]), ("a", &["EY1"][..])]);
        match dict.lookup("a") {
            Lookup::Found(prons) => assert_eq!(prons[0], vec!["AH0"]),
            Lookup::NotFound => panic!("a should be found"),
        }
    }

    #[test]
    fn test_strip_variant() {
        assert_eq!(strip_variant("READ(2)"), "READ");
        assert_eq!(strip_variant("(PAREN"), "(PAREN");
        assert_eq!(strip_variant("WORD"), "WORD");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CmuDict::load("/nonexistent/cmudict.dict"),
            Err(SynthError::ExternalResource(_))
        ));
    }
}
