//! Phoneme sequence to diphone unit names

use std::fmt;

/// File extension of stored diphone units
pub const UNIT_EXTENSION: &str = "wav";

/// Transition unit between two adjacent phonemes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiphoneId {
    name: String,
}

impl DiphoneId {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            name: format!("{}-{}", from.to_lowercase(), to.to_lowercase()),
        }
    }

    /// Unit name without extension, e.g. `hh-ay`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit file name, e.g. `hh-ay.wav`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, UNIT_EXTENSION)
    }
}

impl fmt::Display for DiphoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, UNIT_EXTENSION)
    }
}

/// Pair each phoneme with its successor
///
/// N phonemes give N-1 diphones; fewer than two give none.
pub fn sequence<S: AsRef<str>>(phones: &[S]) -> Vec<DiphoneId> {
    phones
        .windows(2)
        .map(|pair| DiphoneId::new(pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hi_diphones() {
        let phones = ["pau", "HH", "AY", "pau", "pau"];
        let names: Vec<String> = sequence(&phones).iter().map(|d| d.file_name()).collect();
        assert_eq!(
            names,
            vec!["pau-hh.wav", "hh-ay.wav", "ay-pau.wav", "pau-pau.wav"]
        );
    }

    #[test]
    fn test_count_is_one_less() {
        for n in 2..8 {
            let phones = vec!["AA"; n];
            assert_eq!(sequence(&phones).len(), n - 1);
        }
    }

    #[test]
    fn test_no_wrap_around() {
        let diphones = sequence(&["pau", "K", "AE", "T", "pau"]);
        assert_eq!(diphones.last().map(|d| d.name()), Some("t-pau"));
        assert!(diphones.iter().all(|d| d.name() != "pau-pau"));
    }

    #[test]
    fn test_display_matches_file_name() {
        let id = DiphoneId::new("HH", "AY");
        assert_eq!(id.to_string(), id.file_name());
        assert_eq!(id.name(), "hh-ay");
    }

    #[test]
    fn test_short_input() {
        assert!(sequence::<&str>(&[]).is_empty());
        assert!(sequence(&["pau"]).is_empty());
    }
}
