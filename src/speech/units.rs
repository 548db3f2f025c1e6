//! Diphone unit store
//!
//! Units live in a directory tree, one WAV file per diphone, named
//! `<phoneA>-<phoneB>.wav`. The store is keyed by file stem and never
//! changes after loading.

use crate::audio::{read_wav, AudioBuffer};
use crate::text::diphones::UNIT_EXTENSION;
use crate::text::DiphoneId;
use crate::{Result, SynthError};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Diphone name -> recorded audio
#[derive(Debug, Default, Clone)]
pub struct UnitStore {
    units: HashMap<String, AudioBuffer>,
}

impl UnitStore {
    /// Load every `.wav` file below `dir`
    ///
    /// Files are visited in sorted path order, so when two subdirectories
    /// hold the same stem the later path wins regardless of filesystem order.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("Loading diphone units from {:?}", dir);

        if !dir.is_dir() {
            return Err(SynthError::ExternalResource(format!(
                "Diphone directory not found: {}",
                dir.display()
            )));
        }

        let mut files = Vec::new();
        collect_files(dir, &mut files)?;
        files.sort();

        let mut store = Self::default();
        for path in files {
            let is_unit = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case(UNIT_EXTENSION))
                .unwrap_or(false);
            let stem = path.file_stem().and_then(|s| s.to_str());

            let Some(stem) = stem.filter(|_| is_unit) else {
                debug!("Skipping non-unit file {:?}", path);
                continue;
            };

            let audio = read_wav(&path).map_err(|e| {
                SynthError::ExternalResource(format!(
                    "Failed to load unit {}: {}",
                    path.display(),
                    e
                ))
            })?;

            if store.insert(stem, audio).is_some() {
                warn!("Duplicate diphone unit {}, using {:?}", stem, path);
            }
        }

        info!("Loaded {} diphone units from {}", store.len(), dir.display());
        Ok(store)
    }

    /// Build a store from named buffers
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = (S, AudioBuffer)>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Add a unit, returning any unit it replaced
    pub fn insert(&mut self, name: impl Into<String>, audio: AudioBuffer) -> Option<AudioBuffer> {
        self.units.insert(name.into(), audio)
    }

    pub fn get(&self, diphone: &DiphoneId) -> Option<&AudioBuffer> {
        self.units.get(diphone.name())
    }

    /// Look up by exact, case-sensitive stem
    pub fn get_by_name(&self, name: &str) -> Option<&AudioBuffer> {
        self.units.get(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        SynthError::ExternalResource(format!("Failed to read {}: {}", dir.display(), e))
    })?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::write_wav;
    use tempfile::tempdir;

    fn tone(rate: u32, len: usize, value: f32) -> AudioBuffer {
        AudioBuffer::new(rate, vec![value; len]).unwrap()
    }

    #[test]
    fn test_load_recurses_and_keys_by_stem() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("vowels");
        fs::create_dir(&nested).unwrap();

        write_wav(dir.path().join("pau-hh.wav"), &tone(16000, 10, 0.1)).unwrap();
        write_wav(nested.join("hh-ay.wav"), &tone(16000, 20, 0.2)).unwrap();
        fs::write(dir.path().join("README.txt"), "not audio").unwrap();

        let store = UnitStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&DiphoneId::new("HH", "AY")).unwrap().len(), 20);
        assert!(store.get_by_name("pau-hh").is_some());
        assert!(store.get_by_name("PAU-HH").is_none());
    }

    #[test]
    fn test_duplicate_stem_later_path_wins() {
        let dir = tempdir().unwrap();
        for sub in ["a", "b"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        write_wav(dir.path().join("a/k-ae.wav"), &tone(16000, 5, 0.0)).unwrap();
        write_wav(dir.path().join("b/k-ae.wav"), &tone(16000, 7, 0.0)).unwrap();

        let store = UnitStore::load(dir.path()).unwrap();
        assert_eq!(store.get_by_name("k-ae").unwrap().len(), 7);
    }

    #[test]
    fn test_missing_directory() {
        assert!(matches!(
            UnitStore::load("/nonexistent/diphones"),
            Err(SynthError::ExternalResource(_))
        ));
    }

    #[test]
    fn test_corrupt_unit_is_resource_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad-unit.wav"), b"RIFF garbage").unwrap();
        assert!(matches!(
            UnitStore::load(dir.path()),
            Err(SynthError::ExternalResource(_))
        ));
    }
}
