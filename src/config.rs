//! Configuration management

use crate::speech::{DEFAULT_CROSSFADE_MS, FALLBACK_SAMPLE_RATE};
use crate::{Result, SynthError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Persistent synthesiser settings
///
/// Backed by an INI file (`~/.dsynth.cfg` unless a path is given). Command
/// line options take precedence over anything read here.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, writing defaults there if missing
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| SynthError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| SynthError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| SynthError::Config(format!("Failed to save config: {}", e)))
    }

    /// Default config file path (~/.dsynth.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dsynth.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("synth"))
            .set("diphones", "./diphones")
            .set("dictionary", "./cmudict.dict")
            .set("crossfade_ms", DEFAULT_CROSSFADE_MS.to_string())
            .set("fallback_rate", FALLBACK_SAMPLE_RATE.to_string());

        ini.with_section(Some("playback")).set("player", "auto");

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get an unsigned integer value from config
    pub fn get_uint(&self, section: &str, key: &str, default: u32) -> u32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Directory holding the diphone units
    pub fn diphones_dir(&self) -> PathBuf {
        PathBuf::from(self.get_string("synth", "diphones", "./diphones"))
    }

    /// CMU pronouncing dictionary file
    pub fn dictionary_path(&self) -> PathBuf {
        PathBuf::from(self.get_string("synth", "dictionary", "./cmudict.dict"))
    }

    /// Overlap between units when cross-fading, in milliseconds
    pub fn crossfade_ms(&self) -> f32 {
        let ms = self.get_float("synth", "crossfade_ms", DEFAULT_CROSSFADE_MS);
        if ms.is_finite() && ms >= 0.0 {
            ms
        } else {
            DEFAULT_CROSSFADE_MS
        }
    }

    /// Sample rate of an output with no units in it
    pub fn fallback_rate(&self) -> u32 {
        match self.get_uint("synth", "fallback_rate", FALLBACK_SAMPLE_RATE) {
            0 => FALLBACK_SAMPLE_RATE,
            rate => rate,
        }
    }

    /// Player command, or `auto` to probe for one
    pub fn player(&self) -> String {
        self.get_string("playback", "player", "auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_written_on_first_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsynth.cfg");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.diphones_dir(), PathBuf::from("./diphones"));
        assert_eq!(config.crossfade_ms(), DEFAULT_CROSSFADE_MS);
        assert_eq!(config.fallback_rate(), 16000);
        assert_eq!(config.player(), "auto");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsynth.cfg");
        std::fs::write(
            &path,
            "[synth]\ncrossfade_ms = -3\nfallback_rate = 0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.crossfade_ms(), DEFAULT_CROSSFADE_MS);
        assert_eq!(config.fallback_rate(), FALLBACK_SAMPLE_RATE);
    }

    #[test]
    fn test_set_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsynth.cfg");

        let mut config = Config::load_from(&path).unwrap();
        config.set("synth", "diphones", "/srv/units");
        config.save().unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.diphones_dir(), PathBuf::from("/srv/units"));
    }
}
