//! Configuration loading tests
//!
//! Tests that synthesiser configuration loads correctly
//! and provides expected default values

use dsynth::config::Config;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_loads_successfully() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(dir.path().join("dsynth.cfg")).expect("Failed to load config");

    assert_eq!(config.diphones_dir(), PathBuf::from("./diphones"));
    assert_eq!(config.dictionary_path(), PathBuf::from("./cmudict.dict"));
    assert_eq!(config.player(), "auto");
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dsynth.cfg");
    std::fs::write(
        &path,
        "[synth]\n\
         diphones = /opt/voices/kal\n\
         crossfade_ms = 25\n\
         [playback]\n\
         player = aplay\n",
    )
    .unwrap();

    let config = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(config.diphones_dir(), PathBuf::from("/opt/voices/kal"));
    assert_eq!(config.crossfade_ms(), 25.0);
    assert_eq!(config.player(), "aplay");

    // Keys missing from the file keep their defaults
    assert_eq!(config.fallback_rate(), 16000);
}

#[test]
fn test_crossfade_delay_in_range() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(dir.path().join("dsynth.cfg")).expect("Failed to load config");

    // Default overlap should be tens of milliseconds at most
    let ms = config.crossfade_ms();
    assert!(ms > 0.0 && ms < 100.0);
}
