//! dsynth main entry point
//!
//! Synthesises a phrase using diphone unit selection, then plays it and/or
//! saves it to a WAV file.

use anyhow::{Context, Result};
use clap::Parser;
use dsynth::audio::{write_wav, Player};
use dsynth::config::Config;
use dsynth::speech::{SynthOptions, Synthesizer, UnitStore, Volume};
use dsynth::text::CmuDict;
use dsynth::Utterance;
use log::{debug, error, info};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

/// A basic text-to-speech app that synthesises an input phrase using diphone
/// unit selection.
#[derive(Debug, Parser)]
#[command(name = dsynth::APP_NAME)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The phrase to be synthesised
    phrase: OsString,

    /// Folder containing diphone wavs [default: ./diphones]
    #[arg(long)]
    diphones: Option<PathBuf>,

    /// Play the output audio
    #[arg(short, long)]
    play: bool,

    /// Save the output audio to a file
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Spell the phrase instead of pronouncing it
    #[arg(short, long)]
    spell: bool,

    /// Enable slightly smoother concatenation by cross-fading between diphone units
    #[arg(short, long)]
    crossfade: bool,

    /// An int between 0 and 100 representing the desired volume
    #[arg(short, long, allow_negative_numbers = true)]
    volume: Option<i32>,

    /// CMU pronouncing dictionary file [default: ./cmudict.dict]
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Configuration file [default: ~/.dsynth.cfg]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logging to dsynth.log
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    if cli.debug {
        // Debug mode: write to dsynth.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("dsynth.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open dsynth.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "dsynth version {} starting (debug mode, logging to dsynth.log)",
            dsynth::VERSION
        );
    } else {
        // Normal mode: RUST_LOG if set, otherwise warnings and errors only
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Configuration loaded from {:?}", config.path());

    let utterance = Utterance::from_os_str(&cli.phrase)?;
    info!("Phrase: {}", utterance.phrase());

    // Reject a bad volume before any loading work
    let volume = cli.volume.map(Volume::new).transpose()?;
    if let Some(volume) = volume {
        info!("Volume: {}%", volume.percent());
    }

    let dict_path = cli
        .dictionary
        .clone()
        .unwrap_or_else(|| config.dictionary_path());
    let dictionary = CmuDict::load(&dict_path)
        .with_context(|| format!("Cannot load pronunciation dictionary {}", dict_path.display()))?;
    let diphones = utterance.diphones(cli.spell, &dictionary)?;

    let unit_dir = cli.diphones.clone().unwrap_or_else(|| config.diphones_dir());
    info!("Diphone directory: {}", unit_dir.display());
    let units = UnitStore::load(&unit_dir)
        .with_context(|| format!("Cannot load diphone units from {}", unit_dir.display()))?;
    let synth = Synthesizer::new(units).with_fallback_rate(config.fallback_rate());

    let options = SynthOptions {
        crossfade: cli.crossfade,
        crossfade_ms: config.crossfade_ms(),
        volume,
    };
    let audio = synth.compose(&diphones, &options)?;
    info!(
        "Synthesised {:.2}s of audio at {} Hz",
        audio.duration(),
        audio.sample_rate()
    );

    if cli.play {
        Player::from_config(&config.player())
            .and_then(|player| player.play(&audio))
            .context("Cannot play the synthesised audio")?;
    }

    if let Some(outfile) = &cli.outfile {
        write_wav(outfile, &audio)
            .with_context(|| format!("Cannot save audio to {}", outfile.display()))?;
        info!("Saved output to {}", outfile.display());
    }

    Ok(())
}
