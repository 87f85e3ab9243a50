//! Bear Dash entry point
//!
//! Headless native runner: plays a seeded run in demo mode at simulated 60 Hz
//! and prints the final frame snapshot as JSON. Rendering and real input are
//! left to a host shell.
//!
//! Usage: `bear-dash [--seed N] [--ticks N] [--catalog FILE] [--tuning FILE] [--settings FILE]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use bear_dash::audio::{AudioManager, LogSink};
use bear_dash::sim::{Catalog, GameEvent, GameState, TickInput, tick};
use bear_dash::{Settings, Tuning};

/// Headless Bear Dash runner
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Run seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Frames to simulate before giving up (60 per second)
    #[arg(
        long,
        value_name = "FRAMES",
        default_value_t = 60 * 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    ticks: u64,
    /// Archetype table (CSV rows); the built-in table is used when omitted
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Tuning JSON
    #[arg(long, value_name = "FILE")]
    tuning: Option<PathBuf>,
    /// Audio settings JSON
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bear Dash (headless) starting...");

    let options = Options::parse();

    let catalog = match &options.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };
    if catalog.is_empty() {
        log::warn!("Archetype catalog is empty - only shooters and items will spawn");
    }

    let tuning = match &options.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    // Preferences are optional; a broken file just means defaults
    let settings = match &options.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{} - using default settings", e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut state = GameState::new(options.seed, Arc::new(catalog), tuning);
    let mut audio = AudioManager::new(LogSink, &settings);
    log::info!("Game initialized with seed: {}", options.seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    for _ in 0..options.ticks {
        tick(&mut state, &input);
        audio.handle_events(&state.events);

        if let Some(GameEvent::GameOver { won, score }) = state
            .events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            log::info!(
                "Run over after {} ticks: {} with score {}",
                state.time_ticks,
                if *won { "won" } else { "lost" },
                score
            );
            break;
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["bear-dash"]).unwrap();
        assert_eq!(options.seed, 12345);
        assert_eq!(options.ticks, 3600);
        assert!(options.catalog.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let options = Options::try_parse_from([
            "bear-dash",
            "--seed",
            "9",
            "--ticks",
            "120",
            "--tuning",
            "balance.json",
        ])
        .unwrap();
        assert_eq!(options.seed, 9);
        assert_eq!(options.ticks, 120);
        assert_eq!(options.tuning, Some(PathBuf::from("balance.json")));
    }

    #[test]
    fn test_zero_ticks_rejected() {
        assert!(Options::try_parse_from(["bear-dash", "--ticks", "0"]).is_err());
        assert!(Options::try_parse_from(["bear-dash", "--seed", "-1"]).is_err());
    }
}
