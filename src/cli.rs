//! Command line definitions
//!
//! Lives in the library so the xtask crate can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PLAYBAR_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PLAYBAR_BUILD_DATE"),
    ")"
);

/// Playbar - terminal transport controls for a media source
#[derive(Debug, Parser)]
#[command(name = "playbar", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a media source with the control surface
    Play(PlayArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Media file to open
    pub source: PathBuf,

    /// Length of the media in seconds (unknown when omitted)
    #[arg(short, long, value_parser = parse_duration)]
    pub duration: Option<f64>,

    /// Initial volume slider value
    #[arg(long, value_parser = parse_finite)]
    pub volume: Option<f64>,

    /// Initial playback rate slider value
    #[arg(long, value_parser = parse_finite)]
    pub rate: Option<f64>,

    /// Write logs to this file (filter with PLAYBAR_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Any finite number. Range checks are left to the element.
fn parse_finite(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("expected a finite number, got '{}'", s)),
        Err(_) => Err(format!("invalid number '{}'", s)),
    }
}

/// Accepts plain seconds (`90`, `12.5`) or `MM:SS`.
fn parse_duration(s: &str) -> Result<f64, String> {
    let value = match s.split_once(':') {
        Some((mins, secs)) => {
            let mins: u64 = mins
                .parse()
                .map_err(|_| format!("invalid minutes in '{}'", s))?;
            let secs: f64 = secs
                .parse()
                .map_err(|_| format!("invalid seconds in '{}'", s))?;
            mins as f64 * 60.0 + secs
        }
        None => s
            .parse::<f64>()
            .map_err(|_| format!("invalid duration '{}'", s))?,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(format!("duration must be a non-negative number, got '{}'", s));
    }
    Ok(value)
}
