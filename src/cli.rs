//! CLI argument parser.
//!
//! Command-line values override the configuration read from the
//! environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{OutputFormat, PlayerConfig, MAX_PLAYS_LIMIT};

/// Available console output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable narration
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// lofi-playlist: play, sort, shuffle and loop a playlist from the console
#[derive(Parser, Debug)]
#[command(name = "lofi-playlist")]
#[command(about = "Playlist player with linear and continuous playback")]
#[command(version)]
pub struct Cli {
    /// Playlist file (title,artist,genre per line after a header)
    #[arg(short, long)]
    pub playlist: Option<PathBuf>,

    /// Seed for reproducible shuffle play
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Songs played before asking to continue (1-1000)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_PLAYS_LIMIT as i64))]
    pub max_plays: Option<u32>,

    /// Console output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Overrides `config` with every option given on the command line.
    pub fn apply(&self, mut config: PlayerConfig) -> PlayerConfig {
        if let Some(ref path) = self.playlist {
            config.playlist_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.shuffle_seed = Some(seed);
        }
        if let Some(max_plays) = self.max_plays {
            config.max_plays = max_plays;
        }
        if let Some(output) = self.output {
            config.output = output.into();
        }
        config
    }
}
