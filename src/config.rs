//! Player configuration module.
//!
//! Contains the runtime configuration for the playlist player: where the
//! playlist file lives, how many songs play before asking to continue,
//! the shuffle seed and the output format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Songs played in a row before asking whether the listener is still there.
pub const DEFAULT_MAX_PLAYS: u32 = 10;

/// Upper bound accepted for `max_plays`.
pub const MAX_PLAYS_LIMIT: u32 = 1000;

/// Output format of the console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable narration.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Parses a format from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime configuration for the player.
///
/// This configuration is typically loaded from environment variables at
/// startup and then overridden by command-line arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Path to the playlist file.
    /// If None, uses the platform-specific default data location.
    pub playlist_path: Option<PathBuf>,

    /// Songs played before asking to continue.
    pub max_plays: u32,

    /// Seed for shuffle play. If None, the shuffle is seeded from entropy.
    pub shuffle_seed: Option<u64>,

    /// Console output format.
    pub output: OutputFormat,
}

impl PlayerConfig {
    /// Creates a PlayerConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `LOFI_PLAYLIST_PATH` - Path to the playlist file
    /// - `LOFI_MAX_PLAYS` - Songs played before asking to continue (1-1000)
    /// - `LOFI_SHUFFLE_SEED` - Seed for shuffle play
    /// - `LOFI_OUTPUT` - Output format (text, json)
    ///
    /// Falls back to defaults for unset or invalid variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("LOFI_PLAYLIST_PATH") {
            config.playlist_path = Some(PathBuf::from(path));
        }

        if let Ok(plays_str) = std::env::var("LOFI_MAX_PLAYS") {
            if let Ok(plays) = plays_str.parse::<u32>() {
                if plays > 0 && plays <= MAX_PLAYS_LIMIT {
                    config.max_plays = plays;
                }
            }
        }

        if let Ok(seed_str) = std::env::var("LOFI_SHUFFLE_SEED") {
            if let Ok(seed) = seed_str.parse::<u64>() {
                config.shuffle_seed = Some(seed);
            }
        }

        if let Ok(output_str) = std::env::var("LOFI_OUTPUT") {
            if let Some(output) = OutputFormat::parse(&output_str) {
                config.output = output;
            }
        }

        config
    }

    /// Returns the effective playlist path, using platform defaults if not specified.
    pub fn effective_playlist_path(&self) -> PathBuf {
        if let Some(ref path) = self.playlist_path {
            path.clone()
        } else {
            default_playlist_path()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.max_plays == 0 {
            return Some("max_plays must be > 0".to_string());
        }
        if self.max_plays > MAX_PLAYS_LIMIT {
            return Some(format!(
                "max_plays too high: {} (max {})",
                self.max_plays, MAX_PLAYS_LIMIT
            ));
        }

        None
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playlist_path: None,
            max_plays: DEFAULT_MAX_PLAYS,
            shuffle_seed: None,
            output: OutputFormat::Text,
        }
    }
}

/// Returns the platform-specific default playlist path.
///
/// Uses the `directories` crate to find appropriate locations:
/// - macOS: ~/Library/Application Support/lofi.nvim/playlist.csv
/// - Linux: ~/.local/share/lofi.nvim/playlist.csv
/// - Windows: C:\Users\<user>\AppData\Roaming\lofi.nvim\data\playlist.csv
fn default_playlist_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "lofi.nvim") {
        proj_dirs.data_dir().join("playlist.csv")
    } else {
        // Fallback to current directory
        PathBuf::from("./playlist.csv")
    }
}
