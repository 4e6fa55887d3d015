//! lofi-playlist: console player for a linear or continuous playlist.
//!
//! Loads the playlist file, then reads commands from stdin and narrates
//! playback on stdout. Diagnostics go to stderr through `env_logger`
//! (`RUST_LOG=debug` for structural changes).

use std::io;

use lofi_playlist::cli::Cli;
use lofi_playlist::config::{PlayerConfig, DEFAULT_MAX_PLAYS};
use lofi_playlist::console::{run_session, Session};
use lofi_playlist::error::Result;
use lofi_playlist::loader::load_playlist;
use lofi_playlist::playlist::Playlist;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let mut config = cli.apply(PlayerConfig::from_env());

    if let Some(problem) = config.validate() {
        log::warn!("{}; using {} songs per batch", problem, DEFAULT_MAX_PLAYS);
        config.max_plays = DEFAULT_MAX_PLAYS;
    }

    let playlist = load_or_empty(&config);
    let mut session = Session::new(playlist, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock())
}

/// Loads the configured playlist file, starting empty if it cannot be read.
fn load_or_empty(config: &PlayerConfig) -> Playlist {
    let path = config.effective_playlist_path();
    let mut playlist = Playlist::new();

    match load_playlist(&path, &mut playlist) {
        Ok(report) if report.skipped > 0 => {
            eprintln!(
                "Loaded {} songs from {} ({} lines skipped)",
                report.loaded,
                path.display(),
                report.skipped
            );
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Starting with an empty playlist.");
            playlist.clear();
        }
    }

    playlist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_playlist_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayerConfig {
            playlist_path: Some(dir.path().join("missing.csv")),
            ..PlayerConfig::default()
        };
        assert!(load_or_empty(&config).is_empty());
    }
}
