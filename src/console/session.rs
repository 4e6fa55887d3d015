//! Interactive console session.
//!
//! Reads one command per line and writes narration (or JSON events) back.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::commands::{execute, parse_command, HELP};
use super::output::Output;
use crate::config::{OutputFormat, PlayerConfig};
use crate::error::{ErrorCode, Result};
use crate::playlist::{PlayEntry, Playlist};

/// State shared across all commands of a session.
pub struct Session {
    /// The playlist being played.
    pub playlist: Playlist,
    /// Player configuration.
    pub config: PlayerConfig,
    /// Source of randomness for shuffle play.
    rng: ChaCha8Rng,
    /// Set by `quit`.
    shutdown: bool,
}

impl Session {
    /// Creates a session; shuffles are reproducible when the config has a seed.
    pub fn new(playlist: Playlist, config: PlayerConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            playlist,
            config,
            rng,
            shutdown: false,
        }
    }

    /// Returns every song once in a random order.
    pub fn shuffle(&mut self) -> Result<Vec<PlayEntry<'_>>> {
        self.playlist.shuffle_order(&mut self.rng)
    }

    /// Signals the session to end after the current command.
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if the session has been asked to end.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    writer: W,
) -> Result<()> {
    let mut output = Output::new(writer, session.config.output);
    let interactive = output.format() == OutputFormat::Text;

    if interactive {
        output.message(HELP)?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            output.prompt("> ")?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(usage) => {
                output.message(&usage)?;
                continue;
            }
        };
        log::debug!("Running {:?}", command);

        match execute(command, session, &mut input, &mut output) {
            Ok(()) => {}
            Err(e) if e.code == ErrorCode::Io => return Err(e),
            Err(e) => output.error(&e)?,
        }

        if session.is_shutdown() {
            break;
        }
    }

    log::debug!("Session ended with {} songs", session.playlist.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session_with(songs: &[(&str, &str, i64)], max_plays: u32) -> Session {
        let mut playlist = Playlist::new();
        for &(title, artist, code) in songs {
            playlist.add_song(title, artist, code).unwrap();
        }
        let config = PlayerConfig {
            max_plays,
            shuffle_seed: Some(42),
            ..PlayerConfig::default()
        };
        Session::new(playlist, config)
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_session(session, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn linear_play_ends_without_prompt() {
        let mut session = session_with(&[("A", "X", 0), ("B", "Y", 1)], 10);
        let out = run(&mut session, "play\nquit\n");

        assert!(out.contains("Playing 'A' by 'X' (Genre: Pop) ..."));
        assert!(out.contains("Playing 'B' by 'Y' (Genre: Rock) ..."));
        assert!(!out.contains("still listening"));
        assert!(session.is_shutdown());
    }

    #[test]
    fn circular_play_asks_to_continue() {
        let mut session = session_with(&[("A", "X", 0), ("B", "Y", 1)], 3);
        let out = run(&mut session, "circular\nplay\nmaybe\ny\nn\n");

        assert!(out.contains("Music will play continuously from here on!"));
        assert_eq!(out.matches("Playing ").count(), 6);
        assert_eq!(out.matches("Are you still listening").count(), 2);
        assert_eq!(out.matches("I didn't get that").count(), 1);
    }

    #[test]
    fn conditions_are_reported_and_session_continues() {
        let mut session = session_with(&[], 10);
        let out = run(
            &mut session,
            "remove anything\nsort\nadd A,X,9\nadd A,X,pop\nlinear\nlist\n",
        );

        assert!(out.contains("Song 'anything' is not in the list"));
        assert!(out.contains("It is quiet here"));
        assert!(out.contains("Invalid genre 9"));
        assert!(out.contains("Added 'A' by 'X'."));
        assert!(out.contains("Music is already playing up to the last song"));
        assert!(out.contains("1 songs, linear playback"));
        assert_eq!(session.playlist.len(), 1);
    }

    #[test]
    fn sort_reverse_and_artist() {
        let mut session = session_with(&[("A", "X", 0), ("B", "Y", 1), ("C", "X", 0)], 10);
        let out = run(&mut session, "sort\nreverse\nartist X\nartist Nobody\n");

        assert!(out.contains("Playlist will play by genre from here on!"));
        assert!(out.contains("Playlist reversed (linear)."));
        let titles: Vec<_> = session.playlist.iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
        let c = out.find("Playing 'C'").unwrap();
        let a = out.find("Playing 'A'").unwrap();
        assert!(c < a);
        assert!(out.contains("Nothing to be played by Nobody right now"));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let songs = [("A", "X", 0), ("B", "Y", 1), ("C", "Z", 2), ("D", "W", 3)];
        let first = run(&mut session_with(&songs, 10), "shuffle\n");
        let second = run(&mut session_with(&songs, 10), "shuffle\n");

        assert_eq!(first, second);
        assert_eq!(first.matches("Playing ").count(), 4);
    }

    #[test]
    fn unknown_command_is_not_fatal() {
        let mut session = session_with(&[("A", "X", 0)], 10);
        let out = run(&mut session, "dance\nplay\n");
        assert!(out.contains("Unknown command 'dance'"));
        assert!(out.contains("Playing 'A'"));
    }

    #[test]
    fn json_session_emits_events() {
        let mut session = session_with(&[("A", "X", 0)], 10);
        session.config.output = OutputFormat::Json;
        let out = run(&mut session, "play\nlinear\n");

        let events: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "playing");
        assert_eq!(events[1]["event"], "error");
        assert_eq!(events[1]["code"], "ALREADY_IN_SHAPE");
    }
}
