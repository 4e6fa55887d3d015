//! Console command parsing and dispatch.

use std::io::{BufRead, Write};

use super::output::Output;
use super::prompt::ask_continue;
use super::session::Session;
use crate::error::{PlaylistError, Result};
use crate::loader::{parse_record, split_record};
use crate::types::Genre;

/// Text shown by `help` and at session start.
pub const HELP: &str = "\
Commands:
  play                          play the playlist from the top
  shuffle                       play every song once in random order
  artist <name>                 play the songs by one artist
  add <title>,<artist>,<genre>  add a song (genre as code 0-7 or name)
  remove <title>                remove the first song with this title
  sort                          sort the playlist by genre
  circular                      play continuously
  linear                        stop after the last song
  reverse                       reverse the playlist
  list                          show the playlist
  help                          show this help
  quit                          leave";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Shuffle,
    Artist(String),
    Add {
        title: String,
        artist: String,
        genre_code: i64,
    },
    Remove(String),
    Sort,
    Circular,
    Linear,
    Reverse,
    List,
    Help,
    Quit,
}

/// Parses one input line.
///
/// Returns a usage message for unknown commands and missing arguments.
pub fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "play" => Command::Play,
        "shuffle" => Command::Shuffle,
        "artist" => Command::Artist(required(rest, "artist <name>")?.to_string()),
        "add" => parse_add(rest)?,
        "remove" | "delete" => Command::Remove(required(rest, "remove <title>")?.to_string()),
        "sort" => Command::Sort,
        "circular" => Command::Circular,
        "linear" => Command::Linear,
        "reverse" => Command::Reverse,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(format!("Unknown command '{}'. Type 'help' for commands", word)),
    };
    Ok(command)
}

fn required<'a>(rest: &'a str, usage: &str) -> std::result::Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(rest)
    }
}

/// Parses `add` arguments with the playlist file's record layout; the genre
/// may also be given by name.
fn parse_add(rest: &str) -> std::result::Result<Command, String> {
    const USAGE: &str = "Usage: add <title>,<artist>,<genre>";

    // Out-of-range codes are passed through so the playlist rejects them.
    let (title, artist, genre_code) = match parse_record(rest) {
        Some(record) => record,
        None => {
            let (title, artist, genre) = split_record(rest).ok_or(USAGE)?;
            let genre = Genre::parse(genre).ok_or_else(|| format!("Unknown genre '{}'", genre))?;
            (title, artist, genre.code() as i64)
        }
    };
    if title.is_empty() {
        return Err(USAGE.to_string());
    }

    Ok(Command::Add {
        title: title.to_string(),
        artist: artist.to_string(),
        genre_code,
    })
}

/// Runs a command against the session.
///
/// Playlist conditions come back as errors for the caller to report; they
/// never end the session.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    session: &mut Session,
    input: &mut R,
    output: &mut Output<W>,
) -> Result<()> {
    match command {
        Command::Play => play(session, input, output),
        Command::Shuffle => {
            let order = session.shuffle()?;
            for entry in &order {
                output.playing(entry)?;
            }
            Ok(())
        }
        Command::Artist(artist) => {
            for entry in session.playlist.play_by_artist(&artist)? {
                output.playing(&entry)?;
            }
            Ok(())
        }
        Command::Add {
            title,
            artist,
            genre_code,
        } => {
            session.playlist.add_song(title.as_str(), artist.as_str(), genre_code)?;
            output.message(&format!("Added '{}' by '{}'.", title, artist))
        }
        Command::Remove(title) => {
            let track = session.playlist.remove_song(&title)?;
            output.message(&format!("Removed '{}' by '{}'.", track.title(), track.artist()))
        }
        Command::Sort => {
            session.playlist.sort_by_genre()?;
            output.message("Playlist will play by genre from here on!")
        }
        Command::Circular => {
            session.playlist.make_circular()?;
            output.message("Music will play continuously from here on!")
        }
        Command::Linear => {
            session.playlist.make_linear()?;
            output.message("Music will stop playing when the playlist is over!")
        }
        Command::Reverse => {
            let shape = session.playlist.reverse()?;
            output.message(&format!("Playlist reversed ({}).", shape))
        }
        Command::List => list(session, output),
        Command::Help => output.message(HELP),
        Command::Quit => {
            session.shutdown();
            Ok(())
        }
    }
}

/// Plays from the head in batches of `max_plays`, asking between batches.
fn play<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut Output<W>,
) -> Result<()> {
    if session.playlist.is_empty() {
        return Err(PlaylistError::empty_list());
    }

    let batch = session.config.max_plays.max(1) as usize;
    let mut play = session.playlist.play_all().peekable();
    loop {
        for entry in play.by_ref().take(batch) {
            output.playing(&entry)?;
        }
        if play.peek().is_none() || !ask_continue(input, output)? {
            break;
        }
    }
    Ok(())
}

fn list<W: Write>(session: &Session, output: &mut Output<W>) -> Result<()> {
    let Some(shape) = session.playlist.shape() else {
        return Err(PlaylistError::empty_list());
    };
    output.message(&format!(
        "{} songs, {} playback",
        session.playlist.len(),
        shape.as_str()
    ))?;
    for (index, track) in session.playlist.iter().enumerate() {
        output.track(index + 1, &track.into())?;
    }
    Ok(())
}
