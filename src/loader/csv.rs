//! Comma-separated playlist file reader.
//!
//! The first line is a header and is skipped. Every following line is
//! `title,artist,genre_code`. Bad lines are skipped and logged; they never
//! abort the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ErrorCode, PlaylistError, Result};
use crate::playlist::Playlist;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the playlist.
    pub loaded: usize,
    /// Lines that were malformed or rejected by the playlist.
    pub skipped: usize,
}

/// Splits a `title,artist,genre` line into three trimmed fields.
///
/// Returns `None` unless the line has exactly three fields.
pub fn split_record(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.trim_end_matches(['\r', '\n']).split(',');
    let title = fields.next()?.trim();
    let artist = fields.next()?.trim();
    let genre = fields.next()?.trim();
    if fields.next().is_some() {
        return None;
    }
    Some((title, artist, genre))
}

/// Splits a `title,artist,genre_code` line into its fields.
///
/// Returns `None` if the line does not have exactly three fields or the
/// genre code is not an integer. The code itself is not range-checked here.
pub fn parse_record(line: &str) -> Option<(&str, &str, i64)> {
    let (title, artist, genre) = split_record(line)?;
    Some((title, artist, genre.parse().ok()?))
}

/// Loads records from a playlist file, appending them to `playlist`.
///
/// # Example
///
/// ```ignore
/// use lofi_playlist::{loader::load_playlist, Playlist};
///
/// let mut playlist = Playlist::new();
/// let report = load_playlist("songs.csv".as_ref(), &mut playlist)?;
/// ```
pub fn load_playlist(path: &Path, playlist: &mut Playlist) -> Result<LoadReport> {
    let file = File::open(path).map_err(|e| {
        PlaylistError::with_source(
            ErrorCode::LoadFailed,
            format!("Could not open file {}", path.display()),
            e,
        )
    })?;
    let report = load_from_reader(BufReader::new(file), playlist)?;
    log::info!(
        "Loaded {} songs from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );
    Ok(report)
}

/// Loads records from any buffered reader, appending them to `playlist`.
pub fn load_from_reader<R: BufRead>(reader: R, playlist: &mut Playlist) -> Result<LoadReport> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(PlaylistError::load_failed("file is empty")),
    }

    let mut report = LoadReport::default();
    for (index, line) in lines.enumerate() {
        let line = line?;
        // Header is line 1.
        let line_no = index + 2;

        if line.trim().is_empty() {
            continue;
        }

        let Some((title, artist, code)) = parse_record(&line) else {
            log::warn!("Skipping malformed line {}: {:?}", line_no, line);
            report.skipped += 1;
            continue;
        };

        match playlist.add_song(title, artist, code) {
            Ok(_) => report.loaded += 1,
            Err(e) => {
                log::warn!("Skipping line {}: {}", line_no, e.message);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
