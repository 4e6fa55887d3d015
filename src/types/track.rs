//! Track type representing one song in a playlist.
//!
//! A Track is a passive record: title, artist and genre. It is immutable once
//! created; the playlist only moves it between nodes or hands it back on
//! removal.

use serde::Serialize;

use super::genre::Genre;
use crate::error::{PlaylistError, Result};

/// Maximum length of a title or artist in bytes.
pub const MAX_FIELD_LEN: usize = 99;

/// A song record.
///
/// Only [`Track::new`] builds one, so every resident track has bounded
/// fields. Tracks are written out as JSON but never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    title: String,
    artist: String,
    genre: Genre,
}

impl Track {
    /// Creates a new Track, validating the bounded fields.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, genre: Genre) -> Result<Self> {
        let title = title.into();
        let artist = artist.into();

        if title.len() > MAX_FIELD_LEN {
            return Err(PlaylistError::field_too_long("Title", title.len(), MAX_FIELD_LEN));
        }

        if artist.len() > MAX_FIELD_LEN {
            return Err(PlaylistError::field_too_long("Artist", artist.len(), MAX_FIELD_LEN));
        }

        Ok(Self {
            title,
            artist,
            genre,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }
}
