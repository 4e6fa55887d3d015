//! Core types for the playlist engine.
//!
//! This module re-exports the record types stored in a playlist:
//! - [`Track`]: A song record (title, artist, genre)
//! - [`Genre`]: The closed set of genre tags and their display names

mod genre;
mod track;

// Re-export all types at the module level
pub use genre::{Genre, GENRE_COUNT, GENRE_NAMES};
pub use track::{Track, MAX_FIELD_LEN};
