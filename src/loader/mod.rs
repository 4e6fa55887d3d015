//! Playlist loading module.
//!
//! Provides bulk population of a playlist from a delimited text file.

pub mod csv;

// Re-export commonly used items
pub use csv::{load_from_reader, load_playlist, parse_record, split_record, LoadReport};
