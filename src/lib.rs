//! lofi-playlist: a playlist engine over a singly linked list of tracks.
//!
//! The list can be linear (playback stops after the last song) or circular
//! (playback wraps around to the first song), and can switch between the two
//! at runtime.
//!
//! # Modules
//!
//! - [`types`]: Track records and the genre table (Track, Genre)
//! - [`playlist`]: The linked-list engine (Playlist, Shape, PlayEntry)
//! - [`loader`]: Bulk loading from a comma-separated file
//! - [`console`]: Interactive command session
//! - [`config`]: Runtime configuration (PlayerConfig, OutputFormat)
//! - [`error`]: Error types and codes (PlaylistError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use lofi_playlist::{Playlist, Shape};
//!
//! let mut playlist = Playlist::new();
//! playlist.add_song("A", "X", 0)?;
//! playlist.add_song("B", "Y", 1)?;
//! playlist.add_song("C", "Z", 0)?;
//!
//! playlist.sort_by_genre()?; // A, C, B
//! playlist.make_circular()?;
//! assert_eq!(playlist.shape(), Some(Shape::Circular));
//!
//! for entry in playlist.play_all().take(6) {
//!     println!("{}", entry);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod loader;
pub mod playlist;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{OutputFormat, PlayerConfig};
pub use error::{ErrorCode, PlaylistError, Result};
pub use playlist::{NodeId, PlayEntry, Playlist, Shape};
pub use types::{Genre, Track, GENRE_COUNT, GENRE_NAMES};
