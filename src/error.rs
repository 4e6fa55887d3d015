//! Error types for the playlist engine.
//!
//! Defines all error codes and types used throughout the crate for
//! consistent error handling and reporting. None of the playlist
//! conditions are fatal; they are reported to the caller and the list is
//! left unchanged.

use std::fmt;

/// Error codes reported by playlist operations.
///
/// These codes allow callers (the console session, the JSON output mode)
/// to programmatically handle specific conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Genre code outside the closed set of genres.
    /// Trigger: insertion with a code `< 0` or `>= GENRE_COUNT`.
    InvalidGenre,

    /// Title or artist does not fit the record shape.
    /// Trigger: field longer than `MAX_FIELD_LEN` bytes.
    InvalidField,

    /// No record matched the requested title or artist.
    NotFound,

    /// Operation invoked on a playlist without songs.
    EmptyList,

    /// Playlist is already linear (or already circular).
    AlreadyInShape,

    /// Playlist file could not be read or has no header line.
    LoadFailed,

    /// Console input or output failed.
    Io,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidGenre => "INVALID_GENRE",
            ErrorCode::InvalidField => "INVALID_FIELD",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::EmptyList => "EMPTY_LIST",
            ErrorCode::AlreadyInShape => "ALREADY_IN_SHAPE",
            ErrorCode::LoadFailed => "LOAD_FAILED",
            ErrorCode::Io => "IO",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidGenre => "Genre code is not one of the known genres",
            ErrorCode::InvalidField => "Title or artist exceeds the maximum length",
            ErrorCode::NotFound => "No matching song in the playlist",
            ErrorCode::EmptyList => "The playlist has no songs",
            ErrorCode::AlreadyInShape => "The playlist already has the requested shape",
            ErrorCode::LoadFailed => "Failed to load the playlist file",
            ErrorCode::Io => "Console input or output failed",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidGenre => {
                "Use a genre code between 0 and 7 or a genre name (e.g., 'jazz')"
            }
            ErrorCode::InvalidField => "Shorten the title or artist to at most 99 bytes",
            ErrorCode::NotFound => "Check the spelling; titles and artists are case-sensitive",
            ErrorCode::EmptyList => "Add songs to continue",
            ErrorCode::AlreadyInShape => "Nothing to change",
            ErrorCode::LoadFailed => {
                "Check that the playlist file exists and starts with a header line \
                 (title,artist,genre)"
            }
            ErrorCode::Io => "Check that the terminal is still attached",
        }
    }

    /// Returns true for conditions that only mean "nothing to do".
    pub fn is_noop(&self) -> bool {
        matches!(self, ErrorCode::EmptyList | ErrorCode::AlreadyInShape)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for playlist operations.
#[derive(Debug)]
pub struct PlaylistError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PlaylistError {
    /// Creates a new PlaylistError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new PlaylistError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_GENRE error.
    pub fn invalid_genre(code: i64) -> Self {
        Self::new(
            ErrorCode::InvalidGenre,
            format!("Invalid genre {}. Song not added", code),
        )
    }

    /// Creates an INVALID_FIELD error.
    pub fn field_too_long(field: &str, len: usize, max: usize) -> Self {
        Self::new(
            ErrorCode::InvalidField,
            format!("{} too long: {} bytes (maximum {})", field, len, max),
        )
    }

    /// Creates a NOT_FOUND error for a missing title.
    pub fn song_not_found(title: &str) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("Song '{}' is not in the list", title),
        )
    }

    /// Creates a NOT_FOUND error for an artist without songs.
    pub fn artist_not_found(artist: &str) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("Nothing to be played by {} right now", artist),
        )
    }

    /// Creates an EMPTY_LIST error.
    pub fn empty_list() -> Self {
        Self::new(ErrorCode::EmptyList, "It is quiet here")
    }

    /// Creates an ALREADY_IN_SHAPE error for a playlist that is already circular.
    pub fn already_circular() -> Self {
        Self::new(
            ErrorCode::AlreadyInShape,
            "Music is already playing continuously",
        )
    }

    /// Creates an ALREADY_IN_SHAPE error for a playlist that is already linear.
    pub fn already_linear() -> Self {
        Self::new(
            ErrorCode::AlreadyInShape,
            "Music is already playing up to the last song",
        )
    }

    /// Creates a LOAD_FAILED error.
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::LoadFailed,
            format!("Failed to load playlist: {}", reason.into()),
        )
    }
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for PlaylistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for PlaylistError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Io, format!("I/O error: {}", err), err)
    }
}

/// Result type alias using PlaylistError.
pub type Result<T> = std::result::Result<T, PlaylistError>;
