//! Genre tags and the genre name table.
//!
//! The set of genres is closed: a code outside `0..GENRE_COUNT` has no
//! `Genre` value, so every record that reaches a playlist carries a valid tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct genre tags.
pub const GENRE_COUNT: usize = 8;

/// Human-readable genre names, indexed by the tag's enumerated position.
pub const GENRE_NAMES: [&str; GENRE_COUNT] = [
    "Pop",
    "Rock",
    "Hip-Hop",
    "Jazz",
    "Classical",
    "Electronic",
    "Country",
    "Reggae",
];

/// Genre classification of a track.
///
/// Declaration order is the sort order used by
/// [`Playlist::sort_by_genre`](crate::playlist::Playlist::sort_by_genre).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Jazz,
    Classical,
    Electronic,
    Country,
    Reggae,
}

impl Genre {
    /// All genres in code order.
    pub const ALL: [Genre; GENRE_COUNT] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Classical,
        Genre::Electronic,
        Genre::Country,
        Genre::Reggae,
    ];

    /// Converts an integer code into a genre.
    ///
    /// Returns `None` for negative codes and codes `>= GENRE_COUNT`.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Returns the enumerated position of the genre.
    pub fn code(&self) -> usize {
        *self as usize
    }

    /// Returns the display name from the genre name table.
    pub fn name(&self) -> &'static str {
        GENRE_NAMES[self.code()]
    }

    /// Parses a genre from a numeric code or a case-insensitive name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        let wanted = s.to_lowercase().replace(['-', ' '], "");
        Self::ALL
            .into_iter()
            .find(|genre| genre.name().to_lowercase().replace('-', "") == wanted)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_closed_range() {
        assert_eq!(Genre::from_code(0), Some(Genre::Pop));
        assert_eq!(Genre::from_code(7), Some(Genre::Reggae));
        assert_eq!(Genre::from_code(GENRE_COUNT as i64), None);
        assert_eq!(Genre::from_code(-1), None);
    }

    #[test]
    fn codes_match_table_positions() {
        for (index, genre) in Genre::ALL.iter().enumerate() {
            assert_eq!(genre.code(), index);
            assert_eq!(genre.name(), GENRE_NAMES[index]);
        }
    }

    #[test]
    fn ordering_follows_codes() {
        assert!(Genre::Pop < Genre::Rock);
        assert!(Genre::Classical < Genre::Reggae);
    }

    #[test]
    fn parse_code_or_name() {
        assert_eq!(Genre::parse("3"), Some(Genre::Jazz));
        assert_eq!(Genre::parse("jazz"), Some(Genre::Jazz));
        assert_eq!(Genre::parse("Hip-Hop"), Some(Genre::HipHop));
        assert_eq!(Genre::parse("hiphop"), Some(Genre::HipHop));
        assert_eq!(Genre::parse("polka"), None);
        assert_eq!(Genre::parse("12"), None);
    }
}
