//! Traversal and selection.
//!
//! Nothing here rewires links: playback order, artist filtering and shuffling
//! only read the list.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{Link, NodeId, Playlist};
use crate::error::{PlaylistError, Result};
use crate::types::{Genre, Track};

/// One song as presented to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayEntry<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub genre: Genre,
}

impl<'a> From<&'a Track> for PlayEntry<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            title: track.title(),
            artist: track.artist(),
            genre: track.genre(),
        }
    }
}

impl fmt::Display for PlayEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playing '{}' by '{}' (Genre: {}) ...",
            self.title,
            self.artist,
            self.genre.name()
        )
    }
}

/// Iterator over one revolution of a playlist, head to tail.
///
/// Finite for both shapes: every node is yielded exactly once.
pub struct Iter<'a> {
    playlist: &'a Playlist,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        self.remaining -= 1;
        self.next = match self.playlist.link(id) {
            Link::Next(next) => Some(next),
            Link::Wrap | Link::End => None,
        };
        Some(&self.playlist[id])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Playback cursor following the successor links.
///
/// For a circular playlist the sequence never ends; take batches with
/// `play.by_ref().take(n)` and resume from where the last batch stopped.
pub struct Play<'a> {
    playlist: &'a Playlist,
    next: Option<NodeId>,
    played: usize,
}

impl Play<'_> {
    /// Number of entries yielded so far.
    pub fn played(&self) -> usize {
        self.played
    }
}

impl<'a> Iterator for Play<'a> {
    type Item = PlayEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = match self.playlist.link(id) {
            Link::Next(next) => Some(next),
            Link::Wrap => self.playlist.head,
            Link::End => None,
        };
        self.played += 1;
        Some(PlayEntry::from(&self.playlist[id]))
    }
}

impl Playlist {
    /// Returns an iterator over one revolution of the playlist.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Returns a playback cursor starting at the head.
    pub fn play_all(&self) -> Play<'_> {
        Play {
            playlist: self,
            next: self.head,
            played: 0,
        }
    }

    /// Returns the songs by `artist` (exact, case-sensitive) in traversal
    /// order.
    ///
    /// Fails with `EMPTY_LIST` when there are no songs at all and with
    /// `NOT_FOUND` when none of them is by `artist`.
    pub fn play_by_artist(&self, artist: &str) -> Result<Vec<PlayEntry<'_>>> {
        if self.is_empty() {
            return Err(PlaylistError::empty_list());
        }
        let entries: Vec<_> = self
            .iter()
            .filter(|track| track.artist() == artist)
            .map(PlayEntry::from)
            .collect();
        if entries.is_empty() {
            return Err(PlaylistError::artist_not_found(artist));
        }
        Ok(entries)
    }

    /// Returns every song exactly once in a random order.
    ///
    /// Uses a Fisher-Yates shuffle driven by the given generator; pass a
    /// seeded generator for a reproducible order.
    pub fn shuffle_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<PlayEntry<'_>>> {
        if self.is_empty() {
            return Err(PlaylistError::empty_list());
        }
        let mut order: Vec<_> = self.iter().map(PlayEntry::from).collect();
        order.shuffle(rng);
        Ok(order)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::error::ErrorCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn entry_display() {
        let track = Track::new("Stir It Up", "Bob Marley", Genre::Reggae).unwrap();
        assert_eq!(
            PlayEntry::from(&track).to_string(),
            "Playing 'Stir It Up' by 'Bob Marley' (Genre: Reggae) ..."
        );
    }

    #[test]
    fn iter_visits_each_node_once() {
        let mut playlist = playlist_of(&[("A", 0), ("B", 1), ("C", 2)]);
        assert_eq!(playlist.iter().len(), 3);
        playlist.make_circular().unwrap();
        assert_eq!(titles(&playlist), vec!["A", "B", "C"]);
        assert_eq!((&playlist).into_iter().count(), 3);
    }

    #[test]
    fn play_linear_ends() {
        let playlist = playlist_of(&[("A", 0), ("B", 1)]);
        let played: Vec<_> = playlist.play_all().map(|e| e.title).collect();
        assert_eq!(played, vec!["A", "B"]);
    }

    #[test]
    fn play_empty_yields_nothing() {
        let playlist = Playlist::new();
        assert_eq!(playlist.play_all().count(), 0);
    }

    #[test]
    fn play_circular_resumes_in_batches() {
        let mut playlist = playlist_of(&[("A", 0), ("B", 1), ("C", 2)]);
        playlist.make_circular().unwrap();

        let mut play = playlist.play_all();
        let first: Vec<_> = play.by_ref().take(2).map(|e| e.title).collect();
        let second: Vec<_> = play.by_ref().take(4).map(|e| e.title).collect();

        assert_eq!(first, vec!["A", "B"]);
        assert_eq!(second, vec!["C", "A", "B", "C"]);
        assert_eq!(play.played(), 6);
    }

    #[test]
    fn play_by_artist_keeps_order() {
        let mut playlist = Playlist::new();
        playlist.add_song("One", "X", 0).unwrap();
        playlist.add_song("Two", "Y", 1).unwrap();
        playlist.add_song("Three", "X", 2).unwrap();
        playlist.add_song("Four", "x", 3).unwrap();

        let titles: Vec<_> = playlist
            .play_by_artist("X")
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn play_by_artist_reports_missing_and_empty() {
        let playlist = playlist_of(&[("A", 0)]);
        let err = playlist.play_by_artist("Nobody").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("Nobody"));

        let empty = Playlist::new();
        assert_eq!(empty.play_by_artist("Nobody").unwrap_err().code, ErrorCode::EmptyList);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let playlist = playlist_of(&[("A", 0), ("B", 1), ("C", 2), ("D", 3), ("E", 4)]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let mut shuffled: Vec<_> = playlist
                .shuffle_order(&mut rng)
                .unwrap()
                .into_iter()
                .map(|e| e.title)
                .collect();
            shuffled.sort_unstable();
            assert_eq!(shuffled, vec!["A", "B", "C", "D", "E"]);
        }
    }

    #[test]
    fn shuffle_is_reproducible_and_read_only() {
        let mut playlist = playlist_of(&[("A", 0), ("B", 1), ("C", 2), ("D", 3)]);
        playlist.make_circular().unwrap();

        let first = playlist
            .shuffle_order(&mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        let second = playlist
            .shuffle_order(&mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(titles(&playlist), vec!["A", "B", "C", "D"]);
        assert!(playlist.is_circular());
    }

    #[test]
    fn shuffle_empty_is_reported() {
        let playlist = Playlist::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            playlist.shuffle_order(&mut rng).unwrap_err().code,
            ErrorCode::EmptyList
        );
    }
}
