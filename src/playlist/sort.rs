//! In-place genre sort.
//!
//! Bubble sort over the successor links: adjacent nodes are swapped by
//! relinking, never by moving records. Passes repeat until one performs no
//! swap. O(n²) in the worst case, which is fine for interactive playlists.

use super::{Link, Playlist};
use crate::error::{PlaylistError, Result};

impl Playlist {
    /// Sorts the playlist ascending by genre, keeping the relative order of
    /// songs with equal genres.
    ///
    /// Returns the number of link swaps performed. A single song is already
    /// sorted. A circular playlist is sorted as one revolution starting at the
    /// head and stays circular: the closing link travels with whichever node
    /// ends up as the tail.
    pub fn sort_by_genre(&mut self) -> Result<usize> {
        let Some(mut head) = self.head else {
            return Err(PlaylistError::empty_list());
        };

        let mut total = 0;
        loop {
            let mut swaps = 0;
            let mut previous = None;
            let mut current = head;

            while let Link::Next(next) = self.link(current) {
                if self[current].genre() > self[next].genre() {
                    // previous -> current -> next -> after
                    // becomes previous -> next -> current -> after
                    let after = self.link(next);
                    self.set_link(current, after);
                    self.set_link(next, Link::Next(current));
                    match previous {
                        Some(previous) => self.set_link(previous, Link::Next(next)),
                        None => head = next,
                    }
                    previous = Some(next);
                    swaps += 1;
                } else {
                    previous = Some(current);
                    current = next;
                }
            }

            total += swaps;
            if swaps == 0 {
                break;
            }
        }

        self.head = Some(head);
        log::debug!("Sorted {} songs by genre with {} swaps", self.len, total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::error::ErrorCode;
    use crate::playlist::Playlist;
    use crate::types::Genre;

    fn is_sorted(genres: &[Genre]) -> bool {
        genres.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn sort_is_stable() {
        let mut playlist = playlist_of(&[("A", 0), ("B", 1), ("C", 0)]);
        playlist.sort_by_genre().unwrap();
        assert_eq!(titles(&playlist), vec!["A", "C", "B"]);
        assert_eq!(genres(&playlist), vec![Genre::Pop, Genre::Pop, Genre::Rock]);
    }

    #[test]
    fn sort_moves_head() {
        let mut playlist = playlist_of(&[("A", 3), ("B", 2), ("C", 1)]);
        let swaps = playlist.sort_by_genre().unwrap();
        assert_eq!(swaps, 3);
        assert_eq!(titles(&playlist), vec!["C", "B", "A"]);
        assert_eq!(playlist[playlist.head().unwrap()].title(), "C");
        assert!(!playlist.is_circular());
    }

    #[test]
    fn sort_correctness_over_sizes() {
        let codes = [5, 1, 7, 1, 0, 3, 6, 2, 4, 0, 7, 3];
        for size in 2..=codes.len() {
            let songs: Vec<String> = (0..size).map(|i| format!("s{}", i)).collect();
            let pairs: Vec<(&str, i64)> = songs
                .iter()
                .zip(codes.iter())
                .map(|(t, g)| (t.as_str(), *g))
                .collect();
            let mut playlist = playlist_of(&pairs);

            playlist.sort_by_genre().unwrap();

            assert_eq!(playlist.len(), size);
            assert!(is_sorted(&genres(&playlist)), "size {}", size);
        }
    }

    #[test]
    fn sort_is_idempotent() {
        let mut playlist = playlist_of(&[("A", 4), ("B", 2), ("C", 4), ("D", 0), ("E", 2)]);
        playlist.sort_by_genre().unwrap();
        let once = titles(&playlist);

        assert_eq!(playlist.sort_by_genre().unwrap(), 0);
        assert_eq!(titles(&playlist), once);
        assert_eq!(once, vec!["D", "B", "E", "A", "C"]);
    }

    #[test]
    fn sort_single_is_noop() {
        let mut playlist = playlist_of(&[("A", 2)]);
        assert_eq!(playlist.sort_by_genre().unwrap(), 0);
        assert_eq!(titles(&playlist), vec!["A"]);
    }

    #[test]
    fn sort_empty_is_reported() {
        let mut playlist = Playlist::new();
        assert_eq!(playlist.sort_by_genre().unwrap_err().code, ErrorCode::EmptyList);
    }

    #[test]
    fn sort_circular_stays_circular() {
        let mut playlist = playlist_of(&[("A", 2), ("B", 0), ("C", 1), ("D", 0)]);
        playlist.make_circular().unwrap();

        playlist.sort_by_genre().unwrap();

        assert!(playlist.is_circular());
        assert_eq!(titles(&playlist), vec!["B", "D", "C", "A"]);
        playlist.make_linear().unwrap();
        assert_eq!(titles(&playlist), vec!["B", "D", "C", "A"]);
    }
}
