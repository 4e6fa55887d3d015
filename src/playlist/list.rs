//! List mutators: insertion, removal and reversal.

use super::{Link, Node, NodeId, Playlist, Shape};
use crate::error::{PlaylistError, Result};
use crate::types::{Genre, Track};

impl Playlist {
    /// Adds a song at the tail of the playlist.
    ///
    /// Fails with `INVALID_GENRE` if `genre_code` is outside the closed set
    /// of genres and with `INVALID_FIELD` if a field is too long. On failure
    /// no node is created and the playlist is unchanged.
    pub fn add_song(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre_code: i64,
    ) -> Result<NodeId> {
        let genre = Genre::from_code(genre_code)
            .ok_or_else(|| PlaylistError::invalid_genre(genre_code))?;
        let track = Track::new(title, artist, genre)?;
        Ok(self.push(track))
    }

    /// Appends a track after the current tail, keeping the shape.
    ///
    /// The new node inherits the old tail's closing link, so a linear list
    /// stays linear and a circular one stays circular. The first node of an
    /// empty playlist becomes the head of a linear list.
    pub fn push(&mut self, track: Track) -> NodeId {
        match self.walk_to_tail() {
            Some((tail, closing)) => {
                let id = self.alloc(Node {
                    track,
                    next: closing,
                });
                self.set_link(tail, Link::Next(id));
                id
            }
            None => {
                debug_assert!(self.is_empty(), "non-empty playlist without a tail");
                let id = self.alloc(Node {
                    track,
                    next: Link::End,
                });
                self.head = Some(id);
                id
            }
        }
    }

    /// Removes the first song (in traversal order) with the given title.
    ///
    /// Returns the removed track. Fails with `NOT_FOUND` if the playlist is
    /// empty or no title matches.
    pub fn remove_song(&mut self, title: &str) -> Result<Track> {
        let head = self
            .head
            .ok_or_else(|| PlaylistError::song_not_found(title))?;

        if self[head].title() == title {
            // A sole node links to End or Wrap; either way the list empties.
            self.head = match self.link(head) {
                Link::Next(next) => Some(next),
                Link::Wrap | Link::End => None,
            };
            log::debug!("Removed '{}' from the head of the playlist", title);
            return Ok(self.release(head));
        }

        let mut previous = head;
        for _ in 1..self.len {
            let Link::Next(current) = self.link(previous) else {
                break;
            };
            if self[current].title() == title {
                let after = self.link(current);
                self.set_link(previous, after);
                log::debug!("Removed '{}' from the playlist", title);
                return Ok(self.release(current));
            }
            previous = current;
        }

        Err(PlaylistError::song_not_found(title))
    }

    /// Reverses the traversal order in one pass.
    ///
    /// The former tail becomes the head. The shape is kept: a circular
    /// playlist is reversed as a chain and then closed again. Returns the
    /// shape of the result.
    pub fn reverse(&mut self) -> Result<Shape> {
        let shape = self.shape().ok_or_else(PlaylistError::empty_list)?;
        let Some(old_head) = self.head else {
            return Err(PlaylistError::empty_list());
        };

        let mut previous = Link::End;
        let mut current = old_head;
        for _ in 0..self.len {
            let next = self.link(current);
            self.set_link(current, previous);
            match next {
                Link::Next(next) => {
                    previous = Link::Next(current);
                    current = next;
                }
                Link::Wrap | Link::End => break,
            }
        }

        self.head = Some(current);
        self.set_link(old_head, shape.tail_link());
        log::debug!("Reversed {} playlist of {} songs", shape, self.len);
        Ok(shape)
    }
}
