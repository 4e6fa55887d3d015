//! The playlist engine: a singly linked list of tracks stored in an arena.
//!
//! Nodes live in a slot table and refer to their successor by index, so
//! splicing is O(1) and removal releases a slot instead of freeing memory
//! behind a live pointer.
//!
//! A playlist is always in one of two shapes:
//!
//! ```text
//! linear:    head -> B -> C -> End
//! circular:  head -> B -> C -> Wrap   (Wrap = back to the current head)
//! ```
//!
//! The closing edge of a circular list is the explicit [`Link::Wrap`] marker
//! rather than an index of the head node. Replacing the head (removal,
//! sorting, reversal) therefore never leaves the cycle pointing at a stale
//! node.
//!
//! Operations are split by concern:
//! - [`cycle`]: shape detection, closing and opening the cycle
//! - [`list`]: insertion, removal and reversal
//! - [`sort`]: in-place genre sort over the links
//! - [`traversal`]: playback order, artist selection and shuffle

pub mod cycle;
pub mod list;
pub mod sort;
pub mod traversal;

use std::ops::Index;

use serde::Serialize;

use crate::types::Track;

pub use traversal::{Play, PlayEntry};

/// Opaque handle to a node of a [`Playlist`].
///
/// A handle stays valid while its node is in the list. After the node is
/// removed the slot may be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Successor relation of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// The next node in traversal order.
    Next(NodeId),
    /// Closing edge of a circular list: the successor is the head.
    Wrap,
    /// Tail of a linear list.
    End,
}

/// The two shapes a non-empty playlist can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Traversal stops after the tail.
    Linear,
    /// Traversal continues from the head after the tail.
    Circular,
}

impl Shape {
    /// Returns the string representation of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Linear => "linear",
            Shape::Circular => "circular",
        }
    }

    /// The link a tail carries in this shape.
    pub(crate) fn tail_link(&self) -> Link {
        match self {
            Shape::Linear => Link::End,
            Shape::Circular => Link::Wrap,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
struct Node {
    track: Track,
    next: Link,
}

/// An ordered collection of tracks with a linear or circular shape.
#[derive(Debug, Default)]
pub struct Playlist {
    /// Node storage; `None` marks a released slot.
    slots: Vec<Option<Node>>,
    /// Released slot indices available for reuse.
    free: Vec<usize>,
    head: Option<NodeId>,
    len: usize,
}

impl Playlist {
    /// Creates an empty playlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of songs in the playlist.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the playlist has no songs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the track stored at `id`, or `None` for a released handle.
    pub fn get(&self, id: NodeId) -> Option<&Track> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.track)
    }

    /// Removes every song, releasing all nodes at once.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::debug!("Clearing playlist of {} songs", self.len);
        }
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Stores a node and returns its handle.
    fn alloc(&mut self, node: Node) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            NodeId(index)
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Releases a node's slot and hands back its track.
    fn release(&mut self, id: NodeId) -> Track {
        let node = match self.slots[id.0].take() {
            Some(node) => node,
            None => panic!("node {} released twice", id.0),
        };
        self.free.push(id.0);
        self.len -= 1;
        node.track
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Some(node) => node,
            None => panic!("stale node id {}", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => panic!("stale node id {}", id.0),
        }
    }

    pub(crate) fn link(&self, id: NodeId) -> Link {
        self.node(id).next
    }

    pub(crate) fn set_link(&mut self, id: NodeId, next: Link) {
        self.node_mut(id).next = next;
    }
}

/// Looks up the track held by a node.
///
/// # Panics
///
/// Panics if `id` names a node that has been removed, or that came from
/// another playlist. Use [`Playlist::get`] when the id may be stale.
impl Index<NodeId> for Playlist {
    type Output = Track;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.node(id).track
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::Genre;

    /// Builds a linear playlist from `(title, genre_code)` pairs.
    pub fn playlist_of(songs: &[(&str, i64)]) -> Playlist {
        let mut playlist = Playlist::new();
        for &(title, code) in songs {
            playlist
                .add_song(title, format!("artist {}", title), code)
                .unwrap();
        }
        playlist
    }

    /// Titles in one revolution of traversal order.
    pub fn titles(playlist: &Playlist) -> Vec<String> {
        playlist.iter().map(|t| t.title().to_string()).collect()
    }

    /// Genres in one revolution of traversal order.
    pub fn genres(playlist: &Playlist) -> Vec<Genre> {
        playlist.iter().map(|t| t.genre()).collect()
    }
}
