//! Shape detection and topology conversion.
//!
//! Every topology-changing operation asks [`Playlist::shape`] first and
//! branches on the answer.

use super::{Link, NodeId, Playlist, Shape};
use crate::error::{PlaylistError, Result};

impl Playlist {
    /// Walks from the head to the tail.
    ///
    /// Visits each node at most once: the walk is bounded by `len` steps, so
    /// it terminates even if the links were corrupted.
    pub(super) fn walk_to_tail(&self) -> Option<(NodeId, Link)> {
        let mut current = self.head?;
        for _ in 0..self.len {
            match self.link(current) {
                Link::Next(next) => current = next,
                closing => return Some((current, closing)),
            }
        }
        log::warn!("Playlist tail not reached within {} steps", self.len);
        None
    }

    /// Returns true iff the tail's successor is the head.
    ///
    /// An empty playlist is linear.
    pub fn is_circular(&self) -> bool {
        matches!(self.walk_to_tail(), Some((_, Link::Wrap)))
    }

    /// Returns the shape of the playlist, or `None` when it is empty.
    pub fn shape(&self) -> Option<Shape> {
        if self.is_empty() {
            return None;
        }
        Some(if self.is_circular() {
            Shape::Circular
        } else {
            Shape::Linear
        })
    }

    /// Returns the tail: the node whose successor is `End` (linear) or the
    /// head (circular).
    pub fn tail(&self) -> Option<NodeId> {
        self.walk_to_tail().map(|(tail, _)| tail)
    }

    /// Closes the cycle: the tail's successor becomes the head.
    pub fn make_circular(&mut self) -> Result<()> {
        match self.shape() {
            None => Err(PlaylistError::empty_list()),
            Some(Shape::Circular) => Err(PlaylistError::already_circular()),
            Some(Shape::Linear) => {
                self.set_tail_link(Link::Wrap);
                log::debug!("Playlist of {} songs is now circular", self.len);
                Ok(())
            }
        }
    }

    /// Opens the cycle: the tail's successor becomes `End`.
    pub fn make_linear(&mut self) -> Result<()> {
        match self.shape() {
            None => Err(PlaylistError::empty_list()),
            Some(Shape::Linear) => Err(PlaylistError::already_linear()),
            Some(Shape::Circular) => {
                self.set_tail_link(Link::End);
                log::debug!("Playlist of {} songs is now linear", self.len);
                Ok(())
            }
        }
    }

    pub(crate) fn set_tail_link(&mut self, link: Link) {
        if let Some(tail) = self.tail() {
            self.set_link(tail, link);
        }
    }
}
