//! Bounded history of recent cursor positions for motion-trail rendering.

use crate::{constants::DEFAULT_MAX_TRAIL_LEN, landmarks::Position2D};
use std::collections::VecDeque;

/// FIFO of smoothed cursor positions, oldest first
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    max_len: usize,
    positions: VecDeque<Position2D>,
}

impl TrailBuffer {
    /// Create a new trail buffer
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is zero
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "Trail length must be greater than 0");
        Self {
            max_len,
            positions: VecDeque::with_capacity(max_len),
        }
    }

    /// Append the newest position, evicting the oldest when full
    pub fn push(&mut self, position: Position2D) {
        if self.positions.len() >= self.max_len {
            self.positions.pop_front();
        }
        self.positions.push_back(position);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Most recent position
    #[must_use]
    pub fn head(&self) -> Option<&Position2D> {
        self.positions.back()
    }

    /// Positions from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Position2D> {
        self.positions.iter()
    }

    /// Copy of the positions, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<Position2D> {
        self.positions.iter().copied().collect()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRAIL_LEN)
    }
}
