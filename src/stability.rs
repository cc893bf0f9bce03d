//! Majority-vote debouncing of raw gestures.
//!
//! Raw classifications flicker whenever a pose sits near a decision boundary.
//! The filter keeps the last `history_size` raw gestures and only adopts a new
//! stable gesture once it fills at least `ceil(history_size * fraction)` slots
//! of that window. Without such a majority the previous stable gesture is held.

use crate::{
    constants::{DEFAULT_CONSENSUS_FRACTION, DEFAULT_HISTORY_SIZE, EPSILON},
    gesture::GestureCategory,
};
use log::debug;
use std::collections::VecDeque;

/// Sliding-window majority vote over raw gestures
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    history_size: usize,
    consensus_threshold: usize,
    history: VecDeque<GestureCategory>,
    stable: GestureCategory,
}

impl StabilityFilter {
    /// Create a new stability filter
    ///
    /// # Panics
    ///
    /// Panics if `history_size` is zero or `consensus_fraction` is not in (0, 1]
    #[must_use]
    pub fn new(history_size: usize, consensus_fraction: f64) -> Self {
        assert!(history_size > 0, "History size must be greater than 0");
        assert!(
            consensus_fraction > 0.0 && consensus_fraction <= 1.0,
            "Consensus fraction must be in (0, 1], got {}",
            consensus_fraction
        );
        Self {
            history_size,
            consensus_threshold: consensus_threshold(history_size, consensus_fraction),
            history: VecDeque::with_capacity(history_size),
            stable: GestureCategory::None,
        }
    }

    /// Push a raw gesture and return the resulting stable gesture
    pub fn update(&mut self, raw: GestureCategory) -> GestureCategory {
        if self.history.len() >= self.history_size {
            self.history.pop_front();
        }
        self.history.push_back(raw);

        let mut counts = [0usize; GestureCategory::ALL.len()];
        for gesture in &self.history {
            counts[gesture.ordinal()] += 1;
        }

        // With fractions at or below one half two categories can both qualify;
        // the held gesture wins such ties.
        if counts[self.stable.ordinal()] >= self.consensus_threshold {
            return self.stable;
        }

        if let Some(&winner) = GestureCategory::ALL
            .iter()
            .filter(|g| counts[g.ordinal()] >= self.consensus_threshold)
            .max_by_key(|g| counts[g.ordinal()])
        {
            debug!(
                "Stable gesture {} -> {} ({}/{} votes)",
                self.stable,
                winner,
                counts[winner.ordinal()],
                self.history.len()
            );
            self.stable = winner;
        }

        self.stable
    }

    /// Currently held stable gesture
    #[must_use]
    pub const fn stable(&self) -> GestureCategory {
        self.stable
    }

    /// Votes required to change the stable gesture
    #[must_use]
    pub const fn consensus_threshold(&self) -> usize {
        self.consensus_threshold
    }

    /// Raw gestures currently in the window, oldest first
    #[must_use]
    pub const fn history(&self) -> &VecDeque<GestureCategory> {
        &self.history
    }

    /// Clear the window and return to `None`
    pub fn reset(&mut self) {
        self.history.clear();
        self.stable = GestureCategory::None;
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE, DEFAULT_CONSENSUS_FRACTION)
    }
}

/// Smallest vote count that forms a consensus
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn consensus_threshold(history_size: usize, fraction: f64) -> usize {
    let votes = (history_size as f64).mul_add(fraction, -EPSILON).ceil() as usize;
    votes.clamp(1, history_size)
}
