//! Smoothed pointer tracking driven by the stable gesture.
//!
//! The tracker follows the index fingertip while a pointer gesture is held,
//! snapping to the first sample and easing toward later ones through a
//! [`PositionFilter`]. Reset gestures (`Fist`, `None`) drop the pointer at
//! once; any other gesture freezes it in place.

use crate::{
    filters::{exponential::ExponentialFilter, PositionFilter},
    gesture::GestureCategory,
    landmarks::Position2D,
};
use log::{debug, trace};

/// Tracker state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    /// No pointer
    #[default]
    Idle,
    /// Following the fingertip
    Tracking,
    /// Holding the last position
    Frozen,
}

/// What a tracker update did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorUpdate {
    /// Cursor moved toward a new fingertip sample
    Moved(Position2D),
    /// Cursor kept its last position
    Held(Position2D),
    /// Cursor was dropped by a reset gesture
    Reset,
    /// No cursor and nothing to track
    Inactive,
}

impl CursorUpdate {
    /// Position emitted this tick, if any
    #[must_use]
    pub const fn position(&self) -> Option<Position2D> {
        match self {
            Self::Moved(p) | Self::Held(p) => Some(*p),
            Self::Reset | Self::Inactive => None,
        }
    }
}

/// Exponentially smoothed, reset-aware pointer
pub struct CursorTracker {
    filter: Box<dyn PositionFilter>,
    pointer_gestures: Vec<GestureCategory>,
    mirror_x: bool,
    target: Option<Position2D>,
    current: Option<Position2D>,
    state: TrackerState,
}

impl CursorTracker {
    /// Create a tracker that moves for `Point` and `Pinch`
    #[must_use]
    pub fn new(filter: Box<dyn PositionFilter>) -> Self {
        Self {
            filter,
            pointer_gestures: vec![GestureCategory::Point, GestureCategory::Pinch],
            mirror_x: false,
            target: None,
            current: None,
            state: TrackerState::Idle,
        }
    }

    /// Create a tracker with an exponential filter of the given ratio
    ///
    /// # Panics
    ///
    /// Panics if `smoothing_factor` is not in (0, 1]
    #[must_use]
    pub fn with_smoothing(smoothing_factor: f64) -> Self {
        Self::new(Box::new(ExponentialFilter::new(smoothing_factor)))
    }

    /// Replace the gestures that move the cursor
    ///
    /// Reset gestures are ignored here; they always drop the cursor.
    #[must_use]
    pub fn pointer_gestures(mut self, gestures: &[GestureCategory]) -> Self {
        self.pointer_gestures = gestures.iter().copied().filter(|g| !g.is_reset()).collect();
        self
    }

    /// Mirror the x axis of incoming fingertip positions
    #[must_use]
    pub const fn mirror_x(mut self, mirror: bool) -> Self {
        self.mirror_x = mirror;
        self
    }

    /// Advance one tick
    ///
    /// `tip` is this tick's index fingertip in normalized image coordinates,
    /// or `None` when no hand was detected.
    pub fn update(&mut self, stable: GestureCategory, tip: Option<Position2D>) -> CursorUpdate {
        if stable.is_reset() {
            let was_active = self.current.is_some();
            self.reset();
            if was_active {
                debug!("Cursor reset by {}", stable);
            }
            return CursorUpdate::Reset;
        }

        if self.pointer_gestures.contains(&stable) {
            if let Some(tip) = tip {
                let tip = if self.mirror_x { Position2D::new(1.0 - tip.x, tip.y) } else { tip };
                self.target = Some(tip);
                // The filter passes its first sample through, so a fresh
                // cursor lands exactly on the fingertip.
                let current = self.filter.apply(tip);
                self.current = Some(current);
                if self.state != TrackerState::Tracking {
                    debug!("Cursor tracking at ({:.3}, {:.3})", current.x, current.y);
                }
                self.state = TrackerState::Tracking;
                trace!(
                    "Cursor target ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                    tip.x,
                    tip.y,
                    current.x,
                    current.y
                );
                return CursorUpdate::Moved(current);
            }
        }

        match self.current {
            Some(current) => {
                let pointing = self.pointer_gestures.contains(&stable);
                if self.state == TrackerState::Tracking && !pointing {
                    debug!("Cursor frozen by {}", stable);
                    self.state = TrackerState::Frozen;
                }
                CursorUpdate::Held(current)
            }
            None => CursorUpdate::Inactive,
        }
    }

    /// Drop the cursor and return to idle
    pub fn reset(&mut self) {
        self.filter.reset();
        self.target = None;
        self.current = None;
        self.state = TrackerState::Idle;
    }

    /// Smoothed cursor position
    #[must_use]
    pub const fn current(&self) -> Option<Position2D> {
        self.current
    }

    /// Latest fingertip sample
    #[must_use]
    pub const fn target(&self) -> Option<Position2D> {
        self.target
    }

    #[must_use]
    pub const fn state(&self) -> TrackerState {
        self.state
    }

    /// Name of the smoothing filter
    #[must_use]
    pub fn filter_name(&self) -> &str {
        self.filter.name()
    }
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::with_smoothing(crate::constants::DEFAULT_SMOOTHING_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = CursorTracker::default();
        assert_eq!(tracker.state(), TrackerState::Idle);
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.target(), None);
    }

    #[test]
    fn test_snap_then_smooth() {
        let mut tracker = CursorTracker::with_smoothing(0.5);
        let first = tracker.update(GestureCategory::Point, Some(Position2D::new(0.2, 0.2)));
        assert_eq!(first, CursorUpdate::Moved(Position2D::new(0.2, 0.2)));

        let second = tracker.update(GestureCategory::Pinch, Some(Position2D::new(0.4, 0.6)));
        let p = second.position().unwrap();
        assert!((p.x - 0.3).abs() < 1e-12);
        assert!((p.y - 0.4).abs() < 1e-12);
        assert_eq!(tracker.target(), Some(Position2D::new(0.4, 0.6)));
        assert_eq!(tracker.state(), TrackerState::Tracking);
    }

    #[test]
    fn test_open_palm_freezes() {
        let mut tracker = CursorTracker::default();
        tracker.update(GestureCategory::Point, Some(Position2D::new(0.5, 0.5)));
        let held = tracker.update(GestureCategory::OpenPalm, Some(Position2D::new(0.9, 0.9)));
        assert_eq!(held, CursorUpdate::Held(Position2D::new(0.5, 0.5)));
        assert_eq!(tracker.state(), TrackerState::Frozen);
    }

    #[test]
    fn test_open_palm_without_cursor_stays_idle() {
        let mut tracker = CursorTracker::default();
        let update = tracker.update(GestureCategory::OpenPalm, Some(Position2D::new(0.9, 0.9)));
        assert_eq!(update, CursorUpdate::Inactive);
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn test_open_palm_as_pointer_gesture() {
        let mut tracker = CursorTracker::default().pointer_gestures(&[
            GestureCategory::Point,
            GestureCategory::Pinch,
            GestureCategory::OpenPalm,
            GestureCategory::Fist,
        ]);
        let update = tracker.update(GestureCategory::OpenPalm, Some(Position2D::new(0.9, 0.9)));
        assert_eq!(update, CursorUpdate::Moved(Position2D::new(0.9, 0.9)));
        // Fist is filtered out of the pointer set and still resets.
        assert_eq!(tracker.update(GestureCategory::Fist, None), CursorUpdate::Reset);
    }

    #[test]
    fn test_reset_gestures() {
        for reset in [GestureCategory::Fist, GestureCategory::None] {
            let mut tracker = CursorTracker::default();
            tracker.update(GestureCategory::Point, Some(Position2D::new(0.5, 0.5)));
            assert_eq!(tracker.update(reset, Some(Position2D::new(0.5, 0.5))), CursorUpdate::Reset);
            assert_eq!(tracker.current(), None);
            assert_eq!(tracker.target(), None);
            assert_eq!(tracker.state(), TrackerState::Idle);
        }
    }

    #[test]
    fn test_mirror_x() {
        let mut tracker = CursorTracker::default().mirror_x(true);
        let update = tracker.update(GestureCategory::Point, Some(Position2D::new(0.25, 0.4)));
        assert_eq!(update, CursorUpdate::Moved(Position2D::new(0.75, 0.4)));
    }

    #[test]
    fn test_pointer_without_tip_holds() {
        let mut tracker = CursorTracker::default();
        tracker.update(GestureCategory::Point, Some(Position2D::new(0.3, 0.3)));
        let update = tracker.update(GestureCategory::Point, None);
        assert_eq!(update, CursorUpdate::Held(Position2D::new(0.3, 0.3)));
        assert_eq!(tracker.state(), TrackerState::Tracking);
    }
}
