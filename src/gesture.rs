//! Gesture vocabulary and per-tick gesture events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete hand pose categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureCategory {
    /// No usable hand this tick
    #[default]
    None,
    /// Three or more fingers extended
    OpenPalm,
    /// All four fingers folded
    Fist,
    /// Any other visible hand
    Point,
    /// Thumb tip touching the extended index tip
    Pinch,
}

impl GestureCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 5] = [Self::None, Self::OpenPalm, Self::Fist, Self::Point, Self::Pinch];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::OpenPalm => "OpenPalm",
            Self::Fist => "Fist",
            Self::Point => "Point",
            Self::Pinch => "Pinch",
        }
    }

    /// Gestures that drop the cursor and its trail
    #[must_use]
    pub const fn is_reset(&self) -> bool {
        match self {
            Self::None | Self::Fist => true,
            Self::OpenPalm | Self::Point | Self::Pinch => false,
        }
    }

    /// Slot used by per-category counters
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        match self {
            Self::None => 0,
            Self::OpenPalm => 1,
            Self::Fist => 2,
            Self::Point => 3,
            Self::Pinch => 4,
        }
    }
}

impl fmt::Display for GestureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable gesture emitted once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// Debounced gesture
    pub stable_gesture: GestureCategory,
    /// Undebounced classification of this tick's frame
    pub raw_gesture: GestureCategory,
}
