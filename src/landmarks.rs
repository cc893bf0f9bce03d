//! Hand landmark data model.
//!
//! A [`HandFrame`] is the 21-point hand skeleton produced by a MediaPipe-style
//! hand detector, in normalized image coordinates. Indices follow the
//! anatomical scheme used by those detectors (wrist first, then thumb, index,
//! middle, ring and pinky from base to tip).

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One tracked anatomical point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    /// Horizontal position, nominally in [0, 1]
    pub x: f64,
    /// Vertical position, nominally in [0, 1]
    pub y: f64,
    /// Relative depth (unused by classification)
    #[serde(default)]
    pub z: f64,
}

impl LandmarkPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projected 2D position
    #[must_use]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Whether all coordinates are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Normalized 2D pointer position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (Vector2::from(*self) - Vector2::from(*other)).norm()
    }
}

impl From<Vector2<f64>> for Position2D {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Position2D> for Vector2<f64> {
    fn from(p: Position2D) -> Self {
        Self::new(p.x, p.y)
    }
}

/// The four non-thumb fingers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All non-thumb fingers in anatomical order
    pub const ALL: [Self; 4] = [Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    #[must_use]
    pub const fn mcp(self) -> usize {
        match self {
            Self::Index => INDEX_MCP,
            Self::Middle => MIDDLE_MCP,
            Self::Ring => RING_MCP,
            Self::Pinky => PINKY_MCP,
        }
    }

    #[must_use]
    pub const fn pip(self) -> usize {
        match self {
            Self::Index => INDEX_PIP,
            Self::Middle => MIDDLE_PIP,
            Self::Ring => RING_PIP,
            Self::Pinky => PINKY_PIP,
        }
    }

    #[must_use]
    pub const fn tip(self) -> usize {
        match self {
            Self::Index => INDEX_TIP,
            Self::Middle => MIDDLE_TIP,
            Self::Ring => RING_TIP,
            Self::Pinky => PINKY_TIP,
        }
    }

    /// Position in [`Finger::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Index => 0,
            Self::Middle => 1,
            Self::Ring => 2,
            Self::Pinky => 3,
        }
    }
}

/// A complete 21-landmark hand detection for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: [LandmarkPoint; NUM_HAND_LANDMARKS],
}

impl HandFrame {
    /// Build a frame from a fixed-size landmark array
    ///
    /// Coordinates are not validated here; use [`HandFrame::from_landmarks`]
    /// for detector output. Feature extraction treats a frame with any
    /// non-finite coordinate as no hand.
    #[must_use]
    pub const fn new(landmarks: [LandmarkPoint; NUM_HAND_LANDMARKS]) -> Self {
        Self { landmarks }
    }

    /// Build a frame from detector output
    ///
    /// Extra landmarks beyond the first 21 are ignored.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteFrame` if fewer than 21 landmarks are supplied, or
    /// `DetectorFault` if any of the used coordinates is not finite.
    pub fn from_landmarks(points: &[LandmarkPoint]) -> Result<Self> {
        if points.len() < NUM_HAND_LANDMARKS {
            return Err(Error::IncompleteFrame {
                expected: NUM_HAND_LANDMARKS,
                got: points.len(),
            });
        }

        let mut landmarks = [LandmarkPoint::default(); NUM_HAND_LANDMARKS];
        for (i, (slot, point)) in landmarks.iter_mut().zip(points).enumerate() {
            if !point.is_finite() {
                return Err(Error::DetectorFault(format!(
                    "Non-finite coordinate at landmark {i}: ({}, {}, {})",
                    point.x, point.y, point.z
                )));
            }
            *slot = *point;
        }

        Ok(Self { landmarks })
    }

    /// Landmark at an anatomical index
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 21.
    #[must_use]
    pub fn point(&self, index: usize) -> &LandmarkPoint {
        &self.landmarks[index]
    }

    /// All landmarks in anatomical order
    #[must_use]
    pub const fn landmarks(&self) -> &[LandmarkPoint; NUM_HAND_LANDMARKS] {
        &self.landmarks
    }

    /// 2D distance between two landmarks
    #[must_use]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        (self.landmarks[a].xy() - self.landmarks[b].xy()).norm()
    }

    /// Index fingertip, used as the pointer position
    #[must_use]
    pub fn index_tip(&self) -> Position2D {
        let tip = &self.landmarks[INDEX_TIP];
        Position2D::new(tip.x, tip.y)
    }
}
