//! Geometric feature extraction over a single hand frame.
//!
//! All measurements are 2D distances between landmarks, normalized by the
//! wrist to middle-MCP distance where a threshold has to be scale-invariant.
//! The previous stable gesture relaxes the extension and pinch thresholds so a
//! pose that is already held does not flicker at the decision boundary.

use crate::{
    config::ClassifierConfig,
    gesture::GestureCategory,
    landmarks::{
        Finger, HandFrame, LandmarkPoint, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, THUMB_TIP, WRIST,
    },
};

/// Per-finger extension measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerState {
    /// Tip is far enough from the wrist relative to the PIP joint
    pub extended: bool,
    /// Tip is closer to the wrist than the PIP joint
    pub curled: bool,
}

/// Measurements of a detected hand
#[derive(Debug, Clone, PartialEq)]
pub struct HandMeasurements {
    /// Wrist to middle MCP distance
    pub hand_scale: f64,
    /// Index, middle, ring and pinky, in that order
    pub fingers: [FingerState; 4],
    /// Thumb held away from the index base
    pub thumb_open: bool,
    /// Thumb tip to index tip distance
    pub pinch_distance: f64,
    /// Pinch acceptance distance for this tick
    pub pinch_threshold: f64,
    /// Index tip folded onto its own base
    pub index_scrunched: bool,
    /// Number of extended non-thumb fingers
    pub open_count: usize,
}

impl HandMeasurements {
    #[must_use]
    pub const fn finger(&self, finger: Finger) -> &FingerState {
        &self.fingers[finger.index()]
    }

    /// No non-thumb finger is extended
    #[must_use]
    pub fn all_folded(&self) -> bool {
        self.fingers.iter().all(|f| !f.extended)
    }
}

/// Result of feature extraction for one tick
#[derive(Debug, Clone, PartialEq)]
pub enum HandFeatures {
    /// No frame, an incomplete frame, or a degenerate hand projection
    NoHand,
    /// A usable hand
    Hand(HandMeasurements),
}

/// Computes hand features using configured thresholds
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ClassifierConfig,
}

impl FeatureExtractor {
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Extract features from one frame
    ///
    /// `last_stable` is the debounced gesture from the previous tick.
    #[must_use]
    pub fn extract(&self, frame: Option<&HandFrame>, last_stable: GestureCategory) -> HandFeatures {
        let Some(frame) = frame else {
            return HandFeatures::NoHand;
        };
        // Frames built with `HandFrame::new` skip validation.
        if !frame.landmarks().iter().all(LandmarkPoint::is_finite) {
            return HandFeatures::NoHand;
        }

        let hand_scale = frame.distance(WRIST, MIDDLE_MCP);
        if !(hand_scale >= self.config.min_hand_scale) {
            return HandFeatures::NoHand;
        }

        let extension_threshold = if last_stable == GestureCategory::OpenPalm {
            self.config.extension_threshold_hysteresis
        } else {
            self.config.extension_threshold_base
        };

        let fingers = Finger::ALL.map(|finger| {
            let tip = frame.distance(WRIST, finger.tip());
            let pip = frame.distance(WRIST, finger.pip());
            FingerState {
                extended: tip > pip * extension_threshold,
                curled: tip < pip,
            }
        });

        let pinch_fraction = if last_stable == GestureCategory::Pinch {
            self.config.pinch_threshold_hysteresis
        } else {
            self.config.pinch_threshold_base
        };

        let open_count = fingers.iter().filter(|f| f.extended).count();

        HandFeatures::Hand(HandMeasurements {
            hand_scale,
            fingers,
            thumb_open: frame.distance(THUMB_TIP, INDEX_MCP)
                > hand_scale * self.config.thumb_open_fraction,
            pinch_distance: frame.distance(THUMB_TIP, INDEX_TIP),
            pinch_threshold: hand_scale * pinch_fraction,
            index_scrunched: frame.distance(INDEX_TIP, INDEX_MCP)
                < hand_scale * self.config.index_scrunch_fraction,
            open_count,
        })
    }
}
