//! Priority-ordered gesture classification.

use crate::{
    config::ClassifierConfig,
    features::{FeatureExtractor, HandFeatures},
    gesture::GestureCategory,
    landmarks::HandFrame,
};

/// Map extracted features to a raw gesture
///
/// Rules are checked in order and the first match wins: pinch, fist, open
/// palm, then point for any other visible hand. The previous stable gesture
/// only enters through the thresholds already baked into `features`, so this
/// function is pure.
#[must_use]
pub fn classify(features: &HandFeatures, open_palm_min_fingers: usize) -> GestureCategory {
    let hand = match features {
        HandFeatures::NoHand => return GestureCategory::None,
        HandFeatures::Hand(hand) => hand,
    };

    if hand.pinch_distance < hand.pinch_threshold && !hand.index_scrunched {
        GestureCategory::Pinch
    } else if hand.all_folded() {
        GestureCategory::Fist
    } else if hand.open_count >= open_palm_min_fingers {
        GestureCategory::OpenPalm
    } else {
        GestureCategory::Point
    }
}

/// Feature extraction and classification for one hand
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    extractor: FeatureExtractor,
}

impl GestureClassifier {
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(config),
        }
    }

    #[must_use]
    pub const fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Classify one frame given the previous stable gesture
    #[must_use]
    pub fn classify(
        &self,
        frame: Option<&HandFrame>,
        last_stable: GestureCategory,
    ) -> GestureCategory {
        self.classify_frame(frame, last_stable).0
    }

    /// Classify one frame and keep the features it was classified from
    ///
    /// `HandFeatures::NoHand` marks a frame that must be handled exactly like
    /// a missing one, even though landmarks were supplied.
    #[must_use]
    pub fn classify_frame(
        &self,
        frame: Option<&HandFrame>,
        last_stable: GestureCategory,
    ) -> (GestureCategory, HandFeatures) {
        let features = self.extractor.extract(frame, last_stable);
        let gesture = classify(&features, self.extractor.config().open_palm_min_fingers);
        (gesture, features)
    }
}
