//! Configuration management for the gesture tracking pipeline

use crate::{
    constants::{
        DEFAULT_CONSENSUS_FRACTION, DEFAULT_EXTENSION_THRESHOLD_BASE,
        DEFAULT_EXTENSION_THRESHOLD_HYSTERESIS, DEFAULT_HISTORY_SIZE,
        DEFAULT_INDEX_SCRUNCH_FRACTION, DEFAULT_MAX_TRAIL_LEN, DEFAULT_MIN_HAND_SCALE,
        DEFAULT_OPEN_PALM_MIN_FINGERS,
        DEFAULT_PINCH_THRESHOLD_BASE, DEFAULT_PINCH_THRESHOLD_HYSTERESIS, DEFAULT_SMOOTHING_FACTOR,
        DEFAULT_THUMB_OPEN_FRACTION, EPSILON, SMOOTHING_FACTOR_MAX, SMOOTHING_FACTOR_MIN,
    },
    gesture::GestureCategory,
    Error, Result,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feature extraction and classification thresholds
    pub classifier: ClassifierConfig,

    /// Majority-vote debouncing
    pub stability: StabilityConfig,

    /// Cursor smoothing
    pub cursor: CursorConfig,

    /// Motion trail
    pub trail: TrailConfig,
}

/// Classification thresholds
///
/// The hysteresis pairs are empirically tuned; the defaults must stay as they
/// are unless re-calibrated against recorded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Tip/PIP ratio for an extended finger
    pub extension_threshold_base: f64,

    /// Tip/PIP ratio while the stable gesture is `OpenPalm`
    pub extension_threshold_hysteresis: f64,

    /// Pinch distance as a fraction of hand scale
    pub pinch_threshold_base: f64,

    /// Pinch distance while the stable gesture is `Pinch`
    pub pinch_threshold_hysteresis: f64,

    /// Index tip to MCP fraction below which the index is scrunched
    pub index_scrunch_fraction: f64,

    /// Thumb tip to index MCP fraction above which the thumb is open
    pub thumb_open_fraction: f64,

    /// Smallest usable wrist to middle MCP distance
    pub min_hand_scale: f64,

    /// Extended fingers needed for an open palm
    pub open_palm_min_fingers: usize,
}

/// Majority vote configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Number of raw gestures in the voting window
    pub history_size: usize,

    /// Fraction of the window needed to adopt a new gesture
    pub consensus_fraction: f64,
}

/// Cursor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Smoothing filter name (`exponential` or `none`)
    pub filter: String,

    /// Per-tick lerp ratio toward the target
    pub smoothing_factor: f64,

    /// Mirror the x axis (selfie-view cameras)
    pub mirror_x: bool,

    /// Stable gestures that move the cursor
    pub pointer_gestures: Vec<GestureCategory>,
}

/// Trail configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Maximum number of trail positions
    pub max_trail_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extension_threshold_base: DEFAULT_EXTENSION_THRESHOLD_BASE,
            extension_threshold_hysteresis: DEFAULT_EXTENSION_THRESHOLD_HYSTERESIS,
            pinch_threshold_base: DEFAULT_PINCH_THRESHOLD_BASE,
            pinch_threshold_hysteresis: DEFAULT_PINCH_THRESHOLD_HYSTERESIS,
            index_scrunch_fraction: DEFAULT_INDEX_SCRUNCH_FRACTION,
            thumb_open_fraction: DEFAULT_THUMB_OPEN_FRACTION,
            min_hand_scale: DEFAULT_MIN_HAND_SCALE,
            open_palm_min_fingers: DEFAULT_OPEN_PALM_MIN_FINGERS,
        }
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            consensus_fraction: DEFAULT_CONSENSUS_FRACTION,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            filter: "exponential".to_string(),
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            mirror_x: false,
            pointer_gestures: vec![GestureCategory::Point, GestureCategory::Pinch],
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_trail_len: DEFAULT_MAX_TRAIL_LEN,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not a valid configuration.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create the cursor smoothing filter from configuration
    ///
    /// A bare `exponential` uses `cursor.smoothing_factor`; `exponential:<alpha>`
    /// carries its own ratio. Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` for unknown filter names or bad parameters.
    pub fn create_filter(&self) -> Result<Box<dyn crate::filters::PositionFilter>> {
        use crate::filters::{create_filter, exponential::ExponentialFilter};

        let name = self.cursor.filter.trim().to_lowercase();
        if name == "exponential" {
            check_smoothing_factor(self.cursor.smoothing_factor)?;
            return Ok(Box::new(ExponentialFilter::new(self.cursor.smoothing_factor)));
        }

        let custom_smoothing =
            (self.cursor.smoothing_factor - DEFAULT_SMOOTHING_FACTOR).abs() > EPSILON;
        if self.filter_has_parameter() && custom_smoothing {
            warn!(
                "Filter \"{}\" sets its own ratio; smoothing_factor {} is ignored",
                self.cursor.filter, self.cursor.smoothing_factor
            );
        }
        create_filter(&name)
    }

    /// Whether the filter name carries its own parameter, as in `exponential:0.7`
    #[must_use]
    pub fn filter_has_parameter(&self) -> bool {
        self.cursor.filter.contains(':')
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let classifier = &self.classifier;
        for (name, value) in [
            ("extension_threshold_base", classifier.extension_threshold_base),
            ("extension_threshold_hysteresis", classifier.extension_threshold_hysteresis),
            ("pinch_threshold_base", classifier.pinch_threshold_base),
            ("pinch_threshold_hysteresis", classifier.pinch_threshold_hysteresis),
            ("index_scrunch_fraction", classifier.index_scrunch_fraction),
            ("thumb_open_fraction", classifier.thumb_open_fraction),
            ("min_hand_scale", classifier.min_hand_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if classifier.extension_threshold_hysteresis > classifier.extension_threshold_base {
            return Err(Error::ConfigError(
                "extension_threshold_hysteresis must not exceed extension_threshold_base"
                    .to_string(),
            ));
        }
        if classifier.pinch_threshold_hysteresis < classifier.pinch_threshold_base {
            return Err(Error::ConfigError(
                "pinch_threshold_hysteresis must not be below pinch_threshold_base".to_string(),
            ));
        }
        if !(1..=4).contains(&classifier.open_palm_min_fingers) {
            return Err(Error::ConfigError(
                "open_palm_min_fingers must be between 1 and 4".to_string(),
            ));
        }

        if self.stability.history_size == 0 {
            return Err(Error::ConfigError(
                "History size must be greater than 0".to_string(),
            ));
        }
        if !(self.stability.consensus_fraction > 0.0 && self.stability.consensus_fraction <= 1.0) {
            return Err(Error::ConfigError(
                "Consensus fraction must be in (0, 1]".to_string(),
            ));
        }

        let smoothing = self.cursor.smoothing_factor;
        if !(smoothing > SMOOTHING_FACTOR_MIN && smoothing < SMOOTHING_FACTOR_MAX) {
            return Err(Error::ConfigError(
                "Smoothing factor must be in (0, 1)".to_string(),
            ));
        }
        if let Some(gesture) = self.cursor.pointer_gestures.iter().find(|g| g.is_reset()) {
            return Err(Error::ConfigError(format!(
                "{gesture} resets the cursor and cannot be a pointer gesture"
            )));
        }

        if self.trail.max_trail_len == 0 {
            return Err(Error::ConfigError(
                "Trail length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_smoothing_factor(alpha: f64) -> Result<()> {
    if alpha > SMOOTHING_FACTOR_MIN && alpha < SMOOTHING_FACTOR_MAX {
        Ok(())
    } else {
        Err(Error::FilterError(format!(
            "Smoothing factor must be in (0, 1), got {alpha}"
        )))
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Tracking Configuration

# Feature extraction thresholds (empirically tuned, change only with new calibration data)
classifier:
  extension_threshold_base: 1.0
  extension_threshold_hysteresis: 0.9
  pinch_threshold_base: 0.2
  pinch_threshold_hysteresis: 0.3
  index_scrunch_fraction: 0.25
  thumb_open_fraction: 0.5
  min_hand_scale: 0.001
  open_palm_min_fingers: 3

# Majority vote over recent raw gestures
stability:
  history_size: 5
  consensus_fraction: 0.6

# Cursor smoothing
cursor:
  filter: "exponential"
  smoothing_factor: 0.85
  mirror_x: false
  pointer_gestures: [Point, Pinch]

# Motion trail
trail:
  max_trail_len: 25
"#;
