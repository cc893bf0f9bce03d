//! Constants used throughout the library

/// Number of landmarks in a full hand frame
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Default number of raw gestures kept for majority voting
pub const DEFAULT_HISTORY_SIZE: usize = 5;

/// Default fraction of the window a gesture needs to become stable
pub const DEFAULT_CONSENSUS_FRACTION: f64 = 0.6;

/// Default per-tick cursor smoothing ratio
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.85;

/// Default trail length in ticks
pub const DEFAULT_MAX_TRAIL_LEN: usize = 25;

/// Tip/PIP distance ratio a finger must exceed to count as extended
pub const DEFAULT_EXTENSION_THRESHOLD_BASE: f64 = 1.0;

/// Relaxed extension ratio while the stable gesture is `OpenPalm`
pub const DEFAULT_EXTENSION_THRESHOLD_HYSTERESIS: f64 = 0.9;

/// Pinch acceptance distance, as a fraction of hand scale
pub const DEFAULT_PINCH_THRESHOLD_BASE: f64 = 0.2;

/// Widened pinch acceptance while the stable gesture is `Pinch`
pub const DEFAULT_PINCH_THRESHOLD_HYSTERESIS: f64 = 0.3;

/// Index tip to index MCP distance below which the index counts as scrunched
pub const DEFAULT_INDEX_SCRUNCH_FRACTION: f64 = 0.25;

/// Thumb tip to index MCP distance above which the thumb counts as open
pub const DEFAULT_THUMB_OPEN_FRACTION: f64 = 0.5;

/// Minimum wrist to middle MCP distance for a usable hand
pub const DEFAULT_MIN_HAND_SCALE: f64 = 1e-3;

/// Extended fingers required for an open palm
pub const DEFAULT_OPEN_PALM_MIN_FINGERS: usize = 3;

/// Exponential filter bounds
pub const SMOOTHING_FACTOR_MIN: f64 = 0.0;
pub const SMOOTHING_FACTOR_MAX: f64 = 1.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
