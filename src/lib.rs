//! Hand gesture tracking library for real-time pointer control.
//!
//! This library turns a per-frame stream of 21 hand landmarks (as produced by
//! MediaPipe-style hand detectors) into:
//! - a debounced gesture from a small fixed vocabulary
//!   (`None`, `OpenPalm`, `Fist`, `Point`, `Pinch`)
//! - a smoothed pointer position that snaps on first sight and resets when the
//!   hand closes or disappears
//! - a bounded motion trail of recent pointer positions
//!
//! The pipeline for each tick:
//! 1. Feature extraction over the landmark geometry
//! 2. Priority-ordered classification into a raw gesture
//! 3. Majority-vote stabilization over recent raw gestures
//! 4. Cursor smoothing and trail update driven by the stable gesture
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use hand_gesture_tracking::{config::Config, landmarks::HandFrame, session::TrackingSession};
//!
//! # fn detect() -> Option<HandFrame> { None }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TrackingSession::new(&Config::default())?;
//!
//! loop {
//!     // One detector result per frame
//!     let frame = detect();
//!     let output = session.process_tick(frame.as_ref());
//!
//!     println!("Gesture: {}", output.gesture.stable_gesture);
//!     if let Some(position) = output.cursor.position {
//!         println!("Cursor: ({:.3}, {:.3})", position.x, position.y);
//!     }
//! #   break;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw Detector Output
//!
//! ```no_run
//! use hand_gesture_tracking::{config::Config, landmarks::LandmarkPoint, session::TrackingSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TrackingSession::new(&Config::default())?;
//!
//! // Detector failures and short landmark lists count as "no hand"
//! let detection: Result<Option<Vec<LandmarkPoint>>, String> = Err("camera not ready".to_string());
//! let output = session.process_detection(detection);
//! assert!(output.cursor.position.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Display Mode Control
//!
//! ```no_run
//! use hand_gesture_tracking::{config::Config, mode::ModeController, session::TrackingSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TrackingSession::new(&Config::default())?;
//! let mut controller = ModeController::new();
//!
//! let output = session.process_tick(None);
//! for event in controller.handle(&output.gesture, None) {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

/// Hand landmark data model
pub mod landmarks;

/// Gesture vocabulary
pub mod gesture;

/// Geometric feature extraction
pub mod features;

/// Gesture classification
pub mod classifier;

/// Majority-vote gesture debouncing
pub mod stability;

/// Position smoothing filters
pub mod filters;

/// Smoothed cursor tracking
pub mod cursor;

/// Cursor motion trail
pub mod trail;

/// Per-session tracking pipeline
pub mod session;

/// Display mode and selection controller
pub mod mode;

/// Recorded landmark stream parsing
pub mod replay;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
pub use gesture::{GestureCategory, GestureEvent};
pub use session::{CursorSnapshot, TickOutput, TrackingSession, TrailSnapshot};
