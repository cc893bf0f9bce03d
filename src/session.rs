//! Per-session tracking pipeline.
//!
//! A [`TrackingSession`] owns every piece of cross-tick state: the stability
//! window, the held stable gesture (fed back into classification), the cursor
//! and its trail. The driver calls [`TrackingSession::process_tick`] once per
//! frame; nothing inside blocks or performs I/O.

use crate::{
    classifier::GestureClassifier,
    config::Config,
    cursor::{CursorTracker, CursorUpdate},
    error::Result,
    features::HandFeatures,
    gesture::{GestureCategory, GestureEvent},
    landmarks::{HandFrame, LandmarkPoint, Position2D},
    stability::StabilityFilter,
    trail::TrailBuffer,
};
use log::{info, trace, warn};
use serde::Serialize;
use std::fmt::Display;

/// Pointer position for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorSnapshot {
    pub position: Option<Position2D>,
}

/// Trail positions for the renderer, oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailSnapshot {
    pub positions: Vec<Position2D>,
}

/// Everything produced by one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickOutput {
    pub gesture: GestureEvent,
    pub cursor: CursorSnapshot,
    pub trail: TrailSnapshot,
}

/// One hand tracking session
pub struct TrackingSession {
    classifier: GestureClassifier,
    stability: StabilityFilter,
    cursor: CursorTracker,
    trail: TrailBuffer,
    ticks: u64,
}

impl TrackingSession {
    /// Create a new session from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate or names an
    /// unknown smoothing filter.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let cursor = CursorTracker::new(config.create_filter()?)
            .pointer_gestures(&config.cursor.pointer_gestures)
            .mirror_x(config.cursor.mirror_x);

        let stability = StabilityFilter::new(
            config.stability.history_size,
            config.stability.consensus_fraction,
        );

        info!(
            "Tracking session started: window {} ({} votes), {} smoothing {}, trail {}",
            config.stability.history_size,
            stability.consensus_threshold(),
            cursor.filter_name(),
            config.cursor.smoothing_factor,
            config.trail.max_trail_len
        );

        Ok(Self {
            classifier: GestureClassifier::new(config.classifier.clone()),
            stability,
            cursor,
            trail: TrailBuffer::new(config.trail.max_trail_len),
            ticks: 0,
        })
    }

    /// Run the pipeline for one tick
    pub fn process_tick(&mut self, frame: Option<&HandFrame>) -> TickOutput {
        self.ticks += 1;

        let (raw, features) = self.classifier.classify_frame(frame, self.stability.stable());
        let stable = self.stability.update(raw);

        // Degenerate and non-finite frames carry no usable fingertip.
        let tip = match features {
            HandFeatures::Hand(_) => frame.map(HandFrame::index_tip),
            HandFeatures::NoHand => None,
        };

        match self.cursor.update(stable, tip) {
            CursorUpdate::Moved(position) | CursorUpdate::Held(position) => {
                self.trail.push(position);
            }
            CursorUpdate::Reset => self.trail.clear(),
            CursorUpdate::Inactive => {}
        }

        trace!("Tick {}: raw {} stable {}", self.ticks, raw, stable);

        TickOutput {
            gesture: GestureEvent {
                stable_gesture: stable,
                raw_gesture: raw,
            },
            cursor: CursorSnapshot {
                position: self.cursor.current(),
            },
            trail: TrailSnapshot {
                positions: self.trail.to_vec(),
            },
        }
    }

    /// Run one tick from raw detector output
    ///
    /// Detector errors, incomplete landmark sets and malformed coordinates are
    /// absorbed here and processed as a tick without a hand.
    pub fn process_detection<E: Display>(
        &mut self,
        detection: std::result::Result<Option<Vec<LandmarkPoint>>, E>,
    ) -> TickOutput {
        let frame = match detection {
            Ok(Some(points)) if points.is_empty() => None,
            Ok(Some(points)) => match HandFrame::from_landmarks(&points) {
                Ok(frame) => Some(frame),
                Err(e) => {
                    warn!("Discarding hand frame: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Detector fault: {}", e);
                None
            }
        };

        self.process_tick(frame.as_ref())
    }

    /// Currently held stable gesture
    #[must_use]
    pub const fn stable_gesture(&self) -> GestureCategory {
        self.stability.stable()
    }

    #[must_use]
    pub const fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    #[must_use]
    pub const fn stability(&self) -> &StabilityFilter {
        &self.stability
    }

    /// Number of ticks processed
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Return to the state of a freshly created session
    pub fn reset(&mut self) {
        self.stability.reset();
        self.cursor.reset();
        self.trail.clear();
        self.ticks = 0;
    }
}
