//! Display mode and selection control from stable gestures.
//!
//! An open palm spreads the scene out, a fist brings it back and drops any
//! selection, and a pinch over a hovered target selects it. Hit testing stays
//! with the caller, which reports the hovered target id on each event.

use crate::gesture::{GestureCategory, GestureEvent};
use log::info;
use serde::Serialize;
use std::fmt;

/// Scene layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisplayMode {
    #[default]
    Normal,
    Exploded,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Exploded => f.write_str("Exploded"),
        }
    }
}

/// State changes produced by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ControllerEvent {
    ModeChanged(DisplayMode),
    Selected(String),
    SelectionCleared,
}

/// Maps stable gestures to display mode and selection
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: DisplayMode,
    selected: Option<String>,
    clicking: bool,
}

impl ModeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick's gesture event
    ///
    /// `hovered` is the id of the target under the cursor, if any.
    #[must_use]
    pub fn handle(&mut self, event: &GestureEvent, hovered: Option<&str>) -> Vec<ControllerEvent> {
        let mut events = Vec::new();
        self.clicking = event.stable_gesture == GestureCategory::Pinch;

        match event.stable_gesture {
            GestureCategory::OpenPalm => self.set_mode(DisplayMode::Exploded, &mut events),
            GestureCategory::Fist => {
                self.set_mode(DisplayMode::Normal, &mut events);
                if let Some(previous) = self.selected.take() {
                    info!("Selection {} cleared", previous);
                    events.push(ControllerEvent::SelectionCleared);
                }
            }
            GestureCategory::Pinch => {
                if let Some(target) = hovered {
                    if self.selected.as_deref() != Some(target) {
                        info!("Selected {}", target);
                        self.selected = Some(target.to_string());
                        events.push(ControllerEvent::Selected(target.to_string()));
                    }
                }
            }
            GestureCategory::Point | GestureCategory::None => {}
        }

        events
    }

    fn set_mode(&mut self, mode: DisplayMode, events: &mut Vec<ControllerEvent>) {
        if self.mode != mode {
            info!("Display mode {} -> {}", self.mode, mode);
            self.mode = mode;
            events.push(ControllerEvent::ModeChanged(mode));
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Currently selected target id
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the last event was a held pinch
    #[must_use]
    pub const fn is_clicking(&self) -> bool {
        self.clicking
    }
}
