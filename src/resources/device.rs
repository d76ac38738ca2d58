use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{HORIZONTAL_AXIS, VERTICAL_AXIS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    Left,
    Right,
}

/// One analog stick (plus buttons) as reported by the device layer.
///
/// Axes follow the WebXR thumbstick layout: index 2 horizontal (right
/// positive), index 3 vertical (forward/up negative). Values are expected in
/// [-1, 1]; range enforcement belongs to the device layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickReading {
    pub hand: Handedness,
    pub axes: Vec<f64>,
    pub buttons: Vec<bool>,
}

impl StickReading {
    pub fn new(hand: Handedness, axes: Vec<f64>, buttons: Vec<bool>) -> Self {
        Self {
            hand,
            axes,
            buttons,
        }
    }

    /// Reading from a single thumbstick, axes laid out at indices 2 and 3.
    pub fn from_stick(hand: Handedness, horizontal: f64, vertical: f64) -> Self {
        let mut axes = vec![0.0; VERTICAL_AXIS + 1];
        axes[HORIZONTAL_AXIS] = horizontal;
        axes[VERTICAL_AXIS] = vertical;
        Self {
            hand,
            axes,
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, index: usize, pressed: bool) -> Self {
        if self.buttons.len() <= index {
            self.buttons.resize(index + 1, false);
        }
        self.buttons[index] = pressed;
        self
    }

    pub fn axis(&self, index: usize) -> Option<f64> {
        self.axes.get(index).copied()
    }

    pub fn horizontal(&self) -> Option<f64> {
        self.axis(HORIZONTAL_AXIS)
    }

    pub fn vertical(&self) -> Option<f64> {
        self.axis(VERTICAL_AXIS)
    }

    /// Buttons the device did not report count as released.
    pub fn pressed(&self, button: usize) -> bool {
        self.buttons.get(button).copied().unwrap_or(false)
    }
}

/// Device readings for the current frame. Zero, one or two hands may be present.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DeviceFrame {
    pub readings: Vec<StickReading>,
}

impl DeviceFrame {
    pub fn new(readings: Vec<StickReading>) -> Self {
        Self { readings }
    }

    pub fn from_sticks(left: Option<StickReading>, right: Option<StickReading>) -> Self {
        Self {
            readings: left.into_iter().chain(right).collect(),
        }
    }

    /// First reading tagged with `hand`.
    pub fn hand(&self, hand: Handedness) -> Option<&StickReading> {
        self.readings.iter().find(|reading| reading.hand == hand)
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Visibility of the in-flight menu, flipped by the toggle binding.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub visible: bool,
}
