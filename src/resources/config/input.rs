use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::resources::Handedness;

/// How the left vertical axis becomes a throttle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottleConvention {
    /// `(1 - v) / 2`: stick fully back is idle, fully forward is full lift. Range [0, 1].
    #[default]
    Collective,
    /// `-v`: forward climbs, back descends. Range [-1, 1].
    Bidirectional,
}

impl ThrottleConvention {
    pub fn apply(&self, vertical_axis: f64) -> f64 {
        match self {
            ThrottleConvention::Collective => (1.0 - vertical_axis) / 2.0,
            ThrottleConvention::Bidirectional => -vertical_axis,
        }
    }
}

/// A button that flips a discrete action on each press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBinding {
    pub hand: Handedness,
    pub button: usize,
}

/// Stick-to-channel conventions of a session.
///
/// Fixed mapping, with `s` the sensitivity:
/// * throttle from the left vertical axis, per [`ThrottleConvention`]
/// * `yaw = -left_horizontal * s`, stick right turns right
/// * `pitch = right_vertical * s`, stick forward (negative axis) lowers the nose
/// * `roll = right_horizontal * s`, stick right rolls right
///
/// Sensitivity is not a uniform scale over all four channels: throttle is
/// never scaled, so full collective (and hover) stays reachable at any
/// sensitivity.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputProfile {
    pub throttle: ThrottleConvention,
    /// Scale on pitch, roll and yaw only, in (0, 1]
    pub sensitivity: f64,
    /// Rate [1/s] at which channels chase the sticks; `None` follows them exactly
    pub smoothing: Option<f64>,
    pub toggle: Option<ToggleBinding>,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            throttle: ThrottleConvention::Collective,
            sensitivity: 1.0,
            smoothing: None,
            toggle: Some(ToggleBinding {
                hand: Handedness::Right,
                button: 4,
            }),
        }
    }
}

impl InputProfile {
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_smoothing(mut self, rate: f64) -> Self {
        self.smoothing = Some(rate);
        self
    }

    pub fn with_throttle(mut self, throttle: ThrottleConvention) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity > 0.0 && self.sensitivity <= 1.0) {
            return Err(ConfigError::invalid(
                "sensitivity",
                format!("must be in (0, 1], got {}", self.sensitivity),
            ));
        }
        if let Some(rate) = self.smoothing {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(ConfigError::invalid(
                    "smoothing",
                    format!("must be positive, got {}", rate),
                ));
            }
        }
        Ok(())
    }
}
