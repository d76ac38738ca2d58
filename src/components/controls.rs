use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The four normalized control channels, recomputed every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlChannels {
    /// Collective lift command, [0, 1] or [-1, 1] depending on the throttle convention.
    pub throttle: f64,
    /// Nose up positive, [-1, 1]
    pub pitch: f64,
    /// Right wing down positive, [-1, 1]
    pub roll: f64,
    /// Nose left positive, [-1, 1]
    pub yaw: f64,
}

impl ControlChannels {
    pub fn new(throttle: f64, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            throttle,
            pitch,
            roll,
            yaw,
        }
    }

    /// Throttle only, sticks centered.
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle,
            ..Default::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.throttle.is_finite()
            && self.pitch.is_finite()
            && self.roll.is_finite()
            && self.yaw.is_finite()
    }
}
