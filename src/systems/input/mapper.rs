use bevy::prelude::*;

use super::edge::RisingEdge;
use crate::components::ControlChannels;
use crate::resources::{DeviceFrame, Handedness, InputProfile};
use crate::utils::lerp;

/// Result of mapping one frame of device input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedInput {
    pub channels: ControlChannels,
    /// The toggle binding was pressed this frame.
    pub toggled: bool,
}

/// Per-craft mapping state: the latest stick targets, the smoothed channels
/// and the toggle edge detector.
#[derive(Component, Debug, Clone, Default)]
pub struct InputMapper {
    target: ControlChannels,
    channels: ControlChannels,
    toggle: RisingEdge,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from known channels, e.g. an idle throttle.
    pub fn with_channels(channels: ControlChannels) -> Self {
        Self {
            target: channels,
            channels,
            toggle: RisingEdge::default(),
        }
    }

    pub fn channels(&self) -> ControlChannels {
        self.channels
    }

    /// Map the readings in `frame` to control channels.
    ///
    /// Channels driven by a hand (or axis) missing from `frame` keep their
    /// previous target.
    pub fn map(&mut self, profile: &InputProfile, frame: &DeviceFrame, dt: f64) -> MappedInput {
        let sensitivity = profile.sensitivity;

        if let Some(left) = frame.hand(Handedness::Left) {
            if let Some(vertical) = left.vertical() {
                self.target.throttle = profile.throttle.apply(vertical);
            }
            if let Some(horizontal) = left.horizontal() {
                self.target.yaw = -horizontal * sensitivity;
            }
        }

        if let Some(right) = frame.hand(Handedness::Right) {
            if let Some(vertical) = right.vertical() {
                self.target.pitch = vertical * sensitivity;
            }
            if let Some(horizontal) = right.horizontal() {
                self.target.roll = horizontal * sensitivity;
            }
        }

        self.channels = match profile.smoothing {
            Some(rate) => {
                let factor = rate * dt.max(0.0);
                ControlChannels {
                    throttle: lerp(self.channels.throttle, self.target.throttle, factor),
                    pitch: lerp(self.channels.pitch, self.target.pitch, factor),
                    roll: lerp(self.channels.roll, self.target.roll, factor),
                    yaw: lerp(self.channels.yaw, self.target.yaw, factor),
                }
            }
            None => self.target,
        };

        let toggled = profile
            .toggle
            .and_then(|binding| {
                frame
                    .hand(binding.hand)
                    .map(|reading| reading.pressed(binding.button))
            })
            .map(|pressed| self.toggle.update(pressed))
            .unwrap_or(false);

        MappedInput {
            channels: self.channels,
            toggled,
        }
    }
}
