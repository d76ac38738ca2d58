use bevy::prelude::*;

/// Marker for helicopter entities simulated by the flight systems.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Helicopter;

/// Routes the local device inputs to this craft while `active`.
///
/// An inactive craft keeps integrating with whatever channels it last had.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }
}
