//! Arcade rigid-body flight dynamics for a small helicopter.
//!
//! Each frame device readings are mapped to four control channels
//! (throttle, pitch, roll, yaw), which the integrator turns into the next
//! position, velocity, orientation and angular velocity. Use
//! [`FlightSession`] to drive it by hand or [`plugins::FlightPlugin`] to run
//! it inside a bevy app.

pub mod components;
pub mod plugins;
pub mod resources;
mod session;
pub mod systems;
pub mod utils;

pub use components::{ControlChannels, KinematicState, Orientation};
pub use resources::{FlightConfig, InputProfile, SessionConfig};
pub use session::{FlightSession, TickReport};
