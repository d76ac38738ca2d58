pub mod controls;
pub mod helicopter;
pub mod kinematic;
pub mod orientation;

pub use controls::ControlChannels;
pub use helicopter::{Helicopter, PlayerController};
pub use kinematic::KinematicState;
pub use orientation::{Orientation, RotationFrame};
