pub mod config;
mod device;
mod time;

pub use config::{
    AttitudeMode, ConfigError, Damping, FlightConfig, InputProfile, SessionConfig,
    SteppingConfig, ThrottleConvention, ToggleBinding,
};
pub use device::{DeviceFrame, Handedness, MenuState, StickReading};
pub use time::FrameClock;
