mod error;
pub mod flight;
pub mod input;
pub mod session;

pub use error::ConfigError;
pub use flight::{AttitudeMode, Damping, FlightConfig, SteppingConfig};
pub use input::{InputProfile, ThrottleConvention, ToggleBinding};
pub use session::SessionConfig;
