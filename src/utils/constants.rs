pub const GRAVITY: f64 = -9.81; // m/s^2, world +y is up

pub const MAX_TIMESTEP: f64 = 1.0 / 30.0; // Longest single integration step
pub const MAX_SUBSTEPS: u32 = 8; // Substeps allowed per tick before time is dropped

/// Below this angular rate [rad/s] the orientation is left untouched.
pub const ANGULAR_RATE_EPSILON: f64 = 1e-5;
/// Below this rotation angle [rad] a delta rotation is not built.
pub const ROTATION_ANGLE_EPSILON: f64 = 1e-9;
/// Smallest mass [kg] the integrator will divide by.
pub const MIN_MASS: f64 = 1e-6;

/// Standard WebXR thumbstick layout.
pub const HORIZONTAL_AXIS: usize = 2;
pub const VERTICAL_AXIS: usize = 3;
