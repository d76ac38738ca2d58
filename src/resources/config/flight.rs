use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::components::RotationFrame;
use crate::utils::{deg_to_rad, GRAVITY, MAX_SUBSTEPS, MAX_TIMESTEP};

/// Velocity retention model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Damping {
    None,
    /// Multiply by `retention` once per integration step, whatever `dt` is.
    /// Feels different at different frame rates.
    PerFrame { retention: f64 },
    /// Multiply by `retention^(dt * reference_rate)`, i.e. `retention` per
    /// `1 / reference_rate` seconds.
    Exponential { retention: f64, reference_rate: f64 },
}

impl Default for Damping {
    fn default() -> Self {
        Damping::Exponential {
            retention: 0.99,
            reference_rate: 60.0,
        }
    }
}

impl Damping {
    /// Multiplier to apply to a velocity after a step of `dt` seconds.
    pub fn factor(&self, dt: f64) -> f64 {
        match *self {
            Damping::None => 1.0,
            Damping::PerFrame { retention } => retention,
            Damping::Exponential {
                retention,
                reference_rate,
            } => retention.powf(dt * reference_rate),
        }
    }

    /// The same damping spread over `substeps` equal steps of one frame.
    ///
    /// `PerFrame` becomes `retention^(1 / substeps)` per substep, so a whole
    /// frame still retains `retention`. `Exponential` already scales with `dt`.
    pub fn per_substep(&self, substeps: u32) -> Self {
        match *self {
            Damping::PerFrame { retention } if substeps > 1 => Damping::PerFrame {
                retention: retention.powf(1.0 / substeps as f64),
            },
            other => other,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let retention = match *self {
            Damping::None => return Ok(()),
            Damping::PerFrame { retention } => retention,
            Damping::Exponential {
                retention,
                reference_rate,
            } => {
                if !(reference_rate.is_finite() && reference_rate > 0.0) {
                    return Err(ConfigError::invalid(
                        name,
                        format!("reference_rate must be positive, got {}", reference_rate),
                    ));
                }
                retention
            }
        };
        if !(retention > 0.0 && retention <= 1.0) {
            return Err(ConfigError::invalid(
                name,
                format!("retention must be in (0, 1], got {}", retention),
            ));
        }
        Ok(())
    }
}

/// How stick deflection turns into attitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AttitudeMode {
    /// Sticks set tilt angles directly, yaw stick sets a heading rate.
    DirectAngle {
        /// [rad] at full pitch/roll deflection
        max_tilt: f64,
        /// [rad/s] at full yaw deflection
        max_yaw_rate: f64,
    },
    /// Sticks set a target body rate that the craft eases into.
    AngularRate {
        /// [rad/s] at full deflection
        max_angular_rate: f64,
        /// [1/s], higher is snappier
        smoothing: f64,
    },
    /// Sticks apply an angular acceleration, rates bleed off through damping.
    Torque {
        /// [rad/s^2] at full deflection
        torque_strength: f64,
        angular_damping: Damping,
    },
}

impl Default for AttitudeMode {
    fn default() -> Self {
        Self::angular_rate()
    }
}

impl AttitudeMode {
    pub fn direct_angle() -> Self {
        AttitudeMode::DirectAngle {
            max_tilt: deg_to_rad(30.0),
            max_yaw_rate: 1.0,
        }
    }

    pub fn angular_rate() -> Self {
        AttitudeMode::AngularRate {
            max_angular_rate: 1.5,
            smoothing: 5.0,
        }
    }

    pub fn torque() -> Self {
        AttitudeMode::Torque {
            torque_strength: 0.5,
            angular_damping: Damping::PerFrame { retention: 0.98 },
        }
    }

    /// Mode to run on each of `substeps` substeps of one frame.
    pub fn per_substep(&self, substeps: u32) -> Self {
        match *self {
            AttitudeMode::Torque {
                torque_strength,
                angular_damping,
            } => AttitudeMode::Torque {
                torque_strength,
                angular_damping: angular_damping.per_substep(substeps),
            },
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = |name: &'static str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::invalid(
                    name,
                    format!("must be finite and non-negative, got {}", value),
                ))
            }
        };

        match *self {
            AttitudeMode::DirectAngle {
                max_tilt,
                max_yaw_rate,
            } => {
                non_negative("attitude.max_tilt", max_tilt)?;
                non_negative("attitude.max_yaw_rate", max_yaw_rate)
            }
            AttitudeMode::AngularRate {
                max_angular_rate,
                smoothing,
            } => {
                non_negative("attitude.max_angular_rate", max_angular_rate)?;
                non_negative("attitude.smoothing", smoothing)
            }
            AttitudeMode::Torque {
                torque_strength,
                angular_damping,
            } => {
                non_negative("attitude.torque_strength", torque_strength)?;
                angular_damping.validate("attitude.angular_damping")
            }
        }
    }
}

/// Limits on how a single tick is split into integration steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteppingConfig {
    /// Longest step [s]; longer ticks are split into equal substeps
    pub max_step: f64,
    /// Substeps per tick; time beyond `max_step * max_substeps` is dropped
    pub max_substeps: u32,
}

impl Default for SteppingConfig {
    fn default() -> Self {
        Self {
            max_step: MAX_TIMESTEP,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

/// Physical constants of a flight session, read-only while it runs.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Gravitational acceleration along world y [m/s^2], negative
    pub gravity: f64,
    /// [kg]
    pub mass: f64,
    /// Lift force at full throttle [N]
    pub max_throttle_gain: f64,
    /// Extra world-vertical lift as a fraction of the tilted lift, a stability aid
    pub collective_fraction: f64,
    /// Lowest permitted altitude [m]
    pub ground_clearance: f64,
    pub linear_damping: Damping,
    pub attitude: AttitudeMode,
    pub rotation_frame: RotationFrame,
    pub stepping: SteppingConfig,
    /// Where the craft spawns [m]
    pub start_position: Vector3<f64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            mass: 1.5,
            max_throttle_gain: 20.0,
            collective_fraction: 0.0,
            ground_clearance: 0.5,
            linear_damping: Damping::default(),
            attitude: AttitudeMode::default(),
            rotation_frame: RotationFrame::Body,
            stepping: SteppingConfig::default(),
            start_position: Vector3::new(0.0, 2.0, -2.0),
        }
    }
}

impl FlightConfig {
    pub fn with_attitude(mut self, attitude: AttitudeMode) -> Self {
        self.attitude = attitude;
        self
    }

    pub fn with_damping(mut self, damping: Damping) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Throttle that balances gravity while level.
    pub fn hover_throttle(&self) -> f64 {
        let lift_per_throttle = self.max_throttle_gain * (1.0 + self.collective_fraction);
        if lift_per_throttle <= 0.0 {
            return f64::INFINITY;
        }
        self.mass * -self.gravity / lift_per_throttle
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::invalid("gravity", "must be finite"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::invalid(
                "mass",
                format!("must be positive, got {}", self.mass),
            ));
        }
        if !(self.max_throttle_gain.is_finite() && self.max_throttle_gain >= 0.0) {
            return Err(ConfigError::invalid(
                "max_throttle_gain",
                format!("must be non-negative, got {}", self.max_throttle_gain),
            ));
        }
        if !(self.collective_fraction.is_finite() && self.collective_fraction >= 0.0) {
            return Err(ConfigError::invalid(
                "collective_fraction",
                format!("must be non-negative, got {}", self.collective_fraction),
            ));
        }
        if !self.ground_clearance.is_finite() {
            return Err(ConfigError::invalid("ground_clearance", "must be finite"));
        }
        if !(self.stepping.max_step.is_finite() && self.stepping.max_step > 0.0) {
            return Err(ConfigError::invalid(
                "stepping.max_step",
                format!("must be positive, got {}", self.stepping.max_step),
            ));
        }
        if self.stepping.max_substeps == 0 {
            return Err(ConfigError::invalid(
                "stepping.max_substeps",
                "must be at least 1",
            ));
        }
        if !self.start_position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::invalid("start_position", "must be finite"));
        }
        self.linear_damping.validate("linear_damping")?;
        self.attitude.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}
