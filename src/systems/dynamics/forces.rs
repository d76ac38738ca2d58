use nalgebra::Vector3;

use crate::components::{ControlChannels, Orientation};
use crate::resources::FlightConfig;
use crate::utils::MIN_MASS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceCategory {
    /// Rotor thrust along the body up axis
    Lift,
    /// Stabilized share of the thrust, always world-vertical
    Collective,
    Gravity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

impl Force {
    pub fn to_inertial(&self, orientation: &Orientation) -> Vector3<f64> {
        match self.frame {
            ReferenceFrame::Body => orientation.rotate(&self.vector),
            ReferenceFrame::Inertial => self.vector,
        }
    }
}

/// Forces acting on the craft for the given throttle.
pub fn flight_forces(controls: &ControlChannels, config: &FlightConfig) -> [Force; 3] {
    let thrust = controls.throttle * config.max_throttle_gain;
    [
        Force {
            vector: Vector3::new(0.0, thrust, 0.0),
            frame: ReferenceFrame::Body,
            category: ForceCategory::Lift,
        },
        Force {
            vector: Vector3::new(0.0, thrust * config.collective_fraction, 0.0),
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Collective,
        },
        Force {
            vector: Vector3::new(0.0, config.gravity * config.mass, 0.0),
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Gravity,
        },
    ]
}

/// Sum of `forces` in world frame [N].
pub fn net_force(forces: &[Force], orientation: &Orientation) -> Vector3<f64> {
    forces
        .iter()
        .fold(Vector3::zeros(), |sum, force| sum + force.to_inertial(orientation))
}

/// World-frame linear acceleration [m/s^2].
pub fn linear_acceleration(
    orientation: &Orientation,
    controls: &ControlChannels,
    config: &FlightConfig,
) -> Vector3<f64> {
    let forces = flight_forces(controls, config);
    net_force(&forces, orientation) / config.mass.max(MIN_MASS)
}
