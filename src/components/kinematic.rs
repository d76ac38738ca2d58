use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::Orientation;
use crate::utils::is_finite_vector;

/// Kinematic state of the craft, mutated in place once per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude, rotation from body to world frame
    pub orientation: Orientation,

    /// Angular velocity [rad/s], body frame unless the config composes in world frame
    pub angular_velocity: Vector3<f64>,

    /// Accumulated heading [rad], only driven in direct-angle mode
    pub heading: f64,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            orientation: Orientation::identity(),
            angular_velocity: Vector3::zeros(),
            heading: 0.0,
        }
    }
}

impl KinematicState {
    /// At rest and level at `position`.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vector(&self.position)
            && is_finite_vector(&self.velocity)
            && is_finite_vector(&self.angular_velocity)
            && self.orientation.is_finite()
            && self.heading.is_finite()
    }

    /// Height above the ground floor [m].
    pub fn height_above(&self, ground_clearance: f64) -> f64 {
        self.position.y - ground_clearance
    }

    /// Render transform carrying position and orientation.
    pub fn to_transform(&self) -> Transform {
        Transform::from_xyz(
            self.position.x as f32,
            self.position.y as f32,
            self.position.z as f32,
        )
        .with_rotation(self.orientation.to_quat())
    }
}
