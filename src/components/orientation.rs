use bevy::math::Quat;
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{ANGULAR_RATE_EPSILON, ROTATION_ANGLE_EPSILON};

/// Which side a delta rotation is composed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationFrame {
    /// `q * delta`: rotate about the craft's own axes
    #[default]
    Body,
    /// `delta * q`: rotate about the fixed world axes
    World,
}

/// Attitude of the craft, rotation from body to world frame.
///
/// World frame is y-up, -z forward, +x right (the same axes bevy renders with).
/// Euler angles use the Y-X-Z order: heading about world up, then pitch about
/// the body right axis, then roll about the body forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Orientation(UnitQuaternion<f64>);

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitQuaternion<f64>> for Orientation {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Self(q)
    }
}

impl Orientation {
    pub fn identity() -> Self {
        Self(UnitQuaternion::identity())
    }

    /// Build from Y-X-Z Euler angles [rad].
    pub fn from_heading_pitch_roll(heading: f64, pitch: f64, roll: f64) -> Self {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch);
        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll);
        Self(yaw * pitch * roll)
    }

    /// Decompose into Y-X-Z Euler angles `(heading, pitch, roll)` [rad].
    pub fn to_heading_pitch_roll(&self) -> (f64, f64, f64) {
        let rotation = self.0.to_rotation_matrix();
        let m = rotation.matrix();
        let pitch = (-m[(1, 2)]).clamp(-1.0, 1.0).asin();

        if m[(1, 2)].abs() < 0.999_999_9 {
            let heading = m[(0, 2)].atan2(m[(2, 2)]);
            let roll = m[(1, 0)].atan2(m[(1, 1)]);
            (heading, pitch, roll)
        } else {
            // Gimbal lock, fold roll into heading
            let heading = (-m[(2, 0)]).atan2(m[(0, 0)]);
            (heading, pitch, 0.0)
        }
    }

    pub fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Self {
        if axis.norm() <= ANGULAR_RATE_EPSILON {
            return Self::identity();
        }
        Self(UnitQuaternion::from_axis_angle(
            &Unit::new_normalize(*axis),
            angle,
        ))
    }

    /// Apply `delta` about the body axes.
    pub fn compose_body(&self, delta: &Orientation) -> Self {
        Self(self.0 * delta.0)
    }

    /// Apply `delta` about the world axes.
    pub fn compose_world(&self, delta: &Orientation) -> Self {
        Self(delta.0 * self.0)
    }

    pub fn compose(&self, delta: &Orientation, frame: RotationFrame) -> Self {
        match frame {
            RotationFrame::Body => self.compose_body(delta),
            RotationFrame::World => self.compose_world(delta),
        }
    }

    /// Advance by `angular_velocity` [rad/s] for `dt` seconds.
    ///
    /// Near-zero rates leave the orientation untouched rather than normalizing
    /// a zero axis. The result is renormalized.
    pub fn integrate(&mut self, angular_velocity: &Vector3<f64>, dt: f64, frame: RotationFrame) {
        let rate = angular_velocity.norm();
        let angle = rate * dt;
        if rate <= ANGULAR_RATE_EPSILON || angle <= ROTATION_ANGLE_EPSILON {
            return;
        }

        let axis = Unit::new_normalize(*angular_velocity);
        let delta = Orientation(UnitQuaternion::from_axis_angle(&axis, angle));
        *self = self.compose(&delta, frame);
        self.renormalize();
    }

    /// Rescale the underlying quaternion to unit length.
    pub fn renormalize(&mut self) {
        self.0 = UnitQuaternion::new_normalize(self.0.into_inner());
    }

    /// Norm of the stored quaternion, 1 up to rounding.
    pub fn norm(&self) -> f64 {
        self.0.as_ref().norm()
    }

    pub fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    /// Body up axis in world coordinates
    pub fn up(&self) -> Vector3<f64> {
        self.rotate(&Vector3::y())
    }

    /// Body nose axis in world coordinates
    pub fn forward(&self) -> Vector3<f64> {
        self.rotate(&-Vector3::z())
    }

    pub fn right(&self) -> Vector3<f64> {
        self.rotate(&Vector3::x())
    }

    /// Smallest rotation angle [rad] between two orientations.
    pub fn angle_to(&self, other: &Orientation) -> f64 {
        self.0.angle_to(&other.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.as_ref().coords.iter().all(|c| c.is_finite())
    }

    pub fn as_unit_quaternion(&self) -> &UnitQuaternion<f64> {
        &self.0
    }

    /// Single precision copy for rendering.
    pub fn to_quat(&self) -> Quat {
        let c = self.0.as_ref().coords;
        Quat::from_xyzw(c.x as f32, c.y as f32, c.z as f32, c.w as f32)
    }
}
