use nalgebra::Vector3;

use crate::components::{ControlChannels, KinematicState, Orientation, RotationFrame};
use crate::resources::AttitudeMode;
use crate::utils::lerp_vector;

/// Stick deflection as a rotation axis: x pitch, y yaw, z roll (right roll is -z).
#[inline]
pub fn control_axis(controls: &ControlChannels) -> Vector3<f64> {
    Vector3::new(controls.pitch, controls.yaw, -controls.roll)
}

/// Advance the orientation (and angular velocity) of `state` by `dt`.
pub fn update_attitude(
    state: &mut KinematicState,
    controls: &ControlChannels,
    mode: &AttitudeMode,
    frame: RotationFrame,
    dt: f64,
) {
    match *mode {
        AttitudeMode::DirectAngle {
            max_tilt,
            max_yaw_rate,
        } => {
            let pitch = controls.pitch * max_tilt;
            let roll = -controls.roll * max_tilt;
            state.heading += controls.yaw * max_yaw_rate * dt;
            state.orientation = Orientation::from_heading_pitch_roll(state.heading, pitch, roll);
            state.angular_velocity = Vector3::zeros();
        }
        AttitudeMode::AngularRate {
            max_angular_rate,
            smoothing,
        } => {
            let target = control_axis(controls) * max_angular_rate;
            state.angular_velocity =
                lerp_vector(&state.angular_velocity, &target, smoothing * dt);
            state
                .orientation
                .integrate(&state.angular_velocity, dt, frame);
        }
        AttitudeMode::Torque {
            torque_strength,
            angular_damping,
        } => {
            state.angular_velocity += control_axis(controls) * torque_strength * dt;
            state.angular_velocity *= angular_damping.factor(dt);
            state
                .orientation
                .integrate(&state.angular_velocity, dt, frame);
        }
    }

    state.orientation.renormalize();
}
