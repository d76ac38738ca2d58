use bevy::prelude::*;
use nalgebra::Vector3;

use super::attitude::update_attitude;
use super::forces::linear_acceleration;
use crate::components::{ControlChannels, Helicopter, KinematicState};
use crate::resources::{AttitudeMode, Damping, FlightConfig};

/// What a call to [`step`] did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// `dt` was zero, negative or not finite; state untouched.
    Idle,
    /// State advanced over this many substeps.
    Advanced { substeps: u32 },
    /// The step produced non-finite values; the previous state was restored at rest.
    Recovered,
}

/// System advancing every helicopter by the frame time.
pub fn flight_integrator_system(
    mut query: Query<(&mut KinematicState, &ControlChannels), With<Helicopter>>,
    config: Res<FlightConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut state, controls) in query.iter_mut() {
        if step(&mut state, controls, &config, dt) == StepOutcome::Recovered {
            warn!("Flight state reset after non-finite integration step");
        }
    }
}

/// Advance `state` by `dt` seconds under `controls`.
///
/// Long frames are split into equal substeps of at most `stepping.max_step`;
/// frame time beyond `max_step * max_substeps` is dropped.
pub fn step(
    state: &mut KinematicState,
    controls: &ControlChannels,
    config: &FlightConfig,
    dt: f64,
) -> StepOutcome {
    if !(dt.is_finite() && dt > 0.0) {
        return StepOutcome::Idle;
    }

    let (substeps, sub_dt) =
        split_timestep(dt, config.stepping.max_step, config.stepping.max_substeps);
    let last_good = *state;
    let attitude = config.attitude.per_substep(substeps);
    let linear_damping = config.linear_damping.per_substep(substeps);

    let mut grounded = false;
    for _ in 0..substeps {
        grounded |= integrate_substep(
            state,
            controls,
            config,
            &attitude,
            &linear_damping,
            sub_dt,
        );
    }
    // A floor hit in any substep ends the frame without vertical velocity
    if grounded {
        state.velocity.y = 0.0;
    }

    if !state.is_finite() {
        *state = KinematicState {
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            ..last_good
        };
        return StepOutcome::Recovered;
    }

    StepOutcome::Advanced { substeps }
}

/// Number of substeps and their length for a frame of `dt` seconds.
pub fn split_timestep(dt: f64, max_step: f64, max_substeps: u32) -> (u32, f64) {
    let max_substeps = max_substeps.max(1);
    let wanted = (dt / max_step).ceil();
    if wanted <= max_substeps as f64 {
        let substeps = (wanted as u32).max(1);
        (substeps, dt / substeps as f64)
    } else {
        debug!(
            "Frame time {:.3}s exceeds {} substeps of {:.4}s, dropping the rest",
            dt, max_substeps, max_step
        );
        (max_substeps, max_step)
    }
}

/// One explicit integration step: attitude, forces, velocity, damping,
/// position, ground floor. Returns true when the floor was hit.
fn integrate_substep(
    state: &mut KinematicState,
    controls: &ControlChannels,
    config: &FlightConfig,
    attitude: &AttitudeMode,
    linear_damping: &Damping,
    dt: f64,
) -> bool {
    update_attitude(state, controls, attitude, config.rotation_frame, dt);

    let acceleration = linear_acceleration(&state.orientation, controls, config);
    state.velocity += acceleration * dt;
    state.velocity *= linear_damping.factor(dt);
    state.position += state.velocity * dt;

    apply_ground_clamp(state, config.ground_clearance)
}

/// Hard floor at `ground_clearance`: no bounce, vertical velocity zeroed.
///
/// Returns true when the floor was hit.
pub fn apply_ground_clamp(state: &mut KinematicState, ground_clearance: f64) -> bool {
    if state.position.y < ground_clearance {
        state.position.y = ground_clearance;
        state.velocity.y = 0.0;
        true
    } else {
        false
    }
}
