use heliflight::{
    resources::{AttitudeMode, DeviceFrame, Handedness, SessionConfig, StickReading},
    ControlChannels, FlightConfig, FlightSession, KinematicState,
};

/// Flight config with the numbers used across the regression scenarios
pub fn create_test_flight_config() -> FlightConfig {
    FlightConfig {
        gravity: -9.81,
        mass: 1.0,
        max_throttle_gain: 20.0,
        ..Default::default()
    }
}

pub fn create_session(config: FlightConfig) -> FlightSession {
    FlightSession::new(SessionConfig {
        flight: config,
        ..Default::default()
    })
    .expect("test config is valid")
}

/// Both sticks as (horizontal, vertical) in the forward-negative layout
pub fn sticks(left: (f64, f64), right: (f64, f64)) -> DeviceFrame {
    DeviceFrame::from_sticks(
        Some(StickReading::from_stick(Handedness::Left, left.0, left.1)),
        Some(StickReading::from_stick(Handedness::Right, right.0, right.1)),
    )
}

/// Step `session` `steps` times with constant channels, returning the final state
pub fn fly(
    session: &mut FlightSession,
    controls: ControlChannels,
    dt: f64,
    steps: usize,
) -> KinematicState {
    for _ in 0..steps {
        session.advance(controls, dt);
    }
    *session.state()
}

pub fn all_attitude_modes() -> [AttitudeMode; 3] {
    [
        AttitudeMode::angular_rate(),
        AttitudeMode::direct_angle(),
        AttitudeMode::torque(),
    ]
}
