use crate::common::*;
use approx::assert_relative_eq;
use heliflight::{resources::Damping, ControlChannels, FlightConfig};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

const DT: f64 = 0.016;
const STEPS: usize = 300;

fn scenario_controls() -> ControlChannels {
    ControlChannels::with_throttle(0.5)
}

#[test]
fn test_half_throttle_balances_matched_mass() {
    // 0.5 * 20 N of lift against 10 N of weight
    let config = FlightConfig {
        mass: 10.0 / 9.81,
        ..create_test_flight_config()
    };
    let mut session = create_session(config.clone());
    let state = fly(&mut session, scenario_controls(), DT, STEPS);

    assert_state_valid(&state, &config);
    assert_relative_eq!(state.velocity.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.position.y, 2.0, epsilon = 1e-9);
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.position.z, -2.0);
}

#[test]
fn test_half_throttle_climb_regression() {
    let config = create_test_flight_config();
    let mut session = create_session(config.clone());
    let state = fly(&mut session, scenario_controls(), DT, STEPS);

    // Net 0.19 m/s^2 up, damped by r per step: v_n = a dt r (1 - r^n) / (1 - r)
    let a = (0.5 * config.max_throttle_gain + config.gravity * config.mass) / config.mass;
    let r = match config.linear_damping {
        Damping::Exponential {
            retention,
            reference_rate,
        } => retention.powf(DT * reference_rate),
        other => panic!("unexpected damping {:?}", other),
    };
    let expected_velocity = a * DT * r * (1.0 - r.powi(STEPS as i32)) / (1.0 - r);

    assert_relative_eq!(a, 0.19, epsilon = 1e-12);
    assert_relative_eq!(state.velocity.y, expected_velocity, epsilon = 1e-9);
    assert_relative_eq!(state.velocity.y, 0.296_214_661, epsilon = 1e-6);
    assert_relative_eq!(state.position.y, 3.016_250_397, epsilon = 1e-6);

    // Climbing toward terminal velocity, acceleration shrinking
    let terminal = a * DT * r / (1.0 - r);
    assert!(state.velocity.y < terminal);
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.position.z, -2.0);
}

#[test]
fn test_scenario_is_deterministic() {
    let config = create_test_flight_config();
    let controls = ControlChannels::new(0.6, -0.2, 0.1, 0.3);

    let mut first = create_session(config.clone());
    let mut second = create_session(config);
    let a = fly(&mut first, controls, DT, STEPS);
    let b = fly(&mut second, controls, DT, STEPS);

    assert_eq!(a, b);
}

#[test]
fn test_nose_down_flies_forward() {
    let config = create_test_flight_config();
    let mut session = create_session(config.clone());

    // Tilt forward briefly, then hold the attitude with more throttle
    fly(&mut session, ControlChannels::new(0.6, -1.0, 0.0, 0.0), DT, 20);
    let state = fly(&mut session, ControlChannels::with_throttle(0.7), DT, 100);

    assert_state_valid(&state, &config);
    assert!(state.orientation.forward().y < 0.0, "nose should point down");
    assert!(state.position.z < -2.0, "moved forward along -z");
    assert!(state.velocity.z < 0.0);
}

#[test]
fn test_session_tick_from_sticks() {
    let config = create_test_flight_config();
    let mut session = create_session(config);

    // Left stick forward: full collective; right stick centred
    let frame = sticks((0.0, -1.0), (0.0, 0.0));
    for _ in 0..30 {
        session.tick(DT, &frame);
    }
    assert_eq!(session.controls(), ControlChannels::with_throttle(1.0));
    assert!(session.state().position.y > 2.0);
    assert_eq!(
        session.state().velocity.x,
        0.0,
        "no lateral drift without cyclic"
    );

    session.reset();
    assert_eq!(session.state().position, Vector3::new(0.0, 2.0, -2.0));
}
