use crate::common::*;
use approx::assert_relative_eq;
use heliflight::{
    resources::{DeviceFrame, Handedness, StickReading, ThrottleConvention},
    FlightSession, InputProfile, SessionConfig,
};

fn session_with(profile: InputProfile) -> FlightSession {
    FlightSession::new(SessionConfig {
        flight: create_test_flight_config(),
        input: profile,
    })
    .expect("test profile is valid")
}

#[test]
fn test_low_sensitivity_still_reaches_full_throttle() {
    let mut session = session_with(InputProfile::default().with_sensitivity(0.25));
    let report = session.tick(0.016, &sticks((1.0, -1.0), (1.0, -1.0)));

    assert_eq!(report.controls.throttle, 1.0);
    assert_relative_eq!(report.controls.yaw, -0.25);
    assert_relative_eq!(report.controls.pitch, -0.25);
    assert_relative_eq!(report.controls.roll, 0.25);
}

#[test]
fn test_bidirectional_throttle_can_push_down() {
    let mut session =
        session_with(InputProfile::default().with_throttle(ThrottleConvention::Bidirectional));

    let report = session.tick(0.016, &sticks((0.0, 1.0), (0.0, 0.0)));
    assert_eq!(report.controls.throttle, -1.0);
    assert!(session.state().velocity.y < -9.81 * 0.016);
}

#[test]
fn test_dropped_hand_keeps_last_targets() {
    let mut session = session_with(InputProfile::default());
    session.tick(0.016, &sticks((0.0, -0.5), (0.4, 0.2)));

    let left_only = DeviceFrame::from_sticks(
        Some(StickReading::from_stick(Handedness::Left, 0.0, 0.0)),
        None,
    );
    let report = session.tick(0.016, &left_only);

    assert_relative_eq!(report.controls.throttle, 0.5);
    assert_relative_eq!(report.controls.pitch, 0.2);
    assert_relative_eq!(report.controls.roll, 0.4);
}

#[test]
fn test_smoothed_channels_ease_toward_sticks() {
    let mut session = session_with(InputProfile::default().with_smoothing(10.0));
    let frame = sticks((0.0, -1.0), (0.0, 0.0));

    let mut previous = 0.0;
    for _ in 0..60 {
        let throttle = session.tick(0.016, &frame).controls.throttle;
        assert!(throttle > previous && throttle <= 1.0);
        previous = throttle;
    }
    assert_relative_eq!(previous, 1.0, epsilon = 1e-3);
}

#[test]
fn test_toggle_reported_once_per_press() {
    let mut session = session_with(InputProfile::default());
    let held = DeviceFrame::from_sticks(
        None,
        Some(StickReading::from_stick(Handedness::Right, 0.0, 0.0).with_button(4, true)),
    );
    let released = DeviceFrame::from_sticks(
        None,
        Some(StickReading::from_stick(Handedness::Right, 0.0, 0.0)),
    );

    let presses: Vec<bool> = [&held, &held, &released, &held]
        .into_iter()
        .map(|frame| session.tick(0.016, frame).toggled)
        .collect();
    assert_eq!(presses, vec![true, false, false, true]);
}
