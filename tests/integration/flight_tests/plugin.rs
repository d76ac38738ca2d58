use crate::common::*;
use approx::assert_relative_eq;
use bevy::prelude::*;
use heliflight::{
    components::PlayerController,
    resources::{Damping, DeviceFrame, Handedness, MenuState, StickReading},
    ControlChannels, FlightConfig, InputProfile, KinematicState,
};

#[test]
fn test_plugin_spawns_helicopter_at_start() {
    let mut app = TestAppBuilder::new().build();

    let state = app
        .query_single::<KinematicState>()
        .expect("helicopter spawned");
    assert_eq!(state.position, FlightConfig::default().start_position);

    let transform = app.query_single::<Transform>().expect("transform spawned");
    assert_eq!(transform.translation, Vec3::new(0.0, 2.0, -2.0));
}

#[test]
fn test_idle_helicopter_falls_to_floor() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().with_flight(config.clone()).build();

    app.run_steps(240);

    let state = app.query_single::<KinematicState>().unwrap();
    assert_state_valid(&state, &config);
    assert_eq!(state.position.y, config.ground_clearance);

    let transform = app.query_single::<Transform>().unwrap();
    assert_eq!(transform.translation.y, config.ground_clearance as f32);
}

#[test]
fn test_sticks_drive_the_helicopter() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().with_flight(config.clone()).build();

    app.set_device_frame(sticks((0.0, -1.0), (0.0, 0.0)));
    app.run_steps(60);

    let controls = app.query_single::<ControlChannels>().unwrap();
    assert_eq!(controls, ControlChannels::with_throttle(1.0));

    let state = app.query_single::<KinematicState>().unwrap();
    assert_state_valid(&state, &config);
    assert!(state.position.y > config.start_position.y);

    let transform = app.query_single::<Transform>().unwrap();
    assert!((transform.translation.y - state.position.y as f32).abs() < 1e-4);
}

#[test]
fn test_disabled_controller_ignores_sticks() {
    let config = create_test_flight_config();
    let mut app = TestAppBuilder::new().with_flight(config).build();

    if let Some(mut controller) = app.query_single_mut::<PlayerController>() {
        controller.active = false;
    }
    app.set_device_frame(sticks((0.0, -1.0), (0.0, 0.0)));
    app.run_steps(10);

    let controls = app.query_single::<ControlChannels>().unwrap();
    assert_eq!(controls, ControlChannels::default());
}

#[test]
fn test_toggle_button_flips_menu() {
    let mut app = TestAppBuilder::new().build();
    let press = DeviceFrame::from_sticks(
        None,
        Some(StickReading::from_stick(Handedness::Right, 0.0, 0.0).with_button(4, true)),
    );
    let release = DeviceFrame::from_sticks(
        None,
        Some(StickReading::from_stick(Handedness::Right, 0.0, 0.0)),
    );

    assert!(!app.resource::<MenuState>().visible);

    app.set_device_frame(press.clone());
    app.run_steps(5);
    assert!(app.resource::<MenuState>().visible, "shown on press");

    app.set_device_frame(release);
    app.run_frame();
    app.set_device_frame(press);
    app.run_frame();
    assert!(!app.resource::<MenuState>().visible, "hidden on second press");
}

#[test]
fn test_input_profile_smooths_channels_in_app() {
    let mut app = TestAppBuilder::new()
        .with_input(InputProfile::default().with_smoothing(5.0))
        .build();

    app.set_device_frame(sticks((0.0, -1.0), (0.0, 0.0)));
    app.run_frame();

    // One 1/60 s frame covers 5/60 of the way to full collective
    let controls = app.query_single::<ControlChannels>().unwrap();
    assert_relative_eq!(controls.throttle, 5.0 / 60.0, epsilon = 1e-6);
}

#[test]
fn test_slow_frames_damp_once_per_frame() {
    let config = FlightConfig {
        gravity: 0.0,
        ..create_test_flight_config()
    }
    .with_damping(Damping::PerFrame { retention: 0.5 });
    let mut app = TestAppBuilder::new()
        .with_flight(config)
        .with_frame_time(0.1)
        .build();

    if let Some(mut state) = app.query_single_mut::<KinematicState>() {
        state.velocity.x = 1.0;
    }
    app.run_steps(2);

    // 10 fps frames are substepped, but each frame still halves the speed
    let state = app.query_single::<KinematicState>().unwrap();
    assert_relative_eq!(state.velocity.x, 0.25, epsilon = 1e-9);
}
