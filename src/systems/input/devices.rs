use bevy::input::gamepad::{Gamepad, GamepadButton};
use bevy::prelude::*;

use crate::resources::{DeviceFrame, Handedness, InputProfile, StickReading};

/// Buttons in WebXR `xr-standard` order: trigger, squeeze, touchpad,
/// thumbstick, then the two face buttons.
const LEFT_BUTTONS: [Option<GamepadButton>; 6] = [
    Some(GamepadButton::LeftTrigger2),
    Some(GamepadButton::LeftTrigger),
    None,
    Some(GamepadButton::LeftThumb),
    Some(GamepadButton::West),
    Some(GamepadButton::North),
];

const RIGHT_BUTTONS: [Option<GamepadButton>; 6] = [
    Some(GamepadButton::RightTrigger2),
    Some(GamepadButton::RightTrigger),
    None,
    Some(GamepadButton::RightThumb),
    Some(GamepadButton::South),
    Some(GamepadButton::East),
];

fn stick_reading(
    gamepad: &Gamepad,
    hand: Handedness,
    stick: Vec2,
    buttons: &[Option<GamepadButton>],
) -> StickReading {
    // Gamepad sticks are y-up, the stick layout is forward-negative
    let mut reading = StickReading::from_stick(hand, stick.x as f64, -stick.y as f64);
    reading.buttons = buttons
        .iter()
        .map(|button| button.is_some_and(|b| gamepad.pressed(b)))
        .collect();
    reading
}

/// Device provider reading the first connected gamepad.
///
/// The left stick stands in for the left hand controller and the right stick
/// for the right one. With no gamepad the frame is left empty.
pub fn gamepad_input_system(gamepads: Query<&Gamepad>, mut frame: ResMut<DeviceFrame>) {
    frame.clear();

    let Some(gamepad) = gamepads.iter().next() else {
        return;
    };

    frame.readings.push(stick_reading(
        gamepad,
        Handedness::Left,
        gamepad.left_stick(),
        &LEFT_BUTTONS,
    ));
    frame.readings.push(stick_reading(
        gamepad,
        Handedness::Right,
        gamepad.right_stick(),
        &RIGHT_BUTTONS,
    ));
}

fn key_axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f64 {
    let mut value = 0.0;
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    value
}

/// Fallback provider synthesizing both sticks from the keyboard when no
/// gamepad filled the frame.
///
/// `W`/`S` collective, `A`/`D` yaw, arrow keys pitch and roll, `M` presses the
/// toggle binding.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    profile: Res<InputProfile>,
    mut frame: ResMut<DeviceFrame>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if !frame.is_empty() {
        return;
    }

    let mut left = StickReading::from_stick(
        Handedness::Left,
        key_axis(&keyboard, KeyCode::KeyA, KeyCode::KeyD),
        key_axis(&keyboard, KeyCode::KeyW, KeyCode::KeyS),
    );
    let mut right = StickReading::from_stick(
        Handedness::Right,
        key_axis(&keyboard, KeyCode::ArrowLeft, KeyCode::ArrowRight),
        key_axis(&keyboard, KeyCode::ArrowUp, KeyCode::ArrowDown),
    );

    if let Some(binding) = profile.toggle {
        let pressed = keyboard.pressed(KeyCode::KeyM);
        match binding.hand {
            Handedness::Left => left = left.with_button(binding.button, pressed),
            Handedness::Right => right = right.with_button(binding.button, pressed),
        }
    }

    frame.readings.push(left);
    frame.readings.push(right);
}
