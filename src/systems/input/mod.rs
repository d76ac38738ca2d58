mod devices;
mod edge;
mod mapper;

pub use devices::{gamepad_input_system, keyboard_input_system};
pub use edge::RisingEdge;
pub use mapper::{InputMapper, MappedInput};

use bevy::prelude::*;

use crate::components::{ControlChannels, Helicopter, PlayerController};
use crate::resources::{DeviceFrame, Handedness, InputProfile, MenuState};

/// Fired once per press of the toggle binding.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionToggled {
    pub hand: Handedness,
}

/// Maps the current [`DeviceFrame`] into the control channels of every
/// active player craft.
pub fn control_mapping_system(
    mut query: Query<
        (&mut InputMapper, &mut ControlChannels, &PlayerController),
        With<Helicopter>,
    >,
    frame: Res<DeviceFrame>,
    profile: Res<InputProfile>,
    time: Res<Time>,
    mut toggles: EventWriter<ActionToggled>,
) {
    let dt = time.delta_secs_f64();

    for (mut mapper, mut channels, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }

        let mapped = mapper.map(&profile, &frame, dt);
        *channels = mapped.channels;

        if mapped.toggled {
            if let Some(binding) = profile.toggle {
                toggles.send(ActionToggled { hand: binding.hand });
            }
        }
    }
}

/// Flips menu visibility on each toggle press.
pub fn menu_toggle_system(mut events: EventReader<ActionToggled>, mut menu: ResMut<MenuState>) {
    for event in events.read() {
        menu.visible = !menu.visible;
        info!(
            "Menu {} ({:?} controller)",
            if menu.visible { "shown" } else { "hidden" },
            event.hand
        );
    }
}
