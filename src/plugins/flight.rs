use bevy::prelude::*;
use std::path::Path;

use crate::components::{ControlChannels, Helicopter, KinematicState, PlayerController};
use crate::resources::{ConfigError, DeviceFrame, FlightConfig, MenuState, SessionConfig};
use crate::systems::{
    control_mapping_system, flight_integrator_system, gamepad_input_system,
    keyboard_input_system, menu_toggle_system, presentation_system, ActionToggled, InputMapper,
};

/// Per-frame flight stages, run in this order on `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Device providers fill the `DeviceFrame`
    Input,
    /// Device readings become control channels
    Mapping,
    Integration,
    /// Pose copied to the render transform
    Presentation,
}

pub struct FlightPlugin {
    config: SessionConfig,
    poll_devices: bool,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}

impl FlightPlugin {
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            poll_devices: true,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::with_config(SessionConfig::load(path)?))
    }

    /// Do not poll gamepad or keyboard; the application writes `DeviceFrame` itself.
    pub fn without_device_polling(mut self) -> Self {
        self.poll_devices = false;
        self
    }

    fn spawn_helicopter(mut commands: Commands, config: Res<FlightConfig>) {
        let state = KinematicState::at_position(config.start_position);
        info!("Spawning helicopter at {:?}", config.start_position);
        commands.spawn((
            Helicopter,
            PlayerController::new(),
            state,
            ControlChannels::default(),
            InputMapper::new(),
            state.to_transform(),
            Name::new("Helicopter"),
        ));
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!(
                    "Invalid flight configuration: {}. Defaulting to built-in values",
                    e
                );
                SessionConfig::default()
            }
        };

        app.insert_resource(config.flight)
            .insert_resource(config.input)
            .init_resource::<DeviceFrame>()
            .init_resource::<MenuState>()
            .add_event::<ActionToggled>();

        app.configure_sets(
            Update,
            (
                FlightSet::Input,
                FlightSet::Mapping,
                FlightSet::Integration,
                FlightSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(Startup, Self::spawn_helicopter).add_systems(
            Update,
            (
                (control_mapping_system, menu_toggle_system)
                    .chain()
                    .in_set(FlightSet::Mapping),
                flight_integrator_system.in_set(FlightSet::Integration),
                presentation_system.in_set(FlightSet::Presentation),
            ),
        );

        if self.poll_devices {
            app.add_systems(
                Update,
                (gamepad_input_system, keyboard_input_system)
                    .chain()
                    .in_set(FlightSet::Input),
            );
        }
    }
}
