pub mod dynamics;
pub mod input;
mod presentation;

pub use dynamics::{flight_integrator_system, step, StepOutcome};
pub use input::{
    control_mapping_system, gamepad_input_system, keyboard_input_system, menu_toggle_system,
    ActionToggled, InputMapper,
};
pub use presentation::{presentation_system, sync_transform};
