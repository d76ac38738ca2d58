mod attitude;
mod forces;
mod integrator;

pub use attitude::{control_axis, update_attitude};
pub use forces::{
    flight_forces, linear_acceleration, net_force, Force, ForceCategory, ReferenceFrame,
};
pub use integrator::{apply_ground_clamp, flight_integrator_system, split_timestep, step, StepOutcome};
