#![allow(dead_code)]

mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_orientation_eq, assert_position_eq, assert_state_valid};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
