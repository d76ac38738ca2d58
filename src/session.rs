use crate::components::{ControlChannels, KinematicState};
use crate::resources::{
    ConfigError, DeviceFrame, FlightConfig, FrameClock, InputProfile, SessionConfig,
};
use crate::systems::dynamics::{step, StepOutcome};
use crate::systems::input::InputMapper;

/// What one [`FlightSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub controls: ControlChannels,
    pub outcome: StepOutcome,
    pub toggled: bool,
}

/// A single flight, owning its configuration and state, driven without bevy.
///
/// Each tick maps device input to control channels and then integrates, in
/// that order.
#[derive(Debug, Clone)]
pub struct FlightSession {
    config: FlightConfig,
    profile: InputProfile,
    state: KinematicState,
    mapper: InputMapper,
    controls: ControlChannels,
}

impl FlightSession {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SessionConfig { flight, input } = config;
        Ok(Self {
            state: KinematicState::at_position(flight.start_position),
            config: flight,
            profile: input,
            mapper: InputMapper::new(),
            controls: ControlChannels::default(),
        })
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn profile(&self) -> &InputProfile {
        &self.profile
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn controls(&self) -> ControlChannels {
        self.controls
    }

    /// Map `frame` and advance by `dt` seconds.
    pub fn tick(&mut self, dt: f64, frame: &DeviceFrame) -> TickReport {
        let mapped = self.mapper.map(&self.profile, frame, dt);
        self.controls = mapped.channels;
        let outcome = step(&mut self.state, &self.controls, &self.config, dt);
        TickReport {
            controls: self.controls,
            outcome,
            toggled: mapped.toggled,
        }
    }

    /// Tick with the time elapsed on `clock` since its previous tick.
    pub fn tick_with_clock(&mut self, clock: &mut FrameClock, frame: &DeviceFrame) -> TickReport {
        let dt = clock.tick();
        self.tick(dt, frame)
    }

    /// Advance with explicit channels, bypassing the input mapper.
    pub fn advance(&mut self, controls: ControlChannels, dt: f64) -> StepOutcome {
        self.controls = controls;
        step(&mut self.state, &self.controls, &self.config, dt)
    }

    /// Back to the start position at rest, controls released.
    pub fn reset(&mut self) {
        self.state = KinematicState::at_position(self.config.start_position);
        self.mapper = InputMapper::new();
        self.controls = ControlChannels::default();
    }
}
