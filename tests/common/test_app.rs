use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use heliflight::{
    plugins::FlightPlugin,
    resources::{DeviceFrame, FlightConfig, InputProfile, SessionConfig},
};
use std::time::Duration;

// Builder for a headless app stepping the flight systems with a fixed frame time
pub struct TestAppBuilder {
    flight_config: Option<FlightConfig>,
    input_profile: Option<InputProfile>,
    frame_time: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            flight_config: None,
            input_profile: None,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flight(mut self, config: FlightConfig) -> Self {
        self.flight_config = Some(config);
        self
    }

    pub fn with_input(mut self, profile: InputProfile) -> Self {
        self.input_profile = Some(profile);
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        let config = SessionConfig {
            flight: self.flight_config.unwrap_or_default(),
            input: self.input_profile.unwrap_or_default(),
        };

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.frame_time),
            ))
            .add_plugins(FlightPlugin::with_config(config).without_device_polling());

        // Run an initial update to spawn the helicopter
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn set_device_frame(&mut self, frame: DeviceFrame) {
        *self.app.world_mut().resource_mut::<DeviceFrame>() = frame;
    }

    pub fn resource<T: Resource + Clone>(&self) -> T {
        self.app.world().resource::<T>().clone()
    }

    pub fn query_single<T: Component + Clone>(&mut self) -> Option<T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok().cloned()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
