use std::time::{Duration, Instant};

/// Wall-clock `dt` source for sessions driven outside of bevy.
///
/// The first [`FrameClock::tick`] returns zero, later ticks the scaled time
/// since the previous one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    elapsed: Duration,
    time_scale: f64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: None,
            elapsed: Duration::ZERO,
            time_scale: 1.0,
            frame_count: 0,
        }
    }

    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Tick with an explicit timestamp. Timestamps earlier than the previous
    /// one yield zero.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let delta = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.elapsed += delta;
        self.frame_count += 1;
        delta.as_secs_f64() * self.time_scale
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn reset(&mut self) {
        *self = Self {
            time_scale: self.time_scale,
            ..Self::new()
        };
    }
}
