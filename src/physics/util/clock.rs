use std::{fmt::Debug, time::Duration};

use bevy::{core::FrameCount, time::Time};

/// A snapshot of the frame clock handed to the simulation step
#[derive(Default, Clone, Copy)]
pub struct Clock {
    time: Time,
    frame: FrameCount,
}

impl Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("elapsed", &self.time.elapsed())
            .field("delta", &self.time.delta())
            .field("frame", &self.frame.0)
            .finish()
    }
}

impl Clock {
    pub fn new(time: Time, frame: FrameCount) -> Self {
        Self { time, frame }
    }
    pub fn get_current_time(&self) -> Duration {
        self.time.elapsed()
    }
    pub fn get_last_delta(&self) -> Duration {
        self.time.delta()
    }
    pub fn get_current_frame(&self) -> u32 {
        self.frame.0
    }
    /// Seconds of simulated time the last frame stands for
    pub fn scaled_delta(&self, speed_multiplier: f32) -> f32 {
        self.time.delta_seconds() * speed_multiplier
    }
    /// Mostly used for testing
    pub fn update(&mut self, delta: Duration) {
        self.time.advance_by(delta);
        self.frame.0 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_delta_and_frames() {
        let mut clock = Clock::default();
        clock.update(Duration::from_millis(500));
        clock.update(Duration::from_millis(250));
        assert_eq!(clock.get_last_delta(), Duration::from_millis(250));
        assert_eq!(clock.get_current_time(), Duration::from_millis(750));
        assert_eq!(clock.get_current_frame(), 2);
    }

    #[test]
    fn test_scaled_delta() {
        let mut clock = Clock::default();
        clock.update(Duration::from_millis(500));
        assert!((clock.scaled_delta(3.0) - 1.5).abs() < 1e-6);
        assert_eq!(clock.scaled_delta(0.0), 0.0);
    }
}
