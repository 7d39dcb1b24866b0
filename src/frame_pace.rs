//! Caps the frame rate by sleeping off whatever is left of each frame's budget.

use std::time::{Duration, Instant};

use bevy::{
    app::{App, Last, Plugin},
    ecs::system::{Local, Res},
    log::trace,
};

use crate::config::OrreryConfig;

/// How long to sleep when a frame took `elapsed` out of `budget`, if at all
pub fn remaining_budget(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|remaining| !remaining.is_zero())
}

/// Blocks at the very end of every frame until the target frame time has passed
pub struct FramePacePlugin;

impl Plugin for FramePacePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Last, Self::pace_system);
    }
}

impl FramePacePlugin {
    fn pace_system(config: Res<OrreryConfig>, mut last_frame_end: Local<Option<Instant>>) {
        if let Some(last) = *last_frame_end {
            if let Some(remaining) = remaining_budget(config.frame_budget(), last.elapsed()) {
                trace!("Frame finished early, sleeping {:?}", remaining);
                std::thread::sleep(remaining);
            }
        }
        *last_frame_end = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleeps_off_the_rest_of_the_budget() {
        let budget = Duration::from_millis(16);
        assert_eq!(
            remaining_budget(budget, Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
    }

    #[test]
    fn test_late_frames_do_not_sleep() {
        let budget = Duration::from_millis(16);
        assert_eq!(remaining_budget(budget, Duration::from_millis(16)), None);
        assert_eq!(remaining_budget(budget, Duration::from_millis(40)), None);
    }

    #[test]
    fn test_pacing_holds_frames_apart() {
        let config = OrreryConfig::builder().target_fps(50).build().unwrap();
        let mut app = App::new();
        app.insert_resource(config).add_plugins(FramePacePlugin);
        app.update();
        let start = Instant::now();
        app.update();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
