//! The whole mutable state of the orrery and the transitions the controls can make on it.

use bevy::{
    ecs::{event::Event, system::Resource},
    math::Vec2,
};
use strum_macros::EnumIter;

use super::{components::CelestialBody, kinematics::advance_all};
use crate::{config::OrreryConfig, physics::util::clock::Clock};

/// One discrete user action
#[derive(Event, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    TogglePause,
    ToggleInfo,
    SpeedUp,
    SlowDown,
    Reset,
}

/// Pause, overlay and speed settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub paused: bool,
    pub show_info: bool,
    pub speed_multiplier: f32,
    min_speed: f32,
    max_speed: f32,
    speed_step: f32,
    initial_speed: f32,
}

impl Controls {
    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            paused: false,
            show_info: true,
            speed_multiplier: config.initial_speed,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            speed_step: config.speed_step,
            initial_speed: config.initial_speed,
        }
    }

    pub fn speed_up(&mut self) {
        self.speed_multiplier = (self.speed_multiplier + self.speed_step).min(self.max_speed);
    }

    pub fn slow_down(&mut self) {
        self.speed_multiplier = (self.speed_multiplier - self.speed_step).max(self.min_speed);
    }

    /// Unpause and go back to the starting speed.
    /// The overlay keeps whatever visibility the user picked.
    pub fn reset(&mut self) {
        self.paused = false;
        self.speed_multiplier = self.initial_speed;
    }

    /// The lines of the status panel, top to bottom
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            "SPACE: Pause/Resume".to_string(),
            "UP/DOWN: Speed Control".to_string(),
            "I: Toggle Info".to_string(),
            "R: Reset".to_string(),
            format!("Speed: {:.1}x", self.speed_multiplier),
            format!(
                "Status: {}",
                if self.paused { "PAUSED" } else { "RUNNING" }
            ),
        ]
    }
}

/// The ordered body list plus the controls acting on it
#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    bodies: Vec<CelestialBody>,
    initial_bodies: Vec<CelestialBody>,
    controls: Controls,
    center: Vec2,
}

impl SimulationState {
    /// `bodies` is also kept as the snapshot a reset returns to
    pub fn new(bodies: Vec<CelestialBody>, config: &OrreryConfig) -> Self {
        Self {
            initial_bodies: bodies.clone(),
            bodies,
            controls: Controls::new(config),
            center: config.center(),
        }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Apply one control event
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::TogglePause => self.controls.paused = !self.controls.paused,
            ControlEvent::ToggleInfo => self.controls.show_info = !self.controls.show_info,
            ControlEvent::SpeedUp => self.controls.speed_up(),
            ControlEvent::SlowDown => self.controls.slow_down(),
            ControlEvent::Reset => self.reset(),
        }
        debug_assert!(
            (self.controls.min_speed..=self.controls.max_speed)
                .contains(&self.controls.speed_multiplier),
            "speed multiplier escaped its bounds"
        );
    }

    /// Rebuild the body list from the snapshot and reset the controls
    pub fn reset(&mut self) {
        self.bodies = self.initial_bodies.clone();
        self.controls.reset();
    }

    /// Advance every body by the last frame's delta scaled by the speed multiplier.
    /// Does nothing while paused.
    pub fn step(&mut self, clock: &Clock) {
        if self.controls.paused {
            return;
        }
        let dt = clock.scaled_delta(self.controls.speed_multiplier);
        advance_all(&mut self.bodies, dt, self.center);
    }
}
