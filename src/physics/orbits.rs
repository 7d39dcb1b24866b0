//! Orbits on fixed circular rails and the state that drives them.

use bevy::{
    app::{App, Plugin, Update},
    core::FrameCount,
    ecs::{
        schedule::{IntoSystemConfigs, IntoSystemSetConfigs, SystemSet},
        system::{Res, ResMut},
    },
    time::Time,
};

use self::state::SimulationState;
use super::util::clock::Clock;

pub mod components;
pub mod kinematics;
pub mod state;

/// Per-frame ordering: controls mutate the state, the state steps, then visuals follow it
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitSet {
    Controls,
    Step,
    Sync,
}

/// Steps the [`SimulationState`] once per frame
pub struct OrbitsPlugin;

impl Plugin for OrbitsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (OrbitSet::Controls, OrbitSet::Step, OrbitSet::Sync).chain(),
        );
        app.add_systems(Update, Self::step_system.in_set(OrbitSet::Step));
    }
}

/// Bevy Systems
impl OrbitsPlugin {
    pub fn step_system(
        mut state: ResMut<SimulationState>,
        time: Res<Time>,
        frame: Res<FrameCount>,
    ) {
        let clock = Clock::new(time.as_generic(), frame.as_ref().to_owned());
        state.step(&clock);
    }
}
