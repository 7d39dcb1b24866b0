//! Keyboard controls.
//! Space pauses, up and down change the speed, I toggles the status panel and R resets.

use bevy::{
    app::{App, Plugin, Update},
    ecs::{
        event::{EventReader, EventWriter},
        schedule::IntoSystemConfigs,
        system::{Res, ResMut},
    },
    input::{keyboard::KeyCode, Input},
    log::debug,
};

use crate::physics::orbits::{
    state::{ControlEvent, SimulationState},
    OrbitSet,
};

impl ControlEvent {
    /// The event a key press stands for, `None` for keys the orrery ignores
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Space => Some(ControlEvent::TogglePause),
            KeyCode::I => Some(ControlEvent::ToggleInfo),
            KeyCode::Up => Some(ControlEvent::SpeedUp),
            KeyCode::Down => Some(ControlEvent::SlowDown),
            KeyCode::R => Some(ControlEvent::Reset),
            _ => None,
        }
    }
}

/// Turns key presses into [`ControlEvent`]s and applies them to the [`SimulationState`]
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ControlEvent>();
        app.add_systems(
            Update,
            (Self::keyboard_system, Self::apply_controls_system)
                .chain()
                .in_set(OrbitSet::Controls),
        );
    }
}

/// Bevy Systems
impl ControlsPlugin {
    /// One event per key press, held keys do not repeat
    pub fn keyboard_system(keys: Res<Input<KeyCode>>, mut events: EventWriter<ControlEvent>) {
        for key in keys.get_just_pressed() {
            if let Some(event) = ControlEvent::from_key(*key) {
                events.send(event);
            }
        }
    }

    pub fn apply_controls_system(
        mut events: EventReader<ControlEvent>,
        mut state: ResMut<SimulationState>,
    ) {
        for event in events.read() {
            state.apply(*event);
            debug!("Applied {:?}, controls now {:?}", event, state.controls());
        }
    }
}
