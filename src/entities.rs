//! This module contains everything that gets spawned into the world.
//! These are the entities drawn by the orrery.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod camera;
pub mod celestials;
pub mod starfield;
pub mod utils;

pub struct EntitiesPluginGroup;

impl PluginGroup for EntitiesPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(camera::CameraPlugin)
            .add(starfield::StarfieldPlugin)
            .add(celestials::celestial::CelestialPlugin)
    }
}
