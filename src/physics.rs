//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * Keep it as "game engine agnostic" as possible: plain data and functions,
//!   bevy only shows up for math types, resources and the one stepping system.
//! * Physics should be highly unit tested.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod orbits;
pub mod util;

pub struct PhysicsPluginGroup;

impl PluginGroup for PhysicsPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(orbits::OrbitsPlugin)
    }
}
