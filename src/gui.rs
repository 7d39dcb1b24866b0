//! This module contains all the GUI related code.
//! Keyboard controls and things that are drawn in screen coordinates rather than world coordinates.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod controls;
pub mod status_window;

pub struct GuiPluginGroup;

impl PluginGroup for GuiPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(controls::ControlsPlugin)
            .add(status_window::StatusWindowPlugin)
    }
}
