use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::window::WindowResolution;
use bevy::{log::LogPlugin, prelude::*};
use bevy_egui::EguiPlugin;
use orrery::config::{ConfigError, OrreryConfig};
use orrery::entities::EntitiesPluginGroup;
use orrery::frame_pace::FramePacePlugin;
use orrery::gui::GuiPluginGroup;
use orrery::physics::PhysicsPluginGroup;

fn main() -> Result<(), ConfigError> {
    let config = OrreryConfig::builder().build()?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        resolution: WindowResolution::new(
                            config.width as f32,
                            config.height as f32,
                        ),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(config)
        .add_plugins(PhysicsPluginGroup)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPluginGroup)
        .add_plugins(FramePacePlugin)
        .run();

    Ok(())
}
