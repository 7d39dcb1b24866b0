//! The bevy camera for the orrery and the mapping from window pixels to world units.
//!
//! The simulation works in pixel space: origin at the top left, y pointing down.
//! Bevy's 2D world has its origin at the window center with y pointing up,
//! and with the default projection one world unit is one pixel.

use bevy::{
    app::{App, Plugin, Startup},
    core_pipeline::{
        clear_color::ClearColorConfig,
        core_2d::{Camera2d, Camera2dBundle},
    },
    ecs::{component::Component, system::Commands},
    math::Vec2,
    render::color::Color,
};

/// Used to help identify our main camera
#[derive(Component)]
pub struct MainCamera;

/// Spawns the single 2D camera over a black background
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup_main_camera);
    }
}

impl CameraPlugin {
    pub fn setup_main_camera(mut commands: Commands) {
        commands.spawn((
            Camera2dBundle {
                camera_2d: Camera2d {
                    clear_color: ClearColorConfig::Custom(Color::BLACK),
                },
                ..Default::default()
            },
            MainCamera,
        ));
    }
}

/// Convert a position in window pixels to bevy world coordinates
pub fn pixel_to_world(pixel: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(pixel.x - viewport.x / 2.0, viewport.y / 2.0 - pixel.y)
}

/// Convert a pixel-space offset (y down) to a world-space offset (y up)
pub fn pixel_offset_to_world(offset: Vec2) -> Vec2 {
    Vec2::new(offset.x, -offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1200.0, 800.0);

    #[test]
    fn test_center_maps_to_origin() {
        assert_eq!(pixel_to_world(Vec2::new(600.0, 400.0), VIEWPORT), Vec2::ZERO);
    }

    #[test]
    fn test_corners() {
        assert_eq!(
            pixel_to_world(Vec2::ZERO, VIEWPORT),
            Vec2::new(-600.0, 400.0)
        );
        assert_eq!(pixel_to_world(VIEWPORT, VIEWPORT), Vec2::new(600.0, -400.0));
    }

    #[test]
    fn test_offsets_flip_y_only() {
        assert_eq!(
            pixel_offset_to_world(Vec2::new(13.0, -8.0)),
            Vec2::new(13.0, 8.0)
        );
    }
}
