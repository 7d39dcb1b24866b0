//! A fixed field of background stars.
//! The pattern comes from the star index alone so every frame (and every run) looks the same.

use bevy::{
    app::{App, Plugin, Startup},
    asset::Assets,
    ecs::{
        component::Component,
        system::{Commands, Res, ResMut},
    },
    log::debug,
    math::Vec2,
    render::{color::Color, mesh::Mesh},
    sprite::{ColorMaterial, MaterialMesh2dBundle},
    transform::components::Transform,
};

use super::{camera::pixel_to_world, utils::Radius};
use crate::config::OrreryConfig;

/// Multipliers spreading consecutive stars across the window
const STAR_STRIDE_X: u64 = 127;
const STAR_STRIDE_Y: u64 = 311;

/// Marks a background star
#[derive(Component, Debug, Clone, Copy)]
pub struct BackgroundStar;

/// Pixel positions of the first `count` stars in a `width` x `height` window
pub fn star_positions(count: u32, width: u32, height: u32) -> Vec<Vec2> {
    let (width, height) = (u64::from(width), u64::from(height));
    (0..u64::from(count))
        .map(|i| {
            Vec2::new(
                ((i * STAR_STRIDE_X) % width) as f32,
                ((i * STAR_STRIDE_Y) % height) as f32,
            )
        })
        .collect()
}

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
    }
}

impl StarfieldPlugin {
    /// Stars sit at z = 0, behind every body
    fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        config: Res<OrreryConfig>,
    ) {
        let mesh = meshes.add(Radius(1.0).disc_mesh());
        let material = materials.add(ColorMaterial::from(Color::rgb_u8(211, 211, 211)));
        let positions = star_positions(config.star_count, config.width, config.height);
        debug!("Spawning {} background stars", positions.len());
        for position in positions {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: mesh.clone().into(),
                    material: material.clone(),
                    transform: Transform::from_translation(
                        pixel_to_world(position, config.viewport()).extend(0.0),
                    ),
                    ..Default::default()
                },
                BackgroundStar,
            ));
        }
    }
}
