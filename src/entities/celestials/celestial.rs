use bevy::app::{App, Plugin, PreStartup, Startup, Update};
use bevy::asset::Assets;
use bevy::core::Name;
use bevy::ecs::component::Component;
use bevy::ecs::entity::Entity;
use bevy::ecs::event::EventReader;
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Commands, Query, Res, ResMut};
use bevy::hierarchy::{BuildChildren, DespawnRecursiveExt};
use bevy::log::info;
use bevy::math::{Vec2, Vec3};
use bevy::prelude::SpatialBundle;
use bevy::render::color::Color;
use bevy::render::mesh::Mesh;
use bevy::sprite::{Anchor, ColorMaterial, MaterialMesh2dBundle};
use bevy::text::{Text, Text2dBundle, TextStyle};
use bevy::transform::components::Transform;

use crate::config::OrreryConfig;
use crate::entities::camera::{pixel_offset_to_world, pixel_to_world};
use crate::entities::celestials::solar_system::SolarSystemBuilder;
use crate::entities::utils::Radius;
use crate::physics::orbits::components::CelestialBody;
use crate::physics::orbits::state::{ControlEvent, SimulationState};
use crate::physics::orbits::OrbitSet;

/// Width in pixels of orbit and glow rings
const RING_WIDTH: f32 = 1.0;
/// Radii of the glow rings drawn around a star, relative to its own radius
const GLOW_OFFSETS: [f32; 2] = [3.0, 6.0];
/// Gap between a disc and its label
const LABEL_GAP: f32 = 5.0;
const LABEL_FONT_SIZE: f32 = 18.0;

/// Local z of each part of a body inside its layer: ring, disc, glow, label
const DISC_Z: f32 = 0.1;
const GLOW_Z: f32 = 0.2;
const LABEL_Z: f32 = 0.3;

/// A component that ties an entity to a body by its index in the body list
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelestialIdx(pub usize);

/// Every root entity spawned for a body, so a reset can clear them all
#[derive(Component, Debug, Clone, Copy)]
pub struct CelestialVisual;

/// The orbit ring around the viewport center
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitRing;

/// The rings around the central star
#[derive(Component, Debug, Clone, Copy)]
pub struct StarGlow;

/// The name drawn next to a body
#[derive(Component, Debug, Clone, Copy)]
pub struct CelestialLabel;

/// The z layer of the body at `index`.
/// Everything a later body draws lands above everything an earlier one does.
pub fn body_layer(index: usize) -> f32 {
    1.0 + index as f32
}

/// Pixel offset of the label's top left corner from the body center
pub fn label_offset(body: &CelestialBody) -> Vec2 {
    Vec2::new(body.radius + LABEL_GAP, -body.radius)
}

/// Radii of the glow rings, empty for anything that isn't a star
pub fn glow_radii(body: &CelestialBody) -> Vec<f32> {
    if body.is_star {
        GLOW_OFFSETS
            .iter()
            .map(|offset| body.radius + offset)
            .collect()
    } else {
        Vec::new()
    }
}

/// Spawns the body visuals and keeps them in sync with the [`SimulationState`]
pub struct CelestialPlugin;

impl Plugin for CelestialPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, Self::init_simulation);
        app.add_systems(Startup, Self::setup);
        app.add_systems(
            Update,
            (Self::respawn_on_reset_system, Self::sync_transforms_system)
                .chain()
                .in_set(OrbitSet::Sync),
        );
    }
}

/// Startup functions
impl CelestialPlugin {
    /// Builds the body list, it has to exist before anything is spawned for it
    fn init_simulation(mut commands: Commands, config: Res<OrreryConfig>) {
        let bodies = SolarSystemBuilder::new().center(config.center()).build();
        commands.insert_resource(SimulationState::new(bodies, &config));
    }

    fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        state: Res<SimulationState>,
        config: Res<OrreryConfig>,
    ) {
        Self::spawn_bodies(
            &mut commands,
            &mut meshes,
            &mut materials,
            &state,
            config.viewport(),
        );
        info!(
            "Spawned {} bodies in a {}x{} window",
            state.bodies().len(),
            config.width,
            config.height
        );
    }

    /// Spawns the orbit ring, disc, glow and label of every body in list order
    pub fn spawn_bodies(
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<ColorMaterial>,
        state: &SimulationState,
        viewport: Vec2,
    ) {
        let center = pixel_to_world(state.center(), viewport);
        let ring_material = materials.add(ColorMaterial::from(Color::rgb_u8(64, 64, 64)));
        let glow_material = materials.add(ColorMaterial::from(Color::rgb_u8(255, 255, 0)));

        for (idx, body) in state.bodies().iter().enumerate() {
            let layer = body_layer(idx);

            if body.is_orbiting() {
                commands.spawn((
                    MaterialMesh2dBundle {
                        mesh: meshes
                            .add(Radius(body.orbit_distance).ring_mesh(RING_WIDTH))
                            .into(),
                        material: ring_material.clone(),
                        transform: Transform::from_translation(center.extend(layer)),
                        ..Default::default()
                    },
                    OrbitRing,
                    CelestialVisual,
                ));
            }

            let mut children: Vec<Entity> = Vec::new();
            children.push(
                commands
                    .spawn(MaterialMesh2dBundle {
                        mesh: meshes.add(Radius(body.radius).disc_mesh()).into(),
                        material: materials.add(ColorMaterial::from(body.color)),
                        transform: Transform::from_xyz(0.0, 0.0, DISC_Z),
                        ..Default::default()
                    })
                    .id(),
            );
            for radius in glow_radii(body) {
                children.push(
                    commands
                        .spawn((
                            MaterialMesh2dBundle {
                                mesh: meshes.add(Radius(radius).ring_mesh(RING_WIDTH)).into(),
                                material: glow_material.clone(),
                                transform: Transform::from_xyz(0.0, 0.0, GLOW_Z),
                                ..Default::default()
                            },
                            StarGlow,
                        ))
                        .id(),
                );
            }
            let label_at = pixel_offset_to_world(label_offset(body));
            children.push(
                commands
                    .spawn((
                        Text2dBundle {
                            text: Text::from_section(
                                body.name.clone(),
                                TextStyle {
                                    font_size: LABEL_FONT_SIZE,
                                    color: Color::WHITE,
                                    ..Default::default()
                                },
                            ),
                            text_anchor: Anchor::TopLeft,
                            transform: Transform::from_translation(label_at.extend(LABEL_Z)),
                            ..Default::default()
                        },
                        CelestialLabel,
                    ))
                    .id(),
            );

            commands
                .spawn((
                    SpatialBundle {
                        transform: Transform::from_translation(
                            pixel_to_world(body.position, viewport).extend(layer),
                        ),
                        ..Default::default()
                    },
                    Name::new(body.name.clone()),
                    CelestialIdx(idx),
                    CelestialVisual,
                ))
                .push_children(children.as_slice());
        }
    }
}

/// Bevy Systems
impl CelestialPlugin {
    /// On reset the body list is brand new, so its visuals are too
    pub fn respawn_on_reset_system(
        mut commands: Commands,
        mut events: EventReader<ControlEvent>,
        visuals: Query<Entity, With<CelestialVisual>>,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        state: Res<SimulationState>,
        config: Res<OrreryConfig>,
    ) {
        let resets = events
            .read()
            .filter(|event| **event == ControlEvent::Reset)
            .count();
        if resets == 0 {
            return;
        }
        for entity in visuals.iter() {
            commands.entity(entity).despawn_recursive();
        }
        Self::spawn_bodies(
            &mut commands,
            &mut meshes,
            &mut materials,
            &state,
            config.viewport(),
        );
        info!("Reset {} bodies", state.bodies().len());
    }

    /// Move every body entity to its body's current position
    pub fn sync_transforms_system(
        mut bodies: Query<(&CelestialIdx, &mut Transform)>,
        state: Res<SimulationState>,
        config: Res<OrreryConfig>,
    ) {
        let viewport = config.viewport();
        for (idx, mut transform) in bodies.iter_mut() {
            if let Some(body) = state.bodies().get(idx.0) {
                let translation = pixel_to_world(body.position, viewport);
                transform.translation = Vec3::new(translation.x, translation.y, body_layer(idx.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::app::App;

    use super::*;
    use crate::physics::util::clock::Clock;

    fn get_state() -> SimulationState {
        let config = OrreryConfig::default();
        SimulationState::new(
            SolarSystemBuilder::new().center(config.center()).build(),
            &config,
        )
    }

    #[test]
    fn test_layers_follow_list_order() {
        let layers = (0..9).map(body_layer).collect::<Vec<_>>();
        assert!(layers.windows(2).all(|pair| pair[0] < pair[1]));
        // A body's own parts stay below the next body's orbit ring
        assert!(body_layer(0) + LABEL_Z < body_layer(1));
        assert!(body_layer(0) > 0.0, "bodies must draw over the starfield");
    }

    #[test]
    fn test_only_star_glows() {
        let state = get_state();
        let bodies = state.bodies();
        assert_eq!(glow_radii(&bodies[0]), vec![23.0, 26.0]);
        assert!(bodies[1..].iter().all(|body| glow_radii(body).is_empty()));
    }

    #[test]
    fn test_label_sits_up_and_right() {
        let state = get_state();
        let earth = &state.bodies()[3];
        assert_eq!(label_offset(earth), Vec2::new(13.0, -8.0));
    }

    #[test]
    fn test_sync_moves_body_entities() {
        let mut state = get_state();
        let mut clock = Clock::default();
        clock.update(Duration::from_secs(10));
        state.step(&clock);
        let config = OrreryConfig::default();
        let expected = pixel_to_world(state.bodies()[3].position, config.viewport());

        let mut app = App::new();
        app.insert_resource(state)
            .insert_resource(config)
            .add_systems(Update, CelestialPlugin::sync_transforms_system);
        let earth = app
            .world
            .spawn((CelestialIdx(3), Transform::default()))
            .id();
        app.update();

        let transform = app.world.get::<Transform>(earth).unwrap();
        assert_eq!(transform.translation.truncate(), expected);
        assert_eq!(transform.translation.z, body_layer(3));
    }

    fn count<T: Component>(app: &mut App) -> usize {
        app.world.query::<&T>().iter(&app.world).count()
    }

    #[test]
    fn test_spawns_and_respawns_on_reset() {
        let mut app = App::new();
        app.insert_resource(OrreryConfig::default())
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>()
            .add_event::<ControlEvent>()
            .add_plugins(CelestialPlugin);
        app.update();

        assert_eq!(count::<CelestialIdx>(&mut app), 9);
        assert_eq!(count::<OrbitRing>(&mut app), 8);
        assert_eq!(count::<StarGlow>(&mut app), 2);
        assert_eq!(count::<CelestialLabel>(&mut app), 9);
        let before = app
            .world
            .query_filtered::<Entity, With<CelestialIdx>>()
            .iter(&app.world)
            .collect::<Vec<_>>();

        app.world.send_event(ControlEvent::Reset);
        app.update();

        assert_eq!(count::<CelestialIdx>(&mut app), 9);
        assert_eq!(count::<OrbitRing>(&mut app), 8);
        assert_eq!(count::<StarGlow>(&mut app), 2);
        let after = app
            .world
            .query_filtered::<Entity, With<CelestialIdx>>()
            .iter(&app.world)
            .collect::<Vec<_>>();
        assert!(after.iter().all(|entity| !before.contains(entity)));
    }
}
