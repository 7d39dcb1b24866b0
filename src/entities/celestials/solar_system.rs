use bevy::{log::info, math::Vec2, render::color::Color};
use itertools::Itertools;

use crate::physics::orbits::{
    components::{CelestialBody, Mass},
    kinematics::circular_position,
};

/// The fixed parameters of one body before it is placed on its orbit
struct BodyRecord {
    name: &'static str,
    mass: f32,
    radius: f32,
    color: [u8; 3],
    orbit_distance: f32,
    angle: f32,
    orbital_speed: f32,
    is_star: bool,
}

/// Distances are pixels, speeds are radians per second.
/// Only the ordering is load bearing: later bodies draw on top.
const SOLAR_SYSTEM: [BodyRecord; 9] = [
    BodyRecord {
        name: "Sun",
        mass: 1.989e30,
        radius: 20.0,
        color: [255, 255, 0],
        orbit_distance: 0.0,
        angle: 0.0,
        orbital_speed: 0.0,
        is_star: true,
    },
    BodyRecord {
        name: "Mercury",
        mass: 3.285e23,
        radius: 4.0,
        color: [128, 128, 128],
        orbit_distance: 80.0,
        angle: 0.0,
        orbital_speed: 0.04,
        is_star: false,
    },
    BodyRecord {
        name: "Venus",
        mass: 4.867e24,
        radius: 7.0,
        color: [255, 200, 100],
        orbit_distance: 120.0,
        angle: 2.0,
        orbital_speed: 0.015,
        is_star: false,
    },
    BodyRecord {
        name: "Earth",
        mass: 5.972e24,
        radius: 8.0,
        color: [173, 216, 230],
        orbit_distance: 170.0,
        angle: 4.0,
        orbital_speed: 0.01,
        is_star: false,
    },
    BodyRecord {
        name: "Mars",
        mass: 6.417e23,
        radius: 5.0,
        color: [255, 0, 0],
        orbit_distance: 220.0,
        angle: 1.0,
        orbital_speed: 0.008,
        is_star: false,
    },
    BodyRecord {
        name: "Jupiter",
        mass: 1.898e27,
        radius: 14.0,
        color: [255, 165, 0],
        orbit_distance: 300.0,
        angle: 3.0,
        orbital_speed: 0.002,
        is_star: false,
    },
    BodyRecord {
        name: "Saturn",
        mass: 5.683e26,
        radius: 12.0,
        color: [210, 180, 140],
        orbit_distance: 380.0,
        angle: 5.0,
        orbital_speed: 0.0009,
        is_star: false,
    },
    BodyRecord {
        name: "Uranus",
        mass: 8.681e25,
        radius: 9.0,
        color: [173, 216, 230],
        orbit_distance: 450.0,
        angle: 2.0,
        orbital_speed: 0.0004,
        is_star: false,
    },
    BodyRecord {
        name: "Neptune",
        mass: 1.024e26,
        radius: 9.0,
        color: [0, 0, 255],
        orbit_distance: 500.0,
        angle: 1.0,
        orbital_speed: 0.0001,
        is_star: false,
    },
];

/// Builds the ordered body list of the solar system
pub struct SolarSystemBuilder {
    center: Vec2,
}

impl Default for SolarSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystemBuilder {
    pub fn new() -> Self {
        Self {
            center: Vec2::new(600.0, 400.0),
        }
    }

    /// The pixel every orbit is centered on
    pub fn center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// Every body starts on its orbit already, positioned from its initial angle
    pub fn build(&self) -> Vec<CelestialBody> {
        let bodies = SOLAR_SYSTEM
            .iter()
            .map(|record| {
                let [r, g, b] = record.color;
                let position = if record.orbit_distance > 0.0 {
                    circular_position(self.center, record.orbit_distance, record.angle)
                } else {
                    self.center
                };
                CelestialBody {
                    name: record.name.to_string(),
                    mass: Mass(record.mass),
                    position,
                    radius: record.radius,
                    color: Color::rgb_u8(r, g, b),
                    orbit_distance: record.orbit_distance,
                    angle: record.angle,
                    orbital_speed: record.orbital_speed,
                    is_star: record.is_star,
                }
            })
            .collect::<Vec<_>>();
        info!(
            "Built {} bodies: {}",
            bodies.len(),
            bodies.iter().map(|body| body.name.as_str()).join(", ")
        );
        bodies
    }
}
