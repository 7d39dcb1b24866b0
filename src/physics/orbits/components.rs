#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::{math::Vec2, render::color::Color};
use derive_more::{Add, AddAssign, Sub, SubAssign, Sum};

/// The mass of a body in kilograms.
/// Carried as metadata only, nothing in the orrery pulls on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Sum)]
pub struct Mass(pub f32);

/// A body riding a fixed circular path around the viewport center.
///
/// Positions are in pixel space: origin at the top left of the window, y pointing down.
/// Only `angle` and `position` ever change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Display label
    pub name: String,
    /// Decorative mass
    pub mass: Mass,
    /// Current position in pixels
    pub position: Vec2,
    /// Drawing radius in pixels
    pub radius: f32,
    /// Fill color of the disc
    pub color: Color,
    /// Distance from the viewport center, zero pins the body to the center
    pub orbit_distance: f32,
    /// Current phase in radians, never wrapped
    pub angle: f32,
    /// Radians per simulated second
    pub orbital_speed: f32,
    /// Whether this body gets the glow rings of the central star
    pub is_star: bool,
}

impl CelestialBody {
    /// Whether the body moves at all
    pub fn is_orbiting(&self) -> bool {
        self.orbit_distance > 0.0
    }
}
