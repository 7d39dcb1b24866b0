//! Celestials are the bodies circling the viewport center.
//! They include the planets and the star they orbit.

pub mod celestial;
pub mod solar_system;
