//! Circular motion on rails.
//! There is no integration here, the position is a pure function of the angle.

use bevy::math::Vec2;

use super::components::CelestialBody;

/// The point `distance` away from `center` at phase `angle`
pub fn circular_position(center: Vec2, distance: f32, angle: f32) -> Vec2 {
    center + distance * Vec2::new(angle.cos(), angle.sin())
}

/// Advance one body by `dt` simulated seconds.
/// `dt` is expected to already include the speed multiplier.
pub fn advance(body: &mut CelestialBody, dt: f32, center: Vec2) {
    body.angle += body.orbital_speed * dt;
    if body.is_orbiting() {
        body.position = circular_position(center, body.orbit_distance, body.angle);
    }
    debug_assert!(body.angle.is_finite(), "{} has a non-finite angle", body.name);
    debug_assert!(
        body.position.is_finite(),
        "{} has a non-finite position",
        body.name
    );
}

/// Advance every body in list order
pub fn advance_all(bodies: &mut [CelestialBody], dt: f32, center: Vec2) {
    for body in bodies.iter_mut() {
        advance(body, dt, center);
    }
}

#[cfg(test)]
mod tests {
    use bevy::render::color::Color;

    use super::*;
    use crate::physics::orbits::components::Mass;

    const CENTER: Vec2 = Vec2::new(600.0, 400.0);
    const EPSILON: f32 = 1e-3;

    fn body(orbit_distance: f32, angle: f32, orbital_speed: f32) -> CelestialBody {
        CelestialBody {
            name: "Test".to_string(),
            mass: Mass(1.0),
            position: circular_position(CENTER, orbit_distance, angle),
            radius: 5.0,
            color: Color::WHITE,
            orbit_distance,
            angle,
            orbital_speed,
            is_star: false,
        }
    }

    #[test]
    fn test_earth_one_second() {
        let mut earth = body(170.0, 4.0, 0.01);
        advance(&mut earth, 1.0, CENTER);
        assert!((earth.angle - 4.01).abs() < 1e-6);
        let expected = CENTER + 170.0 * Vec2::new(4.01f32.cos(), 4.01f32.sin());
        assert!(earth.position.distance(expected) < EPSILON);
    }

    #[test]
    fn test_zero_dt_is_a_noop() {
        let mut mars = body(220.0, 1.0, 0.008);
        let before = mars.clone();
        advance(&mut mars, 0.0, CENTER);
        assert_eq!(mars, before);
    }

    #[test]
    fn test_centered_body_never_moves() {
        let mut sun = body(0.0, 0.0, 0.3);
        for dt in [0.0, 0.016, 1.0, 1e4] {
            advance(&mut sun, dt, CENTER);
            assert_eq!(sun.position, CENTER);
        }
        // The phase still advances, it just has no visible effect
        assert!(sun.angle > 0.0);
    }

    #[test]
    fn test_distance_from_center_is_preserved() {
        let mut bodies = vec![body(80.0, 0.0, 0.04), body(500.0, 1.0, 0.0001)];
        for dt in [0.016, 0.5, 3.0, 1000.0, 0.0] {
            advance_all(&mut bodies, dt, CENTER);
            for b in &bodies {
                assert!((b.position.distance(CENTER) - b.orbit_distance).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_angle_accumulates_linearly() {
        let mut venus = body(120.0, 2.0, 0.015);
        let steps = [0.25, 0.5, 1.25, 2.0];
        for dt in steps {
            advance(&mut venus, dt, CENTER);
        }
        let total: f32 = steps.iter().sum();
        assert!((venus.angle - (2.0 + 0.015 * total)).abs() < 1e-5);
    }

    #[test]
    fn test_large_step_is_not_clamped() {
        let mut mercury = body(80.0, 0.0, 0.04);
        advance(&mut mercury, 1000.0, CENTER);
        assert!((mercury.angle - 40.0).abs() < 1e-4);
        let expected = circular_position(CENTER, 80.0, 40.0);
        assert!(mercury.position.distance(expected) < EPSILON);
    }
}
