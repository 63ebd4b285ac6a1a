//! Heading-angle and ground-plane vector helpers.
//!
//! The simulation lives in a 2D ground plane; `glam::Vec2` carries `(x, z)`
//! world coordinates with `Vec2::y` standing in for world `z`.  Heading 0
//! points along +x and positive angles rotate toward +z.

use glam::Vec2;

/// Normalize an angle to the half-open interval `(-π, π]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % (2.0 * std::f32::consts::PI);
    if a > std::f32::consts::PI {
        a -= 2.0 * std::f32::consts::PI;
    } else if a <= -std::f32::consts::PI {
        a += 2.0 * std::f32::consts::PI;
    }
    a
}

/// Unit vector pointing along `heading`.
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Heading of a ground-plane vector; 0 for the zero vector.
#[inline]
pub fn heading_of(v: Vec2) -> f32 {
    if v == Vec2::ZERO {
        0.0
    } else {
        v.y.atan2(v.x)
    }
}
