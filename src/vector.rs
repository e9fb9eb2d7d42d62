/*
 * Vector Module
 *
 * Extends nannou's Vec2 with the two operations the particle physics needs
 * that glam does not spell the same way: capping a vector's length and
 * rescaling it to an exact length.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

pub trait VectorExt: Sized {
    /// Caps the length at `max`, keeping the direction. Shorter vectors are returned unchanged.
    fn limit(self, max: f32) -> Self;

    /// Rescales to exactly `magnitude`. A negative magnitude flips the direction.
    /// The zero vector has no direction and stays zero.
    fn with_magnitude(self, magnitude: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn limit(self, max: f32) -> Self {
        let length_squared = self.length_squared();
        if length_squared > max * max {
            self * (max / length_squared.sqrt())
        } else {
            self
        }
    }

    #[inline]
    fn with_magnitude(self, magnitude: f32) -> Self {
        let length = self.length();
        if length > 0.0 {
            self * (magnitude / length)
        } else {
            Vec2::ZERO
        }
    }
}

// Unit vector with a uniformly random heading
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    vec2(angle.cos(), angle.sin())
}
