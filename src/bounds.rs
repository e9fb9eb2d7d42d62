/*
 * Bounds Module
 *
 * The canvas rectangle the particles live in. Canvas space has its origin
 * in the top-left corner with y pointing down, spanning
 * [0, width) x [0, height). Edges are toroidal.
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Uniformly random point inside the canvas
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2 {
        pt2(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }

    /// Strict containment: a point on the top or left edge counts as outside.
    pub fn contains_pointer(&self, point: Point2) -> bool {
        point.x > 0.0 && point.x < self.width && point.y > 0.0 && point.y < self.height
    }

    /// Wraps a point that overshot an edge back in from the opposite one.
    /// Tolerates at most one canvas-width of negative overshoot per axis.
    #[inline]
    pub fn wrap(&self, point: Point2) -> Point2 {
        pt2(
            (point.x + self.width) % self.width,
            (point.y + self.height) % self.height,
        )
    }

    /// A canvas with no area (a minimized window reports 0x0) has nowhere
    /// to put a particle.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, point: Point2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}
