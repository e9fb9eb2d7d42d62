/*
 * Force Module
 *
 * The pointer is the only external force. Far away it pulls particles in;
 * once they get inside the repulsion radius it pushes them back out harder
 * than it pulled, so particles end up orbiting just outside that radius.
 */

use nannou::prelude::*;

use crate::bounds::Bounds;
use crate::vector::VectorExt;

// Push strength relative to the pull
pub const REPULSION_FACTOR: f32 = -1.5;

/// The pointer as sampled once at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Point2,
    pub in_bounds: bool,
}

impl Pointer {
    pub fn sample(position: Option<Point2>, bounds: Bounds) -> Self {
        match position {
            Some(position) => Self {
                position,
                in_bounds: bounds.contains_pointer(position),
            },
            None => Self::outside(),
        }
    }

    // A pointer that never interacts
    pub fn outside() -> Self {
        Self {
            position: Point2::ZERO,
            in_bounds: false,
        }
    }
}

pub fn pointer_force(
    particle_position: Point2,
    pointer: &Pointer,
    attraction: f32,
    repulsion_radius: f32,
) -> Vec2 {
    if !pointer.in_bounds {
        return Vec2::ZERO;
    }

    let direction = pointer.position - particle_position;
    let distance = direction.length();

    if distance > repulsion_radius {
        direction.with_magnitude(attraction)
    } else if distance > 0.0 {
        direction.with_magnitude(attraction * REPULSION_FACTOR)
    } else {
        // Sitting exactly on the pointer: no direction to push in
        Vec2::ZERO
    }
}
