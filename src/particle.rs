/*
 * Particle Module
 *
 * This module defines the Particle struct and its life cycle.
 * A particle is created once, pushed around by the pointer every tick,
 * and reborn somewhere else whenever it collides with another particle.
 * Rebirth only touches the kinematic state, so a particle keeps its size
 * and its place on the color wheel for the whole run.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::bounds::Bounds;
use crate::color;
use crate::params::SimulationParams;
use crate::vector::{random_direction, VectorExt};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: f32,
    pub base_hue: f32,
    pub hue_speed: f32,
}

impl Particle {
    /// Creates the particle for slot `index` of a population of `total`.
    ///
    /// Base hues start from evenly spaced slots around the color wheel plus
    /// a random offset, so a fresh population is spread across the spectrum.
    pub fn new<R: Rng + ?Sized>(
        index: usize,
        total: usize,
        bounds: Bounds,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Self {
        let slot_hue = index as f32 * (360.0 / total as f32);
        let base_hue = (slot_hue + rng.gen_range(0.0..360.0)) % 360.0;

        Self {
            position: bounds.random_point(rng),
            velocity: random_velocity(params.speed_limit, rng),
            acceleration: Vec2::ZERO,
            size: rng.gen_range(params.size_min..params.size_max),
            base_hue,
            hue_speed: rng.gen_range(params.hue_speed_min..params.hue_speed_max),
        }
    }

    // Respawn at a random spot with a fresh heading; size and hue are kept
    pub fn rebirth<R: Rng + ?Sized>(&mut self, bounds: Bounds, speed_limit: f32, rng: &mut R) {
        self.position = bounds.random_point(rng);
        self.velocity = random_velocity(speed_limit, rng);
        self.acceleration = Vec2::ZERO;
    }

    // Apply a force to the particle
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Integrate one tick: the capped velocity is what moves the particle
    pub fn update(&mut self, speed_limit: f32) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(speed_limit);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    // Wrap the particle around the canvas edges
    pub fn wrap_edges(&mut self, bounds: Bounds) {
        self.position = bounds.wrap(self.position);
    }

    pub fn hue(&self, frame: u64) -> f32 {
        color::hue(self.base_hue, self.hue_speed, frame)
    }
}

/// Random heading with a speed drawn from `[1, speed_limit]`; never zero.
pub fn random_velocity<R: Rng + ?Sized>(speed_limit: f32, rng: &mut R) -> Vec2 {
    random_direction(rng) * rng.gen_range(1.0..=speed_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            position: pt2(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size: 4.0,
            base_hue: 120.0,
            hue_speed: 0.75,
        }
    }

    #[test]
    fn new_particle_respects_configured_ranges() {
        let params = SimulationParams::default();
        let bounds = Bounds::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(11);

        for index in 0..params.num_particles {
            let p = Particle::new(index, params.num_particles, bounds, &params, &mut rng);
            assert!(bounds.contains(p.position));
            let speed = p.velocity.length();
            assert!(speed >= 1.0 - 1e-4 && speed <= params.speed_limit + 1e-4);
            assert_eq!(p.acceleration, Vec2::ZERO);
            assert!(p.size >= 3.0 && p.size < 7.0);
            assert!(p.base_hue >= 0.0 && p.base_hue < 360.0);
            assert!(p.hue_speed >= 0.5 && p.hue_speed < 1.0);
        }
    }

    #[test]
    fn rebirth_keeps_visual_identity() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = Bounds::new(800.0, 600.0);
        let mut p = still_particle(10.0, 10.0);
        p.acceleration = vec2(0.3, -0.2);

        p.rebirth(bounds, 4.0, &mut rng);

        assert_eq!(p.size, 4.0);
        assert_eq!(p.base_hue, 120.0);
        assert_eq!(p.hue_speed, 0.75);
        assert_eq!(p.acceleration, Vec2::ZERO);
        assert!(bounds.contains(p.position));
        let speed = p.velocity.length();
        assert!(speed >= 1.0 - 1e-4 && speed <= 4.0 + 1e-4);
    }

    #[test]
    fn update_caps_velocity_before_moving() {
        let mut p = still_particle(50.0, 50.0);
        p.velocity = vec2(4.0, 0.0);
        p.apply_force(vec2(3.0, 0.0));

        p.update(4.0);

        assert!((p.velocity.x - 4.0).abs() < 1e-5);
        assert!((p.position.x - 54.0).abs() < 1e-4);
        assert_eq!(p.acceleration, Vec2::ZERO);
    }

    #[test]
    fn forces_accumulate_until_update() {
        let mut p = still_particle(0.0, 0.0);
        p.apply_force(vec2(0.1, 0.0));
        p.apply_force(vec2(0.0, 0.2));
        assert_eq!(p.acceleration, vec2(0.1, 0.2));
    }

    #[test]
    fn wrap_edges_moves_particle_to_opposite_side() {
        let mut p = still_particle(9.0, 5.0);
        p.velocity = vec2(3.0, 0.0);
        p.update(4.0);
        p.wrap_edges(Bounds::new(10.0, 10.0));
        assert_eq!(p.position, pt2(2.0, 5.0));
    }
}
