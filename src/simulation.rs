/*
 * Simulation Module
 *
 * Owns everything one running animation needs: the particle population,
 * the canvas bounds, the frame counter and the random source. The driver
 * calls `tick` once per rendered frame and then reads the particles back
 * for drawing.
 *
 * A tick runs in two passes:
 * 1. Collision pass over all pairs, rebirthing colliding particles
 * 2. Integration pass: pointer force, velocity cap, move, wrap
 */

use nannou::prelude::*;
use rand::rngs::StdRng;

use crate::bounds::Bounds;
use crate::collision::resolve_collisions;
use crate::error::ConfigError;
use crate::force::{pointer_force, Pointer};
use crate::params::SimulationParams;
use crate::particle::Particle;

/// Summary of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub frame: u64,
    pub collisions: usize,
    pub rebirths: usize,
}

pub struct Simulation {
    particles: Vec<Particle>,
    bounds: Bounds,
    frame_count: u64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(
        params: &SimulationParams,
        width: f32,
        height: f32,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        params.validate()?;

        let bounds = Bounds::new(width, height);
        if bounds.is_empty() {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        let particles = spawn_population(params, bounds, &mut rng);

        Ok(Self {
            particles,
            bounds,
            frame_count: 0,
            rng,
        })
    }

    /// Starts from hand-placed particles instead of a random population.
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32, rng: StdRng) -> Self {
        Self {
            particles,
            bounds: Bounds::new(width, height),
            frame_count: 0,
            rng,
        }
    }

    /// Advances one frame. A tick on an empty canvas does nothing, the
    /// population waits for a usable size.
    pub fn tick(&mut self, params: &SimulationParams, pointer: Option<Point2>) -> TickStats {
        if self.bounds.is_empty() {
            return TickStats { frame: self.frame_count, ..Default::default() };
        }

        self.frame_count += 1;
        let pointer = Pointer::sample(pointer, self.bounds);

        let report = resolve_collisions(
            &mut self.particles,
            params.collision_radius,
            params.collision_policy,
            self.bounds,
            params.speed_limit,
            &mut self.rng,
        );

        for particle in &mut self.particles {
            let force = pointer_force(
                particle.position,
                &pointer,
                params.mouse_attraction,
                params.mouse_repulsion_radius,
            );
            particle.apply_force(force);
            particle.update(params.speed_limit);
            particle.wrap_edges(self.bounds);
        }

        let stats = TickStats {
            frame: self.frame_count,
            collisions: report.pairs.len(),
            rebirths: report.rebirths,
        };

        if stats.collisions > 0 {
            log::trace!(
                "frame {}: {} collisions, {} rebirths",
                stats.frame,
                stats.collisions,
                stats.rebirths
            );
        }

        stats
    }

    /// Follows the canvas size. Particles left outside a shrunk canvas are
    /// wrapped back in by the next tick. A size with no area (a minimized
    /// window) is ignored and the previous bounds stay in place.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height);
        if bounds.is_empty() {
            log::debug!("ignoring empty canvas size {}x{}", width, height);
            return;
        }
        self.bounds = bounds;
    }

    // Throw away the current population and spawn a fresh one
    pub fn reset(&mut self, params: &SimulationParams) {
        if self.bounds.is_empty() {
            log::warn!("cannot respawn particles on an empty canvas");
            return;
        }
        self.particles = spawn_population(params, self.bounds, &mut self.rng);
        log::info!("spawned {} particles", self.particles.len());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render hue of the particle in slot `index` at the current frame.
    pub fn hue_of(&self, index: usize) -> Option<f32> {
        self.particles.get(index).map(|p| p.hue(self.frame_count))
    }
}

fn spawn_population(params: &SimulationParams, bounds: Bounds, rng: &mut StdRng) -> Vec<Particle> {
    (0..params.num_particles)
        .map(|index| Particle::new(index, params.num_particles, bounds, params, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_rejects_invalid_params() {
        let params = SimulationParams { num_particles: 0, ..Default::default() };
        let result = Simulation::new(&params, 800.0, 600.0, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(ConfigError::EmptyPopulation)));
    }

    #[test]
    fn new_rejects_empty_canvas() {
        let params = SimulationParams::default();
        let result = Simulation::new(&params, 0.0, 600.0, StdRng::seed_from_u64(1));
        assert_eq!(result.err(), Some(ConfigError::EmptyCanvas { width: 0.0, height: 600.0 }));
    }

    #[test]
    fn tick_on_empty_canvas_is_a_no_op() {
        let params = SimulationParams::default();
        let start = vec![Particle {
            position: pt2(0.0, 0.0),
            velocity: vec2(1.0, 1.0),
            acceleration: Vec2::ZERO,
            size: 4.0,
            base_hue: 10.0,
            hue_speed: 1.0,
        }];
        let mut sim = Simulation::from_particles(start.clone(), 0.0, 0.0, StdRng::seed_from_u64(6));

        let stats = sim.tick(&params, None);
        sim.reset(&params);

        assert_eq!(stats, TickStats::default());
        assert_eq!(sim.frame_count(), 0);
        assert_eq!(sim.particles(), &start[..]);
    }

    #[test]
    fn frame_counter_advances_once_per_tick() {
        let params = SimulationParams::default();
        let mut sim = Simulation::new(&params, 800.0, 600.0, StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(sim.frame_count(), 0);
        for expected in 1..=5 {
            let stats = sim.tick(&params, None);
            assert_eq!(stats.frame, expected);
        }
        assert_eq!(sim.frame_count(), 5);
    }

    #[test]
    fn reset_keeps_population_size() {
        let params = SimulationParams { num_particles: 40, ..Default::default() };
        let mut sim = Simulation::new(&params, 300.0, 300.0, StdRng::seed_from_u64(3)).unwrap();
        let before = sim.particles().to_vec();
        sim.reset(&params);
        assert_eq!(sim.particles().len(), 40);
        assert_ne!(sim.particles(), &before[..]);
    }

    #[test]
    fn hue_of_uses_current_frame() {
        let params = SimulationParams { num_particles: 3, ..Default::default() };
        let mut sim = Simulation::new(&params, 800.0, 600.0, StdRng::seed_from_u64(4)).unwrap();
        sim.tick(&params, None);
        let p = &sim.particles()[1];
        assert_eq!(sim.hue_of(1), Some(p.hue(1)));
        assert_eq!(sim.hue_of(3), None);
    }

    #[test]
    fn resize_rewraps_stray_particles() {
        let params = SimulationParams { num_particles: 60, ..Default::default() };
        let mut sim = Simulation::new(&params, 1000.0, 1000.0, StdRng::seed_from_u64(5)).unwrap();
        sim.resize(200.0, 150.0);
        sim.tick(&params, None);
        let bounds = sim.bounds();
        assert_eq!(bounds, Bounds::new(200.0, 150.0));
        assert!(sim.particles().iter().all(|p| bounds.contains(p.position)));
    }
}
