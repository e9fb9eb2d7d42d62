/*
 * Collision Module
 *
 * Brute-force pairwise proximity check over the whole population. Any two
 * particles closer than the collision radius are both reborn.
 *
 * Rebirth moves particles while the scan is still running, so the order in
 * which pairs are visited can matter. The CollisionPolicy makes that choice
 * explicit instead of leaving it to loop structure.
 */

use rand::Rng;

use crate::bounds::Bounds;
use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Rebirth as soon as a pair is found. Later pairs compare against the
    /// reborn particle's new position, so outcomes depend on slot order.
    #[default]
    Immediate,
    /// Find every pair on the positions at the start of the pass, then
    /// rebirth each involved particle exactly once.
    Snapshot,
}

impl CollisionPolicy {
    pub fn next(self) -> Self {
        match self {
            CollisionPolicy::Immediate => CollisionPolicy::Snapshot,
            CollisionPolicy::Snapshot => CollisionPolicy::Immediate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollisionPolicy::Immediate => "Immediate",
            CollisionPolicy::Snapshot => "Snapshot",
        }
    }
}

/// What one collision pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    pub pairs: Vec<(usize, usize)>,
    pub rebirths: usize,
}

#[inline]
fn colliding(a: &Particle, b: &Particle, radius: f32) -> bool {
    a.position.distance(b.position) < radius
}

/// Every unordered pair `(i, j)` with `i < j` closer than `radius`, in scan order.
pub fn detect_collisions(particles: &[Particle], radius: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if colliding(&particles[i], &particles[j], radius) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub fn resolve_collisions<R: Rng + ?Sized>(
    particles: &mut [Particle],
    radius: f32,
    policy: CollisionPolicy,
    bounds: Bounds,
    speed_limit: f32,
    rng: &mut R,
) -> CollisionReport {
    match policy {
        CollisionPolicy::Immediate => resolve_immediate(particles, radius, bounds, speed_limit, rng),
        CollisionPolicy::Snapshot => resolve_snapshot(particles, radius, bounds, speed_limit, rng),
    }
}

fn resolve_immediate<R: Rng + ?Sized>(
    particles: &mut [Particle],
    radius: f32,
    bounds: Bounds,
    speed_limit: f32,
    rng: &mut R,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if colliding(&particles[i], &particles[j], radius) {
                particles[i].rebirth(bounds, speed_limit, rng);
                particles[j].rebirth(bounds, speed_limit, rng);
                report.pairs.push((i, j));
                report.rebirths += 2;
            }
        }
    }

    report
}

fn resolve_snapshot<R: Rng + ?Sized>(
    particles: &mut [Particle],
    radius: f32,
    bounds: Bounds,
    speed_limit: f32,
    rng: &mut R,
) -> CollisionReport {
    let pairs = detect_collisions(particles, radius);

    let mut hit = vec![false; particles.len()];
    for &(i, j) in &pairs {
        hit[i] = true;
        hit[j] = true;
    }

    let mut rebirths = 0;
    for (particle, was_hit) in particles.iter_mut().zip(hit) {
        if was_hit {
            particle.rebirth(bounds, speed_limit, rng);
            rebirths += 1;
        }
    }

    CollisionReport { pairs, rebirths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: pt2(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size: 5.0,
            base_hue: 0.0,
            hue_speed: 1.0,
        }
    }

    #[test]
    fn detects_only_pairs_inside_radius() {
        let particles = vec![
            particle_at(10.0, 10.0),
            particle_at(12.0, 10.0),
            particle_at(100.0, 100.0),
            particle_at(100.0, 108.0),
        ];
        // Exactly on the radius does not count
        assert_eq!(detect_collisions(&particles, 8.0), vec![(0, 1)]);
    }

    #[test]
    fn snapshot_rebirths_each_particle_once() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut particles = vec![
            particle_at(10.0, 10.0),
            particle_at(15.0, 10.0),
            particle_at(20.0, 10.0),
        ];

        let report = resolve_collisions(
            &mut particles,
            8.0,
            CollisionPolicy::Snapshot,
            Bounds::new(800.0, 600.0),
            4.0,
            &mut rng,
        );

        assert_eq!(report.pairs, vec![(0, 1), (1, 2)]);
        assert_eq!(report.rebirths, 3);
    }

    #[test]
    fn policy_cycles_between_both_variants() {
        assert_eq!(CollisionPolicy::Immediate.next(), CollisionPolicy::Snapshot);
        assert_eq!(CollisionPolicy::Snapshot.next(), CollisionPolicy::Immediate);
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::Immediate);
    }
}
