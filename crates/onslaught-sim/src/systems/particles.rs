//! Cosmetic particles: emission at gameplay hooks, integration, expiry.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::{Particle, Position, Velocity};
use onslaught_core::enums::ParticleKind;
use onslaught_core::registry::{particle_params, Span};
use onslaught_core::types::direction_from_angle;

fn roll(rng: &mut ChaCha8Rng, span: Span) -> f64 {
    if span.max > span.min {
        rng.gen_range(span.min..span.max)
    } else {
        span.min
    }
}

/// Emit a burst of `kind` at `at`, fanned around `direction` (radians).
/// Emission stops once `max_particles` are alive.
pub fn emit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: ParticleKind,
    at: DVec2,
    direction: f64,
    max_particles: usize,
) {
    let params = particle_params(kind);
    let live = world.query::<&Particle>().iter().count();
    let count = rng.gen_range(params.count_min..=params.count_max) as usize;
    let count = count.min(max_particles.saturating_sub(live));

    for _ in 0..count {
        let angle = if params.spread > 0.0 {
            direction + rng.gen_range(-params.spread / 2.0..params.spread / 2.0)
        } else {
            direction
        };
        let speed = roll(rng, params.speed);
        let lifetime = roll(rng, params.lifetime);
        world.spawn((
            Position(at),
            Velocity(direction_from_angle(angle) * speed),
            Particle {
                kind,
                size: roll(rng, params.size),
                lifetime,
                max_lifetime: lifetime,
                gravity: params.gravity,
            },
        ));
    }
}

/// Integrate motion and remove expired particles.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Particle)>()
    {
        vel.0.y += particle.gravity * dt;
        pos.0 += vel.0 * dt;
        particle.lifetime -= dt;
        if particle.lifetime <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_emit_respects_registry_counts() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        emit(&mut world, &mut rng, ParticleKind::Explosion, DVec2::ZERO, 0.0, 100);
        let n = world.query::<&Particle>().iter().count();
        assert!((8..=12).contains(&n), "explosion count out of range: {n}");
    }

    #[test]
    fn test_emit_caps_total() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..10 {
            emit(&mut world, &mut rng, ParticleKind::Explosion, DVec2::ZERO, 0.0, 20);
        }
        assert_eq!(world.query::<&Particle>().iter().count(), 20);
    }

    #[test]
    fn test_particles_expire() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut buf = Vec::new();
        emit(&mut world, &mut rng, ParticleKind::Blood, DVec2::ZERO, 0.0, 100);
        run(&mut world, 0.1, &mut buf);
        assert!(world.query::<&Particle>().iter().count() > 0);
        // Blood lives at most 0.6 s.
        for _ in 0..10 {
            run(&mut world, 0.1, &mut buf);
        }
        assert_eq!(world.query::<&Particle>().iter().count(), 0);
    }

    #[test]
    fn test_blood_falls() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut buf = Vec::new();
        emit(&mut world, &mut rng, ParticleKind::Blood, DVec2::ZERO, 0.0, 100);
        let before: Vec<f64> = world.query::<&Velocity>().iter().map(|(_, v)| v.0.y).collect();
        run(&mut world, 0.01, &mut buf);
        let after: Vec<f64> = world.query::<&Velocity>().iter().map(|(_, v)| v.0.y).collect();
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((a - b - 5.0).abs() < 1e-9, "gravity 500 * 0.01");
        }
    }
}
