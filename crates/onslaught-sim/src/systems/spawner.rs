//! Enemy spawning: budget gating, placement ahead of the player, kind roll.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::constants::*;
use onslaught_core::registry::{enemy_kind_for_roll, total_spawn_weight};

use crate::camera::Camera;
use crate::session::Session;
use crate::world_setup;

/// Possibly spawn one enemy this frame.
pub fn run(world: &mut World, session: &mut Session) {
    let waves = &session.waves;
    if waves.wave_completed || waves.enemies_in_wave == 0 {
        return;
    }
    if world_setup::enemy_count(world) >= session.config.max_live_enemies {
        return;
    }
    if !session.rng.gen_bool(session.config.spawn_chance.clamp(0.0, 1.0)) {
        return;
    }

    let pos = spawn_position(
        &mut session.rng,
        session.player.position,
        session.player.move_direction,
        &session.camera,
    );
    let kind = enemy_kind_for_roll(session.rng.gen_range(0..total_spawn_weight()));
    world_setup::spawn_enemy(world, kind, pos);
    session.waves.enemies_in_wave -= 1;
    session.waves.spawned_this_wave += 1;
}

/// Anchor ahead of a moving player (or on a random viewport edge when
/// idle), jittered and clamped to the map.
pub fn spawn_position(
    rng: &mut ChaCha8Rng,
    player: DVec2,
    move_direction: DVec2,
    camera: &Camera,
) -> DVec2 {
    let moving = move_direction.x.abs() > SPAWN_MOVING_THRESHOLD
        || move_direction.y.abs() > SPAWN_MOVING_THRESHOLD;

    let base = if moving {
        player
            + DVec2::new(
                move_direction.x * (camera.width + SPAWN_BUFFER),
                move_direction.y * (camera.height + SPAWN_BUFFER),
            )
    } else {
        match rng.gen_range(0..4) {
            0 => DVec2::new(
                camera.x + rng.gen::<f64>() * camera.width,
                camera.y - SPAWN_BUFFER,
            ),
            1 => DVec2::new(
                camera.x + camera.width + SPAWN_BUFFER,
                camera.y + rng.gen::<f64>() * camera.height,
            ),
            2 => DVec2::new(
                camera.x + rng.gen::<f64>() * camera.width,
                camera.y + camera.height + SPAWN_BUFFER,
            ),
            _ => DVec2::new(
                camera.x - SPAWN_BUFFER,
                camera.y + rng.gen::<f64>() * camera.height,
            ),
        }
    };

    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance = rng.gen::<f64>() * SPAWN_RADIUS;
    let p = base + DVec2::new(angle.cos(), angle.sin()) * distance;
    DVec2::new(p.x.clamp(0.0, MAP_WIDTH), p.y.clamp(0.0, MAP_HEIGHT))
}
