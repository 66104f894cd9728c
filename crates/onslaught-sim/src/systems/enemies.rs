//! Enemy pursuit, shooter fire and contact resolution with the player.

use glam::DVec2;
use hecs::{Entity, World};

use onslaught_core::components::{Enemy, Hitbox, Position};
use onslaught_core::constants::ENEMY_SHOT_SIZE;
use onslaught_core::enums::ParticleKind;
use onslaught_core::registry::enemy_params;
use onslaught_core::types::angle_to;

use crate::session::Session;
use crate::systems::combat::{self, KillCause};
use crate::systems::particles;
use crate::world_setup;

struct Shot {
    at: DVec2,
    angle: f64,
    speed: f64,
    damage: f64,
}

pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    let target = session.player.position;
    let player_rect = session.player.rect();
    let dashing = session.player.is_dashing();

    let mut shots: Vec<Shot> = Vec::new();
    let mut dash_hits: Vec<(Entity, DVec2)> = Vec::new();
    let mut contact_damage = 0.0;

    for (entity, (enemy, pos, hitbox)) in world.query_mut::<(&mut Enemy, &mut Position, &Hitbox)>() {
        let center = hitbox.center_of(pos.0);
        let to_player = target - center;
        if let Some(dir) = to_player.try_normalize() {
            pos.0 += dir * enemy.speed * dt;
        }

        let params = enemy_params(enemy.kind);
        if let Some(fire_rate) = params.fire_rate {
            if enemy.fire_cooldown <= 0.0 {
                let at = hitbox.center_of(pos.0);
                shots.push(Shot {
                    at,
                    angle: angle_to(at, target),
                    speed: params.projectile_speed,
                    damage: enemy.damage,
                });
                enemy.fire_cooldown = fire_rate;
            } else {
                enemy.fire_cooldown -= dt;
            }
        }

        if hitbox.rect_at(pos.0).overlaps(&player_rect) {
            if dashing {
                dash_hits.push((entity, hitbox.center_of(pos.0)));
            } else {
                contact_damage += enemy.damage * dt;
            }
        }
    }

    for shot in shots {
        world_setup::spawn_enemy_shot(
            world,
            shot.at - DVec2::splat(ENEMY_SHOT_SIZE / 2.0),
            shot.angle,
            shot.speed,
            shot.damage,
        );
        particles::emit(
            world,
            &mut session.rng,
            ParticleKind::Sparkle,
            shot.at,
            shot.angle,
            session.config.max_particles,
        );
    }

    if contact_damage > 0.0 {
        session.player.hurt(contact_damage);
    }

    let dash_damage = session.player.abilities.dash.damage;
    for (entity, at) in dash_hits {
        particles::emit(
            world,
            &mut session.rng,
            ParticleKind::Explosion,
            at,
            0.0,
            session.config.max_particles,
        );
        combat::damage_enemy(world, session, entity, dash_damage, KillCause::Dash);
    }
}
