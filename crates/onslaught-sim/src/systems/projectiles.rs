//! Player and enemy projectiles: motion, bounds, hit resolution.
//!
//! A shot resolves each enemy at most once per tick. Penetrating shots keep
//! flying and may hit the same enemy again on a later tick.

use hecs::{Entity, World};
use rand::Rng;

use onslaught_core::components::*;
use onslaught_core::constants::{MAP_HEIGHT, MAP_WIDTH};
use onslaught_core::enums::ParticleKind;
use onslaught_core::events::GameEvent;
use onslaught_core::types::Rect;

use crate::session::Session;
use crate::systems::combat::{self, KillCause};
use crate::systems::particles;

fn out_of_bounds(pos: &Position) -> bool {
    pos.0.x < 0.0 || pos.0.x > MAP_WIDTH || pos.0.y < 0.0 || pos.0.y > MAP_HEIGHT
}

pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    update_player_shots(world, session, dt);
    update_enemy_shots(world, session, dt);
}

fn update_player_shots(world: &mut World, session: &mut Session, dt: f64) {
    let mut gone: Vec<Entity> = Vec::new();
    let mut shots: Vec<(Entity, Rect, PlayerShot)> = Vec::new();
    for (entity, (pos, vel, hitbox, shot)) in
        world.query_mut::<(&mut Position, &Velocity, &Hitbox, &PlayerShot)>()
    {
        pos.0 += vel.0 * dt;
        if out_of_bounds(pos) {
            gone.push(entity);
        } else {
            shots.push((entity, hitbox.rect_at(pos.0), *shot));
        }
    }
    for entity in gone.drain(..) {
        let _ = world.despawn(entity);
    }

    for (shot_entity, shot_rect, shot) in shots {
        // Snapshot of enemies still alive when this shot resolves.
        let targets: Vec<Entity> = world
            .query::<(&Enemy, &Position, &Hitbox)>()
            .iter()
            .filter(|(_, (_, p, hb))| hb.rect_at(p.0).overlaps(&shot_rect))
            .map(|(e, _)| e)
            .collect();

        for enemy in targets {
            if !world.contains(enemy) {
                continue;
            }
            resolve_hit(world, session, &shot, &shot_rect, enemy);
            if !shot.penetrating {
                let _ = world.despawn(shot_entity);
                break;
            }
        }
    }
}

fn resolve_hit(
    world: &mut World,
    session: &mut Session,
    shot: &PlayerShot,
    shot_rect: &Rect,
    enemy: Entity,
) {
    let critical = session.rng.gen::<f64>() < session.player.stats.critical_chance;
    let damage = if critical { shot.damage * 2.0 } else { shot.damage };
    if critical {
        session.feedback.notify(GameEvent::CriticalHit { damage });
    }

    let impact = shot_rect.center();
    particles::emit(
        world,
        &mut session.rng,
        ParticleKind::Blood,
        impact,
        shot.angle,
        session.config.max_particles,
    );

    if let Some(dot) = shot.dot {
        if let Ok(mut dots) = world.get::<&mut DotEffects>(enemy) {
            dots.apply(DotEffect {
                damage_per_sec: dot.damage_per_sec,
                remaining: dot.duration,
                source: None,
            });
        }
    }

    let cause = KillCause::Weapon { critical };
    combat::damage_enemy(world, session, enemy, damage, cause);

    if let Some(radius) = shot.explosion_radius {
        particles::emit(
            world,
            &mut session.rng,
            ParticleKind::Explosion,
            impact,
            0.0,
            session.config.max_particles,
        );
        combat::damage_in_radius(world, session, impact, radius, shot.damage, cause, Some(enemy));
        session.camera.add_shake(5.0);
    }
}

fn update_enemy_shots(world: &mut World, session: &mut Session, dt: f64) {
    let player_rect = session.player.rect();
    let dashing = session.player.is_dashing();
    let mut gone: Vec<Entity> = Vec::new();
    let mut hits: Vec<(f64, Rect)> = Vec::new();

    for (entity, (pos, vel, hitbox, shot)) in
        world.query_mut::<(&mut Position, &Velocity, &Hitbox, &EnemyShot)>()
    {
        pos.0 += vel.0 * dt;
        if out_of_bounds(pos) {
            gone.push(entity);
            continue;
        }
        let rect = hitbox.rect_at(pos.0);
        if !dashing && rect.overlaps(&player_rect) {
            hits.push((shot.damage, rect));
            gone.push(entity);
        }
    }
    for entity in gone {
        let _ = world.despawn(entity);
    }

    for (damage, rect) in hits {
        session.player.hurt(damage);
        session.camera.add_shake(3.0);
        particles::emit(
            world,
            &mut session.rng,
            ParticleKind::Sparkle,
            rect.center(),
            0.0,
            session.config.max_particles,
        );
    }
}
