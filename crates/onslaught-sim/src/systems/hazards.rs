//! Environmental hazards: expiry, contact damage, DOT attachment.

use hecs::{Entity, World};

use onslaught_core::components::{DotEffect, DotEffects, Enemy, Hazard, Hitbox, Position};
use onslaught_core::constants::HAZARD_DOT_DURATION;
use onslaught_core::types::Rect;

use crate::session::Session;
use crate::systems::combat::{self, KillCause};

/// Tick hazard lifetimes, then apply contact effects to the player and enemies.
pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    let mut despawn = std::mem::take(&mut session.despawn_buffer);
    despawn.clear();

    let mut live: Vec<(Entity, Rect, Hazard)> = Vec::new();
    for (entity, (hazard, pos, hitbox)) in world.query_mut::<(&mut Hazard, &Position, &Hitbox)>() {
        if let Some(left) = hazard.time_left.as_mut() {
            *left -= dt;
            if *left <= 0.0 {
                despawn.push(entity);
                continue;
            }
        }
        live.push((entity, hitbox.rect_at(pos.0), *hazard));
    }
    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }
    session.despawn_buffer = despawn;

    let player_rect = session.player.rect();
    for (source, rect, hazard) in &live {
        if !session.player.is_dashing() && rect.overlaps(&player_rect) {
            session.player.hurt(hazard.damage * dt);
            if let Some(dps) = hazard.dot_damage {
                session.player.dots.apply(dot_from(*source, dps));
            }
        }
    }

    let mut enemy_hits: Vec<(Entity, f64)> = Vec::new();
    for (entity, (_enemy, pos, hitbox, dots)) in
        world.query_mut::<(&Enemy, &Position, &Hitbox, &mut DotEffects)>()
    {
        let rect = hitbox.rect_at(pos.0);
        let mut damage = 0.0;
        for (source, hazard_rect, hazard) in &live {
            if hazard_rect.overlaps(&rect) {
                damage += hazard.damage * dt;
                if let Some(dps) = hazard.dot_damage {
                    dots.apply(dot_from(*source, dps));
                }
            }
        }
        if damage > 0.0 {
            enemy_hits.push((entity, damage));
        }
    }
    for (entity, damage) in enemy_hits {
        combat::damage_enemy(world, session, entity, damage, KillCause::Environment);
    }
}

fn dot_from(source: Entity, dps: f64) -> DotEffect {
    DotEffect {
        damage_per_sec: dps,
        remaining: HAZARD_DOT_DURATION,
        source: Some(source.to_bits().get()),
    }
}
