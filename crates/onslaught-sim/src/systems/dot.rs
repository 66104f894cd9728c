//! Damage-over-time ticking for the player and every enemy.

use hecs::{Entity, World};

use onslaught_core::components::{DotEffects, Enemy};

use crate::session::Session;
use crate::systems::combat::{self, KillCause};

pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    let player_damage = session.player.dots.tick(dt);
    session.player.health -= player_damage;

    let mut hits: Vec<(Entity, f64)> = Vec::new();
    for (entity, (_enemy, dots)) in world.query_mut::<(&Enemy, &mut DotEffects)>() {
        let damage = dots.tick(dt);
        if damage > 0.0 {
            hits.push((entity, damage));
        }
    }
    for (entity, damage) in hits {
        combat::damage_enemy(world, session, entity, damage, KillCause::Environment);
    }
}
