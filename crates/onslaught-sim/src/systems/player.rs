//! Player step: movement, aiming, firing, reload, power-up pickup and
//! enemy spawning.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use onslaught_core::components::{Enemy, Hitbox, PickupDelay, Position, PowerUp, PowerUpPayload};
use onslaught_core::constants::*;
use onslaught_core::enums::{AchievementKind, ParticleKind, PowerUpKind};
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::input::InputState;
use onslaught_core::types::angle_to;

use crate::session::Session;
use crate::systems::combat::{self, KillCause};
use crate::systems::{particles, spawner};
use crate::world_setup;

pub fn run(world: &mut World, session: &mut Session, input: &InputState, dt: f64) {
    session.player.update_speed_boost(dt);
    movement(session, input, dt);

    if let Some(pointer) = input.pointer {
        session.player.angle = angle_to(session.player.position, pointer);
    }

    if session.player.shoot_cooldown > 0.0 {
        session.player.shoot_cooldown -= dt;
    }
    session.player.update_reload(dt);

    shooting(world, session, input);
    arm_drops(world, session, dt);
    pickups(world, session);
    spawner::run(world, session);
}

fn movement(session: &mut Session, input: &InputState, dt: f64) {
    let player = &mut session.player;
    player.last_position = player.position;

    let direction = input.key_direction().try_normalize().unwrap_or(DVec2::ZERO);
    player.move_direction = direction;
    if player.abilities.dash.is_moving() || direction == DVec2::ZERO {
        return;
    }

    player.position += direction * player.effective_speed() * dt;
    player.clamp_to_map();
}

/// Center of the enemy strictly nearest to `from` within `range`.
pub fn nearest_enemy(world: &World, from: DVec2, range: f64) -> Option<DVec2> {
    let mut best: Option<(f64, DVec2)> = None;
    for (_, (_enemy, pos, hitbox)) in world.query::<(&Enemy, &Position, &Hitbox)>().iter() {
        let center = hitbox.center_of(pos.0);
        let d = center.distance(from);
        if d > range {
            continue;
        }
        match best {
            Some((closest, _)) if closest <= d => {}
            _ => best = Some((d, center)),
        }
    }
    best.map(|(_, c)| c)
}

fn shooting(world: &mut World, session: &mut Session, input: &InputState) {
    let mut wants_fire = input.fire;

    if session.player.auto_shoot {
        let range = session.player.auto_shoot_range;
        if let Some(target) = nearest_enemy(world, session.player.position, range) {
            session.player.angle = angle_to(session.player.position, target);
            wants_fire = true;
        }
    }

    if !wants_fire {
        return;
    }

    if session.player.ammo == 0 {
        let Session {
            player, feedback, ..
        } = session;
        player.start_reload(feedback);
        return;
    }

    if session.player.can_fire() {
        fire(world, session);
    }
}

/// Pull the trigger once: spawn the weapon's projectiles and spend ammo.
pub fn fire(world: &mut World, session: &mut Session) {
    let params = session.player.weapon_params();
    let damage = session.player.shot_damage();
    let origin = session.player.position;
    let aim = session.player.angle;

    for _ in 0..params.projectiles {
        let offset = if params.spread > 0.0 {
            session.rng.gen_range(-params.spread / 2.0..=params.spread / 2.0)
        } else {
            0.0
        };
        world_setup::spawn_player_shot(world, origin, aim + offset, &params, damage);
    }

    session.player.ammo = session.player.ammo.saturating_sub(1);
    session.player.shoot_cooldown = params.fire_rate;
    session.feedback.sound(AudioEvent::Shoot);
    particles::emit(
        world,
        &mut session.rng,
        ParticleKind::Sparkle,
        origin,
        aim,
        session.config.max_particles,
    );

    if session.player.ammo == 0 {
        let Session {
            player, feedback, ..
        } = session;
        player.start_reload(feedback);
    }
}

/// Count down fresh drops and make them collectible when the delay ends.
fn arm_drops(world: &mut World, session: &mut Session, dt: f64) {
    let mut armed = std::mem::take(&mut session.despawn_buffer);
    for (entity, (power_up, delay)) in world.query_mut::<(&mut PowerUp, &mut PickupDelay)>() {
        delay.0 -= dt;
        if delay.0 <= 0.0 {
            power_up.collectible = true;
            armed.push(entity);
        }
    }
    for entity in armed.drain(..) {
        let _ = world.remove_one::<PickupDelay>(entity);
    }
    session.despawn_buffer = armed;
}

fn pickups(world: &mut World, session: &mut Session) {
    let player_rect = session.player.rect();
    let touched: Vec<(Entity, PowerUp, DVec2)> = world
        .query::<(&PowerUp, &Position, &Hitbox)>()
        .iter()
        .filter(|(_, (p, pos, hb))| p.collectible && hb.rect_at(pos.0).overlaps(&player_rect))
        .map(|(e, (p, pos, hb))| (e, *p, hb.center_of(pos.0)))
        .collect();

    for (entity, power_up, at) in touched {
        if world.despawn(entity).is_err() {
            continue;
        }
        apply_power_up(world, session, &power_up);
        session.feedback.sound(AudioEvent::PowerUp);
        session.feedback.notify(GameEvent::PowerUpCollected {
            kind: power_up.kind,
        });
        particles::emit(
            world,
            &mut session.rng,
            ParticleKind::Sparkle,
            at,
            0.0,
            session.config.max_particles,
        );
        if session.player.is_dead() {
            break;
        }
    }
}

pub fn apply_power_up(world: &mut World, session: &mut Session, power_up: &PowerUp) {
    let player = &mut session.player;
    match power_up.kind {
        PowerUpKind::Health => {
            player.health = (player.health + HEALTH_PICKUP_AMOUNT).min(player.max_health);
        }
        PowerUpKind::Ammo => {
            player.ammo = player.max_ammo;
            player.is_reloading = false;
            player.reload_progress = 0.0;
        }
        PowerUpKind::SpeedBoost => player.speed_boost_remaining = SPEED_BOOST_DURATION,
        PowerUpKind::WeaponUpgrade => {
            let next = player.weapon.next();
            player.equip(next);
            let collected = player.collected_weapons.len() as u32;
            session
                .achievements
                .set_progress(AchievementKind::Arsenal, collected);
        }
        PowerUpKind::Nuke => {
            combat::damage_all_enemies(world, session, NUKE_DAMAGE, KillCause::Nuke);
            session.camera.add_shake(10.0);
        }
        PowerUpKind::Experience => {
            if let PowerUpPayload::Amount { value } = power_up.payload {
                let Session {
                    player, feedback, ..
                } = session;
                player.gain_experience(value, feedback);
            }
        }
        PowerUpKind::Weapon => {
            if let PowerUpPayload::Weapon { weapon } = power_up.payload {
                player.equip(weapon);
                let collected = player.collected_weapons.len() as u32;
                session
                    .achievements
                    .set_progress(AchievementKind::Arsenal, collected);
            }
        }
    }
    debug!(kind = ?power_up.kind, "Power-up collected");
}
