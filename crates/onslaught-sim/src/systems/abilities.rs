//! Per-frame ability driver: activation from input, countdowns, and the
//! chain dash sequence.
//!
//! Runs on unscaled time so time slow never stretches its own duration.

use glam::DVec2;
use hecs::{Entity, World};
use tracing::debug;

use onslaught_core::components::{Enemy, Hitbox, Position};
use onslaught_core::constants::{DASH_DIRECTION_BLEND, DASH_MIN_CHAIN_DISTANCE};
use onslaught_core::enums::{AbilityKind, ParticleKind};
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::input::InputState;
use onslaught_core::types::{angle_difference, angle_to, direction_from_angle};

use crate::abilities::DashPhase;
use crate::session::Session;
use crate::systems::combat::{self, KillCause};
use crate::systems::particles;

pub fn run(world: &mut World, session: &mut Session, input: &InputState, dt: f64) {
    {
        let abilities = &mut session.player.abilities;
        abilities.shield.update(dt);
        abilities.time_slow.update(dt);
        abilities.dash.update_timers(dt);
    }

    if input.dash && session.player.abilities.dash.can_activate() {
        let direction = dash_direction(session, input);
        if session.player.abilities.dash.begin(direction) {
            session.feedback.sound(AudioEvent::Dash);
            session.feedback.notify(GameEvent::AbilityActivated {
                ability: AbilityKind::Dash,
            });
            plan_hop(world, session, true);
        }
    }

    if input.shield && session.player.abilities.shield.activate() {
        session.feedback.notify(GameEvent::AbilityActivated {
            ability: AbilityKind::Shield,
        });
    }

    if input.time_slow && session.player.abilities.time_slow.activate() {
        session.feedback.notify(GameEvent::AbilityActivated {
            ability: AbilityKind::TimeSlow,
        });
    }

    advance_dash(world, session, dt);
}

/// Held movement keys win; otherwise toward the pointer; otherwise facing.
fn dash_direction(session: &Session, input: &InputState) -> DVec2 {
    if let Some(dir) = input.key_direction().try_normalize() {
        return dir;
    }
    input
        .pointer
        .and_then(|p| (p - session.player.position).try_normalize())
        .unwrap_or_else(|| direction_from_angle(session.player.angle))
}

/// Best enemy center to chain to from `from`, or `None`.
///
/// Candidates must be within `range`, farther than the minimum chain distance,
/// and less than 90 degrees off `direction`. Alignment counts double.
pub fn find_chain_target(world: &World, from: DVec2, direction: DVec2, range: f64) -> Option<DVec2> {
    let heading = direction.y.atan2(direction.x);
    let mut best: Option<(f64, DVec2)> = None;

    for (_, (_enemy, pos, hitbox)) in world.query::<(&Enemy, &Position, &Hitbox)>().iter() {
        let center = hitbox.center_of(pos.0);
        let distance = center.distance(from);
        if distance > range || distance <= DASH_MIN_CHAIN_DISTANCE {
            continue;
        }
        let diff = angle_difference(angle_to(from, center), heading);
        if diff >= std::f64::consts::FRAC_PI_2 {
            continue;
        }
        let align = (std::f64::consts::PI - diff) / std::f64::consts::PI;
        let score = align * 2.0 + (1.0 - distance / range);
        match best {
            Some((top, _)) if top >= score => {}
            _ => best = Some((score, center)),
        }
    }
    best.map(|(_, c)| c)
}

/// Start the next hop, or finish the dash when there is nowhere to go.
fn plan_hop(world: &mut World, session: &mut Session, first: bool) {
    let from = session.player.position;
    let dash = &session.player.abilities.dash;
    if dash.chain_count >= dash.max_chains {
        session.player.abilities.dash.end();
        return;
    }

    match find_chain_target(world, from, dash.direction, dash.chain_range) {
        Some(target) => {
            let dash = &mut session.player.abilities.dash;
            if let Some(toward) = (target - from).try_normalize() {
                let blended = dash.direction * DASH_DIRECTION_BLEND + toward * (1.0 - DASH_DIRECTION_BLEND);
                dash.direction = blended.try_normalize().unwrap_or(toward);
            }
            dash.phase = DashPhase::Segment {
                from,
                to: target,
                elapsed: 0.0,
                free: false,
            };
            session.camera.add_shake(4.0);
            debug!(hop = dash.chain_count + 1, "Dash chained");
        }
        None if first => {
            let dash = &session.player.abilities.dash;
            let reach = dash.speed * dash.segment_duration;
            let to = session.player.clamped(from + dash.direction * reach);
            session.player.abilities.dash.phase = DashPhase::Segment {
                from,
                to,
                elapsed: 0.0,
                free: true,
            };
        }
        None => finish(world, session),
    }
}

fn finish(world: &mut World, session: &mut Session) {
    let heading = {
        let d = session.player.abilities.dash.direction;
        d.y.atan2(d.x)
    };
    session.player.abilities.dash.end();
    particles::emit(
        world,
        &mut session.rng,
        ParticleKind::DashTrail,
        session.player.position,
        heading,
        session.config.max_particles,
    );
}

fn advance_dash(world: &mut World, session: &mut Session, dt: f64) {
    match session.player.abilities.dash.phase {
        DashPhase::Idle => {}
        DashPhase::ChainDelay { remaining } => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                plan_hop(world, session, false);
            } else {
                session.player.abilities.dash.phase = DashPhase::ChainDelay { remaining };
            }
        }
        DashPhase::Segment {
            from,
            to,
            elapsed,
            free,
        } => {
            let elapsed = elapsed + dt;
            let dash = &session.player.abilities.dash;
            let progress = (elapsed / dash.segment_duration).min(1.0);
            let heading = angle_to(from, to);
            session.player.position = from.lerp(to, progress);
            session.player.clamp_to_map();

            particles::emit(
                world,
                &mut session.rng,
                ParticleKind::DashTrail,
                session.player.position,
                heading,
                session.config.max_particles,
            );
            sweep_damage(world, session);

            let dash = &mut session.player.abilities.dash;
            if progress < 1.0 {
                dash.phase = DashPhase::Segment {
                    from,
                    to,
                    elapsed,
                    free,
                };
            } else if free {
                finish(world, session);
            } else {
                dash.chain_count += 1;
                dash.phase = DashPhase::ChainDelay {
                    remaining: dash.chain_delay,
                };
            }
        }
    }
}

/// Falloff damage to every enemy within the dash radius of the player.
fn sweep_damage(world: &mut World, session: &mut Session) {
    let at = session.player.position;
    let radius = session.player.abilities.dash.radius;
    let damage = session.player.abilities.dash.damage;

    let hits: Vec<(Entity, f64)> = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .filter_map(|(e, (_, p, hb))| {
            let d = hb.center_of(p.0).distance(at);
            (d <= radius).then(|| (e, damage * (1.0 - d / radius)))
        })
        .filter(|(_, amount)| *amount > 0.0)
        .collect();

    for (entity, amount) in hits {
        if combat::damage_enemy(world, session, entity, amount, KillCause::Dash) {
            session.camera.add_shake(3.0);
        }
    }
}
