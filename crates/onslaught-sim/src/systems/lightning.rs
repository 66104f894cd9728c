//! Periodic lightning strikes at random map points.
//!
//! Every `LIGHTNING_INTERVAL` seconds of play a roll against
//! `SimConfig::lightning_chance` decides whether a strike lands. A strike
//! shakes the camera and damages every enemy whose center is within
//! `LIGHTNING_RADIUS`; kills count as environmental.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

use onslaught_core::constants::*;
use onslaught_core::enums::ParticleKind;
use onslaught_core::events::GameEvent;

use crate::session::Session;
use crate::systems::combat::{self, KillCause};
use crate::systems::particles;

/// Advance the strike countdown by unscaled `dt` and roll when it runs out.
pub fn run(world: &mut World, session: &mut Session, dt: f64) {
    session.lightning_timer -= dt;
    if session.lightning_timer > 0.0 {
        return;
    }
    session.lightning_timer += LIGHTNING_INTERVAL;

    let chance = session.config.lightning_chance.clamp(0.0, 1.0);
    if !session.rng.gen_bool(chance) {
        return;
    }
    let at = DVec2::new(
        session.rng.gen_range(0.0..MAP_WIDTH),
        session.rng.gen_range(0.0..MAP_HEIGHT),
    );
    strike(world, session, at);
}

/// Strike at `at`.
pub fn strike(world: &mut World, session: &mut Session, at: DVec2) {
    particles::emit(
        world,
        &mut session.rng,
        ParticleKind::Sparkle,
        at,
        0.0,
        session.config.max_particles,
    );
    session.camera.add_shake(LIGHTNING_SHAKE);
    session
        .feedback
        .notify(GameEvent::LightningStrike { position: at });
    combat::damage_in_radius(
        world,
        session,
        at,
        LIGHTNING_RADIUS,
        LIGHTNING_DAMAGE,
        KillCause::Environment,
        None,
    );
    debug!(x = at.x, y = at.y, "Lightning strike");
}
