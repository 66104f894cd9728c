//! Wave director: closes finished waves, hands out rewards, opens the next.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use tracing::info;

use onslaught_core::components::PowerUpPayload;
use onslaught_core::constants::*;
use onslaught_core::enums::{AchievementKind, HazardKind, PowerUpKind, WeaponKind};
use onslaught_core::events::GameEvent;

use crate::session::Session;
use crate::world_setup;

/// Wave progression state.
#[derive(Debug, Clone)]
pub struct WaveState {
    pub wave: u32,
    /// Enemies still to be spawned this wave.
    pub enemies_in_wave: u32,
    /// Set once the current wave's rewards are handed out.
    pub wave_completed: bool,
    pub spawned_this_wave: u32,
    /// Waves closed with rewards this session.
    pub waves_cleared: u32,
}

impl Default for WaveState {
    /// Starts with an empty, completed wave so the first frame opens wave 1
    /// without rewards.
    fn default() -> Self {
        Self {
            wave: 1,
            enemies_in_wave: 0,
            wave_completed: true,
            spawned_this_wave: 0,
            waves_cleared: 0,
        }
    }
}

pub fn wave_budget(wave: u32) -> u32 {
    WAVE_BASE_BUDGET + wave * WAVE_BUDGET_PER_WAVE
}

impl WaveState {
    fn start_next(&mut self) {
        self.wave_completed = false;
        self.enemies_in_wave = wave_budget(self.wave);
        self.spawned_this_wave = 0;
    }
}

/// Close the wave when it is exhausted. Returns true if rewards were granted.
pub fn run(world: &mut World, session: &mut Session) -> bool {
    if world_setup::enemy_count(world) > 0 || session.waves.enemies_in_wave > 0 {
        return false;
    }

    let rewarded = if session.waves.wave_completed {
        false
    } else {
        session.waves.wave_completed = true;
        complete_wave(world, session);
        true
    };
    session.waves.start_next();
    info!(
        wave = session.waves.wave,
        budget = session.waves.enemies_in_wave,
        "Wave started"
    );
    rewarded
}

fn complete_wave(world: &mut World, session: &mut Session) {
    session.waves.wave += 1;
    session.waves.waves_cleared += 1;
    let wave = session.waves.wave;

    session
        .achievements
        .set_progress(AchievementKind::Survivor, wave);
    {
        let Session {
            player, feedback, ..
        } = session;
        player.gain_experience(wave as f64 * WAVE_EXPERIENCE_PER_WAVE, feedback);
    }
    session.player.skill_points += 1;

    let weapon = WeaponKind::ALL[session.rng.gen_range(0..WeaponKind::ALL.len())];
    let at = random_map_point(session);
    world_setup::spawn_power_up(
        world,
        PowerUpKind::Weapon,
        PowerUpPayload::Weapon { weapon },
        at,
    );

    for _ in 0..wave {
        let kind = HazardKind::SEEDABLE[session.rng.gen_range(0..HazardKind::SEEDABLE.len())];
        let at = random_map_point(session);
        world_setup::spawn_hazard(world, kind, at);
    }

    session.feedback.notify(GameEvent::WaveComplete { wave });
    info!(wave, score = session.score.score, "Wave complete");
}

fn random_map_point(session: &mut Session) -> DVec2 {
    DVec2::new(
        session.rng.gen::<f64>() * MAP_WIDTH,
        session.rng.gen::<f64>() * MAP_HEIGHT,
    )
}
