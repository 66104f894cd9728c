//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in frame order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use onslaught_core::commands::PlayerCommand;
use onslaught_core::constants::*;
use onslaught_core::enums::GamePhase;
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::input::InputState;
use onslaught_core::state::GameStateSnapshot;
use onslaught_core::types::SimTime;

use crate::player::Player;
use crate::scoring::ScoreState;
use crate::session::Session;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Base time scale (1.0 = normal). Time slow multiplies on top.
    pub time_scale: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Per-frame chance to spawn one enemy while the wave has budget.
    pub spawn_chance: f64,
    pub max_live_enemies: usize,
    /// Chance for a dying enemy to drop a consumable power-up.
    pub powerup_drop_chance: f64,
    /// Chance that a lightning roll strikes.
    pub lightning_chance: f64,
    pub max_particles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            spawn_chance: SPAWN_CHANCE,
            max_live_enemies: MAX_LIVE_ENEMIES,
            powerup_drop_chance: POWERUP_DROP_CHANCE,
            lightning_chance: LIGHTNING_CHANCE,
            max_particles: MAX_PARTICLES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    session: Session,
    phase: GamePhase,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            session: Session::new(config),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds of wall time and return the
    /// resulting snapshot. Only the active phase simulates.
    pub fn tick(&mut self, input: &InputState, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_frame(input, dt.max(0.0));
        }

        systems::snapshot::build_snapshot(&self.world, &mut self.session, self.phase)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.session.time
    }

    /// Time scale applied to the last frame.
    pub fn time_scale(&self) -> f64 {
        self.session.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for harnesses that stage scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access for harnesses that stage scenarios.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn player(&self) -> &Player {
        &self.session.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.session.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Ready {
                    self.phase = GamePhase::Active;
                    self.session.feedback.sound(AudioEvent::StartMusic);
                    info!(seed = self.session.config.seed, "Game started");
                }
            }
            PlayerCommand::Reset => {
                self.world.clear();
                self.session.reset();
                self.phase = GamePhase::Active;
                self.session.feedback.sound(AudioEvent::StartMusic);
                info!(high_score = self.session.score.high_score, "Game reset");
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::UpgradeSkill { skill } => {
                if self.session.player.upgrade_skill(skill) {
                    self.session.feedback.notify(GameEvent::SkillUpgraded { skill });
                }
            }
            PlayerCommand::ToggleAutoShoot => {
                let player = &mut self.session.player;
                player.auto_shoot = !player.auto_shoot;
                debug!(enabled = player.auto_shoot, "Auto-shoot toggled");
            }
            PlayerCommand::Reload => {
                let Session {
                    player, feedback, ..
                } = &mut self.session;
                player.start_reload(feedback);
            }
        }
    }

    /// Run all systems in frame order. Stops at the first step that kills
    /// the player.
    fn run_frame(&mut self, input: &InputState, raw_dt: f64) {
        let Self {
            world,
            session,
            phase,
            ..
        } = self;
        let start_health = session.player.health;

        // 1. Abilities (unscaled)
        systems::abilities::run(world, session, input, raw_dt);

        // 2. Time scale
        let slow = if session.player.abilities.time_slow.is_active {
            TIME_SLOW_FACTOR
        } else {
            1.0
        };
        session.time_scale = session.config.time_scale * slow;
        let dt = raw_dt * session.time_scale;

        // 3. Player (movement, shooting, pickups, spawning)
        systems::player::run(world, session, input, dt);
        if check_game_over(phase, session, start_health) {
            return;
        }

        // 4. Projectiles
        systems::projectiles::run(world, session, dt);
        if check_game_over(phase, session, start_health) {
            return;
        }

        // 5. Enemies
        systems::enemies::run(world, session, dt);
        if check_game_over(phase, session, start_health) {
            return;
        }

        // 6. Particles
        systems::particles::run(world, dt, &mut session.despawn_buffer);

        // 7. Hazards
        systems::hazards::run(world, session, dt);
        if check_game_over(phase, session, start_health) {
            return;
        }

        // 8. Lightning (unscaled)
        systems::lightning::run(world, session, raw_dt);

        // 9. Camera
        session.camera.follow(session.player.position);

        // 10. Damage over time
        systems::dot::run(world, session, dt);
        if check_game_over(phase, session, start_health) {
            return;
        }

        // 11. Wave completion
        systems::wave::run(world, session);

        // 12. Achievements
        for achievement in session.achievements.check() {
            session.player.skill_points += ACHIEVEMENT_SKILL_REWARD;
            session
                .feedback
                .notify(GameEvent::AchievementUnlocked { achievement });
            info!(?achievement, "Achievement unlocked");
        }

        // 13. Transient timers (unscaled)
        session.camera.decay_shake(raw_dt);
        session.score.decay_timers(raw_dt);

        if session.player.health < start_health {
            session.feedback.sound(AudioEvent::PlayerHit);
        }
        session.time.advance(raw_dt);
    }
}

/// Enter game over if the player has died. Returns true when the frame
/// must stop.
fn check_game_over(phase: &mut GamePhase, session: &mut Session, start_health: f64) -> bool {
    if !session.player.is_dead() {
        return false;
    }
    if session.player.health < start_health {
        session.feedback.sound(AudioEvent::PlayerHit);
    }
    *phase = GamePhase::GameOver;
    session.feedback.sound(AudioEvent::GameOver);
    session.feedback.sound(AudioEvent::StopMusic);
    session.feedback.notify(GameEvent::GameOver {
        score: session.score.score,
    });
    info!(
        score = session.score.score,
        high_score = session.score.high_score,
        wave = session.waves.wave,
        level = session.player.level,
        "Game over"
    );
    true
}
