//! Simulation constants and tuning parameters.
//!
//! Per-kind tables (enemies, weapons, hazards, particles) live in
//! `registry`; this module holds the global knobs.

/// Nominal frame rate of the runner (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Map width in pixels.
pub const MAP_WIDTH: f64 = 2400.0;

/// Map height in pixels.
pub const MAP_HEIGHT: f64 = 1800.0;

/// Default viewport width.
pub const VIEWPORT_WIDTH: f64 = 800.0;

/// Default viewport height.
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// --- Player ---

pub const PLAYER_SIZE: f64 = 30.0;
pub const PLAYER_BASE_SPEED: f64 = 200.0;
pub const PLAYER_BASE_HEALTH: f64 = 100.0;
pub const PLAYER_RELOAD_TIME: f64 = 2.0;
pub const AUTO_SHOOT_RANGE: f64 = 400.0;

// --- Leveling ---

/// Number of precomputed level thresholds.
pub const LEVEL_COUNT: usize = 50;

/// Experience needed to leave level 1.
pub const LEVEL_BASE_EXPERIENCE: f64 = 100.0;

/// Growth factor between consecutive thresholds.
pub const LEVEL_GROWTH: f64 = 1.5;

/// Skill points granted per level gained.
pub const SKILL_POINTS_PER_LEVEL: u32 = 2;

// --- Abilities ---

pub const DASH_COOLDOWN: f64 = 2.0;
pub const DASH_DURATION: f64 = 0.4;
pub const DASH_SPEED: f64 = 1000.0;
pub const DASH_MAX_CHARGES: u32 = 3;
pub const DASH_CHARGE_REFRESH_TIME: f64 = 3.0;
pub const DASH_DAMAGE: f64 = 200.0;
pub const DASH_RADIUS: f64 = 150.0;
pub const DASH_CHAIN_RANGE: f64 = 300.0;
pub const DASH_MAX_CHAINS: u32 = 3;
pub const DASH_CHAIN_DELAY: f64 = 0.1;

/// Time to interpolate one chain hop.
pub const DASH_SEGMENT_DURATION: f64 = 0.1;

/// Candidates closer than this are treated as the enemy just reached.
pub const DASH_MIN_CHAIN_DISTANCE: f64 = 10.0;

/// Weight of the previous direction when steering toward a chain target.
pub const DASH_DIRECTION_BLEND: f64 = 0.7;

pub const SHIELD_COOLDOWN: f64 = 10.0;
pub const SHIELD_DURATION: f64 = 3.0;

/// Incoming damage multiplier while the shield is up.
pub const SHIELD_DAMAGE_FACTOR: f64 = 0.2;

pub const TIME_SLOW_COOLDOWN: f64 = 15.0;
pub const TIME_SLOW_DURATION: f64 = 5.0;
pub const TIME_SLOW_FACTOR: f64 = 0.5;

// --- Spawning ---

/// Default per-frame chance to spawn one enemy while the wave has budget.
pub const SPAWN_CHANCE: f64 = 0.95;

/// Default cap on simultaneously live enemies.
pub const MAX_LIVE_ENEMIES: usize = 200;

/// Distance beyond the viewport at which spawn anchors are placed.
pub const SPAWN_BUFFER: f64 = 100.0;

/// Jitter radius around the spawn anchor.
pub const SPAWN_RADIUS: f64 = 400.0;

/// Movement-direction component above which spawns are biased ahead.
pub const SPAWN_MOVING_THRESHOLD: f64 = 0.1;

// --- Waves ---

pub const WAVE_BASE_BUDGET: u32 = 120;
pub const WAVE_BUDGET_PER_WAVE: u32 = 40;
pub const WAVE_EXPERIENCE_PER_WAVE: f64 = 50.0;

// --- Enemy shots ---

pub const ENEMY_SHOT_SIZE: f64 = 12.0;

// --- DOT ---

/// Duration of the DOT attached by an area hazard.
pub const HAZARD_DOT_DURATION: f64 = 3.0;

// --- Power-ups ---

pub const POWERUP_SIZE: f64 = 30.0;
pub const EXPERIENCE_ORB_SIZE: f64 = 15.0;
pub const HEALTH_PICKUP_AMOUNT: f64 = 50.0;
pub const SPEED_BOOST_AMOUNT: f64 = 100.0;
pub const SPEED_BOOST_DURATION: f64 = 5.0;
pub const NUKE_DAMAGE: f64 = 100.0;

/// Default chance for a dying enemy to drop a consumable power-up.
pub const POWERUP_DROP_CHANCE: f64 = 0.05;

/// Seconds before a power-up dropped by a dying enemy can be picked up.
pub const DROP_PICKUP_DELAY: f64 = 0.5;

// --- Lightning ---

/// Seconds between lightning rolls.
pub const LIGHTNING_INTERVAL: f64 = 10.0;
/// Default chance that a roll produces a strike.
pub const LIGHTNING_CHANCE: f64 = 0.3;
pub const LIGHTNING_RADIUS: f64 = 100.0;
pub const LIGHTNING_DAMAGE: f64 = 50.0;
pub const LIGHTNING_SHAKE: f64 = 5.0;

// --- Scoring ---

/// Window in which consecutive kills chain into a streak.
pub const MULTIKILL_TIME: f64 = 1.5;
pub const STREAK_BONUS_FACTOR: f64 = 0.5;
pub const MULTIKILL_BONUS_FACTOR: f64 = 0.3;

/// Combo lifetime after the most recent kill.
pub const COMBO_TIME: f64 = 3.0;

// --- Screen shake ---

pub const SCREEN_SHAKE_MAX: f64 = 15.0;

/// Shake units removed per second.
pub const SCREEN_SHAKE_DECAY: f64 = 60.0;

// --- Achievements ---

/// Skill points awarded when an achievement unlocks.
pub const ACHIEVEMENT_SKILL_REWARD: u32 = 2;

// --- Particles ---

/// Default cap on live particles.
pub const MAX_PARTICLES: usize = 2000;

/// Downward acceleration applied to blood particles.
pub const BLOOD_GRAVITY: f64 = 500.0;
