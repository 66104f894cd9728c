//! Per-session state shared by the systems alongside the ECS world.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::constants::LIGHTNING_INTERVAL;
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::types::SimTime;

use crate::camera::Camera;
use crate::engine::SimConfig;
use crate::player::Player;
use crate::scoring::{Achievements, ScoreState};
use crate::systems::wave::WaveState;

/// Audio cues and HUD notifications collected during one tick.
#[derive(Debug, Default)]
pub struct Feedback {
    pub audio: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

impl Feedback {
    pub fn sound(&mut self, event: AudioEvent) {
        self.audio.push(event);
    }

    pub fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Everything the systems mutate besides the world itself.
pub struct Session {
    pub config: SimConfig,
    pub time: SimTime,
    pub rng: ChaCha8Rng,
    pub player: Player,
    pub waves: WaveState,
    pub score: ScoreState,
    pub achievements: Achievements,
    pub camera: Camera,
    pub feedback: Feedback,
    /// Effective time scale of the current frame (1.0 unless time slow is up).
    pub time_scale: f64,
    pub despawn_buffer: Vec<hecs::Entity>,
    /// Seconds until the next lightning roll.
    pub lightning_timer: f64,
}

impl Session {
    pub fn new(config: SimConfig) -> Self {
        Self {
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(),
            waves: WaveState::default(),
            score: ScoreState::default(),
            achievements: Achievements::default(),
            camera: Camera::new(config.viewport_width, config.viewport_height),
            feedback: Feedback::default(),
            time_scale: config.time_scale,
            despawn_buffer: Vec::new(),
            lightning_timer: LIGHTNING_INTERVAL,
            config,
        }
    }

    /// Start over with the same config. The high score and the RNG stream
    /// carry over.
    pub fn reset(&mut self) {
        self.time = SimTime::default();
        self.player = Player::new();
        self.waves = WaveState::default();
        self.score.reset();
        self.achievements = Achievements::default();
        self.camera = Camera::new(self.config.viewport_width, self.config.viewport_height);
        self.feedback = Feedback::default();
        self.time_scale = self.config.time_scale;
        self.despawn_buffer.clear();
        self.lightning_timer = LIGHTNING_INTERVAL;
    }
}
