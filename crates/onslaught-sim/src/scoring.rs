//! Score, kill streaks, multikills, combo and achievements.
//!
//! Stored on the engine's session, not as ECS entities.

use onslaught_core::constants::*;
use onslaught_core::enums::AchievementKind;
use onslaught_core::registry::achievement_goal;
use onslaught_core::state::AchievementView;

/// Running score state. `high_score` survives a reset.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u64,
    pub high_score: u64,
    pub kill_streak: u32,
    pub multikill_count: u32,
    /// Seconds until the multikill count lapses.
    pub multikill_timer: f64,
    /// Sim time of the previous kill; `None` before the first kill.
    pub last_kill_time: Option<f64>,
    pub combo: u32,
    pub combo_timer: f64,
    pub total_kills: u32,
}

impl ScoreState {
    /// Fresh state for a new session, carrying the high score over.
    pub fn reset(&mut self) {
        *self = Self {
            high_score: self.high_score,
            ..Self::default()
        };
    }

    /// Record a kill worth `points` at sim time `now` and return the points
    /// actually awarded after streak and multikill bonuses.
    pub fn record_kill(&mut self, points: u32, now: f64) -> u64 {
        let p = points as f64;
        let chained = self
            .last_kill_time
            .is_some_and(|last| now - last < MULTIKILL_TIME);

        let awarded = if chained {
            self.kill_streak += 1;
            self.multikill_count += 1;
            self.multikill_timer = MULTIKILL_TIME;
            let streak_bonus = (p * self.kill_streak as f64 * STREAK_BONUS_FACTOR).floor();
            let multi_bonus = (p * self.multikill_count as f64 * MULTIKILL_BONUS_FACTOR).floor();
            points as u64 + streak_bonus as u64 + multi_bonus as u64
        } else {
            self.kill_streak = 1;
            self.multikill_count = 1;
            points as u64
        };

        self.last_kill_time = Some(now);
        self.combo += 1;
        self.combo_timer = COMBO_TIME;
        self.total_kills += 1;
        self.add_points(awarded);
        awarded
    }

    pub fn add_points(&mut self, points: u64) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }

    /// Count down the transient timers with unscaled `dt`.
    pub fn decay_timers(&mut self, dt: f64) {
        if self.multikill_timer > 0.0 {
            self.multikill_timer -= dt;
            if self.multikill_timer <= 0.0 {
                self.multikill_timer = 0.0;
                self.multikill_count = 0;
            }
        }
        if self.combo_timer > 0.0 {
            self.combo_timer -= dt;
            if self.combo_timer <= 0.0 {
                self.combo_timer = 0.0;
                self.combo = 0;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub progress: u32,
    pub unlocked: bool,
}

impl Achievement {
    pub fn goal(&self) -> u32 {
        achievement_goal(self.kind).1
    }
}

/// Session achievement tracker.
#[derive(Debug, Clone)]
pub struct Achievements {
    pub entries: Vec<Achievement>,
}

impl Default for Achievements {
    fn default() -> Self {
        Self {
            entries: AchievementKind::ALL
                .iter()
                .map(|&kind| Achievement {
                    kind,
                    progress: 0,
                    unlocked: false,
                })
                .collect(),
        }
    }
}

impl Achievements {
    pub fn get(&self, kind: AchievementKind) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.kind == kind)
    }

    pub fn increment(&mut self, kind: AchievementKind) {
        if let Some(a) = self.entries.iter_mut().find(|a| a.kind == kind) {
            a.progress += 1;
        }
    }

    /// Overwrite progress; used for gauges like waves reached.
    pub fn set_progress(&mut self, kind: AchievementKind, progress: u32) {
        if let Some(a) = self.entries.iter_mut().find(|a| a.kind == kind) {
            a.progress = progress;
        }
    }

    /// Unlock every achievement whose goal is met and return the newly
    /// unlocked kinds. Each kind unlocks at most once.
    pub fn check(&mut self) -> Vec<AchievementKind> {
        let mut unlocked = Vec::new();
        for a in &mut self.entries {
            if !a.unlocked && a.progress >= achievement_goal(a.kind).1 {
                a.unlocked = true;
                unlocked.push(a.kind);
            }
        }
        unlocked
    }

    pub fn views(&self) -> Vec<AchievementView> {
        self.entries
            .iter()
            .map(|a| {
                let (name, goal) = achievement_goal(a.kind);
                AchievementView {
                    kind: a.kind,
                    name: name.to_string(),
                    progress: a.progress,
                    goal,
                    unlocked: a.unlocked,
                }
            })
            .collect()
    }
}
