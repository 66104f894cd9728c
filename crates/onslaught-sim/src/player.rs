//! The player character: stats, leveling, skills, weapon and reload state.

use glam::DVec2;
use tracing::{debug, info};

use onslaught_core::components::DotEffects;
use onslaught_core::constants::*;
use onslaught_core::enums::{SkillKind, WeaponKind};
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::registry::{level_thresholds, skill_cost, skill_increment, weapon_params, WeaponParams};
use onslaught_core::state::PlayerView;
use onslaught_core::types::Rect;

use crate::abilities::Abilities;
use crate::session::Feedback;

/// Stat bonuses bought with skill points. Uncapped.
#[derive(Debug, Clone, Default)]
pub struct PlayerStats {
    pub max_health_bonus: f64,
    pub speed_bonus: f64,
    /// Percent added to weapon damage.
    pub damage_bonus: f64,
    /// Probability in `[0, 1]` (may exceed 1) that a hit is doubled.
    pub critical_chance: f64,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Center of the player in world pixels.
    pub position: DVec2,
    pub size: f64,
    /// Facing in radians.
    pub angle: f64,
    pub health: f64,
    pub max_health: f64,
    pub level: u32,
    pub experience: f64,
    pub experience_to_next_level: f64,
    pub skill_points: u32,
    pub stats: PlayerStats,
    pub weapon: WeaponKind,
    pub ammo: u32,
    pub max_ammo: u32,
    pub shoot_cooldown: f64,
    pub is_reloading: bool,
    pub reload_progress: f64,
    pub reload_time: f64,
    pub abilities: Abilities,
    pub auto_shoot: bool,
    pub auto_shoot_range: f64,
    pub dots: DotEffects,
    /// Seconds left on the speed boost power-up.
    pub speed_boost_remaining: f64,
    pub last_position: DVec2,
    /// Normalized key direction of the last frame, zero when idle.
    pub move_direction: DVec2,
    pub collected_weapons: Vec<WeaponKind>,
    thresholds: Vec<f64>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let thresholds = level_thresholds();
        let weapon = WeaponKind::default();
        let capacity = weapon_params(weapon).ammo_capacity;
        let start = DVec2::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);
        Self {
            position: start,
            size: PLAYER_SIZE,
            angle: 0.0,
            health: PLAYER_BASE_HEALTH,
            max_health: PLAYER_BASE_HEALTH,
            level: 1,
            experience: 0.0,
            experience_to_next_level: thresholds.first().copied().unwrap_or(LEVEL_BASE_EXPERIENCE),
            skill_points: 0,
            stats: PlayerStats::default(),
            weapon,
            ammo: capacity,
            max_ammo: capacity,
            shoot_cooldown: 0.0,
            is_reloading: false,
            reload_progress: 0.0,
            reload_time: PLAYER_RELOAD_TIME,
            abilities: Abilities::default(),
            auto_shoot: false,
            auto_shoot_range: AUTO_SHOOT_RANGE,
            dots: DotEffects::default(),
            speed_boost_remaining: 0.0,
            last_position: start,
            move_direction: DVec2::ZERO,
            collected_weapons: vec![weapon],
            thresholds,
        }
    }

    pub fn rect(&self) -> Rect {
        let half = self.size / 2.0;
        Rect::new(self.position.x - half, self.position.y - half, self.size, self.size)
    }

    pub fn weapon_params(&self) -> WeaponParams {
        weapon_params(self.weapon)
    }

    /// Walking speed including skill and power-up bonuses.
    pub fn base_speed(&self) -> f64 {
        let boost = if self.speed_boost_remaining > 0.0 {
            SPEED_BOOST_AMOUNT
        } else {
            0.0
        };
        PLAYER_BASE_SPEED + self.stats.speed_bonus + boost
    }

    /// Movement speed this frame; the dash overrides everything else.
    pub fn effective_speed(&self) -> f64 {
        if self.abilities.dash.is_active() {
            self.abilities.dash.speed
        } else {
            self.base_speed()
        }
    }

    /// Damage of one projectile from the current weapon before crits.
    pub fn shot_damage(&self) -> f64 {
        self.weapon_params().damage * (1.0 + self.stats.damage_bonus / 100.0)
    }

    pub fn is_dashing(&self) -> bool {
        self.abilities.dash.is_active()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Clamp the center so the whole body stays on the map.
    pub fn clamp_to_map(&mut self) {
        self.position = self.clamped(self.position);
    }

    /// `p` pulled onto the map as a center for this player's body.
    pub fn clamped(&self, p: DVec2) -> DVec2 {
        let half = self.size / 2.0;
        DVec2::new(
            p.x.min(MAP_WIDTH - half).max(half),
            p.y.min(MAP_HEIGHT - half).max(half),
        )
    }

    /// Add experience and level up as many times as it covers.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: f64, feedback: &mut Feedback) -> u32 {
        self.experience += amount;
        let mut gained = 0;
        while self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.level += 1;
            self.skill_points += SKILL_POINTS_PER_LEVEL;
            self.experience_to_next_level = self.threshold_for(self.level);
            gained += 1;
            feedback.sound(AudioEvent::LevelUp);
            feedback.notify(GameEvent::LevelUp { level: self.level });
            info!(level = self.level, skill_points = self.skill_points, "Level up");
        }
        gained
    }

    /// Threshold to leave `level`; past the table the last entry repeats.
    fn threshold_for(&self, level: u32) -> f64 {
        let idx = (level.saturating_sub(1) as usize).min(self.thresholds.len().saturating_sub(1));
        self.thresholds.get(idx).copied().unwrap_or(LEVEL_BASE_EXPERIENCE)
    }

    /// Spend skill points on `skill`. Returns false when points are short.
    pub fn upgrade_skill(&mut self, skill: SkillKind) -> bool {
        let cost = skill_cost(skill);
        if self.skill_points < cost {
            return false;
        }
        self.skill_points -= cost;
        let inc = skill_increment(skill);
        match skill {
            SkillKind::MaxHealth => {
                self.stats.max_health_bonus += inc;
                self.max_health = PLAYER_BASE_HEALTH + self.stats.max_health_bonus;
                self.health = (self.health + inc).min(self.max_health);
            }
            SkillKind::Speed => self.stats.speed_bonus += inc,
            SkillKind::Damage => self.stats.damage_bonus += inc,
            SkillKind::CriticalChance => self.stats.critical_chance += inc,
        }
        debug!(?skill, remaining = self.skill_points, "Skill upgraded");
        true
    }

    /// Begin reloading unless already reloading or the magazine is full.
    pub fn start_reload(&mut self, feedback: &mut Feedback) -> bool {
        if self.is_reloading || self.ammo >= self.max_ammo {
            return false;
        }
        self.is_reloading = true;
        self.reload_progress = 0.0;
        feedback.sound(AudioEvent::Reload);
        true
    }

    pub fn update_reload(&mut self, dt: f64) {
        if !self.is_reloading {
            return;
        }
        self.reload_progress += dt;
        if self.reload_progress >= self.reload_time {
            self.ammo = self.max_ammo;
            self.is_reloading = false;
            self.reload_progress = 0.0;
        }
    }

    pub fn can_fire(&self) -> bool {
        self.shoot_cooldown <= 0.0 && !self.is_reloading && self.ammo > 0
    }

    /// Switch weapon and fill its magazine. Returns true the first time a
    /// weapon is collected this session.
    pub fn equip(&mut self, weapon: WeaponKind) -> bool {
        self.weapon = weapon;
        self.max_ammo = weapon_params(weapon).ammo_capacity;
        self.ammo = self.max_ammo;
        self.is_reloading = false;
        self.reload_progress = 0.0;
        if self.collected_weapons.contains(&weapon) {
            false
        } else {
            self.collected_weapons.push(weapon);
            true
        }
    }

    /// Damage actually taken from a contact, hazard or projectile hit of
    /// `raw`: nothing while dashing, reduced while shielded.
    pub fn mitigate(&self, raw: f64) -> f64 {
        if self.is_dashing() {
            0.0
        } else if self.abilities.shield.is_active {
            raw * SHIELD_DAMAGE_FACTOR
        } else {
            raw
        }
    }

    /// Apply a mitigated hit and return the damage dealt.
    pub fn hurt(&mut self, raw: f64) -> f64 {
        let dealt = self.mitigate(raw);
        self.health -= dealt;
        dealt
    }

    pub fn update_speed_boost(&mut self, dt: f64) {
        if self.speed_boost_remaining > 0.0 {
            self.speed_boost_remaining = (self.speed_boost_remaining - dt).max(0.0);
        }
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            size: self.size,
            angle: self.angle,
            health: self.health,
            max_health: self.max_health,
            weapon: self.weapon,
            dashing: self.is_dashing(),
            shielded: self.abilities.shield.is_active,
            reloading: self.is_reloading,
            reload_fraction: if self.is_reloading {
                (self.reload_progress / self.reload_time).min(1.0)
            } else {
                0.0
            },
            active_dots: self.dots.effects.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_experience_multi_level() {
        let mut player = Player::new();
        let mut fb = Feedback::default();
        let gained = player.gain_experience(250.0, &mut fb);
        assert_eq!(gained, 2);
        assert_eq!(player.level, 3);
        assert_eq!(player.experience, 0.0);
        assert_eq!(player.experience_to_next_level, 225.0);
        assert_eq!(player.skill_points, 4);
        assert_eq!(
            fb.audio.iter().filter(|a| **a == AudioEvent::LevelUp).count(),
            2
        );
    }

    #[test]
    fn test_gain_experience_below_threshold() {
        let mut player = Player::new();
        let mut fb = Feedback::default();
        assert_eq!(player.gain_experience(99.0, &mut fb), 0);
        assert_eq!(player.level, 1);
        assert!(fb.audio.is_empty());
    }

    #[test]
    fn test_threshold_reused_past_table() {
        let mut player = Player::new();
        player.level = (LEVEL_COUNT + 5) as u32;
        let last = *level_thresholds().last().unwrap();
        assert_eq!(player.threshold_for(player.level), last);
    }

    #[test]
    fn test_upgrade_skill_costs_and_effects() {
        let mut player = Player::new();
        player.skill_points = 3;
        player.health = 90.0;
        assert!(player.upgrade_skill(SkillKind::MaxHealth));
        assert_eq!(player.max_health, 120.0);
        assert_eq!(player.health, 110.0);
        assert!(player.upgrade_skill(SkillKind::CriticalChance));
        assert_eq!(player.skill_points, 0);
        assert!((player.stats.critical_chance - 0.05).abs() < 1e-12);
        assert!(!player.upgrade_skill(SkillKind::Speed), "no points left");
        assert_eq!(player.stats.speed_bonus, 0.0);
    }

    #[test]
    fn test_reload_refills_after_reload_time() {
        let mut player = Player::new();
        let mut fb = Feedback::default();
        player.ammo = 0;
        assert!(player.start_reload(&mut fb));
        assert!(!player.can_fire());
        player.update_reload(1.0);
        assert!(player.is_reloading);
        player.update_reload(1.0);
        assert!(!player.is_reloading);
        assert_eq!(player.ammo, player.max_ammo);
    }

    #[test]
    fn test_reload_rejected_when_full() {
        let mut player = Player::new();
        let mut fb = Feedback::default();
        assert!(!player.start_reload(&mut fb));
        assert!(fb.audio.is_empty());
    }

    #[test]
    fn test_shield_scales_damage() {
        let mut player = Player::new();
        player.abilities.shield.activate();
        let dealt = player.hurt(30.0);
        assert!((dealt - 6.0).abs() < 1e-12);
        assert!((player.health - 94.0).abs() < 1e-12);
    }

    #[test]
    fn test_equip_tracks_collection() {
        let mut player = Player::new();
        assert!(!player.equip(WeaponKind::Rifle));
        assert!(player.equip(WeaponKind::Shotgun));
        assert_eq!(player.ammo, weapon_params(WeaponKind::Shotgun).ammo_capacity);
        assert!(!player.equip(WeaponKind::Shotgun));
        assert_eq!(player.collected_weapons.len(), 2);
    }

    #[test]
    fn test_clamp_keeps_body_on_map() {
        let mut player = Player::new();
        player.position = DVec2::new(-50.0, MAP_HEIGHT + 50.0);
        player.clamp_to_map();
        assert_eq!(player.position, DVec2::new(PLAYER_SIZE / 2.0, MAP_HEIGHT - PLAYER_SIZE / 2.0));
    }
}
