//! Ability state machines: ready, active, cooling down.
//!
//! Every delayed transition is a countdown advanced by the frame clock, so an
//! ability can never be deactivated twice or outlive its duration.

use glam::DVec2;

use onslaught_core::constants::*;
use onslaught_core::enums::AbilityKind;
use onslaught_core::state::AbilityView;

/// A cooldown-gated ability with an owned active countdown.
#[derive(Debug, Clone)]
pub struct Ability {
    pub kind: AbilityKind,
    pub cooldown: f64,
    pub current_cooldown: f64,
    pub duration: f64,
    pub is_active: bool,
    /// Seconds until the active window closes.
    pub active_remaining: f64,
}

impl Ability {
    pub fn new(kind: AbilityKind, cooldown: f64, duration: f64) -> Self {
        Self {
            kind,
            cooldown,
            current_cooldown: 0.0,
            duration,
            is_active: false,
            active_remaining: 0.0,
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.is_active && self.current_cooldown <= 0.0
    }

    /// Start the active window. Returns false (and changes nothing) when the
    /// ability is active or still cooling down.
    pub fn activate(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.is_active = true;
        self.active_remaining = self.duration;
        self.current_cooldown = self.cooldown;
        true
    }

    /// Advance cooldown and active countdowns by unscaled `dt`.
    pub fn update(&mut self, dt: f64) {
        if self.current_cooldown > 0.0 {
            self.current_cooldown = (self.current_cooldown - dt).max(0.0);
        }
        if self.is_active {
            self.active_remaining -= dt;
            if self.active_remaining <= 0.0 {
                self.active_remaining = 0.0;
                self.is_active = false;
            }
        }
    }

    pub fn view(&self) -> AbilityView {
        AbilityView {
            kind: self.kind,
            active: self.is_active,
            cooldown: self.cooldown,
            remaining_cooldown: self.current_cooldown,
        }
    }
}

/// Where a dash is in its chain sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashPhase {
    Idle,
    /// Interpolating the player from `from` to `to`.
    Segment {
        from: DVec2,
        to: DVec2,
        elapsed: f64,
        /// Set for the untargeted opening hop; the dash ends on arrival.
        free: bool,
    },
    /// Pause between hops.
    ChainDelay { remaining: f64 },
}

/// Chain dash with charges.
#[derive(Debug, Clone)]
pub struct Dash {
    pub cooldown: f64,
    pub current_cooldown: f64,
    pub duration: f64,
    pub speed: f64,
    pub charges: u32,
    pub max_charges: u32,
    pub charge_timer: f64,
    pub charge_refresh_time: f64,
    pub damage: f64,
    pub radius: f64,
    pub chain_range: f64,
    pub max_chains: u32,
    pub chain_count: u32,
    pub chain_delay: f64,
    pub segment_duration: f64,
    /// Unit vector of travel.
    pub direction: DVec2,
    pub phase: DashPhase,
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            cooldown: DASH_COOLDOWN,
            current_cooldown: 0.0,
            duration: DASH_DURATION,
            speed: DASH_SPEED,
            charges: DASH_MAX_CHARGES,
            max_charges: DASH_MAX_CHARGES,
            charge_timer: 0.0,
            charge_refresh_time: DASH_CHARGE_REFRESH_TIME,
            damage: DASH_DAMAGE,
            radius: DASH_RADIUS,
            chain_range: DASH_CHAIN_RANGE,
            max_chains: DASH_MAX_CHAINS,
            chain_count: 0,
            chain_delay: DASH_CHAIN_DELAY,
            segment_duration: DASH_SEGMENT_DURATION,
            direction: DVec2::X,
            phase: DashPhase::Idle,
        }
    }
}

impl Dash {
    pub fn is_active(&self) -> bool {
        self.phase != DashPhase::Idle
    }

    /// True while a hop is moving the player.
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, DashPhase::Segment { .. })
    }

    /// Ready: not dashing, cooled down, and a charge in hand.
    pub fn can_activate(&self) -> bool {
        !self.is_active() && self.current_cooldown <= 0.0 && self.charges > 0
    }

    /// Spend a charge and start a new chain. The caller plans the first hop.
    pub fn begin(&mut self, direction: DVec2) -> bool {
        if !self.can_activate() {
            return false;
        }
        self.charges -= 1;
        self.current_cooldown = self.cooldown;
        self.chain_count = 0;
        self.direction = direction.try_normalize().unwrap_or(self.direction);
        true
    }

    pub fn end(&mut self) {
        self.phase = DashPhase::Idle;
    }

    /// Cooldown and charge regeneration with unscaled `dt`.
    pub fn update_timers(&mut self, dt: f64) {
        if self.current_cooldown > 0.0 {
            self.current_cooldown = (self.current_cooldown - dt).max(0.0);
        }
        if self.charges < self.max_charges {
            self.charge_timer += dt;
            if self.charge_timer >= self.charge_refresh_time {
                self.charges += 1;
                self.charge_timer = 0.0;
            }
        } else {
            self.charge_timer = 0.0;
        }
    }

    pub fn view(&self) -> AbilityView {
        AbilityView {
            kind: AbilityKind::Dash,
            active: self.is_active(),
            cooldown: self.cooldown,
            remaining_cooldown: self.current_cooldown,
        }
    }
}

/// The player's ability loadout.
#[derive(Debug, Clone)]
pub struct Abilities {
    pub dash: Dash,
    pub shield: Ability,
    pub time_slow: Ability,
}

impl Default for Abilities {
    fn default() -> Self {
        Self {
            dash: Dash::default(),
            shield: Ability::new(AbilityKind::Shield, SHIELD_COOLDOWN, SHIELD_DURATION),
            time_slow: Ability::new(
                AbilityKind::TimeSlow,
                TIME_SLOW_COOLDOWN,
                TIME_SLOW_DURATION,
            ),
        }
    }
}

impl Abilities {
    pub fn views(&self) -> Vec<AbilityView> {
        vec![self.dash.view(), self.shield.view(), self.time_slow.view()]
    }
}
