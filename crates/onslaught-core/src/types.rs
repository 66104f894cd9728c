//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space (pixels).
/// `x`/`y` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at `origin` with the given extent.
    pub fn at(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Strict AABB overlap. Touching edges do not count, so two zero-size
    /// boxes never overlap each other.
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Axis-aligned box test shared by every collision check in the simulation.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Smallest absolute difference between two angles, in `[0, PI]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(std::f64::consts::TAU);
    if diff > std::f64::consts::PI {
        std::f64::consts::TAU - diff
    } else {
        diff
    }
}

/// Unit vector for an angle in radians (0 = +x, PI/2 = +y / down-screen).
pub fn direction_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Angle of the vector from `from` to `to`.
pub fn angle_to(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames simulated while the game was active.
    pub tick: u64,
    /// Unscaled elapsed seconds of active play.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
