//! Viewport that follows the player across the map.

use glam::DVec2;

use onslaught_core::constants::{MAP_HEIGHT, MAP_WIDTH, SCREEN_SHAKE_DECAY, SCREEN_SHAKE_MAX};
use onslaught_core::state::CameraView;

#[derive(Debug, Clone)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shake: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            shake: 0.0,
        }
    }

    /// Center on `focus`, then keep the viewport inside the map.
    /// A viewport larger than the map pins to the origin.
    pub fn follow(&mut self, focus: DVec2) {
        self.x = (focus.x - self.width / 2.0).min(MAP_WIDTH - self.width).max(0.0);
        self.y = (focus.y - self.height / 2.0).min(MAP_HEIGHT - self.height).max(0.0);
    }

    pub fn add_shake(&mut self, amount: f64) {
        self.shake = (self.shake + amount).min(SCREEN_SHAKE_MAX);
    }

    pub fn decay_shake(&mut self, dt: f64) {
        self.shake = (self.shake - dt * SCREEN_SHAKE_DECAY).max(0.0);
    }

    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world - DVec2::new(self.x, self.y)
    }

    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        screen + DVec2::new(self.x, self.y)
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            shake: self.shake,
        }
    }
}
