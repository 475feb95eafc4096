//! Explosion effect left behind by a destroyed asteroid
//!
//! Stationary and never collides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    /// Ticks left
    pub timer: u32,
    /// Starting value of `timer`
    pub duration: u32,
    pub active: bool,
}

impl Explosion {
    pub fn new(pos: Vec2, duration: u32) -> Self {
        Self {
            pos,
            timer: duration,
            duration,
            active: true,
        }
    }

    pub fn advance(&mut self) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.active = false;
        }
    }

    /// 0 when fresh, 1 when burnt out
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        1.0 - self.timer as f32 / self.duration as f32
    }
}
