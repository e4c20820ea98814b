//! The player's ship.

use crate::entities::{Entity, EntityKind};
use crate::motion::{self, Direction};

#[derive(Clone, Debug)]
pub struct Ship {
    pub body: Entity,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship already centered at the bottom of the screen.
    pub fn new(w: f32, h: f32, screen_w: f32, screen_h: f32) -> Self {
        let mut ship = Ship {
            body: Entity::new(EntityKind::Ship, 0.0, 0.0, w, h),
            moving_left: false,
            moving_right: false,
        };
        ship.center(screen_w, screen_h);
        ship
    }

    /// Put the ship's mid-bottom on the screen's mid-bottom.
    pub fn center(&mut self, screen_w: f32, screen_h: f32) {
        self.body.x = (screen_w - self.body.w) / 2.0;
        self.body.y = screen_h - self.body.h;
    }

    /// Apply held directions.  Both may be held; they cancel out.
    pub fn update(&mut self, speed: f32, screen_w: f32) {
        if self.moving_right {
            motion::step_bounded(&mut self.body, Direction::Right, speed, screen_w);
        }
        if self.moving_left {
            motion::step_bounded(&mut self.body, Direction::Left, speed, screen_w);
        }
    }

    /// Mid-top of the ship, where new bullets appear.
    pub fn firing_position(&self) -> (f32, f32) {
        (self.body.center_x(), self.body.top())
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }
}
