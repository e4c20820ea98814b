//! Per-entity position update rules.
//!
//! Screen bounds are always passed in; entities never store them.

use crate::entities::Entity;

/// Horizontal direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Move one step sideways without leaving `[0, screen_w]`.
///
/// The bound is checked before the delta is applied, and the step is cut
/// short instead of overshooting.
pub fn step_bounded(entity: &mut Entity, direction: Direction, speed: f32, screen_w: f32) {
    match direction {
        Direction::Right if entity.right() < screen_w => {
            entity.x = (entity.x + speed).min(screen_w - entity.w);
        }
        Direction::Left if entity.left() > 0.0 => {
            entity.x = (entity.x - speed).max(0.0);
        }
        _ => {}
    }
}

/// Projectile motion: straight up, no wrap or bounce.
pub fn step_up(entity: &mut Entity, speed: f32) {
    entity.y -= speed;
}

/// Fleet-relative motion: unbounded sideways step in the shared direction.
pub fn step_with_fleet(entity: &mut Entity, direction: Direction, speed: f32) {
    entity.x += direction.sign() * speed;
}

pub fn drop_by(entity: &mut Entity, amount: f32) {
    entity.y += amount;
}

/// True once the entity touches or passes the edge it is travelling towards.
pub fn breaches_edge(entity: &Entity, direction: Direction, screen_w: f32) -> bool {
    match direction {
        Direction::Right => entity.right() >= screen_w,
        Direction::Left => entity.left() <= 0.0,
    }
}
