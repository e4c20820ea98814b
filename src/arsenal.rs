//! Player projectiles in flight.

use tracing::trace;

use crate::entities::{BulletId, Entity, EntityKind};
use crate::motion;
use crate::ship::Ship;

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: BulletId,
    pub body: Entity,
}

/// Capacity-bounded set of bullets, kept in firing order.
#[derive(Clone, Debug)]
pub struct Arsenal {
    bullets: Vec<Bullet>,
    bullet_w: f32,
    bullet_h: f32,
    next_id: u64,
}

impl Arsenal {
    pub fn new(bullet_w: f32, bullet_h: f32) -> Self {
        Arsenal {
            bullets: Vec::new(),
            bullet_w,
            bullet_h,
            next_id: 0,
        }
    }

    /// Fire one bullet from the ship's nose unless `max_concurrent` bullets
    /// are already in flight.  Returns whether a bullet was created.
    pub fn fire(&mut self, ship: &Ship, max_concurrent: usize) -> bool {
        if self.bullets.len() >= max_concurrent {
            return false;
        }
        let (nose_x, nose_y) = ship.firing_position();
        let body = Entity::new(
            EntityKind::Bullet,
            nose_x - self.bullet_w / 2.0,
            nose_y - self.bullet_h,
            self.bullet_w,
            self.bullet_h,
        );
        let id = BulletId(self.next_id);
        self.next_id += 1;
        self.bullets.push(Bullet { id, body });
        trace!(id = id.0, in_flight = self.bullets.len(), "bullet fired");
        true
    }

    /// Move every bullet up and drop the ones that left the top of the screen.
    pub fn advance_tick(&mut self, bullet_speed: f32) {
        for bullet in &mut self.bullets {
            motion::step_up(&mut bullet.body, bullet_speed);
        }
        self.bullets.retain(|bullet| bullet.body.bottom() > 0.0);
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn remove(&mut self, id: BulletId) -> Option<Bullet> {
        let index = self.bullets.iter().position(|bullet| bullet.id == id)?;
        Some(self.bullets.remove(index))
    }

    pub(crate) fn remove_ids(&mut self, ids: &[BulletId]) {
        self.bullets.retain(|bullet| !ids.contains(&bullet.id));
    }
}
