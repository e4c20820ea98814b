//! Bullet/alien and ship/alien collision checks.
//!
//! Plain O(bullets × aliens) bounding-box pass; entity counts stay small.

use crate::arsenal::Arsenal;
use crate::entities::{AlienId, BulletId, Hit};
use crate::fleet::Fleet;
use crate::ship::Ship;

/// True if the ship overlaps any alien.  Nothing is destroyed.
pub fn ship_contact(ship: &Ship, fleet: &Fleet) -> bool {
    fleet.iter().any(|alien| alien.body.intersects(&ship.body))
}

/// Match bullets to aliens one-to-one and destroy every matched pair.
///
/// Bullets are visited oldest first.  Each takes the first alien in
/// formation order that it overlaps and that no earlier bullet claimed this
/// tick.  A bullet whose only overlapping aliens were already claimed
/// survives.
pub fn resolve_bullet_hits(fleet: &mut Fleet, arsenal: &mut Arsenal) -> Vec<Hit> {
    let mut hits: Vec<Hit> = Vec::new();

    for bullet in arsenal.iter() {
        let target = fleet.iter().find(|alien| {
            alien.body.intersects(&bullet.body) && !hits.iter().any(|hit| hit.alien == alien.id)
        });
        if let Some(alien) = target {
            hits.push(Hit {
                bullet: bullet.id,
                alien: alien.id,
                alien_body: alien.body,
            });
        }
    }

    if !hits.is_empty() {
        let aliens: Vec<AlienId> = hits.iter().map(|hit| hit.alien).collect();
        let bullets: Vec<BulletId> = hits.iter().map(|hit| hit.bullet).collect();
        fleet.remove_ids(&aliens);
        arsenal.remove_ids(&bullets);
    }
    hits
}
