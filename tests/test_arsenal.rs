use alien_invasion::arsenal::*;
use alien_invasion::entities::*;
use alien_invasion::ship::Ship;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_ship() -> Ship {
    // 40×60 ship centered on a 1200×800 screen → top-left (580, 740)
    Ship::new(40.0, 60.0, 1200.0, 800.0)
}

fn make_arsenal() -> Arsenal {
    Arsenal::new(25.0, 80.0)
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_places_bullet_on_the_ship_nose() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    assert!(arsenal.fire(&ship, 5));

    let bullet = arsenal.iter().next().unwrap();
    assert_eq!(bullet.id, BulletId(0));
    assert_eq!(bullet.body.kind, EntityKind::Bullet);
    assert_eq!(bullet.body.center_x(), 600.0);
    assert_eq!(bullet.body.bottom(), 740.0); // mid-bottom on the ship's mid-top
    assert_eq!((bullet.body.w, bullet.body.h), (25.0, 80.0));
}

#[test]
fn sixth_shot_is_rejected_at_capacity_five() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    let results: Vec<bool> = (0..6).map(|_| arsenal.fire(&ship, 5)).collect();
    assert_eq!(results, vec![true, true, true, true, true, false]);
    assert_eq!(arsenal.len(), 5);
}

#[test]
fn bullet_ids_follow_firing_order() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    for _ in 0..3 {
        arsenal.fire(&ship, 5);
    }
    let ids: Vec<BulletId> = arsenal.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BulletId(0), BulletId(1), BulletId(2)]);

    // Ids are never reused after a bullet is gone
    arsenal.remove(BulletId(1));
    arsenal.fire(&ship, 5);
    let ids: Vec<BulletId> = arsenal.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BulletId(0), BulletId(2), BulletId(3)]);
}

#[test]
fn random_fire_and_advance_never_exceeds_capacity() {
    let mut rng = StdRng::seed_from_u64(7);
    let ship = make_ship();
    let mut arsenal = make_arsenal();

    for _ in 0..2000 {
        let capacity = rng.gen_range(1..=8usize);
        if rng.gen_bool(0.6) {
            let before = arsenal.len();
            let fired = arsenal.fire(&ship, capacity);
            assert_eq!(fired, before < capacity);
        } else {
            arsenal.advance_tick(rng.gen_range(1.0..60.0));
        }
        assert!(arsenal.len() <= 8);
    }
}

// ── advance_tick ──────────────────────────────────────────────────────────────

#[test]
fn advance_moves_bullets_straight_up() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    arsenal.fire(&ship, 5);
    arsenal.advance_tick(7.0);

    let bullet = arsenal.iter().next().unwrap();
    assert_eq!(bullet.body.y, 653.0); // 660 - 7
    assert_eq!(bullet.body.center_x(), 600.0);
}

#[test]
fn bullet_removed_once_its_bottom_passes_the_top() {
    // Bullet spans y 660..740; after n ticks of 7 its bottom is 740 - 7n
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    arsenal.fire(&ship, 5);

    for _ in 0..105 {
        arsenal.advance_tick(7.0);
    }
    assert_eq!(arsenal.len(), 1); // bottom = 5, still visible

    arsenal.advance_tick(7.0);
    assert!(arsenal.is_empty()); // bottom = -2
}

#[test]
fn freed_slot_can_be_refilled() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    for _ in 0..5 {
        arsenal.fire(&ship, 5);
    }
    assert!(!arsenal.fire(&ship, 5));
    assert!(arsenal.remove(BulletId(0)).is_some());
    assert!(arsenal.fire(&ship, 5));
    assert_eq!(arsenal.len(), 5);
}

#[test]
fn clear_empties_the_arsenal() {
    let ship = make_ship();
    let mut arsenal = make_arsenal();
    arsenal.fire(&ship, 5);
    arsenal.fire(&ship, 5);
    arsenal.clear();
    assert!(arsenal.is_empty());
    assert!(arsenal.remove(BulletId(0)).is_none());
}
