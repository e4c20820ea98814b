use alien_invasion::entities::*;
use alien_invasion::motion::{self, Direction};

fn boxed(x: f32, y: f32, w: f32, h: f32) -> Entity {
    Entity::new(EntityKind::Alien, x, y, w, h)
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[test]
fn entity_edges() {
    let e = boxed(10.0, 20.0, 40.0, 30.0);
    assert_eq!(e.left(), 10.0);
    assert_eq!(e.right(), 50.0);
    assert_eq!(e.top(), 20.0);
    assert_eq!(e.bottom(), 50.0);
    assert_eq!(e.center_x(), 30.0);
}

// ── Intersection ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_boxes_intersect() {
    let a = boxed(0.0, 0.0, 40.0, 40.0);
    let b = boxed(39.0, 39.0, 40.0, 40.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_boxes_do_not_intersect() {
    let a = boxed(0.0, 0.0, 40.0, 40.0);
    let right_neighbour = boxed(40.0, 0.0, 40.0, 40.0);
    let below = boxed(0.0, 40.0, 40.0, 40.0);
    assert!(!a.intersects(&right_neighbour));
    assert!(!a.intersects(&below));
}

#[test]
fn contained_box_intersects() {
    let outer = boxed(0.0, 0.0, 100.0, 100.0);
    let inner = boxed(40.0, 40.0, 5.0, 5.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

// ── Motion rules ──────────────────────────────────────────────────────────────

#[test]
fn direction_reverses_and_signs() {
    assert_eq!(Direction::Left.reversed(), Direction::Right);
    assert_eq!(Direction::Right.reversed(), Direction::Left);
    assert_eq!(Direction::Left.sign(), -1.0);
    assert_eq!(Direction::Right.sign(), 1.0);
}

#[test]
fn bounded_step_stops_at_screen_edge() {
    let mut e = boxed(90.0, 0.0, 10.0, 10.0); // right edge already on the border
    motion::step_bounded(&mut e, Direction::Right, 5.0, 100.0);
    assert_eq!(e.x, 90.0);
    // Moving away from the border is still allowed
    motion::step_bounded(&mut e, Direction::Left, 5.0, 100.0);
    assert_eq!(e.x, 85.0);
}

#[test]
fn bounded_step_clamps_instead_of_overshooting() {
    let mut e = boxed(87.0, 0.0, 10.0, 10.0);
    motion::step_bounded(&mut e, Direction::Right, 5.0, 100.0);
    assert_eq!(e.right(), 100.0);

    let mut e = boxed(2.0, 0.0, 10.0, 10.0);
    motion::step_bounded(&mut e, Direction::Left, 5.0, 100.0);
    assert_eq!(e.left(), 0.0);
}

#[test]
fn fractional_steps_accumulate_without_drift() {
    let mut e = boxed(0.0, 100.0, 10.0, 10.0);
    for _ in 0..8 {
        motion::step_with_fleet(&mut e, Direction::Right, 0.25);
    }
    assert_eq!(e.x, 2.0);
    motion::step_up(&mut e, 0.5);
    assert_eq!(e.y, 99.5);
}

#[test]
fn edge_breach_depends_on_direction() {
    let at_right = boxed(90.0, 0.0, 10.0, 10.0);
    assert!(motion::breaches_edge(&at_right, Direction::Right, 100.0));
    assert!(!motion::breaches_edge(&at_right, Direction::Left, 100.0));

    let at_left = boxed(0.0, 0.0, 10.0, 10.0);
    assert!(motion::breaches_edge(&at_left, Direction::Left, 100.0));
    assert!(!motion::breaches_edge(&at_left, Direction::Right, 100.0));
}
