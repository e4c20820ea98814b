use alien_invasion::ship::Ship;

fn make_ship() -> Ship {
    Ship::new(40.0, 60.0, 1200.0, 800.0)
}

#[test]
fn new_ship_sits_at_center_bottom() {
    let ship = make_ship();
    assert_eq!(ship.body.x, 580.0);
    assert_eq!(ship.body.y, 740.0);
    assert_eq!(ship.body.bottom(), 800.0);
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn no_input_no_motion() {
    let mut ship = make_ship();
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 580.0);
}

#[test]
fn held_right_moves_by_speed() {
    let mut ship = make_ship();
    ship.moving_right = true;
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 585.0);
}

#[test]
fn held_left_moves_by_speed() {
    let mut ship = make_ship();
    ship.moving_left = true;
    ship.update(5.0, 1200.0);
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 570.0);
}

#[test]
fn both_directions_cancel_out() {
    let mut ship = make_ship();
    ship.moving_left = true;
    ship.moving_right = true;
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 580.0);
}

#[test]
fn right_edge_is_never_crossed() {
    let mut ship = make_ship();
    ship.body.x = 1158.0; // right edge at 1198
    ship.moving_right = true;
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.right(), 1200.0);
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.right(), 1200.0);
}

#[test]
fn left_edge_is_never_crossed() {
    let mut ship = make_ship();
    ship.body.x = 3.0;
    ship.moving_left = true;
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 0.0);
    ship.update(5.0, 1200.0);
    assert_eq!(ship.body.x, 0.0);
}

#[test]
fn center_returns_ship_to_start() {
    let mut ship = make_ship();
    ship.body.x = 12.0;
    ship.center(1200.0, 800.0);
    assert_eq!((ship.body.x, ship.body.y), (580.0, 740.0));
}

#[test]
fn firing_position_is_mid_top() {
    let ship = make_ship();
    assert_eq!(ship.firing_position(), (600.0, 740.0));
}

#[test]
fn stop_releases_both_directions() {
    let mut ship = make_ship();
    ship.moving_left = true;
    ship.moving_right = true;
    ship.stop();
    assert!(!ship.moving_left && !ship.moving_right);
}
