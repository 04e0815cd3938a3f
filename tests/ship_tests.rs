use sea_battle::{Coordinate, Orientation, Ship};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_create_horizontal_and_vertical() {
    let ship = Ship::create(c(2, 3), 3, Orientation::Horizontal);
    assert_eq!(ship.locations(), &[c(2, 3), c(2, 4), c(2, 5)]);
    assert_eq!(ship.orientation(), Orientation::Horizontal);

    let ship = Ship::create(c(0, 0), 4, Orientation::Vertical);
    assert_eq!(ship.locations(), &[c(0, 0), c(1, 0), c(2, 0), c(3, 0)]);
    for coord in ship.locations() {
        assert!(ship.has_location(*coord));
    }
    assert!(!ship.has_location(c(4, 0)));
}

#[test]
fn test_hit_is_idempotent() {
    let mut ship = Ship::create(c(1, 1), 2, Orientation::Horizontal);
    assert!(!ship.is_hit(c(1, 1)));
    assert!(ship.hit(c(1, 1)));
    assert!(ship.is_hit(c(1, 1)));
    // second hit on the same cell is a no-op
    assert!(!ship.hit(c(1, 1)));
    assert_eq!(ship.hit_count(), 1);
    // miss
    assert!(!ship.hit(c(0, 0)));
    assert!(!ship.is_hit(c(0, 0)));
}

#[test]
fn test_register_hits_and_sunk() {
    let mut ship = Ship::create(c(1, 1), 2, Orientation::Vertical);
    assert!(!ship.is_sunk());
    ship.hit(c(1, 1));
    assert!(!ship.is_sunk());
    ship.hit(c(2, 1));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), ship.len());

    ship.reset();
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
}

#[test]
fn test_empty_ship_is_sunk() {
    let ship = Ship::new(Vec::new(), Orientation::Horizontal);
    assert!(ship.is_empty());
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 0);
}

#[test]
fn test_valid_placement_bounds() {
    assert!(Ship::is_valid_placement(c(0, 7), 3, Orientation::Horizontal, 10));
    assert!(!Ship::is_valid_placement(c(0, 8), 3, Orientation::Horizontal, 10));
    assert!(Ship::is_valid_placement(c(7, 9), 3, Orientation::Vertical, 10));
    assert!(!Ship::is_valid_placement(c(8, 0), 3, Orientation::Vertical, 10));
    assert!(!Ship::is_valid_placement(c(0, 10), 1, Orientation::Vertical, 10));
}
