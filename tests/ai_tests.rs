use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, Coordinate, GameError, MoveError, Mode, Orientation, Ship, TargetingAi,
    TargetingSnapshot, BOARD_SIZE,
};
use std::collections::HashSet;

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

fn board_with(ships: Vec<Ship>) -> Board {
    let mut board = Board::new(BOARD_SIZE);
    for ship in ships {
        board.place_ship(ship, false).unwrap();
    }
    board
}

/// Fire at `coord` outside the strategy's choice and feed the outcome back.
fn strike(ai: &mut TargetingAi, board: &mut Board, coord: Coordinate) -> sea_battle::AttackResult {
    let res = ai.attack(coord, board).unwrap();
    ai.record_result(coord, &res);
    res
}

#[test]
fn test_starts_in_hunt_mode() {
    let ai = TargetingAi::targeting(BOARD_SIZE);
    assert_eq!(
        ai.strategy().snapshot(),
        TargetingSnapshot {
            mode: Mode::Hunt,
            pending: vec![],
            last_hit: None,
            orientation: None,
        }
    );
}

#[test]
fn test_hunt_covers_board_then_errors() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = Board::new(BOARD_SIZE);
    let mut seen = HashSet::new();
    for _ in 0..BOARD_SIZE * BOARD_SIZE {
        let (coord, res) = ai.take_turn(&mut rng, &mut board).unwrap();
        assert!(seen.insert(coord), "repeated {}", coord);
        assert!(!res.hit);
    }
    assert_eq!(ai.next_move(&mut rng), Err(MoveError::BoardExhausted));
    assert_eq!(
        ai.take_turn(&mut rng, &mut board).unwrap_err(),
        GameError::Move(MoveError::BoardExhausted)
    );
}

#[test]
fn test_first_hit_queues_neighbors_in_order() {
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::create(c(2, 2), 3, Orientation::Horizontal)]);

    let res = strike(&mut ai, &mut board, c(2, 2));
    assert!(res.hit && !res.sunk);
    let snap = ai.strategy().snapshot();
    assert_eq!(snap.mode, Mode::Target);
    assert_eq!(snap.pending, vec![c(1, 2), c(3, 2), c(2, 1), c(2, 3)]);
    assert_eq!(snap.last_hit, Some(c(2, 2)));
    assert_eq!(snap.orientation, None);
}

#[test]
fn test_corner_hit_skips_off_board_and_guessed_neighbors() {
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::create(c(0, 0), 3, Orientation::Vertical)]);
    strike(&mut ai, &mut board, c(0, 1));
    strike(&mut ai, &mut board, c(0, 0));
    let pending: Vec<_> = ai.strategy().pending().copied().collect();
    assert_eq!(pending, vec![c(1, 0)]);
}

#[test]
fn test_neighbor_sweep_sinks_ship_in_three_hits() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::create(c(2, 2), 3, Orientation::Horizontal)]);
    strike(&mut ai, &mut board, c(2, 2));

    let mut hits = vec![c(2, 2)];
    let mut sunk_flags = vec![false];
    let mut proposed = vec![];
    while ai.strategy().mode() == Mode::Target {
        let (coord, res) = ai.take_turn(&mut rng, &mut board).unwrap();
        proposed.push(coord);
        if res.hit {
            hits.push(coord);
            sunk_flags.push(res.sunk);
        }
    }
    assert_eq!(proposed, vec![c(1, 2), c(3, 2), c(2, 1), c(2, 3), c(2, 4)]);
    assert_eq!(hits.len(), 3);
    assert_eq!(sunk_flags, vec![false, false, true]);
    assert!(board.all_ships_sunk());
    assert_eq!(ai.strategy().last_hit(), None);
    assert_eq!(ai.strategy().orientation(), None);
    assert_eq!(ai.strategy().pending().count(), 0);
}

#[test]
fn test_second_hit_infers_orientation_and_narrows() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::create(c(2, 1), 4, Orientation::Horizontal)]);

    strike(&mut ai, &mut board, c(2, 2));
    let res = strike(&mut ai, &mut board, c(2, 3));
    assert!(res.hit && !res.sunk);

    let snap = ai.strategy().snapshot();
    assert_eq!(snap.orientation, Some(Orientation::Horizontal));
    assert_eq!(snap.pending, vec![c(2, 1), c(2, 4)]);
    assert_eq!(snap.last_hit, Some(c(2, 3)));

    let mut proposed = vec![];
    while ai.strategy().mode() == Mode::Target {
        let (coord, _) = ai.take_turn(&mut rng, &mut board).unwrap();
        proposed.push(coord);
    }
    assert!(proposed.iter().all(|p| p.row == 2), "left the line: {:?}", proposed);
    assert_eq!(proposed, vec![c(2, 1), c(2, 4)]);
    assert!(board.all_ships_sunk());
}

#[test]
fn test_vertical_inference() {
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::create(c(4, 7), 4, Orientation::Vertical)]);
    strike(&mut ai, &mut board, c(5, 7));
    strike(&mut ai, &mut board, c(6, 7));
    let snap = ai.strategy().snapshot();
    assert_eq!(snap.orientation, Some(Orientation::Vertical));
    assert_eq!(snap.pending, vec![c(4, 7), c(7, 7)]);
}

#[test]
fn test_misses_exhaust_queue_and_return_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    // two separated cells: hitting the first leaves its neighbors all empty
    let mut board = board_with(vec![Ship::new(vec![c(0, 0), c(9, 9)], Orientation::Horizontal)]);
    strike(&mut ai, &mut board, c(0, 0));
    assert_eq!(ai.strategy().mode(), Mode::Target);

    let (coord, res) = ai.take_turn(&mut rng, &mut board).unwrap();
    assert_eq!(coord, c(1, 0));
    assert!(!res.hit);
    assert_eq!(ai.strategy().mode(), Mode::Target);

    let (coord, res) = ai.take_turn(&mut rng, &mut board).unwrap();
    assert_eq!(coord, c(0, 1));
    assert!(!res.hit);
    assert_eq!(ai.strategy().mode(), Mode::Hunt);
    assert_eq!(ai.strategy().last_hit(), None);
}

#[test]
fn test_stale_queue_falls_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![Ship::new(vec![c(0, 0), c(9, 9)], Orientation::Horizontal)]);
    strike(&mut ai, &mut board, c(0, 0));
    // queued cells get attacked without going through the strategy
    ai.attack(c(1, 0), &mut board).unwrap();
    ai.attack(c(0, 1), &mut board).unwrap();
    assert_eq!(ai.strategy().mode(), Mode::Target);

    let coord = ai.next_move(&mut rng).unwrap();
    assert!(!ai.has_guessed(coord));
    assert_eq!(ai.strategy().mode(), Mode::Hunt);
    assert_eq!(ai.strategy().last_hit(), None);
}

#[test]
fn test_sinking_clears_state() {
    let mut ai = TargetingAi::targeting(BOARD_SIZE);
    let mut board = board_with(vec![
        Ship::create(c(5, 5), 2, Orientation::Horizontal),
        Ship::create(c(6, 5), 2, Orientation::Horizontal),
    ]);
    strike(&mut ai, &mut board, c(5, 5));
    assert!(ai.strategy().pending().count() > 0);
    let res = strike(&mut ai, &mut board, c(5, 6));
    assert!(res.sunk);
    assert_eq!(
        ai.strategy().snapshot(),
        TargetingSnapshot {
            mode: Mode::Hunt,
            pending: vec![],
            last_hit: None,
            orientation: None,
        }
    );
}
