use draughts::perft::{divide, perft, perft_after};
use draughts::{Move, Position};

#[test]
fn perft_startpos_small_depths() {
    let p = Position::startpos();
    assert_eq!(perft(&p, 1), 7);
    assert_eq!(perft(&p, 2), 49);
    assert_eq!(perft(&p, 3), 302);
    assert_eq!(perft(&p, 4), 1469);
    assert_eq!(perft(&p, 5), 7361);
}

#[test]
fn divide_sums_to_perft() {
    let p = Position::startpos();
    let parts = divide(&p, 3);
    assert_eq!(parts.len(), 7);
    assert_eq!(parts.iter().map(|(_, n)| n).sum::<u64>(), perft(&p, 3));
}

#[test]
fn zero_depth_below_a_root_move_is_empty() {
    let p = Position::startpos();
    assert_eq!(perft_after(&p, Move::from_coords(2, 1, 3, 0), 0), 0);
    assert!(divide(&p, 0).is_empty());
    assert_eq!(perft_after(&p, Move::from_coords(2, 1, 3, 0), 1), 1);
    assert_eq!(perft_after(&p, Move::from_coords(2, 1, 3, 0), 2), 7);
}
