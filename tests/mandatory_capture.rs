use draughts::{Move, MoveSet, Player, Position};

#[test]
fn available_jump_excludes_all_simple_moves() {
    let moves = vec!["2,1-3,2".to_string(), "5,4-4,3".to_string()];
    let pos = Position::set_from_start_and_moves(&moves).expect("legal move sequence");
    assert_eq!(pos.side_to_move(), Player::Red);
    // Every other red man still has a free step, but the capture is forced.
    assert_eq!(pos.legal_moves(), MoveSet::Moves(vec![Move::from_coords(3, 2, 5, 4)]));
    assert!(pos.legal_moves().must_jump());
}

#[test]
fn recapture_is_forced_too() {
    let moves: Vec<String> = ["2,1-3,2", "5,4-4,3", "3,2-5,4"].iter().map(|s| s.to_string()).collect();
    let pos = Position::set_from_start_and_moves(&moves).expect("legal move sequence");
    assert_eq!(pos.side_to_move(), Player::Black);
    assert_eq!(
        pos.legal_moves().as_slice(),
        &[Move::from_coords(6, 3, 4, 5), Move::from_coords(6, 5, 4, 3)]
    );
}

#[test]
fn simple_move_rejected_when_jump_available() {
    let moves = vec!["2,1-3,2".to_string(), "5,4-4,3".to_string()];
    let mut pos = Position::set_from_start_and_moves(&moves).unwrap();
    assert!(pos.play_str("2,5-3,6").is_err());
}
