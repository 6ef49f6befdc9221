use draughts::{Cell, Click, Player, Session, SessionOptions, SessionState, Square};

#[test]
fn red_opens_and_black_replies_with_steps() {
    let mut s = Session::default();
    s.new_game().unwrap();
    assert_eq!(s.square_clicked(2, 1), Click::Selected(Square::new(2, 1)));
    assert!(matches!(s.square_clicked(3, 0), Click::Moved { .. }));

    assert_eq!(s.piece_at(2, 1), Cell::Empty);
    assert_eq!(s.piece_at(3, 0), Cell::RedMan);
    assert_eq!(s.state(), SessionState::AwaitingSelection(Player::Black));
    assert_eq!(s.status(), "Black: Make your move.");
    let legal = s.legal_moves();
    assert!(!legal.is_empty());
    assert!(legal.iter().all(|m| !m.is_jump()));
}

#[test]
fn auto_select_can_be_disabled() {
    let board = "......../......../......../....r.../......../......../......../b......."
        .parse()
        .unwrap();
    let pos = draughts::Position::from_parts(board, Player::Red);
    let on = Session::with_position(pos.clone(), SessionOptions::default());
    assert_eq!(on.selection(), Some(Square::new(3, 4)));
    let off = Session::with_position(pos, SessionOptions { auto_select: false });
    assert_eq!(off.state(), SessionState::AwaitingSelection(Player::Red));
}

#[test]
fn options_load_from_json() {
    let opts: SessionOptions = serde_json::from_str("{}").unwrap();
    assert!(opts.auto_select);
    let opts: SessionOptions = serde_json::from_str(r#"{"auto_select": false}"#).unwrap();
    assert!(!opts.auto_select);
}

#[test]
fn front_end_reads_board_through_the_session() {
    let mut s = Session::new(SessionOptions { auto_select: false });
    assert!(!s.options().auto_select);
    s.new_game().unwrap();
    assert_eq!(s.board(), s.position().board());
    assert_eq!(s.board().count_player(Player::Red), 12);
    assert_eq!(s.position().side_to_move(), Player::Red);

    s.square_clicked(2, 1);
    s.square_clicked(3, 0);
    assert_eq!(s.board().get(Square::new(3, 0)), Cell::RedMan);
    assert_eq!(s.position().side_to_move(), Player::Black);
    assert_eq!(s.position().forced_square(), None);
}
