use draughts::{Board, Cell, Player, Square};

#[test]
fn reset_places_twelve_men_per_side_on_dark_squares() {
    let mut b = Board::empty();
    b.reset();
    assert_eq!(b.count(Cell::RedMan), 12);
    assert_eq!(b.count(Cell::BlackMan), 12);
    assert_eq!(b.count(Cell::RedKing) + b.count(Cell::BlackKing), 0);
    for sq in Square::all() {
        let cell = b.get(sq);
        if !sq.is_dark() || sq.row() == 3 || sq.row() == 4 {
            assert_eq!(cell, Cell::Empty, "unexpected piece on {sq}");
        }
    }
    assert!(b.pieces(Player::Red).all(|(sq, _)| sq.row() < 3));
    assert!(b.pieces(Player::Black).all(|(sq, _)| sq.row() > 4));
}

#[test]
fn startpos_diagram() {
    let expected = [
        ".r.r.r.r",
        "r.r.r.r.",
        ".r.r.r.r",
        "........",
        "........",
        "b.b.b.b.",
        ".b.b.b.b",
        "b.b.b.b.",
    ]
    .join("\n");
    pretty_assertions::assert_eq!(Board::startpos().to_string(), expected);
}
