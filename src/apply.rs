use crate::board::{Board, Cell, Square};
use crate::moves::Move;
use log::debug;

/// What committing a move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    /// The piece as it stands on the destination, after any crowning.
    pub piece: Cell,
    pub captured: Option<(Square, Cell)>,
    pub promoted: bool,
}

/// Moves the piece, removes a jumped piece and crowns a man reaching its
/// promotion row. Legality is the caller's concern.
pub fn apply_move(board: &mut Board, mv: Move) -> Applied {
    let moving = board.get(mv.from);
    debug_assert!(!moving.is_empty(), "no piece on {}", mv.from);
    debug_assert!(board.get(mv.to).is_empty(), "destination {} occupied", mv.to);

    board.set_piece(mv.from.row(), mv.from.col(), Cell::Empty);

    let captured = mv.captured_square().map(|mid| {
        let taken = board.get(mid);
        board.set_piece(mid.row(), mid.col(), Cell::Empty);
        (mid, taken)
    });

    let promoted = !moving.is_king()
        && moving.owner().is_some_and(|p| mv.to.row() == p.promotion_row() as usize);
    let piece = if promoted { moving.crowned() } else { moving };
    board.set_piece(mv.to.row(), mv.to.col(), piece);

    debug!("applied {mv}: {piece:?} captured={captured:?} promoted={promoted}");
    Applied { piece, captured, promoted }
}
