use crate::board::Player;
use crate::moves::Move;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square {0:?}, expected \"row,col\" with both in 0..8")]
    Square(String),
    #[error("invalid move {0:?}, expected \"row,col-row,col\"")]
    Move(String),
    #[error("board diagram has {0} rows, expected 8")]
    RowCount(usize),
    #[error("board row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown board symbol {symbol:?} at {row},{col}")]
    Symbol { symbol: char, row: usize, col: usize },
    #[error("piece on light square {row},{col}")]
    LightSquare { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal move {mv} for {player}")]
pub struct IllegalMove {
    pub mv: Move,
    pub player: Player,
}

/// Failure to play a move given in text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Finish the current game first!")]
    GameInProgress,
    #[error("There is no game in progress!")]
    NoGameInProgress,
}
