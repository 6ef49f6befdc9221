//! Piece placement on the 8x8 draughts board.

mod piece;
mod square;

pub use piece::{Cell, Player};
pub use square::{Square, SIZE};

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

const N: usize = SIZE as usize;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[Cell::Empty; N]; N] }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        b.reset();
        b
    }

    /// Clears the board and lays out 12 men per side on the dark squares of
    /// their three home rows: red on rows 0..=2, black on rows 5..=7.
    pub fn reset(&mut self) {
        for sq in Square::all() {
            let cell = if !sq.is_dark() {
                Cell::Empty
            } else if sq.row() < 3 {
                Cell::RedMan
            } else if sq.row() > 4 {
                Cell::BlackMan
            } else {
                Cell::Empty
            };
            self.cells[sq.row()][sq.col()] = cell;
        }
    }

    /// Panics if `row` or `col` is outside `0..8`.
    #[inline]
    pub fn piece_at(&self, row: usize, col: usize) -> Cell {
        self.get(Square::new(row, col))
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    pub(crate) fn set_piece(&mut self, row: usize, col: usize, value: Cell) {
        self.set(Square::new(row, col), value);
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, value: Cell) {
        debug_assert!(
            value.is_empty() || sq.is_dark(),
            "piece placed on light square {sq}"
        );
        self.cells[sq.row()][sq.col()] = value;
    }

    /// Occupied squares of `player` in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::dark()
            .map(move |sq| (sq, self.get(sq)))
            .filter(move |(_, c)| c.owner() == Some(player))
    }

    pub fn count(&self, cell: Cell) -> usize {
        Square::all().filter(|&sq| self.get(sq) == cell).count()
    }

    pub fn count_player(&self, player: Player) -> usize {
        self.pieces(player).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the diagram printed by `Display`: eight rows of `.rRbB`, row 0
/// first, separated by newlines or `/`.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != N {
            return Err(ParseError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != N {
                return Err(ParseError::RowLength { row, len });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(ParseError::Symbol { symbol, row, col })?;
                let sq = Square::new(row, col);
                if !cell.is_empty() && !sq.is_dark() {
                    return Err(ParseError::LightSquare { row, col });
                }
                board.set(sq, cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let mut b = Board::empty();
        b.set_piece(3, 4, Cell::BlackKing);
        b.reset();
        let once = b.clone();
        b.reset();
        assert_eq!(b, once);
        assert_eq!(b.piece_at(3, 4), Cell::Empty);
    }

    #[test]
    fn diagram_round_trips_startpos() {
        let b = Board::startpos();
        let text = b.to_string();
        assert_eq!(text.lines().next(), Some(".r.r.r.r"));
        assert_eq!(text.parse::<Board>().unwrap(), b);
    }

    #[test]
    fn diagram_rejects_light_square_piece() {
        let err = "r......./8/8/8/8/8/8/8".replace('8', "........").parse::<Board>();
        assert_eq!(err, Err(ParseError::LightSquare { row: 0, col: 0 }));
    }

    #[test]
    fn diagram_reports_shape_errors() {
        assert_eq!("........".parse::<Board>(), Err(ParseError::RowCount(1)));
        let short = ["........"; 7].join("/") + "/.......";
        assert_eq!(short.parse::<Board>(), Err(ParseError::RowLength { row: 7, len: 7 }));
        let bad = ["........"; 7].join("/") + "/.x......";
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseError::Symbol { symbol: 'x', row: 7, col: 1 })
        );
    }

    #[test]
    #[should_panic]
    fn piece_at_off_board_panics() {
        let _ = Board::startpos().piece_at(0, 8);
    }
}
