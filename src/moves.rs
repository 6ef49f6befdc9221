use crate::board::Square;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single ply: one step or one jump. Chains are a sequence of moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        self.from.row().abs_diff(self.to.row()) == 2
    }

    /// The square jumped over, for jumps.
    pub fn captured_square(&self) -> Option<Square> {
        if !self.is_jump() {
            return None;
        }
        Some(Square::new(
            (self.from.row() + self.to.row()) / 2,
            (self.from.col() + self.to.col()) / 2,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once('-').ok_or_else(|| ParseError::Move(s.to_string()))?;
        let from = a.parse::<Square>().map_err(|_| ParseError::Move(s.to_string()))?;
        let to = b.parse::<Square>().map_err(|_| ParseError::Move(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_is_two_rows() {
        assert!(!Move::from_coords(2, 1, 3, 0).is_jump());
        let jump = Move::from_coords(2, 1, 4, 3);
        assert!(jump.is_jump());
        assert_eq!(jump.captured_square(), Some(Square::new(3, 2)));
        assert_eq!(Move::from_coords(5, 2, 4, 1).captured_square(), None);
    }

    #[test]
    fn text_form() {
        let mv: Move = "2,1-3,0".parse().unwrap();
        assert_eq!(mv, Move::from_coords(2, 1, 3, 0));
        assert_eq!(mv.to_string(), "2,1-3,0");
        assert!("2,1 3,0".parse::<Move>().is_err());
    }
}
