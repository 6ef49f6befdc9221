use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIZE: u8 = 8;

/// A board coordinate. Both components are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is off the board; callers clamp first.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE as usize && col < SIZE as usize,
            "square ({row}, {col}) is off the board"
        );
        Self { row: row as u8, col: col as u8 }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Dark squares are the only playable ones.
    #[inline]
    pub fn is_dark(self) -> bool {
        self.row % 2 != self.col % 2
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..SIZE as i8).contains(&r) && (0..SIZE as i8).contains(&c) {
            Some(Square { row: r as u8, col: c as u8 })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Square { row, col }))
    }

    pub fn dark() -> impl Iterator<Item = Square> {
        Square::all().filter(|sq| sq.is_dark())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseError::Square(s.to_string()))?;
        let parse = |t: &str| t.trim().parse::<usize>().ok().filter(|&v| v < SIZE as usize);
        match (parse(r), parse(c)) {
            (Some(row), Some(col)) => Ok(Square::new(row, col)),
            _ => Err(ParseError::Square(s.to_string())),
        }
    }
}
