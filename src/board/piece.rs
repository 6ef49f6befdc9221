use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row step a man of this colour moves along. Red starts on rows 0..=2.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// Row on which a man of this colour is crowned.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::Red => 7,
            Player::Black => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Black => "Black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    RedMan,
    RedKing,
    BlackMan,
    BlackKing,
}

impl Cell {
    pub fn man(player: Player) -> Cell {
        match player {
            Player::Red => Cell::RedMan,
            Player::Black => Cell::BlackMan,
        }
    }

    pub fn king(player: Player) -> Cell {
        match player {
            Player::Red => Cell::RedKing,
            Player::Black => Cell::BlackKing,
        }
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::RedMan | Cell::RedKing => Some(Player::Red),
            Cell::BlackMan | Cell::BlackKing => Some(Player::Black),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlackKing)
    }

    /// The king variant of this piece. Kings and empty cells are unchanged.
    pub fn crowned(self) -> Cell {
        match self {
            Cell::RedMan => Cell::RedKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'r' => Some(Cell::RedMan),
            'R' => Some(Cell::RedKing),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowning_keeps_colour_and_is_stable() {
        assert_eq!(Cell::RedMan.crowned(), Cell::RedKing);
        assert_eq!(Cell::BlackMan.crowned(), Cell::BlackKing);
        assert_eq!(Cell::RedKing.crowned(), Cell::RedKing);
        assert_eq!(Cell::Empty.crowned(), Cell::Empty);
    }

    #[test]
    fn promotion_row_is_opposite_home() {
        assert_eq!(Player::Red.promotion_row(), 7);
        assert_eq!(Player::Black.promotion_row(), 0);
        assert_eq!(Player::Red.opponent(), Player::Black);
    }
}
