use crate::apply::{apply_move, Applied};
use crate::board::{Board, Player, Square};
use crate::error::{IllegalMove, PlayError};
use crate::movegen::{legal_jumps_from, legal_moves, Continuation, MoveSet};
use crate::moves::Move;

/// Board plus whose turn it is, and the square locked in by a jump chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side: Player,
    forced: Option<Square>,
}

/// Outcome of one committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ply {
    /// The same piece must jump again from this square.
    ContinueJump { from: Square, applied: Applied },
    /// Turn handed to the opponent.
    TurnPassed { applied: Applied },
}

impl Ply {
    pub fn applied(&self) -> &Applied {
        match self {
            Ply::ContinueJump { applied, .. } | Ply::TurnPassed { applied } => applied,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Standard layout, red to move.
    pub fn startpos() -> Self {
        Self { board: Board::startpos(), side: Player::Red, forced: None }
    }

    pub fn from_parts(board: Board, side: Player) -> Self {
        Self { board, side, forced: None }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Player { self.side }

    /// Landing square of an unfinished jump chain.
    pub fn forced_square(&self) -> Option<Square> { self.forced }

    pub fn reset(&mut self) {
        self.board.reset();
        self.side = Player::Red;
        self.forced = None;
    }

    /// Moves for the side to move; only the continuation jumps mid-chain.
    pub fn legal_moves(&self) -> MoveSet {
        match self.forced {
            Some(sq) => legal_jumps_from(&self.board, self.side, sq).into(),
            None => legal_moves(&self.board, self.side),
        }
    }

    /// Validates `mv` against the legal set, then applies it.
    pub fn play(&mut self, mv: Move) -> Result<Ply, IllegalMove> {
        if !self.legal_moves().contains(&mv) {
            return Err(IllegalMove { mv, player: self.side });
        }
        Ok(self.play_unchecked(mv))
    }

    /// Applies a move already known to be in `legal_moves()`.
    pub fn play_unchecked(&mut self, mv: Move) -> Ply {
        let applied = apply_move(&mut self.board, mv);
        if mv.is_jump() {
            if let Continuation::Jumps(_) = legal_jumps_from(&self.board, self.side, mv.to) {
                self.forced = Some(mv.to);
                return Ply::ContinueJump { from: mv.to, applied };
            }
        }
        self.forced = None;
        self.side = self.side.opponent();
        Ply::TurnPassed { applied }
    }

    pub fn play_str(&mut self, mv: &str) -> Result<Ply, PlayError> {
        let mv: Move = mv.parse()?;
        Ok(self.play(mv)?)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, PlayError> {
        let mut pos = Self::startpos();
        for m in moves { pos.play_str(m)?; }
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_move_passes_turn() {
        let mut pos = Position::startpos();
        let ply = pos.play_str("2,1-3,0").unwrap();
        assert!(matches!(ply, Ply::TurnPassed { .. }));
        assert_eq!(pos.side_to_move(), Player::Black);
        assert_eq!(pos.forced_square(), None);
    }

    #[test]
    fn rejects_move_outside_legal_set() {
        let mut pos = Position::startpos();
        let before = pos.clone();
        let err = pos.play(Move::from_coords(5, 0, 4, 1)).unwrap_err();
        assert_eq!(err.player, Player::Red);
        assert_eq!(pos, before);
        assert!(matches!(pos.play_str("nonsense"), Err(PlayError::Parse(_))));
    }
}
