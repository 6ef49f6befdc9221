//! Click-driven game session.
//!
//! A front end forwards `new_game`, `resign` and `square_clicked` here and
//! renders from `piece_at`, `legal_moves`, `selection` and `status`. The
//! session owns the only `Position`; every transition is a method call that
//! completes before returning.

use crate::board::{Board, Cell, Player, Square};
use crate::error::SessionError;
use crate::movegen::MoveSet;
use crate::moves::Move;
use crate::position::{Ply, Position};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Pre-select the piece when every legal move starts on the same square.
    pub auto_select: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { auto_select: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    NoMoves { winner: Player },
    Resignation { winner: Player },
}

impl GameOutcome {
    pub fn winner(self) -> Player {
        match self {
            GameOutcome::NoMoves { winner } | GameOutcome::Resignation { winner } => winner,
        }
    }

    pub fn message(self) -> String {
        let winner = self.winner();
        let loser = winner.opponent();
        match self {
            GameOutcome::NoMoves { .. } => format!("{loser} has no moves. {winner} wins."),
            GameOutcome::Resignation { .. } => format!("{loser} resigns. {winner} wins."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NoGame,
    AwaitingSelection(Player),
    PieceSelected(Player, Square),
    GameOver(GameOutcome),
}

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NoGame,
    NoSelection,
    IllegalDestination,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::NoGame => "Click \"New Game\" to start a new game.",
            Rejection::NoSelection => "Click the piece you want to move.",
            Rejection::IllegalDestination => "Click the square you want to move to.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
    Selected(Square),
    Moved { mv: Move, ply: Ply },
    Rejected(Rejection),
}

#[derive(Clone, Debug)]
pub struct Session {
    position: Position,
    state: SessionState,
    legal: MoveSet,
    options: SessionOptions,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            position: Position::startpos(),
            state: SessionState::NoGame,
            legal: MoveSet::NoMoves,
            options,
            status: Rejection::NoGame.message().to_string(),
        }
    }

    /// Starts a session from an arbitrary position instead of the standard
    /// layout. Useful for puzzles and tests.
    pub fn with_position(position: Position, options: SessionOptions) -> Self {
        let mut s = Self::new(options);
        s.position = position;
        info!("game started from custom position, {} to move", s.position.side_to_move());
        s.begin_turn();
        s
    }

    pub fn state(&self) -> SessionState { self.state }

    pub fn options(&self) -> SessionOptions { self.options }

    pub fn position(&self) -> &Position { &self.position }

    pub fn board(&self) -> &Board { self.position.board() }

    /// Panics if `row` or `col` is outside `0..8`.
    pub fn piece_at(&self, row: usize, col: usize) -> Cell {
        self.position.board().piece_at(row, col)
    }

    /// Moves the current player may make. Empty when no game is running.
    pub fn legal_moves(&self) -> &MoveSet { &self.legal }

    pub fn status(&self) -> &str { &self.status }

    pub fn is_game_in_progress(&self) -> bool {
        matches!(self.state, SessionState::AwaitingSelection(_) | SessionState::PieceSelected(..))
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            SessionState::AwaitingSelection(p) | SessionState::PieceSelected(p, _) => Some(p),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<Square> {
        match self.state {
            SessionState::PieceSelected(_, sq) => Some(sq),
            _ => None,
        }
    }

    /// Legal destinations of the selected piece.
    pub fn destinations(&self) -> Vec<Square> {
        self.selection()
            .map(|sq| self.legal.from_square(sq).map(|m| m.to).collect())
            .unwrap_or_default()
    }

    pub fn new_game(&mut self) -> Result<(), SessionError> {
        if self.is_game_in_progress() {
            return Err(self.refuse(SessionError::GameInProgress));
        }
        self.position.reset();
        info!("new game, {} to move", self.position.side_to_move());
        self.begin_turn();
        Ok(())
    }

    pub fn resign(&mut self) -> Result<(), SessionError> {
        let Some(player) = self.current_player() else {
            return Err(self.refuse(SessionError::NoGameInProgress));
        };
        self.finish(GameOutcome::Resignation { winner: player.opponent() });
        Ok(())
    }

    /// Handles a click on `(row, col)`. Panics if either is outside `0..8`.
    pub fn square_clicked(&mut self, row: usize, col: usize) -> Click {
        let sq = Square::new(row, col);
        let Some(player) = self.current_player() else {
            return self.reject(Rejection::NoGame);
        };

        if self.legal.is_origin(sq) {
            self.state = SessionState::PieceSelected(player, sq);
            self.status = self.prompt(player);
            debug!("{player} selected {sq}");
            return Click::Selected(sq);
        }

        let Some(selected) = self.selection() else {
            return self.reject(Rejection::NoSelection);
        };

        let chosen = self.legal.from_square(selected).find(|m| m.to == sq).copied();
        match chosen {
            Some(mv) => self.commit(player, mv),
            None => self.reject(Rejection::IllegalDestination),
        }
    }

    fn commit(&mut self, player: Player, mv: Move) -> Click {
        debug!("{player} plays {mv}");
        let ply = self.position.play_unchecked(mv);
        match &ply {
            Ply::ContinueJump { from, .. } => {
                self.legal = self.position.legal_moves();
                self.state = SessionState::PieceSelected(player, *from);
                self.status = self.prompt(player);
            }
            Ply::TurnPassed { .. } => self.begin_turn(),
        }
        Click::Moved { mv, ply }
    }

    /// Computes the legal set for the side to move and either waits for a
    /// selection or ends the game.
    fn begin_turn(&mut self) {
        let player = self.position.side_to_move();
        self.legal = self.position.legal_moves();
        if self.legal.is_empty() {
            self.finish(GameOutcome::NoMoves { winner: player.opponent() });
            return;
        }
        self.state = match self.legal.single_origin() {
            Some(sq) if self.options.auto_select => SessionState::PieceSelected(player, sq),
            _ => SessionState::AwaitingSelection(player),
        };
        self.status = self.prompt(player);
        debug!("{player} to move, {} legal moves", self.legal.len());
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!("game over: {}", outcome.message());
        self.state = SessionState::GameOver(outcome);
        self.legal = MoveSet::NoMoves;
        self.status = outcome.message();
    }

    fn prompt(&self, player: Player) -> String {
        if self.position.forced_square().is_some() {
            format!("{player}: You must continue jumping.")
        } else if self.legal.must_jump() {
            format!("{player}: Make your move. You must jump.")
        } else {
            format!("{player}: Make your move.")
        }
    }

    fn reject(&mut self, why: Rejection) -> Click {
        self.status = why.message().to_string();
        Click::Rejected(why)
    }

    fn refuse(&mut self, err: SessionError) -> SessionError {
        self.status = err.to_string();
        err
    }
}
