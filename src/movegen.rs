//! Legal move generation with mandatory capture.

use crate::board::{Board, Cell, Player, Square};
use crate::moves::Move;

/// Diagonal steps, forward pair first for red.
static DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Every move available to one player. `NoMoves` ends the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveSet {
    /// Never empty. All jumps, or all simple moves.
    Moves(Vec<Move>),
    NoMoves,
}

/// Jumps available to a piece that has just captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Never empty.
    Jumps(Vec<Move>),
    Done,
}

impl MoveSet {
    pub fn from_vec(moves: Vec<Move>) -> Self {
        if moves.is_empty() { MoveSet::NoMoves } else { MoveSet::Moves(moves) }
    }

    pub fn as_slice(&self) -> &[Move] {
        match self {
            MoveSet::Moves(m) => m,
            MoveSet::NoMoves => &[],
        }
    }

    pub fn len(&self) -> usize { self.as_slice().len() }

    pub fn is_empty(&self) -> bool { self.as_slice().is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> { self.as_slice().iter() }

    pub fn contains(&self, mv: &Move) -> bool { self.as_slice().contains(mv) }

    /// True when capture is mandatory for this set.
    pub fn must_jump(&self) -> bool {
        self.as_slice().first().is_some_and(Move::is_jump)
    }

    pub fn is_origin(&self, sq: Square) -> bool {
        self.iter().any(|m| m.from == sq)
    }

    /// Legal moves starting on `from`, in generation order.
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &Move> + '_ {
        self.iter().filter(move |m| m.from == from)
    }

    /// The shared origin when every move starts on the same square.
    pub fn single_origin(&self) -> Option<Square> {
        let first = self.as_slice().first()?.from;
        self.iter().all(|m| m.from == first).then_some(first)
    }
}

impl From<Continuation> for MoveSet {
    fn from(c: Continuation) -> Self {
        match c {
            Continuation::Jumps(j) => MoveSet::Moves(j),
            Continuation::Done => MoveSet::NoMoves,
        }
    }
}

/// Diagonal directions `cell` may move or jump along.
#[inline]
fn directions(cell: Cell, player: Player) -> &'static [(i8, i8)] {
    match (cell.is_king(), player) {
        (true, _) => &DIAGONALS,
        (false, Player::Red) => &DIAGONALS[..2],
        (false, Player::Black) => &DIAGONALS[2..],
    }
}

fn push_jumps(board: &Board, player: Player, from: Square, cell: Cell, out: &mut Vec<Move>) {
    for &(dr, dc) in directions(cell, player) {
        let Some(over) = from.offset(dr, dc) else { continue };
        let Some(land) = from.offset(2 * dr, 2 * dc) else { continue };
        if board.get(over).owner() == Some(player.opponent()) && board.get(land).is_empty() {
            out.push(Move::new(from, land));
        }
    }
}

fn push_steps(board: &Board, player: Player, from: Square, cell: Cell, out: &mut Vec<Move>) {
    for &(dr, dc) in directions(cell, player) {
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to).is_empty() {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// All legal moves for `player`. Simple moves are only offered when no piece
/// of `player` can jump.
pub fn legal_moves(board: &Board, player: Player) -> MoveSet {
    let mut jumps = Vec::new();
    for (sq, cell) in board.pieces(player) {
        push_jumps(board, player, sq, cell, &mut jumps);
    }
    if !jumps.is_empty() {
        return MoveSet::Moves(jumps);
    }
    let mut steps = Vec::new();
    for (sq, cell) in board.pieces(player) {
        push_steps(board, player, sq, cell, &mut steps);
    }
    MoveSet::from_vec(steps)
}

/// Jumps the piece on `from` can make. `Done` if the square is empty, holds
/// the other colour, or has nothing to capture.
pub fn legal_jumps_from(board: &Board, player: Player, from: Square) -> Continuation {
    let cell = board.get(from);
    if cell.owner() != Some(player) {
        return Continuation::Done;
    }
    let mut jumps = Vec::new();
    push_jumps(board, player, from, cell, &mut jumps);
    if jumps.is_empty() { Continuation::Done } else { Continuation::Jumps(jumps) }
}
