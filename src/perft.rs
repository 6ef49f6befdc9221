use crate::moves::Move;
use crate::position::{Ply, Position};

/// Leaf count of the legal game tree `depth` turns deep. A jump chain is one
/// turn: continuation jumps recurse without spending depth.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    pos.legal_moves().iter().map(|&mv| perft_after(pos, mv, depth)).sum()
}

/// Per-root-move counts, in generation order.
pub fn divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    pos.legal_moves().iter().map(|&mv| (mv, perft_after(pos, mv, depth))).collect()
}

/// Nodes below `mv`, which must be legal in `pos`. `depth` counts the turn
/// `mv` belongs to; zero yields zero, as `divide` yields no entries.
pub fn perft_after(pos: &Position, mv: Move, depth: u32) -> u64 {
    if depth == 0 { return 0; }
    let mut child = pos.clone();
    match child.play_unchecked(mv) {
        Ply::ContinueJump { .. } => perft(&child, depth),
        Ply::TurnPassed { .. } => perft(&child, depth - 1),
    }
}
