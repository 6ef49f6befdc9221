// Rules engine for English draughts
pub mod board;
pub mod moves;
pub mod movegen;
pub mod apply;
pub mod position;
pub mod session;
pub mod perft;
pub mod playout;
pub mod error;

pub use board::{Board, Cell, Player, Square};
pub use moves::Move;
pub use movegen::{legal_jumps_from, legal_moves, Continuation, MoveSet};
pub use position::{Ply, Position};
pub use session::{Click, GameOutcome, Rejection, Session, SessionOptions, SessionState};
