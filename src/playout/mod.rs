use crate::board::Player;
use crate::moves::Move;
use crate::position::Position;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutParams {
    fn default() -> Self {
        Self { games: 100, max_plies: 300, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// `None` when the ply cap was hit first.
    pub winner: Option<Player>,
    pub plies: usize,
}

/// Plays `params.games` games of uniformly random legal moves. Same seed,
/// same games.
pub fn generate_games(params: &PlayoutParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    (0..params.games).map(|_| play_one(params.max_plies, &mut rng, |_, _| {})).collect()
}

/// Plays a single random game, calling `observe` with the position before
/// and after every ply.
pub fn play_one<F>(max_plies: usize, rng: &mut SmallRng, mut observe: F) -> GameRecord
where
    F: FnMut(&Position, &Position),
{
    let mut pos = Position::startpos();
    let mut record = GameRecord { moves: Vec::new(), winner: None, plies: 0 };
    while record.plies < max_plies {
        let Some(mv) = select_random_move(&pos, rng) else {
            record.winner = Some(pos.side_to_move().opponent());
            break;
        };
        let before = pos.clone();
        pos.play_unchecked(mv);
        observe(&before, &pos);
        record.moves.push(mv.to_string());
        record.plies += 1;
    }
    record
}

fn select_random_move(pos: &Position, rng: &mut SmallRng) -> Option<Move> {
    let moves = pos.legal_moves();
    let moves = moves.as_slice();
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Writes one JSON object per game.
pub fn write_jsonl<W: Write>(games: &[GameRecord], mut out: W) -> anyhow::Result<()> {
    for g in games {
        serde_json::to_writer(&mut out, g)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
