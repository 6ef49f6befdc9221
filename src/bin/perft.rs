use draughts::perft::{divide, perft_after};
use draughts::{Board, Move, Player, Position};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the draughts move generator")]
struct Args {
    /// Search depth in turns
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board diagram (rows of `.rRbB` joined by '/') or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Side to move for a custom board: 'r' or 'b'
    #[arg(long, default_value = "r")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count below each root move (honours --threads and --nps)
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let depth = args.depth;

    let base = if args.board == "startpos" {
        Position::startpos()
    } else {
        let side = match args.side.as_str() {
            "r" | "red" => Player::Red,
            "b" | "black" => Player::Black,
            other => anyhow::bail!("Invalid side {other:?}: use 'r' or 'b'"),
        };
        Position::from_parts(args.board.parse::<Board>()?, side)
    };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (parts, nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let parts: Vec<(Move, u64)> = if args.threads <= 1 || depth == 0 {
            divide(&base, depth)
        } else {
            let root_moves: Vec<_> = base.legal_moves().iter().copied().collect();
            root_moves.par_iter().map(|&mv| (mv, perft_after(&base, mv, depth))).collect()
        };
        // Depth 0 is the root itself.
        let nodes: u64 = if depth == 0 { 1 } else { parts.iter().map(|(_, n)| n).sum() };
        (parts, nodes, t0.elapsed().as_secs_f64())
    });

    if args.divide {
        for (mv, n) in &parts { println!("{mv}: {n}"); }
    }
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
