use clap::Parser;
use draughts::playout::{play_one, write_jsonl, GameRecord, PlayoutParams};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "draughts-playout", about = "Play random legal games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 300)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = PlayoutParams { games: a.games, max_plies: a.max_plies, seed: a.seed };
    eprintln!("Playing {} random games (max_plies={}, seed={})", params.games, params.max_plies, params.seed);

    let bar = ProgressBar::new(params.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?);
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let games: Vec<GameRecord> = (0..params.games)
        .map(|_| {
            let g = play_one(params.max_plies, &mut rng, |_, _| {});
            bar.inc(1);
            g
        })
        .collect();
    bar.finish_and_clear();

    let decided = games.iter().filter(|g| g.winner.is_some()).count();
    eprintln!("{decided}/{} games decided before the ply cap", games.len());

    match a.out {
        Some(path) => write_jsonl(&games, BufWriter::new(File::create(&path)?))?,
        None => write_jsonl(&games, io::stdout().lock())?,
    }
    Ok(())
}
