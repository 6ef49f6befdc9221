use anyhow::Result;
use clap::Parser;
use draughts::{Board, Click, Player, Position, Session, SessionOptions, Square};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play English draughts in the terminal", long_about = None)]
struct Args {
    /// Do not pre-select the piece when every legal move shares one origin
    #[arg(long)]
    no_auto_select: bool,

    /// Starting board: 8 rows of `.rRbB` separated by '/', row 0 first
    #[arg(long)]
    board: Option<String>,

    /// Side to move with --board: 'r' for red, 'b' for black
    #[arg(long, default_value = "r")]
    side: String,
}

fn parse_side(side: &str) -> Result<Player> {
    match side.to_lowercase().as_str() {
        "r" | "red" => Ok(Player::Red),
        "b" | "black" => Ok(Player::Black),
        _ => anyhow::bail!("Invalid side: use 'r' or 'b'"),
    }
}

fn print_session(s: &Session) {
    let dests = s.destinations();
    println!("\n    0  1  2  3  4  5  6  7");
    for row in 0..8 {
        print!("{row} ");
        for col in 0..8 {
            let sq = Square::new(row, col);
            let cell = s.piece_at(row, col);
            let sym = if !sq.is_dark() { ' ' } else { cell.symbol() };
            if s.selection() == Some(sq) {
                print!("[{sym}]");
            } else if dests.contains(&sq) {
                print!(" * ");
            } else if s.legal_moves().is_origin(sq) {
                print!("({sym})");
            } else {
                print!(" {sym} ");
            }
        }
        println!();
    }
    println!("{}", s.status());
}

fn parse_click(line: &str) -> Option<(usize, usize)> {
    let mut it = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty());
    let row = it.next()?.parse::<usize>().ok()?;
    let col = it.next()?.parse::<usize>().ok()?;
    (row < 8 && col < 8 && it.next().is_none()).then_some((row, col))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = SessionOptions { auto_select: !args.no_auto_select };

    let mut session = match args.board {
        Some(diagram) => {
            let board: Board = diagram.parse()?;
            Session::with_position(Position::from_parts(board, parse_side(&args.side)?), options)
        }
        None => {
            let mut s = Session::new(options);
            s.new_game()?;
            s
        }
    };

    println!("English draughts. Enter \"row col\" to click a square,");
    println!("or one of: new, resign, moves, quit.");

    let stdin = io::stdin();
    loop {
        print_session(&session);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        let line = line.trim();
        match line {
            "" => continue,
            "quit" => break,
            // Failures already land in the status line.
            "new" => { let _ = session.new_game(); }
            "resign" => { let _ = session.resign(); }
            "moves" => {
                let moves: Vec<String> = session.legal_moves().iter().map(|m| m.to_string()).collect();
                println!("{}", moves.join(" "));
            }
            _ => match parse_click(line) {
                Some((row, col)) => {
                    if let Click::Moved { mv, .. } = session.square_clicked(row, col) {
                        println!("played {mv}");
                    }
                }
                None => println!("Invalid input! Use \"row col\" with both in 0..8"),
            },
        }
    }
    Ok(())
}
