//! Gomoku terminal front end
//!
//! ## Usage
//!
//! - `gomoku` - Play as Black against the AI
//! - `gomoku play --human white` - Play as White
//! - `gomoku self-play` - Watch the AI play itself
//!
//! Moves are typed as `row col`, both 0-based. `undo` takes back the last
//! exchange and `quit` leaves.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use gomoku::{AIEngine, AppConfig, Game, GameError, GameStatus, Player};

/// Capture Gomoku against a minimax AI
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file; defaults are used if it does not exist
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override the AI time budget per move, in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Override the AI's maximum search depth
    #[arg(long)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI
    Play {
        /// Color the human plays
        #[arg(long, value_enum, default_value_t = Side::Black)]
        human: Side,
    },
    /// Let the AI play both colors
    SelfPlay {
        /// Stop after this many moves
        #[arg(long, default_value_t = 200)]
        max_moves: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(time_ms) = cli.time_ms {
        config.engine.time_limit_ms = time_ms;
    }
    if let Some(depth) = cli.depth {
        config.engine.max_depth = depth;
    }
    config.validate().context("invalid settings")?;
    info!("engine settings: {:?}", config.engine);

    let mut game = Game::with_rules(config.rules);
    let mut engine = AIEngine::with_config(config.engine);

    match cli.command {
        Some(Commands::SelfPlay { max_moves }) => run_self_play(&mut game, &mut engine, max_moves),
        Some(Commands::Play { human }) => run_play(&mut game, &mut engine, human.into()),
        None => run_play(&mut game, &mut engine, Player::Black),
    }
}

fn print_result(game: &Game) {
    match game.status() {
        GameStatus::Won(player) => println!("{player} wins!"),
        GameStatus::Draw => println!("Draw: no legal moves left."),
        GameStatus::InProgress => println!("Game stopped."),
    }
}

fn ai_move(game: &mut Game, engine: &mut AIEngine) -> Result<()> {
    let result = engine
        .get_move_with_stats(game.board(), game.mover())
        .context("AI found no move")?;
    let applied = game.play(result.best_move).context("AI played an illegal move")?;
    println!(
        "{} plays {} (score {}, depth {}, {} nodes, {}ms, TT hits {:.1}%)",
        applied.player,
        applied.pos,
        result.score,
        result.depth,
        result.nodes,
        result.time_ms,
        result.stats.tt_hit_rate()
    );
    Ok(())
}

fn run_self_play(game: &mut Game, engine: &mut AIEngine, max_moves: usize) -> Result<()> {
    for _ in 0..max_moves {
        if game.is_over() {
            break;
        }
        ai_move(game, engine)?;
        println!("{}", game.board());
    }
    print_result(game);
    Ok(())
}

/// Parse `row col` from one input line
fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn run_play(game: &mut Game, engine: &mut AIEngine, human: Player) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", game.board());
    while !game.is_over() {
        if game.mover() != human {
            ai_move(game, engine)?;
            println!("{}", game.board());
            continue;
        }

        print!("{human} to move (row col): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "undo" => {
                // Take back the AI reply too, so it is the human's turn again
                let mut undone = 0;
                while undone < 2 {
                    match game.undo() {
                        Ok(_) => undone += 1,
                        Err(GameError::NothingToUndo) => break,
                        Err(e) => return Err(e.into()),
                    }
                    if game.mover() == human {
                        break;
                    }
                }
                println!("{}", game.board());
            }
            _ => match parse_move(input) {
                Some((row, col)) => match game.play_at(row, col) {
                    Ok(_) => println!("{}", game.board()),
                    Err(e) if e.is_invalid_move() => println!("Illegal move: {e}"),
                    Err(e) => return Err(e.into()),
                },
                None => println!("Expected `row col`, `undo` or `quit`"),
            },
        }
    }

    print_result(game);
    Ok(())
}
