//! Othello terminal front-end
//!
//! `play` pits a human (Black) against the engine (White) on stdin/stdout.
//! `selfplay` lets the engine play both sides and prints the final score.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello::rules::{is_terminal, make_move, score, winner, Winner};
use othello::{Board, EngineConfig, GameMode, GameSession, Player, Searcher, Turn};

#[derive(Parser)]
#[command(name = "othello", about = "Othello engine with alpha-beta search")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    engine: EngineArgs,

    /// Log search and session events (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play as Black against the engine
    Play,
    /// Let the engine play both sides
    Selfplay,
}

#[derive(Args)]
struct EngineArgs {
    /// JSON engine configuration; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Time budget per engine move in milliseconds
    #[arg(long, global = true)]
    time_ms: Option<u64>,

    /// Maximum search depth
    #[arg(long, global = true)]
    depth: Option<i8>,

    /// Disable the transposition table
    #[arg(long, global = true)]
    no_tt: bool,
}

impl EngineArgs {
    fn load(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                EngineConfig::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(ms) = self.time_ms {
            config = config.with_time_budget_ms(ms);
        }
        if let Some(depth) = self.depth {
            config = config.with_max_depth(depth);
        }
        if self.no_tt {
            config = config.with_transposition_table(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "othello=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.engine.load()?;

    match cli.command {
        Command::Play => play(config),
        Command::Selfplay => selfplay(config),
    }
}

fn play(config: EngineConfig) -> Result<()> {
    let mut session = GameSession::new(config, GameMode::VsAi { ai: Player::White })?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut seen = 0;

    loop {
        report_turns(&session.history()[seen..]);
        seen = session.history().len();

        println!("{}", session.board());
        if session.is_game_over() {
            break;
        }

        print!("Your turn (black). Enter row col (e.g., 2 3): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let coords: Vec<i32> = line
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        let &[row, col] = coords.as_slice() else {
            println!("Invalid input! Expected two numbers.");
            continue;
        };

        if let Err(e) = session.submit_move(row, col) {
            println!("{e}. Try again.");
        }
    }

    let state = session.current_state();
    println!("Black {} - White {}", state.black_pieces, state.white_pieces);
    match state.winner {
        Some(Winner::Black) => println!("Human (Black) wins!"),
        Some(Winner::White) => println!("AI (White) wins!"),
        _ => println!("Draw!"),
    }
    Ok(())
}

fn report_turns(turns: &[Turn]) {
    for turn in turns {
        match turn {
            Turn::Placed {
                player: Player::White,
                pos,
                flipped,
            } => println!("AI moves to {pos}, flipping {flipped}"),
            Turn::Placed { .. } => {}
            Turn::Passed(player) => println!("No moves for {player}. Skipping turn."),
        }
    }
}

fn selfplay(config: EngineConfig) -> Result<()> {
    let mut searcher = Searcher::new(config);
    let mut board = Board::new();
    let mut player = Player::Black;
    let mut ply = 0u32;

    while !is_terminal(&board) {
        let result = searcher.search(&board, player);
        match result.best_move {
            Some(pos) => {
                make_move(&mut board, player, pos)
                    .with_context(|| format!("engine chose illegal move {pos}"))?;
                ply += 1;
                println!(
                    "{ply:>2}. {player} {pos}  depth {} score {} nodes {} ({} ms) \
                     first-move cuts {:.0}% tt hits {:.0}%",
                    result.depth,
                    result.score,
                    result.nodes,
                    result.elapsed.as_millis(),
                    result.stats.first_move_rate(),
                    result.stats.tt_score_rate()
                );
            }
            None => println!("    {player} passes"),
        }
        player = player.opponent();
    }

    println!("{board}");
    let (black, white) = score(&board);
    println!("Final: Black {black} - White {white} ({:?})", winner(&board));
    Ok(())
}
