//! Tournament driver for the Isolation search agents.
//!
//! Plays timed matches between two configured agents and reports wins,
//! or replays a single game move by move. Game records can be written
//! as JSON for later analysis.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ply_core::{Evaluator, Game, Player, Score};
use ply_isolation::{Board, CenterAverse, CenterSeeking, CenterShy, Isolation, Move};
use ply_search::{Agent, SearchMode, DEPTH_CEILING};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Isolation match and analysis tool.
#[derive(Parser)]
#[command(name = "ply-arena")]
#[command(about = "Play Isolation matches between search agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two agents.
    Match {
        /// Number of games to play.
        #[arg(short, long, default_value = "20")]
        games: usize,

        /// Heuristic for the first agent.
        #[arg(long, value_enum, default_value = "center-shy")]
        one: HeuristicKind,

        /// Heuristic for the second agent.
        #[arg(long, value_enum, default_value = "center-seeking")]
        two: HeuristicKind,

        /// Per-move time budget in milliseconds.
        #[arg(short, long, default_value = "150")]
        time_limit: u64,

        /// Search to this fixed depth instead of deepening iteratively.
        #[arg(short, long)]
        depth: Option<u32>,

        /// Board width in cells.
        #[arg(long, default_value = "7")]
        width: u8,

        /// Board height in cells.
        #[arg(long, default_value = "7")]
        height: u8,

        /// Random opening plies before the agents take over.
        #[arg(long, default_value = "2")]
        opening: usize,

        /// Random seed for the opening moves.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Write all game records to this JSON file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Play one game and print the board after every move.
    Watch {
        /// Heuristic for the first agent.
        #[arg(long, value_enum, default_value = "center-shy")]
        one: HeuristicKind,

        /// Heuristic for the second agent.
        #[arg(long, value_enum, default_value = "center-seeking")]
        two: HeuristicKind,

        /// Per-move time budget in milliseconds.
        #[arg(short, long, default_value = "150")]
        time_limit: u64,

        /// Search to this fixed depth instead of deepening iteratively.
        #[arg(short, long)]
        depth: Option<u32>,

        /// Board width in cells.
        #[arg(long, default_value = "7")]
        width: u8,

        /// Board height in cells.
        #[arg(long, default_value = "7")]
        height: u8,

        /// Random opening plies before the agents take over.
        #[arg(long, default_value = "2")]
        opening: usize,

        /// Random seed for the opening moves.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Frontier heuristic an agent scores with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicKind {
    /// Mobility difference with a pull toward the center.
    CenterSeeking,
    /// Mobility difference with a mild push off the center.
    CenterShy,
    /// Mobility difference with a strong push off the center.
    CenterAverse,
}

impl HeuristicKind {
    fn label(self) -> &'static str {
        match self {
            HeuristicKind::CenterSeeking => "center-seeking",
            HeuristicKind::CenterShy => "center-shy",
            HeuristicKind::CenterAverse => "center-averse",
        }
    }
}

impl Evaluator<Isolation> for HeuristicKind {
    fn score(&self, game: &Isolation, state: &Board, perspective: Player) -> Score {
        match self {
            HeuristicKind::CenterSeeking => CenterSeeking.score(game, state, perspective),
            HeuristicKind::CenterShy => CenterShy.score(game, state, perspective),
            HeuristicKind::CenterAverse => CenterAverse.score(game, state, perspective),
        }
    }
}

/// Everything one game needs: the board, both heuristics, the search
/// mode and the per-move clock.
#[derive(Clone)]
struct GameSetup {
    game: Isolation,
    one: HeuristicKind,
    two: HeuristicKind,
    mode: SearchMode,
    time_limit: Duration,
    opening: usize,
}

/// One finished game.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct GameRecord {
    /// Heuristic labels for seat one and seat two.
    one: String,
    two: String,

    /// Winning seat, "1" or "2".
    winner: String,

    /// How the loser went down: "trapped" (no legal move left) or
    /// "timeout" (no answer before the clock ran out).
    termination: String,

    /// Every move played, in order, as (row, col).
    moves: Vec<(i8, i8)>,

    /// Wall-clock length of the whole game in milliseconds.
    duration_ms: u64,
}

impl GameRecord {
    fn winner_label(&self) -> &str {
        if self.winner == "1" {
            &self.one
        } else {
            &self.two
        }
    }
}

/// Play a single game and return its record.
///
/// Each turn gets a fresh clock; an agent that cannot answer in time
/// forfeits on the spot.
fn play_game(setup: &GameSetup, seed: u64, verbose: bool) -> GameRecord {
    let start = Instant::now();
    let game = setup.game.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let agent_one = Agent::new(game.clone(), setup.one).with_mode(setup.mode);
    let agent_two = Agent::new(game.clone(), setup.two).with_mode(setup.mode);

    let mut board = game.initial_state();
    let mut moves: Vec<(i8, i8)> = Vec::new();

    // Random openings so repeated games between the same agents differ.
    for _ in 0..setup.opening {
        let legal = game.legal_moves(&board, game.to_move(&board));
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.gen_range(0..legal.len())];
        if verbose {
            println!("opening: player {} takes {}", game.to_move(&board), mv);
        }
        moves.push((mv.row, mv.col));
        board = game.apply(&board, mv);
    }

    let (winner, termination) = loop {
        let side = game.to_move(&board);
        if game.legal_moves(&board, side).is_empty() {
            if verbose {
                println!("player {side} has no moves left");
            }
            break (side.opponent(), "trapped");
        }

        let agent = match side {
            Player::One => &agent_one,
            Player::Two => &agent_two,
        };

        let turn_start = Instant::now();
        let budget = setup.time_limit;
        let result = agent.search(&board, move || budget.saturating_sub(turn_start.elapsed()));
        let spent = turn_start.elapsed();

        // The engine's "no move" becomes the (-1, -1) sentinel on the wire.
        let mv = result.best_move.unwrap_or(Move::NONE);
        if mv.is_none() {
            if verbose {
                println!("player {side} ran out of time");
            }
            break (side.opponent(), "timeout");
        }

        moves.push((mv.row, mv.col));
        board = game.apply(&board, mv);
        if verbose {
            println!(
                "player {side} plays {mv} (depth {}, {} nodes, {} ms)",
                result.depth,
                result.nodes,
                spent.as_millis()
            );
            println!("{board}");
        }
    };

    GameRecord {
        one: setup.one.label().to_string(),
        two: setup.two.label().to_string(),
        winner: winner.to_string(),
        termination: termination.to_string(),
        moves,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Run the match command: many games in parallel, seats swapped every
/// other game for fairness.
fn cmd_match(setup: GameSetup, games: usize, seed: u64, output: Option<PathBuf>) -> Result<()> {
    println!(
        "Playing {} games: {} vs {} on {}x{}",
        games,
        setup.one.label(),
        setup.two.label(),
        setup.game.width(),
        setup.game.height()
    );
    println!(
        "{} ms per move, {:?} search",
        setup.time_limit.as_millis(),
        setup.mode
    );
    println!("================================================");

    let start = Instant::now();
    let swapped = GameSetup {
        one: setup.two,
        two: setup.one,
        ..setup.clone()
    };

    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| {
            let game_seed = seed.wrapping_add(i as u64 * 1000);
            if i % 2 == 0 {
                play_game(&setup, game_seed, false)
            } else {
                play_game(&swapped, game_seed, false)
            }
        })
        .collect();

    let timeouts = records
        .iter()
        .filter(|r| r.termination == "timeout")
        .count();
    let total_plies: usize = records.iter().map(|r| r.moves.len()).sum();

    println!("\n================================================");
    println!("RESULTS");
    println!("================================================");
    let a = setup.one.label();
    let b = setup.two.label();
    if a == b {
        let seat_one = records.iter().filter(|r| r.winner == "1").count();
        println!("Mirror match: seat one {} - {} seat two", seat_one, games - seat_one);
    } else {
        let a_wins = records.iter().filter(|r| r.winner_label() == a).count();
        let b_wins = games - a_wins;
        println!(
            "{:<16} {:>4} wins ({:.1}%)",
            a,
            a_wins,
            a_wins as f64 / games as f64 * 100.0
        );
        println!(
            "{:<16} {:>4} wins ({:.1}%)",
            b,
            b_wins,
            b_wins as f64 / games as f64 * 100.0
        );
    }
    println!("Timeout losses: {}", timeouts);
    println!(
        "Average game length: {:.1} plies",
        total_plies as f64 / games as f64
    );
    println!("Completed in {:.2}s", start.elapsed().as_secs_f64());

    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records)
            .with_context(|| format!("failed to write records to {}", path.display()))?;
        println!("Records written to {}", path.display());
    }

    Ok(())
}

/// Run the watch command: one game, narrated.
fn cmd_watch(setup: GameSetup, seed: u64) -> Result<()> {
    println!(
        "{} (1) vs {} (2) on {}x{}, {} ms per move",
        setup.one.label(),
        setup.two.label(),
        setup.game.width(),
        setup.game.height(),
        setup.time_limit.as_millis()
    );
    println!();

    let record = play_game(&setup, seed, true);

    println!(
        "player {} wins after {} plies ({})",
        record.winner,
        record.moves.len(),
        record.termination
    );
    Ok(())
}

fn build_setup(
    one: HeuristicKind,
    two: HeuristicKind,
    time_limit: u64,
    depth: Option<u32>,
    width: u8,
    height: u8,
    opening: usize,
) -> Result<GameSetup> {
    let game = Isolation::with_size(width, height).context("unsupported board size")?;
    let mode = match depth {
        Some(depth) => SearchMode::Fixed { depth },
        None => SearchMode::Iterative {
            ceiling: DEPTH_CEILING,
        },
    };
    Ok(GameSetup {
        game,
        one,
        two,
        mode,
        time_limit: Duration::from_millis(time_limit),
        opening,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Match {
            games,
            one,
            two,
            time_limit,
            depth,
            width,
            height,
            opening,
            seed,
            output,
        } => {
            let setup = build_setup(one, two, time_limit, depth, width, height, opening)?;
            cmd_match(setup, games, seed, output)
        }

        Commands::Watch {
            one,
            two,
            time_limit,
            depth,
            width,
            height,
            opening,
            seed,
        } => {
            let setup = build_setup(one, two, time_limit, depth, width, height, opening)?;
            cmd_watch(setup, seed)
        }
    }
}
