//! Match simulator CLI - plays complete matches in memory with bots in every
//! seat and reports one JSON line per match.

mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use court_piece::ai::create_ai;
use court_piece::domain::TeamKey;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Fast in-memory Court Piece match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; match N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Bot for every seat
    #[arg(long, default_value = "random")]
    ai: String,

    /// Probability that a turn is left to the timeout fallback
    #[arg(long, default_value = "0.0", value_parser = parse_rate)]
    timeout_rate: f64,

    /// Write JSON lines here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a summary when done
    #[arg(long)]
    summary: bool,
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is not within 0.0..=1.0"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let ai = create_ai(&args.ai, Some(base_seed))
        .ok_or_else(|| format!("Unknown AI type: {}", args.ai))?;
    info!(games = args.games, base_seed, ai = %args.ai, "starting simulation");

    let mut writer = OutputWriter::new(args.output.as_deref())?;
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game));
        match Simulator::new(game, seed, args.timeout_rate).simulate_game(ai.as_ref()) {
            Ok(result) => {
                if let Err(e) = writer.write_game(&result) {
                    warn!("Failed to write result for game {}: {}", game, e);
                }
                info!(game, winner = %result.winner, tens = ?result.tens, "match completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game, e);
            }
        }
    }
    writer.finish()?;

    if args.summary {
        print_summary(&results, errors, start.elapsed(), args.games);
    }
    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {}", errors);
    }
    eprintln!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }

    for team in [TeamKey::Team1, TeamKey::Team2] {
        let idx = match team {
            TeamKey::Team1 => 0,
            TeamKey::Team2 => 1,
        };
        let wins = results.iter().filter(|r| r.winner == team).count();
        let tens: u32 = results.iter().map(|r| u32::from(r.tens[idx])).sum();
        let caller_wins = results
            .iter()
            .filter(|r| r.winner == team && team_of(&r.trump_caller) == Some(team))
            .count();
        eprintln!(
            "{}: wins={} ({:.1}%), avg tens={:.2}, wins while calling={}",
            team,
            wins,
            wins as f64 * 100.0 / results.len() as f64,
            f64::from(tens) / results.len() as f64,
            caller_wins
        );
    }
    let timeouts: u32 = results.iter().map(|r| r.timeouts).sum();
    eprintln!("Fallback plays: {}", timeouts);
}

fn team_of(player: &str) -> Option<TeamKey> {
    match player {
        "north" | "south" => Some(TeamKey::Team1),
        "east" | "west" => Some(TeamKey::Team2),
        _ => None,
    }
}
