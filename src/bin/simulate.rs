use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dots_and_boxes::ai::{HeuristicAgent, RandomAgent};
use dots_and_boxes::game::Player;
use dots_and_boxes::simulation::{play_match, MatchMetrics};

/// Pit the heuristic computer against a random opponent, headless.
#[derive(Parser)]
#[command(name = "simulate", about = "Measure the computer opponent against random play")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Board size (cells per side)
    #[arg(long, default_value_t = 5)]
    dimension: usize,

    /// Seed both agents for reproducible results
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dimension = NonZeroUsize::new(cli.dimension).context("--dimension must be >= 1")?;

    let (mut random, mut heuristic) = match cli.seed {
        Some(seed) => (
            RandomAgent::with_seed(seed),
            HeuristicAgent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), HeuristicAgent::new()),
    };

    info!(
        games = cli.games,
        dimension = dimension.get(),
        seed = ?cli.seed,
        "starting simulation"
    );

    let mut metrics = MatchMetrics::with_capacity(cli.games.max(1));
    for game in 0..cli.games {
        // Alternate who opens so neither side keeps the first-move edge
        let first = if game % 2 == 0 { Player::Human } else { Player::Computer };
        let result = play_match(&mut random, &mut heuristic, dimension, first);
        metrics.record(result);

        if (game + 1) % 100 == 0 {
            info!(
                played = game + 1,
                heuristic_win_rate = metrics.win_rate(Player::Computer, 100),
                "progress"
            );
        }
    }

    let n = metrics.total_matches();
    println!("{n} games on a {0}x{0} board", dimension.get());
    println!(
        "  heuristic wins: {:5.1}%",
        metrics.win_rate(Player::Computer, n) * 100.0
    );
    println!(
        "  random wins:    {:5.1}%",
        metrics.win_rate(Player::Human, n) * 100.0
    );
    println!("  draws:          {:5.1}%", metrics.draw_rate(n) * 100.0);
    println!("  avg margin:     {:+.2} boxes", metrics.average_margin(n));
    println!("  avg length:     {:.1} moves", metrics.average_game_length(n));

    Ok(())
}
