use std::{
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use matrix_paths::{
    graphs::{
        graph_factory::{DEFAULT_MAX_WEIGHT, MAX_DIMENSION},
        Weight,
    },
    interaction::{console::Console, run_session, SessionConfig},
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generates a random directed graph, computes all-pairs shortest paths with
/// Floyd-Warshall and answers shortest path queries on the console.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices. Prompted for if not given.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    dimension: Option<u32>,
    /// Exclusive upper bound of the randomly drawn edge weights
    #[arg(short, long, default_value_t = DEFAULT_MAX_WEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    max_weight: Weight,
    /// Seed for reproducible graphs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Also print the distance matrix
    #[arg(long)]
    show_distances: bool,
    /// Show a progress bar while computing shortest paths
    #[arg(long)]
    progress: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?args.seed, "starting path finder");

    let config = SessionConfig {
        dimension: args.dimension,
        max_weight: args.max_weight,
        show_distances: args.show_distances,
        show_progress: args.progress,
    };

    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());
    match run_session(&mut console, &config, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
