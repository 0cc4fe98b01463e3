#![warn(clippy::all)]

use anyhow::{ensure, Context, Result};
use clap::Parser;
use regionlife::{naive_step, Config, Engine, Grid, MemoEngine, ParallelMemoEngine, Simulation};
use std::time::Instant;

/// Runs a randomly filled toroidal Game of Life field without display.
#[derive(Parser)]
#[command(name = "regionlife", version, about)]
struct Cli {
    /// log2 of the field width
    #[arg(long, default_value_t = 8)]
    width_log2: u32,

    /// log2 of the field height
    #[arg(long, default_value_t = 8)]
    height_log2: u32,

    /// Number of generations to compute
    #[arg(short, long, default_value_t = 1000)]
    generations: u64,

    /// Random seed (random if not given)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a cell being alive initially
    #[arg(long, default_value_t = 0.5)]
    fill_rate: f64,

    /// Keep at most this many cache entries (unbounded if not given).
    /// The shared cache of the threaded engine is always unbounded.
    #[arg(long, conflicts_with = "parallel_levels")]
    cache_capacity: Option<usize>,

    /// Fork the top levels of the recursion onto threads
    #[arg(long)]
    parallel_levels: Option<u32>,

    /// Compare every generation with the direct computation
    #[arg(long)]
    verify: bool,
}

fn run<E: Engine>(cli: &Cli, grid: Grid, engine: E) -> Result<()> {
    let mut sim = Simulation::new(grid, engine);
    let timer = Instant::now();
    for _ in 0..cli.generations {
        let expected = cli.verify.then(|| naive_step(sim.grid()));
        sim.advance()
            .with_context(|| format!("generation {}", sim.generation() + 1))?;
        if let Some(expected) = expected {
            ensure!(
                sim.grid() == &expected,
                "generation {} differs from the direct computation",
                sim.generation()
            );
        }
    }
    println!("Time spent on updates: {:?}", timer.elapsed());
    println!("population: {}", sim.grid().population());
    print!("{}", sim.engine().statistics());
    Ok(())
}

fn build_grid(cli: &Cli) -> Result<Grid> {
    ensure!(
        cli.width_log2 < usize::BITS && cli.height_log2 < usize::BITS,
        "field side is too large"
    );
    let (width, height) = (1usize << cli.width_log2, 1usize << cli.height_log2);
    Grid::random(width, height, cli.seed, cli.fill_rate).context("failed to build the initial field")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let grid = build_grid(&cli)?;

    let config = Config::default().with_cache_capacity(cli.cache_capacity);
    match cli.parallel_levels {
        Some(levels) => run(
            &cli,
            grid,
            ParallelMemoEngine::new(&config.with_parallel_levels(levels)),
        ),
        None => run(&cli, grid, MemoEngine::new(&config)),
    }
}
