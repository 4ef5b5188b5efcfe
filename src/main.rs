//! Meadow Sim - Entry Point
//!
//! Thin wrapper around the simulation engine: parses CLI flags, runs one or
//! more seeded simulations, and prints the aggregated summary.

use clap::Parser;

use meadow_sim::core::config::SimulationConfig;
use meadow_sim::core::error::Result;
use meadow_sim::sim::Meadow;

#[derive(Parser, Debug)]
#[command(name = "meadow-sim", about = "Turn-based bee and plant visitation simulation")]
struct Args {
    /// RNG seed; runs with the same seed are identical
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Days during which new bees and plants are spawned
    #[arg(long, default_value_t = 7)]
    seeding_days: u32,

    /// Number of independent simulations to run (seed increments per run)
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Print the full JSON output instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meadow_sim=info".into()),
        )
        .init();

    let args = Args::parse();

    for run in 0..args.runs {
        let config = SimulationConfig {
            seed: args.seed + u64::from(run),
            seeding_days: args.seeding_days,
            ..Default::default()
        };

        tracing::info!(seed = config.seed, "starting simulation");
        let mut meadow = Meadow::new(config)?;
        let output = meadow.run();

        if args.json {
            println!("{}", output.to_json());
        } else {
            print!("{}", output.summary());
        }
    }

    Ok(())
}
