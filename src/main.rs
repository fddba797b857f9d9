use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use lotplan::generator::{SampleRange, Scenario, ScenarioConfig};
use lotplan::makespan::MakespanEstimate;
use lotplan::models::ProductCatalog;
use lotplan::report::Report;

/// Estimates the makespan of a randomly generated production batch.
///
/// Generates demand and operating parameters from the given ranges with a
/// fixed seed, computes the batch makespan in whole operating days, and
/// prints a report. Rerun with the same flags to reproduce a scenario.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Product names, comma separated (at least three).
    #[arg(long, value_delimiter = ',', default_value = "A,B,C")]
    products: Vec<String>,

    /// Lower bound for demand quantities (units).
    #[arg(long, default_value_t = 700)]
    min_quantity: u64,

    /// Upper bound for demand quantities (units).
    #[arg(long, default_value_t = 2500)]
    max_quantity: u64,

    /// Lower bound for per-unit processing time (hours).
    #[arg(long, default_value_t = 0.04)]
    min_unit_time: f64,

    /// Upper bound for per-unit processing time (hours).
    #[arg(long, default_value_t = 0.12)]
    max_unit_time: f64,

    /// Lower bound for per-product daily capacity (units/day).
    #[arg(long, default_value_t = 1000)]
    min_capacity: u64,

    /// Upper bound for per-product daily capacity (units/day).
    #[arg(long, default_value_t = 4000)]
    max_capacity: u64,

    /// Lower bound for plant daily capacity (hours/day).
    #[arg(long, default_value_t = 14.0)]
    min_plant_hours: f64,

    /// Upper bound for plant daily capacity (hours/day).
    #[arg(long, default_value_t = 20.0)]
    max_plant_hours: f64,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = ScenarioConfig::new(
        ProductCatalog::new(args.products),
        SampleRange::new(args.min_quantity, args.max_quantity)?,
        SampleRange::new(args.min_unit_time, args.max_unit_time)?,
        SampleRange::new(args.min_capacity, args.max_capacity)?,
        SampleRange::new(args.min_plant_hours, args.max_plant_hours)?,
        args.seed,
    )
    .context("invalid scenario configuration")?;

    info!(
        seed = config.seed(),
        products = config.catalog().len(),
        "generating scenario"
    );

    let mut rng = StdRng::seed_from_u64(config.seed());
    let scenario = Scenario::generate(&config, &mut rng);

    let estimate = MakespanEstimate::calculate(&scenario.demand, &scenario.parameters)
        .map_err(|errors| {
            anyhow!(
                "invalid scenario: {}",
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            )
        })?;

    print!("{}", Report::new(&scenario, &estimate));
    Ok(())
}
