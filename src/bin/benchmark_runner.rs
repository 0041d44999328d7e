use anyhow::Result;
use clap::Parser;
use portfolio_knapsack::{benchmark, catalog, datastructures::*};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the json benchmark config
    #[arg(short, long)]
    pub config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init();
    let config_str = fs::read_to_string(args.config)?;
    let BenchmarkConfig {
        dataset,
        budget,
        strategies,
        sizes,
        out,
    } = serde_json::from_str(&config_str)?;

    let catalog = catalog::read_catalog(&dataset)?;
    let records =
        benchmark::run_benchmark(&catalog, budget, &strategies, &sizes);
    benchmark::write_records(&records, &out)?;
    Ok(())
}
