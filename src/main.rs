use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::fs;

use portfolio_knapsack::catalog;
use portfolio_knapsack::datastructures::*;
use portfolio_knapsack::solver;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let Ok(config) = Config::from_cli(&args) else {
        std::process::exit(exitcode::CONFIG);
    };
    let catalog = match catalog::read_catalog(&config.dataset) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(exitcode::NOINPUT);
        }
    };
    if catalog.is_empty() {
        warn!("catalog is empty after filtering, nothing to select");
    }
    info!(
        "{} assets, budget {:.2}, {} strategy",
        catalog.len(),
        config.budget,
        config.strategy
    );
    let result = match (config.strategy, config.step_limit) {
        (Strategy::Exhaustive, limit @ Some(_)) => {
            solver::solve_exhaustive_bounded(&catalog, config.budget, limit)
        }
        (strategy, _) => solver::solve(&catalog, config.budget, strategy),
    };
    info!("Selection:\n{result}");
    if let Some(out) = &config.out {
        serde_json::to_writer_pretty(fs::File::create(out)?, &result)?;
        info!("selection written to {}", out.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
