use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use portfolio_knapsack::datastructures::Asset;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
struct CatalogGeneratorConfig {
    num_assets: usize,
    price_mean: f64,
    price_std: f64,
    max_profit_rate: f64,
    seed: u64,
    out_path: PathBuf,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the json config
    #[arg(short, long)]
    pub config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config: CatalogGeneratorConfig =
        serde_json::from_str(&fs::read_to_string(args.config)?)?;
    let out_path = config.out_path.clone();
    let assets = generate_assets(config)?;
    let mut writer = csv::Writer::from_path(out_path)?;
    writer.write_record(["name", "price", "profit"])?;
    for asset in assets {
        writer.write_record([
            asset.name,
            format!("{:.2}", asset.price),
            format!("{:.2}", asset.profit_rate),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn generate_assets(config: CatalogGeneratorConfig) -> Result<Vec<Asset>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let price_distrib =
        Normal::new(config.price_mean, config.price_std.abs())?;
    Ok((0..config.num_assets)
        .map(|i| {
            // Keep generated prices in whole cents and strictly positive so
            // the catalog source does not filter them back out.
            let price = (price_distrib.sample(&mut rng).max(0.01) * 100.0)
                .round()
                / 100.0;
            let profit_rate =
                rng.gen_range(1..=(config.max_profit_rate * 100.0) as u64)
                    as f64
                    / 100.0;
            Asset::new(&format!("Share-{i}"), price, profit_rate)
        })
        .collect())
}
