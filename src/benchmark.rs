use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::datastructures::{Catalog, Strategy};
use crate::solver;

/// One solver measurement: the strategy, the catalog prefix size it ran on,
/// and the work it reported. `seconds` is sampled around the call and does
/// not influence the solver output.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    /// Strategy that was measured.
    pub strategy: Strategy,
    /// Number of assets the solver saw.
    pub num_assets: usize,
    /// Steps the solver reported.
    pub step_count: u64,
    /// Profit the solver achieved.
    pub achieved_profit: f64,
    /// Wall-clock duration of the call.
    pub seconds: f64,
}

/// Runs every strategy on every catalog prefix size and collects one record
/// per combination. Sizes beyond the catalog length are clamped to it.
pub fn run_benchmark(
    catalog: &Catalog,
    budget: f64,
    strategies: &[Strategy],
    sizes: &[usize],
) -> Vec<BenchmarkRecord> {
    strategies
        .iter()
        .cartesian_product(sizes.iter())
        .map(|(&strategy, &size)| {
            let prefix: Catalog =
                catalog.iter().take(size).cloned().collect();
            let start = Instant::now();
            let result = solver::solve(&prefix, budget, strategy);
            let seconds = start.elapsed().as_secs_f64();
            info!(
                "{strategy} on {} assets: {} steps in {seconds:.3}s",
                prefix.len(),
                result.step_count
            );
            BenchmarkRecord {
                strategy,
                num_assets: prefix.len(),
                step_count: result.step_count,
                achieved_profit: result.achieved_profit,
                seconds,
            }
        })
        .collect()
}

/// Writes benchmark records as csv for an external plotting layer.
pub fn write_records(
    records: &[BenchmarkRecord],
    path: &Path,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| {
        format!("cannot write benchmark records to {}", path.display())
    })?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
