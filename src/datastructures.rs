use core::fmt;
use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Budget used when the caller does not provide one, in currency units.
pub const DEFAULT_BUDGET: f64 = 500.0;

/// An investment asset: a unique display name, a price in currency units and
/// a percent return over the fixed two-year horizon.
///
/// Assets with non-positive price or profit rate are degenerate and filtered
/// out by the catalog source before they reach the solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Price in currency units, positive for any asset in a catalog.
    pub price: f64,
    /// Percent return over two years, positive for any asset in a catalog.
    pub profit_rate: f64,
}

impl Asset {
    /// Creates an asset from its display name, price and profit rate.
    pub fn new(name: &str, price: f64, profit_rate: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
            profit_rate,
        }
    }

    /// Absolute two-year profit in currency units.
    pub fn profit(&self) -> f64 {
        self.price * self.profit_rate / 100.0
    }
}

/// An ordered sequence of assets. Order only matters for the dynamic solver's
/// indexing and reconstruction tie-breaking, not for the optimum itself.
pub type Catalog = Vec<Asset>;

/// The solver selector. Both strategies return a [`SelectionResult`], so
/// callers can substitute one for the other transparently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Enumerate every subset; O(2^n), exact on real prices.
    Exhaustive,
    /// Tabulate over minor currency units; O(n·W), exact up to one minor
    /// unit of price precision.
    Dynamic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Outcome of one solver invocation: the chosen subset, its total profit and
/// the number of elementary evaluation steps performed. Constructed fresh per
/// call and immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Chosen assets in catalog order, each at most once.
    pub selection: Vec<Asset>,
    /// Total two-year profit of the selection in currency units.
    pub achieved_profit: f64,
    /// Subsets examined (exhaustive) or table cells computed (dynamic).
    pub step_count: u64,
}

impl SelectionResult {
    /// A result for the infeasible or empty case, with the given step count.
    pub fn empty(step_count: u64) -> Self {
        Self {
            selection: Vec::new(),
            achieved_profit: 0.0,
            step_count,
        }
    }

    /// Total price of the selection in currency units.
    pub fn total_price(&self) -> f64 {
        self.selection.iter().map(|asset| asset.price).sum()
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} assets, cost {:.2}, profit {:.2}, {} steps",
            self.selection.len(),
            self.total_price(),
            self.achieved_profit,
            self.step_count
        )?;
        for asset in &self.selection {
            writeln!(
                f,
                "{}: {:.2} ({:.2}%)",
                asset.name, asset.price, asset.profit_rate
            )?;
        }
        Ok(())
    }
}

/// Command line arguments of the main executable.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the catalog csv file (columns: name, price, profit)
    #[arg(short, long)]
    pub dataset: PathBuf,
    /// Maximum total price of the selection [default: 500.00]
    #[arg(short, long)]
    pub budget: Option<f64>,
    /// Solver strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Dynamic)]
    pub strategy: Strategy,
    /// Stop the exhaustive solver after this many subsets
    #[arg(long)]
    pub step_limit: Option<u64>,
    /// Write the selection as json to this path
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Log verbosity (-v / -q).
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity,
}

/// Validated runtime configuration of the main executable.
pub struct Config {
    /// Path to the catalog csv file.
    pub dataset: PathBuf,
    /// Maximum total price of the selection.
    pub budget: f64,
    /// Solver strategy.
    pub strategy: Strategy,
    /// Optional subset budget for the exhaustive solver.
    pub step_limit: Option<u64>,
    /// Optional json output path for the selection.
    pub out: Option<PathBuf>,
}

impl Config {
    /// Builds a configuration from parsed arguments, rejecting budgets that
    /// are not finite numbers.
    pub fn from_cli(args: &Args) -> Result<Self> {
        let budget = args.budget.unwrap_or(DEFAULT_BUDGET);
        ensure!(budget.is_finite(), "budget must be a finite number");
        Ok(Self {
            dataset: args.dataset.clone(),
            budget,
            strategy: args.strategy,
            step_limit: args.step_limit,
            out: args.out.clone(),
        })
    }
}

/// Configuration of the benchmark runner executable.
#[derive(Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Path to the catalog csv file.
    pub dataset: PathBuf,
    /// Budget applied at every prefix size.
    pub budget: f64,
    /// Strategies to measure.
    pub strategies: Vec<Strategy>,
    /// Catalog prefix sizes to measure at.
    pub sizes: Vec<usize>,
    /// Path of the records csv to write.
    pub out: PathBuf,
}
