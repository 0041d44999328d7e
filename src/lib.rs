#![warn(missing_docs)]
//! Select an optimal investment portfolio under a budget constraint.
//!
//! Provides two interchangeable solvers for the 0/1 knapsack problem over a
//! catalog of assets: an exhaustive subset enumeration (small catalogs,
//! exact on real prices) and a dynamic program over integer minor currency
//! units (large catalogs, exact up to one minor unit of price precision).
//! Both return the same result shape including a step count, so a caller can
//! swap one for the other and compare the work they performed.
//!
//! This project also contains a CLI and two auxiliary executables (a random
//! catalog generator and a benchmark runner) that wrap the library for
//! catalogs stored as `name,price,profit` csv files.
//!
//! Example
//! ```rust
//! use portfolio_knapsack::datastructures::{Asset, Strategy};
//! use portfolio_knapsack::solver;
//!
//! let catalog = vec![
//!     Asset::new("A", 100.0, 10.0),
//!     Asset::new("B", 200.0, 15.0),
//!     Asset::new("C", 300.0, 20.0),
//! ];
//! let budget = 500.0;
//!
//! let result = solver::solve(&catalog, budget, Strategy::Dynamic);
//! assert_eq!(result.achieved_profit, 90.0);
//! assert_eq!(
//!     result.selection.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
//!     vec!["B", "C"]
//! );
//!
//! // Same optimum from the exhaustive solver, different work performed.
//! let reference = solver::solve(&catalog, budget, Strategy::Exhaustive);
//! assert_eq!(reference.achieved_profit, result.achieved_profit);
//! assert_ne!(reference.step_count, result.step_count);
//! ```

/// Benchmark helpers that run solver strategies across catalog prefix sizes
/// and collect step counts and wall-clock times for external plotting.
pub mod benchmark;

/// A thin csv catalog source with header validation and degenerate-row
/// filtering.
pub mod catalog;

/// Data structures shared by the solvers, the catalog source and the
/// executables.
pub mod datastructures;

/// The optimization engine: exhaustive and dynamic-programming knapsack
/// solvers plus minor-unit price quantization.
pub mod solver;

/// Fixtures shared by unit and integration tests.
pub mod test_utils;
