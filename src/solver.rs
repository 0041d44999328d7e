use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use crate::datastructures::{Asset, Catalog, SelectionResult, Strategy};

/// Minor currency units per currency unit (cents per euro).
pub const MINOR_UNITS_PER_CURRENCY: f64 = 100.0;

// Absorbs binary representation error before truncating, so an exact-cent
// price like 0.57 quantizes to 57 and not 56. Genuinely fractional minor
// units (e.g. 5.005) still truncate.
const QUANTIZE_EPSILON: f64 = 1e-7;

/// Converts a currency amount to whole minor units, truncating fractional
/// minor units. Negative amounts clamp to zero capacity.
pub fn to_minor_units(amount: f64) -> usize {
    (amount * MINOR_UNITS_PER_CURRENCY + QUANTIZE_EPSILON).max(0.0) as usize
}

/// Runs the solver selected by `strategy` on the catalog.
pub fn solve(
    catalog: &Catalog,
    budget: f64,
    strategy: Strategy,
) -> SelectionResult {
    match strategy {
        Strategy::Exhaustive => solve_exhaustive(catalog, budget),
        Strategy::Dynamic => solve_dynamic(catalog, budget),
    }
}

/// Enumerates every subset of the catalog and returns the first one found
/// with maximal total profit among those whose total price fits the budget.
///
/// Feasibility is checked on exact prices, no quantization. The step count is
/// the number of subsets examined, 2^n - 1 for a catalog of n assets. Time
/// grows accordingly, so this is the correctness oracle for small catalogs,
/// not the production path.
pub fn solve_exhaustive(catalog: &Catalog, budget: f64) -> SelectionResult {
    solve_exhaustive_bounded(catalog, budget, None)
}

/// Like [`solve_exhaustive`], but stops enumerating once `step_limit`
/// subsets have been examined and returns the best selection found so far.
///
/// This is the cooperative cancellation hook for callers that cannot afford
/// the full 2^n enumeration.
pub fn solve_exhaustive_bounded(
    catalog: &Catalog,
    budget: f64,
    step_limit: Option<u64>,
) -> SelectionResult {
    let mut best: Vec<&Asset> = Vec::new();
    let mut best_profit = 0.0;
    let mut steps = 0_u64;
    'enumeration: for size in 1..=catalog.len() {
        for subset in catalog.iter().combinations(size) {
            if let Some(limit) = step_limit {
                if steps >= limit {
                    debug!("step limit {limit} reached at subset size {size}");
                    break 'enumeration;
                }
            }
            steps += 1;
            let total_price: f64 =
                subset.iter().map(|asset| asset.price).sum();
            if total_price > budget {
                continue;
            }
            let total_profit: f64 =
                subset.iter().map(|asset| asset.profit()).sum();
            // Strict improvement, so the first subset reaching the maximum
            // wins profit ties.
            if total_profit > best_profit {
                best_profit = total_profit;
                best = subset;
            }
        }
    }
    SelectionResult {
        selection: best.into_iter().cloned().collect(),
        achieved_profit: best_profit,
        step_count: steps,
    }
}

/// Computes an optimal selection by dynamic programming over minor currency
/// units.
///
/// Prices and the budget are quantized with [`to_minor_units`], so the
/// optimum is exact up to one minor unit of price precision: an asset whose
/// true price is fractionally above a whole minor unit can be admitted where
/// the exhaustive solver would reject it. `table[i][w]` holds the best
/// profit using the first `i` assets under capacity `w`; the step count is
/// exactly n·W cells. The chosen subset is reconstructed by a backward walk
/// over the table, one decision per asset.
pub fn solve_dynamic(catalog: &Catalog, budget: f64) -> SelectionResult {
    let n = catalog.len();
    let capacity = to_minor_units(budget);
    let prices: Vec<usize> = catalog
        .iter()
        .map(|asset| to_minor_units(asset.price))
        .collect();
    let profits: Vec<f64> = catalog.iter().map(Asset::profit).collect();

    let mut table = Array2::<f64>::zeros((n + 1, capacity + 1));
    let mut steps = 0_u64;
    for i in 1..=n {
        for w in 1..=capacity {
            steps += 1;
            let skip = table[(i - 1, w)];
            table[(i, w)] = if prices[i - 1] <= w {
                let take = profits[i - 1] + table[(i - 1, w - prices[i - 1])];
                // Skip wins ties, which keeps the reconstruction's
                // row-difference test exact on the copied value.
                if take > skip {
                    take
                } else {
                    skip
                }
            } else {
                skip
            };
        }
    }

    // Walk back one row per asset. A profit differing from the row above at
    // the same capacity means the asset was taken; capacity then shrinks by
    // its quantized price and stays non-negative because a taken asset fits.
    let mut selection = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if table[(i, w)] != table[(i - 1, w)] {
            selection.push(catalog[i - 1].clone());
            w -= prices[i - 1];
        }
    }
    selection.reverse();

    SelectionResult {
        selection,
        achieved_profit: table[(n, capacity)],
        step_count: steps,
    }
}

/// Computes the optimal profit and step count in O(W) memory with a single
/// rolling row, iterated in descending capacity order to preserve the 0/1
/// semantics.
///
/// There is no table to walk back through, so no selection is reconstructed;
/// use [`solve_dynamic`] when the chosen subset is needed.
pub fn dynamic_profit_rolling(catalog: &Catalog, budget: f64) -> (f64, u64) {
    let capacity = to_minor_units(budget);
    let mut row = vec![0.0_f64; capacity + 1];
    let mut steps = 0_u64;
    for asset in catalog {
        let price = to_minor_units(asset.price);
        let profit = asset.profit();
        for w in (1..=capacity).rev() {
            steps += 1;
            if price <= w {
                let take = profit + row[w - price];
                if take > row[w] {
                    row[w] = take;
                }
            }
        }
    }
    (row[capacity], steps)
}

#[cfg(test)]
mod tests;
