use super::{
    dynamic_profit_rolling, solve, solve_dynamic, solve_exhaustive,
    solve_exhaustive_bounded, to_minor_units,
};
use crate::datastructures::{SelectionResult, Strategy};
use crate::test_utils::*;

fn selected_names(result: &SelectionResult) -> Vec<&str> {
    result
        .selection
        .iter()
        .map(|asset| asset.name.as_str())
        .collect()
}

#[test]
fn test_reference_catalog_both_strategies() {
    let catalog = reference_catalog();
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let result = solve(&catalog, 500.0, strategy);
        assert_eq!(selected_names(&result), vec!["B", "C"], "{strategy}");
        assert!((result.achieved_profit - 90.0).abs() < 1e-9, "{strategy}");
        assert!((result.total_price() - 500.0).abs() < 1e-9, "{strategy}");
    }
}

#[test]
fn test_empty_catalog() {
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let result = solve(&vec![], 500.0, strategy);
        assert_eq!(result, SelectionResult::empty(0));
    }
}

#[test]
fn test_zero_budget() {
    let catalog = reference_catalog();
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let result = solve(&catalog, 0.0, strategy);
        assert!(result.selection.is_empty(), "{strategy}");
        assert_eq!(result.achieved_profit, 0.0, "{strategy}");
    }
}

#[test]
fn test_negative_budget_is_zero_capacity() {
    let catalog = reference_catalog();
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let result = solve(&catalog, -100.0, strategy);
        assert!(result.selection.is_empty(), "{strategy}");
        assert_eq!(result.achieved_profit, 0.0, "{strategy}");
    }
}

#[test]
fn test_single_asset_does_not_fit() {
    let catalog = vec![asset("A", 100.0, 10.0)];
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let result = solve(&catalog, 50.0, strategy);
        assert!(result.selection.is_empty(), "{strategy}");
        assert_eq!(result.achieved_profit, 0.0, "{strategy}");
    }
}

#[test]
fn test_exhaustive_step_count_is_all_nonempty_subsets() {
    let catalog = reference_catalog();
    let result = solve_exhaustive(&catalog, 500.0);
    assert_eq!(result.step_count, 7);
}

#[test]
fn test_dynamic_step_count_is_cells_computed() {
    let catalog = reference_catalog();
    // W = 500 minor units for a budget of 5 currency units.
    let result = solve_dynamic(&catalog, 5.0);
    assert_eq!(result.step_count, 3 * 500);
}

#[test]
fn test_bounded_enumeration_stops_at_limit() {
    let catalog = reference_catalog();
    let result = solve_exhaustive_bounded(&catalog, 500.0, Some(3));
    assert_eq!(result.step_count, 3);
    // The three singletons were examined; C alone is the best of them.
    assert_eq!(selected_names(&result), vec!["C"]);
}

#[test]
fn test_bounded_enumeration_with_zero_limit() {
    let catalog = reference_catalog();
    let result = solve_exhaustive_bounded(&catalog, 500.0, Some(0));
    assert_eq!(result, SelectionResult::empty(0));
}

#[test]
fn test_minor_unit_conversion() {
    assert_eq!(to_minor_units(500.0), 50_000);
    assert_eq!(to_minor_units(0.57), 57);
    assert_eq!(to_minor_units(0.999), 99);
    assert_eq!(to_minor_units(5.005), 500);
    assert_eq!(to_minor_units(0.0), 0);
    assert_eq!(to_minor_units(-3.0), 0);
}

#[test]
fn test_quantization_admits_fractional_overrun() {
    // 100.005 truncates to 10000 minor units, so the dynamic solver accepts
    // it under a budget of 100.00 while the exhaustive solver rejects it.
    // This is the documented one-minor-unit approximation.
    let catalog = vec![asset("A", 100.005, 10.0)];
    let exhaustive = solve_exhaustive(&catalog, 100.0);
    assert!(exhaustive.selection.is_empty());
    let dynamic = solve_dynamic(&catalog, 100.0);
    assert_eq!(selected_names(&dynamic), vec!["A"]);
}

#[test]
fn test_dynamic_skips_with_leftover_capacity() {
    // B fills the budget on its own; A is skipped even though capacity
    // remains after taking B during the backward walk.
    let catalog = vec![asset("A", 90.0, 1.0), asset("B", 100.0, 50.0)];
    let result = solve_dynamic(&catalog, 100.0);
    assert_eq!(selected_names(&result), vec!["B"]);
    assert!((result.achieved_profit - 50.0).abs() < 1e-9);
}

#[test]
fn test_reconstruction_achieves_table_optimum() {
    let catalog = vec![
        asset("A", 20.5, 6.0),
        asset("B", 15.25, 38.0),
        asset("C", 40.0, 12.0),
        asset("D", 10.1, 14.0),
        asset("E", 35.75, 18.0),
    ];
    let result = solve_dynamic(&catalog, 60.0);
    let selection_profit: f64 =
        result.selection.iter().map(|asset| asset.profit()).sum();
    assert!((selection_profit - result.achieved_profit).abs() < 1e-9);
    assert!(result.total_price() <= 60.0 + 0.01);
}

#[test]
fn test_rolling_row_matches_full_table() {
    let catalog = vec![
        asset("A", 20.5, 6.0),
        asset("B", 15.25, 38.0),
        asset("C", 40.0, 12.0),
        asset("D", 10.1, 14.0),
        asset("E", 35.75, 18.0),
    ];
    let full = solve_dynamic(&catalog, 60.0);
    let (profit, steps) = dynamic_profit_rolling(&catalog, 60.0);
    assert!((profit - full.achieved_profit).abs() < 1e-9);
    assert_eq!(steps, full.step_count);
}

#[test]
fn test_exhaustive_prefers_first_found_on_ties() {
    // A and B tie on price and profit; strict improvement keeps A.
    let catalog = vec![asset("A", 100.0, 10.0), asset("B", 100.0, 10.0)];
    let result = solve_exhaustive(&catalog, 100.0);
    assert_eq!(selected_names(&result), vec!["A"]);
}
