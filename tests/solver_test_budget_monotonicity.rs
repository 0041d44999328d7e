use portfolio_knapsack::datastructures::Strategy;
use portfolio_knapsack::solver;
use portfolio_knapsack::test_utils::*;

#[test]
fn test_profit_never_decreases_with_budget() {
    let catalog = vec![
        asset("A", 20.5, 6.0),
        asset("B", 15.25, 38.0),
        asset("C", 40.0, 12.0),
        asset("D", 10.1, 14.0),
        asset("E", 35.75, 18.0),
        asset("F", 60.0, 9.0),
    ];
    for strategy in [Strategy::Exhaustive, Strategy::Dynamic] {
        let mut previous = 0.0;
        for budget in (0..=150).step_by(5) {
            let result = solver::solve(&catalog, budget as f64, strategy);
            assert!(
                result.achieved_profit >= previous,
                "{strategy}: profit dropped from {previous} at budget {budget}"
            );
            previous = result.achieved_profit;
        }
    }
}
