use crate::datastructures::{Asset, Catalog};

/// Shorthand for building an asset in tests.
pub fn asset(name: &str, price: f64, profit_rate: f64) -> Asset {
    Asset::new(name, price, profit_rate)
}

/// The worked example: budget 500.00 selects {B, C} for a profit of 90.00.
pub fn reference_catalog() -> Catalog {
    vec![
        asset("A", 100.0, 10.0),
        asset("B", 200.0, 15.0),
        asset("C", 300.0, 20.0),
    ]
}
