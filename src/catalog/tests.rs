use super::{filter_records, AssetRecord};

fn record(name: &str, price: f64, profit: f64) -> AssetRecord {
    AssetRecord {
        name: name.to_string(),
        price,
        profit,
    }
}

#[test]
fn test_filter_drops_non_positive_rows() {
    let catalog = filter_records(vec![
        record("A", 100.0, 10.0),
        record("B", 0.0, 10.0),
        record("C", -20.0, 10.0),
        record("D", 50.0, 0.0),
        record("E", 50.0, -1.5),
        record("F", 200.0, 15.0),
    ]);
    let names: Vec<&str> =
        catalog.iter().map(|asset| asset.name.as_str()).collect();
    assert_eq!(names, vec!["A", "F"]);
}

#[test]
fn test_filter_keeps_first_duplicate() {
    let catalog = filter_records(vec![
        record("A", 100.0, 10.0),
        record("A", 999.0, 99.0),
        record("B", 200.0, 15.0),
    ]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].price, 100.0);
}

#[test]
fn test_filter_preserves_order() {
    let catalog = filter_records(vec![
        record("C", 300.0, 20.0),
        record("A", 100.0, 10.0),
        record("B", 200.0, 15.0),
    ]);
    let names: Vec<&str> =
        catalog.iter().map(|asset| asset.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_empty_input_yields_empty_catalog() {
    assert!(filter_records(vec![]).is_empty());
}
