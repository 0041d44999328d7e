use std::collections::HashSet;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::datastructures::{Asset, Catalog};

static REQUIRED_COLUMNS: Lazy<Vec<&str>> =
    Lazy::new(|| vec!["name", "price", "profit"]);

#[derive(Debug, Deserialize)]
struct AssetRecord {
    name: String,
    price: f64,
    profit: f64,
}

/// Reads a catalog from a csv file with columns `name,price,profit`.
///
/// Lines starting with `#` are skipped. Rows with non-positive price or
/// profit are filtered out with a warning, as are rows repeating an earlier
/// name. A missing file, a wrong header or a malformed row is an error; a
/// file whose rows are all filtered out yields an empty catalog.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| {
            format!("no catalog available at {}", path.display())
        })?;
    validate_header(reader.headers()?)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<AssetRecord>, _>>()
        .with_context(|| {
            format!("malformed row in catalog {}", path.display())
        })?;
    Ok(filter_records(records))
}

fn validate_header(headers: &csv::StringRecord) -> Result<()> {
    let present: HashSet<&str> = headers.iter().collect();
    ensure!(
        REQUIRED_COLUMNS.iter().all(|column| present.contains(column)),
        "catalog csv must contain the columns {:?}",
        *REQUIRED_COLUMNS
    );
    Ok(())
}

fn filter_records(records: Vec<AssetRecord>) -> Catalog {
    let mut seen = HashSet::new();
    let mut catalog = Vec::with_capacity(records.len());
    for record in records {
        if record.price <= 0.0 || record.profit <= 0.0 {
            warn!(
                "dropping degenerate asset {} (price {}, profit {})",
                record.name, record.price, record.profit
            );
            continue;
        }
        if !seen.insert(record.name.clone()) {
            warn!("dropping duplicate asset {}", record.name);
            continue;
        }
        catalog.push(Asset {
            name: record.name,
            price: record.price,
            profit_rate: record.profit,
        });
    }
    catalog
}

#[cfg(test)]
mod tests;
