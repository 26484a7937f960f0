use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::Order;
use crate::oven::constants::{
    CSV_COL_DRINK, CSV_COL_GAMER_TAG, CSV_COL_TOPPING, DEFAULT_DRINK, DEFAULT_DRINK_COUNT,
    DEFAULT_SLICE_COUNT, DEFAULT_TOPPING,
};
use crate::state::OrderBook;

/// Outcome of merging a registration export into the order book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    /// Rows without a gamer tag.
    pub skipped: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

fn non_empty<'a>(row: &'a HashMap<String, String>, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Parse a start.gg registration export into fresh orders for `slug`.
///
/// Returns the orders and the number of rows skipped for lacking a gamer tag.
pub fn parse_registrations<R: Read>(reader: R, slug: &str) -> Result<(Vec<Order>, usize)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut orders = Vec::new();
    let mut skipped = 0;

    for result in reader.records() {
        let record = result?;
        let row: HashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|v| v.trim().to_string()))
            .collect();

        // Skip completely blank lines
        if row.values().all(|v| v.is_empty()) {
            continue;
        }

        let Some(player) = non_empty(&row, CSV_COL_GAMER_TAG) else {
            skipped += 1;
            continue;
        };

        orders.push(Order::new(
            slug,
            player,
            non_empty(&row, CSV_COL_TOPPING).unwrap_or(DEFAULT_TOPPING),
            non_empty(&row, CSV_COL_DRINK).unwrap_or(DEFAULT_DRINK),
            DEFAULT_SLICE_COUNT,
            DEFAULT_DRINK_COUNT,
        ));
    }

    debug!(orders = orders.len(), skipped, "parsed registrations");
    Ok((orders, skipped))
}

/// Import a start.gg CSV export into `book` under event `slug`.
///
/// Existing players get their topping and drink refreshed but keep their
/// paid and collected flags.
pub fn import_orders_csv<P: AsRef<Path>>(
    book: &mut OrderBook,
    path: P,
    slug: &str,
) -> Result<ImportSummary> {
    let file = File::open(path.as_ref())?;
    let (orders, skipped) = parse_registrations(file, slug)?;

    let mut summary = ImportSummary {
        skipped,
        ..Default::default()
    };
    for order in orders {
        if book.upsert_import(order)? {
            summary.inserted += 1;
        } else {
            summary.updated += 1;
        }
    }

    info!(
        slug,
        inserted = summary.inserted,
        updated = summary.updated,
        skipped = summary.skipped,
        "imported registrations"
    );
    Ok(summary)
}
