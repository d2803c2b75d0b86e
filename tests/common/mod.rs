#![allow(dead_code)]

use bidforge::table::OptionRow;

/// Builds a table from `(keyword, rank, cost, clicks)` tuples; row ids follow order.
pub fn table(rows: &[(&str, u32, f64, f64)]) -> Vec<OptionRow> {
    rows.iter()
        .enumerate()
        .map(|(id, &(kw, rank, cost, clicks))| OptionRow::new(id, kw, rank, cost, clicks))
        .collect()
}

pub fn selected_ids(rows: &[OptionRow]) -> Vec<usize> {
    rows.iter().map(|r| r.row_id).collect()
}
