pub mod dp;
pub mod normalize;
pub mod quantize;

use self::dp::DpTable;
use self::normalize::normalize;
use self::quantize::quantize;
use crate::config::SolverConfig;
use crate::error::{BfResult, BidForgeError};
use crate::table::OptionRow;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Forced rows (by keyword) followed by solved rows (by first appearance).
    pub selected: Vec<OptionRow>,
    pub total_cost: f64,
    pub total_clicks: f64,
    pub budget: f64,
    pub budget_units: u64,
    /// Spend level the solved rows occupy, absent when every keyword was forced.
    pub best_level: Option<u64>,
}

impl Solution {
    pub fn forced_count(&self) -> usize {
        self.selected
            .iter()
            .filter(|r| r.is_forced_marker())
            .count()
    }
}

/// Picks exactly one option per keyword, maximising clicks within `budget`.
///
/// Forced keywords (rank-1 row with zero cost and clicks) are reserved first;
/// the rest are solved as a multiple-choice knapsack over budget units of
/// `config.scale`. Totals are summed from the real costs and clicks.
pub fn solve(rows: &[OptionRow], budget: f64, config: &SolverConfig) -> BfResult<Solution> {
    config.validate()?;

    let normalized = normalize(rows)?;
    let forced_ids = normalized.forced_row_ids();
    let quantized = quantize(
        &normalized.groups,
        budget,
        normalized.forced_cost(),
        config.scale,
    )?;

    if quantized.sets.is_empty() {
        info!("All keywords are forced; nothing to optimize.");
        return aggregate(rows, &forced_ids, &[], budget, quantized.budget_units, None);
    }

    config.check_table_size(quantized.sets.len(), quantized.budget_units)?;

    let table = DpTable::fill(&quantized.sets, quantized.budget_units, config);
    let level = table.best_level()?;
    let picked = table.backtrack(&quantized.sets, level)?;

    info!(
        "🏆 Best level {} of {} units, {} keywords solved",
        level,
        quantized.budget_units,
        picked.len()
    );

    aggregate(
        rows,
        &forced_ids,
        &picked,
        budget,
        quantized.budget_units,
        Some(level as u64),
    )
}

fn aggregate(
    rows: &[OptionRow],
    forced: &[usize],
    picked: &[usize],
    budget: f64,
    budget_units: u64,
    best_level: Option<u64>,
) -> BfResult<Solution> {
    let by_id: HashMap<usize, &OptionRow> = rows.iter().map(|r| (r.row_id, r)).collect();

    let selected = forced
        .iter()
        .chain(picked)
        .map(|id| {
            by_id
                .get(id)
                .map(|r| (*r).clone())
                .ok_or(BidForgeError::NoFeasibleSolution)
        })
        .collect::<BfResult<Vec<OptionRow>>>()?;

    let total_cost: f64 = selected.iter().map(|r| r.cost).sum();
    let total_clicks: f64 = selected.iter().map(|r| r.clicks).sum();
    info!(
        "Selected {} rows: cost {}, clicks {}",
        selected.len(),
        total_cost,
        total_clicks
    );

    Ok(Solution {
        selected,
        total_cost,
        total_clicks,
        budget,
        budget_units,
        best_level,
    })
}
