use crate::config::SolverConfig;
use crate::error::BfResult;
use crate::solver::{self, Solution};
use crate::table::{self, OptionRow};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    pub solution: Solution,
    /// Keywords requested for pinning that matched no row.
    pub missing_keywords: Vec<String>,
    /// Keywords whose selection is a forced rank-1 row, by keyword.
    pub forced_keywords: Vec<String>,
}

/// Service: pin the requested keywords, then solve.
pub fn optimize(
    rows: &[OptionRow],
    budget: f64,
    forced_keywords: &[String],
    config: &SolverConfig,
) -> BfResult<OptimizationReport> {
    let (pinned_rows, missing_keywords) = table::pin_keywords(rows, forced_keywords);
    info!(
        "⚙️  Optimizing {} rows, budget {}, scale {}",
        pinned_rows.len(),
        budget,
        config.scale
    );
    let solution = solver::solve(&pinned_rows, budget, config)?;
    let forced_keywords = solution
        .selected
        .iter()
        .filter(|r| r.is_forced_marker())
        .map(|r| r.keyword.clone())
        .collect();

    Ok(OptimizationReport {
        solution,
        missing_keywords,
        forced_keywords,
    })
}

/// Service: load a CSV table and optimize it.
pub fn optimize_file<P: AsRef<Path>>(
    path: P,
    budget: f64,
    forced_keywords: &[String],
    config: &SolverConfig,
) -> BfResult<OptimizationReport> {
    let rows = table::load_table(path)?;
    optimize(&rows, budget, forced_keywords, config)
}
