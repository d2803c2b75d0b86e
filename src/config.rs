use crate::error::{BfResult, BidForgeError};
use clap::Args;

/// Currency units per budget unit unless overridden.
pub const DEFAULT_SCALE: u64 = 10_000;
/// Memory per DP cell: an `i64` click total plus a `u32` choice index.
pub const BYTES_PER_CELL: u64 = 12;
/// Upper bound on DP cells, `(keywords + 1) * (budget_units + 1)`.
/// At `BYTES_PER_CELL` this caps the tables at 240 MB.
pub const DEFAULT_MAX_CELLS: u64 = 20_000_000;
pub const DEFAULT_PARALLEL_THRESHOLD: u64 = 4_096;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Currency units per budget unit. Costs round up, the budget rounds down.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u64,

    /// Refuse to allocate a DP table with more cells than this (12 bytes per cell).
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: u64,

    /// Rows with at least this many budget levels are filled in parallel (0 = always).
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    pub parallel_threshold: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            max_cells: DEFAULT_MAX_CELLS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SolverConfig {
    pub fn with_scale(scale: u64) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> BfResult<()> {
        if self.scale == 0 {
            return Err(BidForgeError::InvalidScale);
        }
        if self.max_cells == 0 {
            return Err(BidForgeError::Config(
                "--max-cells must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Fails with `TableTooLarge` when the DP grid would exceed `max_cells`.
    pub fn check_table_size(&self, keywords: usize, budget_units: u64) -> BfResult<()> {
        let cells = (keywords as u64)
            .saturating_add(1)
            .saturating_mul(budget_units.saturating_add(1));
        if cells > self.max_cells {
            return Err(BidForgeError::TableTooLarge {
                keywords,
                budget_units,
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }

    pub fn use_parallel(&self, levels: usize) -> bool {
        levels as u64 >= self.parallel_threshold
    }
}
