use thiserror::Error;

#[derive(Error, Debug)]
pub enum BidForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid row {row_id} (keyword '{keyword}'): {reason}")]
    InvalidOption {
        row_id: usize,
        keyword: String,
        reason: String,
    },

    #[error("Invalid budget: {0} (must be a finite amount)")]
    InvalidBudget(f64),

    #[error("Invalid scale: budget unit scale must be a positive integer")]
    InvalidScale,

    /// Also raised for a negative budget, which cannot cover even zero-cost pins.
    #[error("Insufficient budget: forced selections cost {forced_cost}, budget is {budget}")]
    InsufficientBudgetForForced { budget: f64, forced_cost: f64 },

    #[error("No option for keyword '{0}' fits within the remaining budget")]
    NoFeasibleOptionForKeyword(String),

    /// Every final DP cell was infeasible: each keyword is affordable on its
    /// own, but no combination fits the remaining budget.
    #[error("No combination of options fits within the remaining budget")]
    NoFeasibleSolution,

    #[error(
        "DP table too large: {keywords} keywords x {budget_units} budget units = {cells} cells (limit {limit}); raise --scale or --max-cells"
    )]
    TableTooLarge {
        keywords: usize,
        budget_units: u64,
        cells: u64,
        limit: u64,
    },
}

pub type BfResult<T> = Result<T, BidForgeError>;
