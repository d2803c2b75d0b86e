pub mod api;
pub mod config;
pub mod error;
pub mod intent;
pub mod solver;
pub mod table;

pub use config::{SolverConfig, DEFAULT_SCALE};
pub use error::{BfResult, BidForgeError};
pub use solver::{solve, Solution};
pub use table::OptionRow;
