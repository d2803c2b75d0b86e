use crate::reports;
use bidforge::api;
use bidforge::config::SolverConfig;
use bidforge::error::BfResult;
use bidforge::intent::Intent;
use bidforge::table;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: SolverConfig,

    /// CSV with keyword, rank, cost and clicks columns.
    #[arg(short, long)]
    pub table: PathBuf,

    /// Total budget in currency units. Overrides the intent file.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// JSON file with `budget` and `forced_keywords`.
    #[arg(short, long)]
    pub intent: Option<PathBuf>,

    /// Pin a keyword to its rank-1 row at zero cost (repeatable).
    #[arg(short, long = "force")]
    pub force: Vec<String>,

    /// Print the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: OptimizeArgs) -> BfResult<()> {
    let intent = match &args.intent {
        Some(path) => {
            info!("🧭 Loading intent: {}", path.display());
            Intent::load_from_file(path)?
        }
        None => Intent::default(),
    };

    let budget = intent.resolve_budget(args.budget)?;
    let forced = intent.merged_keywords(&args.force);

    let rows = table::load_table(&args.table)?;
    let report = api::optimize(&rows, budget, &forced, &args.config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_missing_keywords(&report.missing_keywords);
        reports::print_selection(&report.solution.selected);
        reports::print_totals(&report.solution);
    }
    Ok(())
}
