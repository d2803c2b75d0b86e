use crate::reports;
use bidforge::config::SolverConfig;
use bidforge::error::BfResult;
use bidforge::solver::normalize::normalize;
use bidforge::solver::quantize::cost_units;
use bidforge::table;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: SolverConfig,

    #[arg(short, long)]
    pub table: PathBuf,
}

pub struct KeywordSummary {
    pub keyword: String,
    pub options: usize,
    pub min_cost: f64,
    pub max_cost: f64,
    pub min_units: u64,
    pub max_clicks: f64,
    pub forced: bool,
}

pub fn run(args: InspectArgs) -> BfResult<()> {
    args.config.validate()?;
    let rows = table::load_table(&args.table)?;
    let normalized = normalize(&rows)?;

    let mut summaries: Vec<KeywordSummary> = normalized
        .forced
        .iter()
        .map(|r| KeywordSummary {
            keyword: r.keyword.clone(),
            options: rows.iter().filter(|o| o.keyword == r.keyword).count(),
            min_cost: r.cost,
            max_cost: r.cost,
            min_units: 0,
            max_clicks: r.clicks,
            forced: true,
        })
        .collect();

    for group in &normalized.groups {
        let costs = group.options.iter().map(|r| r.cost);
        let min_cost = costs.clone().fold(f64::INFINITY, f64::min);
        let max_cost = costs.fold(0.0, f64::max);
        let max_clicks = group.options.iter().map(|r| r.clicks).fold(0.0, f64::max);

        summaries.push(KeywordSummary {
            keyword: group.keyword.to_string(),
            options: group.options.len(),
            min_cost,
            max_cost,
            min_units: cost_units(min_cost, args.config.scale),
            max_clicks,
            forced: false,
        });
    }

    reports::print_keyword_summary(&summaries, args.config.scale);
    Ok(())
}
