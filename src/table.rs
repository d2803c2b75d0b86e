use crate::error::BfResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// One candidate for a keyword: a bid rank tier with its cost and expected clicks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionRow {
    pub row_id: usize,
    pub keyword: String,
    pub rank: u32,
    pub cost: f64,
    pub clicks: f64,
}

impl OptionRow {
    pub fn new(row_id: usize, keyword: &str, rank: u32, cost: f64, clicks: f64) -> Self {
        Self {
            row_id,
            keyword: keyword.to_string(),
            rank,
            cost,
            clicks,
        }
    }

    /// Rank 1 with zero cost and zero clicks marks a pinned keyword.
    pub fn is_forced_marker(&self) -> bool {
        self.rank == 1 && self.cost == 0.0 && self.clicks == 0.0
    }
}

// Column names as exported by the upstream spreadsheet, English or Korean.
#[derive(Deserialize)]
struct CsvRecord {
    #[serde(alias = "키워드")]
    keyword: String,
    #[serde(alias = "순위")]
    rank: u32,
    #[serde(alias = "비용")]
    cost: f64,
    #[serde(alias = "클릭", alias = "benefit")]
    clicks: f64,
}

pub fn load_table<P: AsRef<Path>>(path: P) -> BfResult<Vec<OptionRow>> {
    let path = path.as_ref();
    info!("📂 Loading option table: {}", path.display());
    let file = File::open(path)?;
    load_table_from_reader(file)
}

/// Reads a headered CSV. `row_id` is the 0-based index of the data row.
pub fn load_table_from_reader<R: Read>(reader: R) -> BfResult<Vec<OptionRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_id, result) in rdr.deserialize::<CsvRecord>().enumerate() {
        let rec = result?;
        rows.push(OptionRow {
            row_id,
            keyword: rec.keyword,
            rank: rec.rank,
            cost: rec.cost,
            clicks: rec.clicks,
        });
    }

    debug!("   -> Loaded {} option rows", rows.len());
    Ok(rows)
}

/// Zeroes the rank-1 rows of each named keyword so the solver treats them as forced.
/// Returns the rewritten table and the names that matched no row.
pub fn pin_keywords(rows: &[OptionRow], keywords: &[String]) -> (Vec<OptionRow>, Vec<String>) {
    let present: HashSet<&str> = rows.iter().map(|r| r.keyword.as_str()).collect();

    let mut pinned: HashSet<&str> = HashSet::new();
    let mut missing = Vec::new();
    for kw in keywords {
        if present.contains(kw.as_str()) {
            pinned.insert(kw.as_str());
        } else if !missing.contains(kw) {
            warn!("⚠️  Keyword '{}' is not in the table; cannot pin it.", kw);
            missing.push(kw.clone());
        }
    }

    let out = rows
        .iter()
        .map(|r| {
            let mut row = r.clone();
            if r.rank == 1 && pinned.contains(r.keyword.as_str()) {
                row.cost = 0.0;
                row.clicks = 0.0;
            }
            row
        })
        .collect();

    (out, missing)
}
