use crate::error::{BfResult, BidForgeError};
use crate::table::OptionRow;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, info};

/// All options sharing one keyword, in table order.
#[derive(Debug, Clone)]
pub struct KeywordGroup<'a> {
    pub keyword: &'a str,
    pub options: Vec<&'a OptionRow>,
}

#[derive(Debug, Clone, Default)]
pub struct Normalized<'a> {
    /// One row per forced keyword, ordered by keyword.
    pub forced: Vec<&'a OptionRow>,
    /// Non-forced keywords in order of first appearance.
    pub groups: Vec<KeywordGroup<'a>>,
}

impl<'a> Normalized<'a> {
    pub fn forced_row_ids(&self) -> Vec<usize> {
        self.forced.iter().map(|r| r.row_id).collect()
    }

    pub fn forced_keywords(&self) -> Vec<&'a str> {
        self.forced.iter().map(|r| r.keyword.as_str()).collect()
    }

    pub fn forced_cost(&self) -> f64 {
        self.forced.iter().map(|r| r.cost).sum()
    }
}

fn invalid(row: &OptionRow, reason: &str) -> BidForgeError {
    BidForgeError::InvalidOption {
        row_id: row.row_id,
        keyword: row.keyword.clone(),
        reason: reason.to_string(),
    }
}

fn check_row(row: &OptionRow) -> BfResult<()> {
    if row.keyword.trim().is_empty() {
        return Err(invalid(row, "keyword is empty"));
    }
    if row.rank == 0 {
        return Err(invalid(row, "rank must be a positive integer"));
    }
    if !row.cost.is_finite() || row.cost < 0.0 {
        return Err(invalid(row, &format!("cost {} is not a non-negative number", row.cost)));
    }
    if !row.clicks.is_finite() || row.clicks < 0.0 {
        return Err(invalid(
            row,
            &format!("clicks {} is not a non-negative number", row.clicks),
        ));
    }
    Ok(())
}

/// Validates rows, groups them by keyword and splits off forced keywords.
///
/// A keyword is forced when one of its rank-1 rows has zero cost and zero
/// clicks; the first such row becomes its selection and the keyword leaves
/// the optimization domain entirely.
pub fn normalize(rows: &[OptionRow]) -> BfResult<Normalized<'_>> {
    let mut seen_ids = HashSet::with_capacity(rows.len());
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<KeywordGroup> = Vec::new();

    for row in rows {
        check_row(row)?;
        if !seen_ids.insert(row.row_id) {
            return Err(invalid(row, "duplicate row id"));
        }

        let slot = *index.entry(row.keyword.as_str()).or_insert_with(|| {
            groups.push(KeywordGroup {
                keyword: row.keyword.as_str(),
                options: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].options.push(row);
    }

    let mut forced: BTreeMap<&str, &OptionRow> = BTreeMap::new();
    for group in &groups {
        if let Some(marker) = group.options.iter().find(|r| r.is_forced_marker()) {
            forced.insert(group.keyword, marker);
        }
    }

    let groups: Vec<KeywordGroup> = groups
        .into_iter()
        .filter(|g| !forced.contains_key(g.keyword))
        .collect();

    if !forced.is_empty() {
        info!(
            "📌 Forced keywords: {}",
            forced.keys().copied().collect::<Vec<_>>().join(", ")
        );
    }
    debug!(
        "   -> {} rows, {} forced keywords, {} keywords to optimize",
        rows.len(),
        forced.len(),
        groups.len()
    );

    Ok(Normalized {
        forced: forced.into_values().collect(),
        groups,
    })
}
