use super::normalize::KeywordGroup;
use crate::error::{BfResult, BidForgeError};
use tracing::{debug, info};

/// Fixed-point resolution of clicks inside the DP (micro-clicks).
pub const CLICK_SCALE: f64 = 1_000_000.0;

/// An option reduced to what the DP needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub cost_units: u64,
    pub click_units: i64,
    pub row_id: usize,
}

#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    pub keyword: &'a str,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone)]
pub struct Quantized<'a> {
    pub remaining_budget: f64,
    pub budget_units: u64,
    pub sets: Vec<CandidateSet<'a>>,
}

/// Costs round up so a chosen option never costs more than its units imply.
pub fn cost_units(cost: f64, scale: u64) -> u64 {
    (cost / scale as f64).ceil() as u64
}

/// Clicks as exact integers so equal totals compare equal in the DP.
pub fn click_units(clicks: f64) -> i64 {
    (clicks * CLICK_SCALE).round() as i64
}

/// Capacity rounds down so the unit budget never exceeds the real one.
pub fn budget_units(remaining: f64, scale: u64) -> u64 {
    (remaining / scale as f64).floor() as u64
}

/// Reserves the forced cost, discretizes the remaining budget and every
/// option's cost, and drops options that could never be afforded.
pub fn quantize<'a>(
    groups: &[KeywordGroup<'a>],
    budget: f64,
    forced_cost: f64,
    scale: u64,
) -> BfResult<Quantized<'a>> {
    if scale == 0 {
        return Err(BidForgeError::InvalidScale);
    }
    if !budget.is_finite() {
        return Err(BidForgeError::InvalidBudget(budget));
    }

    let remaining_budget = budget - forced_cost;
    if remaining_budget < 0.0 {
        return Err(BidForgeError::InsufficientBudgetForForced {
            budget,
            forced_cost,
        });
    }

    let units = budget_units(remaining_budget, scale);
    info!(
        "💰 Remaining budget {} -> {} units of {}",
        remaining_budget, units, scale
    );

    let mut sets = Vec::with_capacity(groups.len());
    for group in groups {
        let candidates: Vec<Candidate> = group
            .options
            .iter()
            .map(|r| Candidate {
                cost_units: cost_units(r.cost, scale),
                click_units: click_units(r.clicks),
                row_id: r.row_id,
            })
            .filter(|c| c.cost_units <= units)
            .collect();

        let excluded = group.options.len() - candidates.len();
        if excluded > 0 {
            debug!(
                "   -> '{}': {} of {} options exceed {} units",
                group.keyword,
                excluded,
                group.options.len(),
                units
            );
        }

        if candidates.is_empty() {
            return Err(BidForgeError::NoFeasibleOptionForKeyword(
                group.keyword.to_string(),
            ));
        }

        sets.push(CandidateSet {
            keyword: group.keyword,
            candidates,
        });
    }

    Ok(Quantized {
        remaining_budget,
        budget_units: units,
        sets,
    })
}
