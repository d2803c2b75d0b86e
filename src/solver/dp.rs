use super::quantize::{Candidate, CandidateSet, CLICK_SCALE};
use crate::config::SolverConfig;
use crate::error::{BfResult, BidForgeError};
use rayon::prelude::*;
use tracing::debug;

/// Marks a (keyword, spend) cell that no combination of options reaches.
pub const INFEASIBLE: i64 = i64::MIN;
const NO_CHOICE: u32 = u32::MAX;

/// Multiple-choice knapsack table.
///
/// `value(i, b)` is the best click total, in click units, over the first `i`
/// keywords spending exactly `b` units; `choice(i, b)` is the candidate index
/// of keyword `i` that achieved it. Both grids are flattened row-major,
/// `levels` wide.
pub struct DpTable {
    keywords: usize,
    levels: usize,
    values: Vec<i64>,
    choices: Vec<u32>,
}

// Equal totals prefer fewer cost units, then the earlier candidate.
#[inline(always)]
fn best_cell(prev: &[i64], opts: &[Candidate], b: usize) -> (i64, u32) {
    let mut best = INFEASIBLE;
    let mut pick = NO_CHOICE;

    for (idx, c) in opts.iter().enumerate() {
        let cu = c.cost_units as usize;
        if cu > b {
            continue;
        }
        let base = prev[b - cu];
        if base == INFEASIBLE {
            continue;
        }
        let cand = base.saturating_add(c.click_units);
        if pick == NO_CHOICE || cand > best {
            best = cand;
            pick = idx as u32;
        } else if cand == best && c.cost_units < opts[pick as usize].cost_units {
            pick = idx as u32;
        }
    }

    (best, pick)
}

impl DpTable {
    /// Fills every row. Rows are sequential; the cells of one row only read
    /// the previous row, so wide rows are split across the rayon pool.
    pub fn fill(sets: &[CandidateSet], budget_units: u64, config: &SolverConfig) -> Self {
        let keywords = sets.len();
        let levels = budget_units as usize + 1;
        let parallel = config.use_parallel(levels);

        let mut values = vec![INFEASIBLE; (keywords + 1) * levels];
        let mut choices = vec![NO_CHOICE; (keywords + 1) * levels];
        values[0] = 0;

        for (i, set) in sets.iter().enumerate() {
            let opts = set.candidates.as_slice();
            let (done, rest) = values.split_at_mut((i + 1) * levels);
            let prev = &done[i * levels..];
            let cur = &mut rest[..levels];
            let cur_choice = &mut choices[(i + 1) * levels..(i + 2) * levels];

            if parallel {
                cur.par_iter_mut()
                    .zip(cur_choice.par_iter_mut())
                    .enumerate()
                    .for_each(|(b, (v, c))| {
                        (*v, *c) = best_cell(prev, opts, b);
                    });
            } else {
                for (b, (v, c)) in cur.iter_mut().zip(cur_choice.iter_mut()).enumerate() {
                    (*v, *c) = best_cell(prev, opts, b);
                }
            }

            debug!(
                "   -> Row {} ('{}', {} candidates) filled{}",
                i + 1,
                set.keyword,
                opts.len(),
                if parallel { " in parallel" } else { "" }
            );
        }

        Self {
            keywords,
            levels,
            values,
            choices,
        }
    }

    pub fn keywords(&self) -> usize {
        self.keywords
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// `None` for infeasible cells.
    pub fn value(&self, i: usize, b: usize) -> Option<i64> {
        let v = self.values[i * self.levels + b];
        (v != INFEASIBLE).then_some(v)
    }

    pub fn clicks(&self, i: usize, b: usize) -> Option<f64> {
        self.value(i, b).map(|v| v as f64 / CLICK_SCALE)
    }

    pub fn choice(&self, i: usize, b: usize) -> Option<usize> {
        let c = self.choices[i * self.levels + b];
        (c != NO_CHOICE).then_some(c as usize)
    }

    /// First spend level with the highest click total in the final row.
    pub fn best_level(&self) -> BfResult<usize> {
        let last = &self.values[self.keywords * self.levels..];
        let mut best: Option<(usize, i64)> = None;
        for (b, &v) in last.iter().enumerate() {
            if v == INFEASIBLE {
                continue;
            }
            match best {
                Some((_, bv)) if v <= bv => {}
                _ => best = Some((b, v)),
            }
        }
        best.map(|(b, _)| b)
            .ok_or(BidForgeError::NoFeasibleSolution)
    }

    /// Replays recorded choices from `(keywords, level)` back to row 0 and
    /// returns the chosen row ids in keyword order.
    pub fn backtrack(&self, sets: &[CandidateSet], level: usize) -> BfResult<Vec<usize>> {
        let mut b = level;
        let mut picked = Vec::with_capacity(self.keywords);

        for i in (1..=self.keywords).rev() {
            let idx = self.choice(i, b).ok_or(BidForgeError::NoFeasibleSolution)?;
            let c = &sets[i - 1].candidates[idx];
            picked.push(c.row_id);
            b = b
                .checked_sub(c.cost_units as usize)
                .ok_or(BidForgeError::NoFeasibleSolution)?;
        }

        picked.reverse();
        Ok(picked)
    }
}
