use crate::error::{BfResult, BidForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Budget and pinned keywords as handed over by an upstream front end.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Intent {
    pub budget: Option<f64>,
    pub forced_keywords: Vec<String>,
}

impl Intent {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> BfResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// An explicit budget wins over the intent's; neither is a configuration error.
    pub fn resolve_budget(&self, explicit: Option<f64>) -> BfResult<f64> {
        explicit.or(self.budget).ok_or_else(|| {
            BidForgeError::Config("no budget given (use --budget or an intent file)".to_string())
        })
    }

    /// Intent keywords followed by any extra ones, without duplicates.
    pub fn merged_keywords(&self, extra: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for kw in self.forced_keywords.iter().chain(extra) {
            let kw = kw.trim();
            if !kw.is_empty() && !out.iter().any(|k| k == kw) {
                out.push(kw.to_string());
            }
        }
        out
    }
}
