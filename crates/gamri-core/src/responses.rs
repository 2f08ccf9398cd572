//! Response types returned as JSON by `gamri` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::{CaseField, CaseRecord};

/// A label with its number of cases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// A decision year with its number of cases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct YearCount {
    pub year: String,
    pub count: usize,
}

/// Response from `gamri overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Overview {
    pub taxonomy_version: String,
    pub total_cases: usize,
    /// Most frequent category, `None` only when there are no cases.
    pub top_category: Option<String>,
    /// Most frequent violation type, `-` when unavailable.
    pub top_violation: String,
    pub categories: Vec<LabelCount>,
    pub years: Vec<YearCount>,
}

/// Response from `gamri profile`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryProfile {
    pub category: String,
    pub total_cases: usize,
    pub years: Vec<YearCount>,
    pub top_violations: Vec<LabelCount>,
}

/// One row of a case listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseSummary {
    pub label: String,
    pub decision_year: String,
    pub company: String,
    pub account: String,
    pub category: String,
}

impl From<&CaseRecord> for CaseSummary {
    fn from(case: &CaseRecord) -> Self {
        Self {
            label: case.label(),
            decision_year: case.text(CaseField::DecisionYear).to_string(),
            company: case.text(CaseField::Company).to_string(),
            account: case.text(CaseField::Account).to_string(),
            category: case.category.clone(),
        }
    }
}

/// Response from `gamri search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResponse {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub total_results: usize,
    pub results: Vec<CaseSummary>,
}

/// Response from `gamri activity`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivitySummary {
    pub visits: u64,
    /// Actions grouped by name, most frequent first.
    pub actions: Vec<LabelCount>,
    pub ai_exchanges: u64,
    /// Log writes attempted by this process.
    pub attempted_writes: u64,
    /// Log writes that failed in this process.
    pub failed_writes: u64,
}
