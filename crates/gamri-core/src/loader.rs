//! Load pipeline from a raw table to labeled, ordered case records.
//!
//! 1. Remove all whitespace from every column name.
//! 2. If the decision-year column exists, keep only digits, drop rows whose
//!    year becomes empty, and order by year ([`YearOrder`]).
//! 3. Label every remaining row with the taxonomy.
//!
//! The pipeline is pure; reading the table is `gamri-db`'s job.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::columns::{ColumnMap, strip_whitespace};
use crate::record::{CaseField, CaseRecord};
use crate::taxonomy::Taxonomy;
use crate::year::{YearOrder, normalize_year};

/// A table as read from the backing store, every cell rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    /// One entry per row, aligned with `columns`. `None` is SQL NULL.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Options that shape the load pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub columns: ColumnMap,
    pub year_order: YearOrder,
}

/// Run the full pipeline over `raw`.
///
/// Never fails: unknown columns go to [`CaseRecord::extra`], short rows are
/// padded with NULL, and only rows with an empty normalized year are dropped.
#[must_use]
pub fn build_cases(raw: &RawTable, taxonomy: &Taxonomy, options: &LoadOptions) -> Vec<CaseRecord> {
    let columns: Vec<String> = raw.columns.iter().map(|c| strip_whitespace(c)).collect();
    let year_column = options.columns.column_for(CaseField::DecisionYear);
    let has_year = columns.iter().any(|c| *c == year_column);

    let mut cases: Vec<CaseRecord> = raw
        .rows
        .iter()
        .map(|row| row_to_case(&columns, row, &options.columns))
        .filter_map(|mut case| {
            if has_year {
                let year = normalize_year(case.decision_year.as_deref().unwrap_or_default());
                if year.is_empty() {
                    return None;
                }
                case.decision_year = Some(year);
            }
            Some(case)
        })
        .collect();

    let dropped = raw.rows.len() - cases.len();
    if dropped > 0 {
        tracing::debug!(dropped, "dropped rows without a usable decision year");
    }

    if has_year {
        let order = options.year_order;
        cases.sort_by(|a, b| {
            order.compare(
                a.decision_year.as_deref().unwrap_or_default(),
                b.decision_year.as_deref().unwrap_or_default(),
            )
        });
    }

    for case in &mut cases {
        case.category = taxonomy.classify(case).to_string();
    }

    tracing::debug!(
        cases = cases.len(),
        taxonomy = %taxonomy.version,
        order = %options.year_order,
        "built case records"
    );
    cases
}

fn row_to_case(columns: &[String], row: &[Option<String>], map: &ColumnMap) -> CaseRecord {
    let mut case = CaseRecord::default();
    let mut assigned = HashSet::new();

    for (index, column) in columns.iter().enumerate() {
        let value = row.get(index).cloned().flatten();
        match map.field_for(column) {
            Some(field) => {
                if assigned.insert(field) {
                    case.set_field(field, value);
                }
            }
            None => {
                if let Some(value) = value {
                    case.extra.entry(column.clone()).or_insert(value);
                }
            }
        }
    }
    case
}
