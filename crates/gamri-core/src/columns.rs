//! Physical column names of the `cases` table.
//!
//! Names are compared after whitespace removal, so `결정 연도` in the table
//! matches `결정연도` here.

use serde::{Deserialize, Serialize};

use crate::record::CaseField;

fn default_company() -> String {
    "회사명".into()
}

fn default_decision_year() -> String {
    "결정연도".into()
}

fn default_file_name() -> String {
    "파일명".into()
}

fn default_account() -> String {
    "관련계정과목".into()
}

fn default_violation_type() -> String {
    "위반유형".into()
}

fn default_summary() -> String {
    "지적사항요약".into()
}

fn default_guidance() -> String {
    "감사인유의사항".into()
}

fn default_excerpt() -> String {
    "원문내용".into()
}

/// Maps each [`CaseField`] to the column that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnMap {
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_decision_year")]
    pub decision_year: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_account")]
    pub account: String,
    #[serde(default = "default_violation_type")]
    pub violation_type: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_guidance")]
    pub guidance: String,
    #[serde(default = "default_excerpt")]
    pub excerpt: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            company: default_company(),
            decision_year: default_decision_year(),
            file_name: default_file_name(),
            account: default_account(),
            violation_type: default_violation_type(),
            summary: default_summary(),
            guidance: default_guidance(),
            excerpt: default_excerpt(),
        }
    }
}

impl ColumnMap {
    /// Configured column name for `field`, whitespace removed.
    #[must_use]
    pub fn column_for(&self, field: CaseField) -> String {
        let raw = match field {
            CaseField::Company => &self.company,
            CaseField::DecisionYear => &self.decision_year,
            CaseField::FileName => &self.file_name,
            CaseField::Account => &self.account,
            CaseField::ViolationType => &self.violation_type,
            CaseField::Summary => &self.summary,
            CaseField::Guidance => &self.guidance,
            CaseField::Excerpt => &self.excerpt,
        };
        strip_whitespace(raw)
    }

    /// Reverse lookup: which field a cleaned column name carries, if any.
    ///
    /// When two fields are mapped to the same column the first one in
    /// [`CaseField::ALL`] order wins.
    #[must_use]
    pub fn field_for(&self, column: &str) -> Option<CaseField> {
        CaseField::ALL
            .into_iter()
            .find(|field| self.column_for(*field) == column)
    }
}

/// Remove every Unicode whitespace character.
#[must_use]
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
