//! The case record: one audit-violation finding loaded from the `cases` table.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifies a well-known field of a [`CaseRecord`].
///
/// Taxonomies name the fields they concatenate with these values, and the
/// [`ColumnMap`](crate::columns::ColumnMap) maps each one to a physical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseField {
    Company,
    DecisionYear,
    FileName,
    Account,
    ViolationType,
    Summary,
    Guidance,
    Excerpt,
}

impl CaseField {
    /// Every field, in column order of the source table.
    pub const ALL: [Self; 8] = [
        Self::Company,
        Self::DecisionYear,
        Self::FileName,
        Self::Account,
        Self::ViolationType,
        Self::Summary,
        Self::Guidance,
        Self::Excerpt,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::DecisionYear => "decision_year",
            Self::FileName => "file_name",
            Self::Account => "account",
            Self::ViolationType => "violation_type",
            Self::Summary => "summary",
            Self::Guidance => "guidance",
            Self::Excerpt => "excerpt",
        }
    }
}

impl fmt::Display for CaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit-violation case.
///
/// Text fields keep SQL NULL as `None` and empty text as `Some("")`; the
/// classifier treats the two differently for a taxonomy's key field.
/// `category` is derived on every load and never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseRecord {
    pub company: Option<String>,
    /// Digits only once the record has passed through the loader.
    pub decision_year: Option<String>,
    pub file_name: Option<String>,
    pub account: Option<String>,
    pub violation_type: Option<String>,
    pub summary: Option<String>,
    pub guidance: Option<String>,
    pub excerpt: Option<String>,
    /// Columns without a [`CaseField`] mapping, keyed by cleaned column name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    pub category: String,
}

impl CaseRecord {
    /// Borrow a field value, `None` for SQL NULL or an unmapped column.
    #[must_use]
    pub fn field(&self, field: CaseField) -> Option<&str> {
        match field {
            CaseField::Company => self.company.as_deref(),
            CaseField::DecisionYear => self.decision_year.as_deref(),
            CaseField::FileName => self.file_name.as_deref(),
            CaseField::Account => self.account.as_deref(),
            CaseField::ViolationType => self.violation_type.as_deref(),
            CaseField::Summary => self.summary.as_deref(),
            CaseField::Guidance => self.guidance.as_deref(),
            CaseField::Excerpt => self.excerpt.as_deref(),
        }
    }

    /// Field value with missing treated as empty.
    #[must_use]
    pub fn text(&self, field: CaseField) -> &str {
        self.field(field).unwrap_or_default()
    }

    pub(crate) fn set_field(&mut self, field: CaseField, value: Option<String>) {
        let slot = match field {
            CaseField::Company => &mut self.company,
            CaseField::DecisionYear => &mut self.decision_year,
            CaseField::FileName => &mut self.file_name,
            CaseField::Account => &mut self.account,
            CaseField::ViolationType => &mut self.violation_type,
            CaseField::Summary => &mut self.summary,
            CaseField::Guidance => &mut self.guidance,
            CaseField::Excerpt => &mut self.excerpt,
        };
        *slot = value;
    }

    /// Human-readable selection label: `[<category>] <company> - <account>`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.category,
            self.text(CaseField::Company),
            self.text(CaseField::Account)
        )
    }

    /// Every text value on the record, including extras and the category.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        CaseField::ALL
            .into_iter()
            .filter_map(|field| self.field(field))
            .chain(self.extra.values().map(String::as_str))
            .chain(std::iter::once(self.category.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_empty_text_for_missing_fields() {
        let record = CaseRecord {
            company: Some("가나전자".into()),
            category: "📝 기타/주석 (Others)".into(),
            ..Default::default()
        };
        assert_eq!(record.label(), "[📝 기타/주석 (Others)] 가나전자 - ");
    }

    #[test]
    fn set_field_round_trips_every_field() {
        let mut record = CaseRecord::default();
        for field in CaseField::ALL {
            record.set_field(field, Some(field.as_str().to_string()));
        }
        for field in CaseField::ALL {
            assert_eq!(record.field(field), Some(field.as_str()));
        }
    }

    #[test]
    fn texts_include_extras_and_category() {
        let mut record = CaseRecord {
            summary: Some("요약".into()),
            category: "라벨".into(),
            ..Default::default()
        };
        record.extra.insert("비고".into(), "추가".into());
        let texts: Vec<&str> = record.texts().collect();
        assert_eq!(texts, vec!["요약", "추가", "라벨"]);
    }
}
