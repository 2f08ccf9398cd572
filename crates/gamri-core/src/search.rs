//! Keyword search and case selection.

use std::collections::HashSet;

use crate::errors::CoreError;
use crate::record::CaseRecord;

/// Cases where any text value contains `keyword` (literal, case-sensitive),
/// optionally restricted to one category. An empty or absent keyword matches
/// every case.
#[must_use]
pub fn search<'a>(
    cases: &'a [CaseRecord],
    keyword: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a CaseRecord> {
    let keyword = keyword.filter(|k| !k.is_empty());
    cases
        .iter()
        .filter(|case| category.is_none_or(|c| case.category == c))
        .filter(|case| keyword.is_none_or(|k| case.texts().any(|text| text.contains(k))))
        .collect()
}

/// Selection labels without duplicates, in first-appearance order.
#[must_use]
pub fn selection_labels<'a, I>(cases: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    let mut seen = HashSet::new();
    cases
        .into_iter()
        .map(CaseRecord::label)
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// First case carrying `label`.
///
/// # Errors
///
/// Returns [`CoreError::CaseNotFound`] when no case matches.
pub fn select<'a, I>(cases: I, label: &str) -> Result<&'a CaseRecord, CoreError>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    cases
        .into_iter()
        .find(|case| case.label() == label)
        .ok_or_else(|| CoreError::CaseNotFound(label.to_string()))
}
