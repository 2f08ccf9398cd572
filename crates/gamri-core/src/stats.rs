//! Dashboard aggregates over labeled cases.
//!
//! Counts are ordered by count descending. Category ties follow taxonomy
//! precedence; every other tie keeps first-appearance order. Year counts are
//! always oldest first, whatever order the cases were loaded in.

use std::collections::HashMap;

use crate::errors::CoreError;
use crate::record::{CaseField, CaseRecord};
use crate::responses::{CategoryProfile, LabelCount, Overview, YearCount};
use crate::taxonomy::Taxonomy;
use crate::year::compare_years;

/// Placeholder for an unavailable violation type.
pub const NO_VIOLATION: &str = "-";

/// Number of violation types listed in a category profile.
pub const PROFILE_TOP_VIOLATIONS: usize = 5;

/// Count values in first-appearance order.
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(LabelCount {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Cases per category.
#[must_use]
pub fn category_counts(cases: &[CaseRecord], taxonomy: &Taxonomy) -> Vec<LabelCount> {
    let mut counts = tally(cases.iter().map(|case| case.category.as_str()));
    counts.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| {
            let rank = |label: &str| taxonomy.rank(label).unwrap_or(usize::MAX);
            rank(&a.label)
                .cmp(&rank(&b.label))
                .then_with(|| a.label.cmp(&b.label))
        })
    });
    counts
}

/// Cases per violation type, NULL values skipped, at most `limit` entries.
#[must_use]
pub fn violation_counts<'a>(
    cases: impl IntoIterator<Item = &'a CaseRecord>,
    limit: Option<usize>,
) -> Vec<LabelCount> {
    let mut counts = tally(
        cases
            .into_iter()
            .filter_map(|case| case.field(CaseField::ViolationType)),
    );
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        counts.truncate(limit);
    }
    counts
}

/// Cases per decision year, oldest first. Cases without a year are skipped.
#[must_use]
pub fn year_counts<'a>(cases: impl IntoIterator<Item = &'a CaseRecord>) -> Vec<YearCount> {
    let mut counts = tally(
        cases
            .into_iter()
            .filter_map(|case| case.field(CaseField::DecisionYear)),
    );
    counts.sort_by(|a, b| compare_years(&a.label, &b.label));
    counts
        .into_iter()
        .map(|entry| YearCount {
            year: entry.label,
            count: entry.count,
        })
        .collect()
}

/// Most frequent violation type, or [`NO_VIOLATION`].
#[must_use]
pub fn top_violation<'a>(cases: impl IntoIterator<Item = &'a CaseRecord>) -> String {
    violation_counts(cases, Some(1))
        .into_iter()
        .next()
        .map_or_else(|| NO_VIOLATION.to_string(), |entry| entry.label)
}

/// Headline figures for the whole case set.
#[must_use]
pub fn overview(cases: &[CaseRecord], taxonomy: &Taxonomy) -> Overview {
    let categories = category_counts(cases, taxonomy);
    Overview {
        taxonomy_version: taxonomy.version.clone(),
        total_cases: cases.len(),
        top_category: categories.first().map(|entry| entry.label.clone()),
        top_violation: top_violation(cases),
        categories,
        years: year_counts(cases),
    }
}

/// Cases labeled `category`, in load order.
#[must_use]
pub fn cases_in_category<'a>(cases: &'a [CaseRecord], category: &str) -> Vec<&'a CaseRecord> {
    cases.iter().filter(|case| case.category == category).collect()
}

/// Deep-dive figures for one category.
///
/// # Errors
///
/// Returns [`CoreError::UnknownCategory`] if `category` is not a label of
/// `taxonomy`. A known category with no cases yields an empty profile.
pub fn category_profile(
    cases: &[CaseRecord],
    taxonomy: &Taxonomy,
    category: &str,
) -> Result<CategoryProfile, CoreError> {
    if !taxonomy.contains_label(category) {
        return Err(CoreError::UnknownCategory(category.to_string()));
    }
    let selected = cases_in_category(cases, category);
    Ok(CategoryProfile {
        category: category.to_string(),
        total_cases: selected.len(),
        years: year_counts(selected.iter().copied()),
        top_violations: violation_counts(selected.iter().copied(), Some(PROFILE_TOP_VIOLATIONS)),
    })
}
