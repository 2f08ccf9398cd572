//! Decision-year normalization and ordering.

use std::cmp::Ordering;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction in which loaded cases are ordered by decision year.
///
/// Rows with equal years keep their table order in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum YearOrder {
    /// Oldest first.
    Ascending,
    /// Most recent first.
    #[default]
    Descending,
}

impl YearOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Order two normalized years according to this direction.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Ascending => compare_years(a, b),
            Self::Descending => compare_years(b, a),
        }
    }
}

impl fmt::Display for YearOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only ASCII digits: `"2021년"` becomes `"2021"`, `"미상"` becomes `""`.
#[must_use]
pub fn normalize_year(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric comparison of two digit strings of any length.
///
/// Leading zeros are ignored, so `"0999" < "2021"` and `"02021" == "2021"`
/// compare as numbers. Equal numeric values fall back to the raw strings to
/// keep the order total.
#[must_use]
pub fn compare_years(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digits() {
        assert_eq!(normalize_year("2021년"), "2021");
        assert_eq!(normalize_year(" 2019. 12 "), "201912");
        assert_eq!(normalize_year("미상"), "");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(normalize_year("２０２１"), "");
    }

    #[test]
    fn compares_numerically() {
        assert_eq!(compare_years("999", "2021"), Ordering::Less);
        assert_eq!(compare_years("2022", "2021"), Ordering::Greater);
        assert_eq!(compare_years("2021", "2021"), Ordering::Equal);
        assert_eq!(compare_years("02021", "2021"), Ordering::Less);
    }

    #[test]
    fn descending_is_default_and_reverses() {
        assert_eq!(YearOrder::default(), YearOrder::Descending);
        assert_eq!(
            YearOrder::Descending.compare("2023", "2019"),
            Ordering::Less
        );
        assert_eq!(
            YearOrder::Ascending.compare("2023", "2019"),
            Ordering::Greater
        );
    }
}
