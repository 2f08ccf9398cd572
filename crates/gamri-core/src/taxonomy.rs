//! Declarative keyword taxonomies.
//!
//! A taxonomy is an ordered list of `(label, keywords)` groups plus the
//! fields to concatenate and a default label. Group order is precedence:
//! the classifier returns the first group with any keyword present, so
//! reordering groups changes results. Editing a taxonomy never touches the
//! matching code in [`crate::classify`].
//!
//! Taxonomies are either one of the built-in [`TaxonomyPreset`]s or a TOML
//! file:
//!
//! ```toml
//! version = "local-2025"
//! fields = ["account", "violation_type", "summary"]
//! default_label = "📝 기타/주석 (Others)"
//!
//! [[groups]]
//! label = "🚨 횡령·부정 (Fraud)"
//! keywords = ["횡령", "배임"]
//! ```

use std::collections::HashSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::columns::strip_whitespace;
use crate::errors::TaxonomyError;
use crate::record::CaseField;

/// Label used by both presets when nothing matches.
pub const OTHERS_LABEL: &str = "📝 기타/주석 (Others)";

/// One named set of keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordGroup {
    pub label: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }
}

/// An ordered, versioned classification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Taxonomy {
    /// Free-form identifier, reported alongside results.
    pub version: String,
    /// Fields concatenated, in this order, before matching.
    pub fields: Vec<CaseField>,
    /// When set and NULL on a record, the record gets the default label
    /// without any keyword test.
    #[serde(default)]
    pub key_field: Option<CaseField>,
    pub default_label: String,
    /// Groups in precedence order.
    pub groups: Vec<KeywordGroup>,
}

/// Built-in taxonomies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyPreset {
    /// Seven groups over the account caption only.
    Coarse,
    /// Sixteen groups over account, violation type and summary.
    #[default]
    Fine,
}

impl TaxonomyPreset {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coarse => "coarse",
            Self::Fine => "fine",
        }
    }
}

impl fmt::Display for TaxonomyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Taxonomy {
    /// Build a built-in taxonomy.
    #[must_use]
    pub fn preset(preset: TaxonomyPreset) -> Self {
        match preset {
            TaxonomyPreset::Coarse => Self::coarse(),
            TaxonomyPreset::Fine => Self::fine(),
        }
    }

    /// The seven-group taxonomy keyed on the account caption.
    ///
    /// `매출원가` sits in the inventory group but `매출` is tested first, so
    /// cost-of-sales captions land in revenue. The ordering is kept as is.
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            version: "coarse-v1".into(),
            fields: vec![CaseField::Account],
            key_field: Some(CaseField::Account),
            groups: vec![
                KeywordGroup::new(
                    "💰 매출·채권 (Revenue)",
                    &["매출", "수익", "채권", "미수", "대손"],
                ),
                KeywordGroup::new(
                    "📦 재고·매입 (Inventory)",
                    &["재고", "매출원가", "매입", "채무"],
                ),
                KeywordGroup::new(
                    "🏦 금융·현금 (Financial)",
                    &["금융", "주식", "파생", "투자", "현금", "예금", "대여"],
                ),
                KeywordGroup::new(
                    "🏗️ 유·무형자산 (Assets)",
                    &["유형", "무형", "감가", "손상", "부동산", "개발비", "영업권"],
                ),
                KeywordGroup::new(
                    "🔗 연결·지분법 (Consolidation)",
                    &["연결", "지분법", "관계기업", "종속"],
                ),
                KeywordGroup::new(
                    "💎 자본 (Equity)",
                    &["자본", "잉여금", "주식보상", "자기주식"],
                ),
                KeywordGroup::new("⚖️ 법인세 (Tax)", &["법인세", "이연"]),
            ],
            default_label: OTHERS_LABEL.into(),
        }
    }

    /// The sixteen-group taxonomy over account, violation type and summary.
    ///
    /// Fraud is tested first so an embezzlement finding on a revenue account
    /// is reported as fraud. The generic asset group is last.
    #[must_use]
    pub fn fine() -> Self {
        Self {
            version: "fine-v2".into(),
            fields: vec![
                CaseField::Account,
                CaseField::ViolationType,
                CaseField::Summary,
            ],
            key_field: None,
            groups: vec![
                KeywordGroup::new(
                    "🚨 횡령·부정 (Fraud)",
                    &["횡령", "배임", "부정", "가공", "허위", "분식", "자금유용"],
                ),
                KeywordGroup::new(
                    "📦 재고자산 (Inventory)",
                    &["재고", "매출원가", "평가손실", "저가법"],
                ),
                KeywordGroup::new(
                    "🧾 채권·대손 (Receivables)",
                    &["채권", "미수", "대손"],
                ),
                KeywordGroup::new(
                    "💰 매출·수익인식 (Revenue)",
                    &["매출", "수익", "공사진행", "진행률", "진행기준"],
                ),
                KeywordGroup::new(
                    "🛒 매입·채무 (Payables)",
                    &["매입", "채무", "미지급"],
                ),
                KeywordGroup::new(
                    "🏦 금융상품·파생 (Financial Instruments)",
                    &["금융상품", "파생", "전환사채", "신주인수권", "공정가치", "주식"],
                ),
                KeywordGroup::new(
                    "💵 현금·대여금 (Cash & Loans)",
                    &["현금", "예금", "대여", "가지급"],
                ),
                KeywordGroup::new(
                    "🏗️ 유형자산·리스 (Tangible & Lease)",
                    &["유형", "리스", "사용권", "감가", "부동산", "건물", "토지"],
                ),
                KeywordGroup::new(
                    "🧠 무형자산·개발비 (Intangibles)",
                    &["무형", "개발비", "영업권"],
                ),
                KeywordGroup::new("📉 자산손상 (Impairment)", &["손상"]),
                KeywordGroup::new(
                    "🔗 연결·지분법 (Consolidation)",
                    &["연결", "지분법", "관계기업", "종속"],
                ),
                KeywordGroup::new(
                    "💎 자본 (Equity)",
                    &["자본", "잉여금", "주식보상", "자기주식", "주식선택권"],
                ),
                KeywordGroup::new("⚖️ 법인세 (Tax)", &["법인세", "이연"]),
                KeywordGroup::new(
                    "📑 충당부채·우발 (Provisions)",
                    &["충당부채", "우발", "소송", "지급보증"],
                ),
                KeywordGroup::new(
                    "🤝 특수관계자 (Related Parties)",
                    &["특수관계"],
                ),
                KeywordGroup::new("🏢 자산 일반 (General Assets)", &["자산"]),
            ],
            default_label: OTHERS_LABEL.into(),
        }
    }

    /// Parse and validate a taxonomy from TOML text.
    ///
    /// Whitespace inside keywords is removed, matching the normalization
    /// applied to record text.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError`] if the TOML is malformed or the taxonomy
    /// fails [`Taxonomy::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, TaxonomyError> {
        let mut taxonomy: Self =
            toml::from_str(text).map_err(|e| TaxonomyError::Parse(e.to_string()))?;
        for group in &mut taxonomy.groups {
            for keyword in &mut group.keywords {
                *keyword = strip_whitespace(keyword);
            }
        }
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Serialize to the TOML file format accepted by [`Taxonomy::from_toml_str`].
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::Parse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, TaxonomyError> {
        toml::to_string_pretty(self).map_err(|e| TaxonomyError::Parse(e.to_string()))
    }

    /// Check the structural rules a taxonomy must satisfy.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxonomyError`] found.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        let version = || self.version.clone();
        if self.fields.is_empty() {
            return Err(TaxonomyError::NoFields { version: version() });
        }
        if self.default_label.trim().is_empty() {
            return Err(TaxonomyError::EmptyLabel { version: version() });
        }

        let mut seen = HashSet::new();
        seen.insert(self.default_label.as_str());
        for group in &self.groups {
            if group.label.trim().is_empty() {
                return Err(TaxonomyError::EmptyLabel { version: version() });
            }
            if !seen.insert(group.label.as_str()) {
                return Err(TaxonomyError::DuplicateLabel {
                    version: version(),
                    label: group.label.clone(),
                });
            }
            if group.keywords.is_empty() {
                return Err(TaxonomyError::NoKeywords {
                    version: version(),
                    label: group.label.clone(),
                });
            }
            if group
                .keywords
                .iter()
                .any(|keyword| strip_whitespace(keyword).is_empty())
            {
                return Err(TaxonomyError::EmptyKeyword {
                    version: version(),
                    label: group.label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Every label the classifier can return: groups in order, then the default.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .map(|group| group.label.as_str())
            .chain(std::iter::once(self.default_label.as_str()))
    }

    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.labels().any(|candidate| candidate == label)
    }

    /// Precedence rank of a label; the default ranks after every group.
    #[must_use]
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.labels().position(|candidate| candidate == label)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn presets_are_valid() {
        Taxonomy::coarse().validate().unwrap();
        Taxonomy::fine().validate().unwrap();
    }

    #[test]
    fn preset_sizes() {
        assert_eq!(Taxonomy::coarse().groups.len(), 7);
        assert_eq!(Taxonomy::fine().groups.len(), 16);
    }

    #[test]
    fn default_preset_is_fine() {
        assert_eq!(TaxonomyPreset::default(), TaxonomyPreset::Fine);
        assert_eq!(Taxonomy::preset(TaxonomyPreset::default()), Taxonomy::fine());
    }

    #[test]
    fn fine_lease_group_precedes_general_assets() {
        let fine = Taxonomy::fine();
        let lease = fine.rank("🏗️ 유형자산·리스 (Tangible & Lease)").unwrap();
        let assets = fine.rank("🏢 자산 일반 (General Assets)").unwrap();
        assert!(lease < assets);
    }

    #[test]
    fn fine_fraud_is_first() {
        assert_eq!(Taxonomy::fine().groups[0].label, "🚨 횡령·부정 (Fraud)");
    }

    #[test]
    fn default_label_ranks_last() {
        let coarse = Taxonomy::coarse();
        assert_eq!(coarse.rank(OTHERS_LABEL), Some(7));
        assert_eq!(coarse.rank("nope"), None);
    }

    #[test]
    fn toml_round_trip_preserves_order() {
        let fine = Taxonomy::fine();
        let text = fine.to_toml_string().unwrap();
        let parsed = Taxonomy::from_toml_str(&text).unwrap();
        assert_eq!(parsed, fine);
    }

    #[test]
    fn toml_keywords_are_whitespace_stripped() {
        let text = r#"
version = "t"
fields = ["account"]
default_label = "other"

[[groups]]
label = "lease"
keywords = ["사용 권"]
"#;
        let taxonomy = Taxonomy::from_toml_str(text).unwrap();
        assert_eq!(taxonomy.groups[0].keywords, vec!["사용권".to_string()]);
        assert_eq!(taxonomy.key_field, None);
    }

    #[test]
    fn rejects_duplicate_labels() {
        let mut taxonomy = Taxonomy::coarse();
        taxonomy.groups[1].label = taxonomy.groups[0].label.clone();
        assert!(matches!(
            taxonomy.validate(),
            Err(TaxonomyError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn rejects_group_label_equal_to_default() {
        let mut taxonomy = Taxonomy::coarse();
        taxonomy.groups[0].label = OTHERS_LABEL.into();
        assert!(matches!(
            taxonomy.validate(),
            Err(TaxonomyError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn rejects_empty_keyword() {
        let text = r#"
version = "t"
fields = ["account"]
default_label = "other"

[[groups]]
label = "bad"
keywords = ["  "]
"#;
        assert!(matches!(
            Taxonomy::from_toml_str(text),
            Err(TaxonomyError::EmptyKeyword { .. })
        ));
    }

    #[test]
    fn rejects_group_without_keywords() {
        let mut taxonomy = Taxonomy::coarse();
        taxonomy.groups[2].keywords.clear();
        assert!(matches!(
            taxonomy.validate(),
            Err(TaxonomyError::NoKeywords { .. })
        ));
    }

    #[test]
    fn rejects_no_fields() {
        let mut taxonomy = Taxonomy::coarse();
        taxonomy.fields.clear();
        assert!(matches!(
            taxonomy.validate(),
            Err(TaxonomyError::NoFields { .. })
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Taxonomy::from_toml_str("fields = [\"nope\""),
            Err(TaxonomyError::Parse(_))
        ));
    }
}
