//! Prompt construction for category guides and free-text questions.
//!
//! A prompt carries a one-line statistics summary and a digest of cases,
//! one line per case, most recent first. The digest is cut to a character
//! budget before it is embedded.

use gamri_config::GeneratorConfig;
use gamri_core::record::{CaseField, CaseRecord};
use gamri_core::stats::{NO_VIOLATION, violation_counts};
use gamri_core::year::YearOrder;

/// Shown in the statistics line when no violation type is known.
pub const UNKNOWN_VIOLATION: &str = "미상";

/// Which prompt template was used. Recorded in the AI log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Guide,
    Question,
}

impl PromptKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Question => "question",
        }
    }
}

/// How much case material goes into a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBudget {
    pub max_cases: usize,
    /// Measured in Unicode scalar values, not bytes.
    pub max_context_chars: usize,
}

impl Default for PromptBudget {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for PromptBudget {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            max_cases: config.max_cases,
            max_context_chars: config.max_context_chars,
        }
    }
}

/// `총 <n>건. 최빈 유형: <mode>` over all of `cases`.
#[must_use]
pub fn stats_line(cases: &[&CaseRecord]) -> String {
    let mode = violation_counts(cases.iter().copied(), Some(1))
        .into_iter()
        .next()
        .map_or_else(|| UNKNOWN_VIOLATION.to_string(), |entry| entry.label);
    format!("총 {}건. 최빈 유형: {mode}", cases.len())
}

/// One line per case, most recent first, at most `max_cases` lines.
///
/// The sort is stable, so cases from the same year keep their given order.
#[must_use]
pub fn case_digest(cases: &[&CaseRecord], max_cases: usize) -> String {
    let mut ordered = cases.to_vec();
    ordered.sort_by(|a, b| {
        YearOrder::Descending.compare(
            a.text(CaseField::DecisionYear),
            b.text(CaseField::DecisionYear),
        )
    });

    let mut digest = String::new();
    for case in ordered.into_iter().take(max_cases) {
        digest.push_str(&digest_line(case));
        digest.push('\n');
    }
    digest
}

fn digest_line(case: &CaseRecord) -> String {
    format!(
        "- [{}] {} ({}): {}",
        case.text(CaseField::DecisionYear),
        case.text(CaseField::Company),
        case.field(CaseField::ViolationType).unwrap_or(NO_VIOLATION),
        case.text(CaseField::Summary),
    )
}

/// First `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn context_block(cases: &[&CaseRecord], budget: PromptBudget) -> String {
    let digest = case_digest(cases, budget.max_cases);
    format!(
        "[데이터] {}\n[사례]\n{}",
        stats_line(cases),
        truncate_chars(&digest, budget.max_context_chars)
    )
}

/// Training guide for the audit team on one category.
#[must_use]
pub fn guide_prompt(category: &str, cases: &[&CaseRecord], budget: PromptBudget) -> String {
    format!(
        "당신은 회계법인의 감사 파트너입니다. '{category}' 영역에서 감독당국이 지적한 과거 사례를 \
분석하여 감사팀 교육 자료를 작성하세요.\n\n\
{context}\n\
아래 목차를 따르세요.\n\
1. **Risk Overview**: 이 영역에서 반복되는 주요 부정 및 오류 패턴 요약\n\
2. **Key Case Study**: 가장 빈번하거나 파급력이 큰 위반 사례의 수법 분석\n\
3. **Audit Action Plan 5**: 현장에서 반드시 수행할 구체적 감사 절차 5가지 (명령조)\n",
        context = context_block(cases, budget),
    )
}

/// Free-text question answered against a selected set of cases.
#[must_use]
pub fn question_prompt(question: &str, cases: &[&CaseRecord], budget: PromptBudget) -> String {
    format!(
        "당신은 회계감사 전문가입니다. 아래 감리 지적 사례만을 근거로 질문에 답하세요. \
근거가 된 사례는 연도와 회사명으로 인용하고, 사례로 답할 수 없으면 그렇다고 밝히세요.\n\n\
{context}\n\
[질문] {question}\n",
        context = context_block(cases, budget),
    )
}
