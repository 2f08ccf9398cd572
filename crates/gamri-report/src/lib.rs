//! # gamri-report
//!
//! AI-assisted reports over audit-violation cases.
//!
//! - [`prompt`] builds category-guide and question prompts under a
//!   character budget
//! - [`ReportGenerator`] abstracts the hosted model
//! - [`GeminiClient`] calls the Gemini `generateContent` REST endpoint
//!
//! Configuration is an explicit [`gamri_config::GeneratorConfig`] handed to
//! the client; nothing is read from globals.

pub mod gemini;
pub mod prompt;

mod error;
mod http;

pub use error::ReportError;
pub use gemini::GeminiClient;
pub use prompt::{PromptBudget, PromptKind};

use serde::{Deserialize, Serialize};

/// A hosted text-generation model.
pub trait ReportGenerator {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ReportError>> + Send;

    /// Name of the model being used.
    fn model_name(&self) -> &str;
}

/// Response from `gamri report` and `gamri ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `guide` or `question`.
    pub kind: String,
    /// Category label or question text.
    pub subject: String,
    /// Cases the prompt was built from.
    pub case_count: usize,
    pub prompt: String,
    /// `None` for a dry run.
    pub text: Option<String>,
}

impl Report {
    #[must_use]
    pub fn dry_run(kind: PromptKind, subject: &str, case_count: usize, prompt: String) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            subject: subject.to_string(),
            case_count,
            prompt,
            text: None,
        }
    }
}

/// Send `prompt` to `generator` and wrap the answer.
///
/// # Errors
///
/// Returns whatever the generator returns.
pub async fn generate_report<G: ReportGenerator>(
    generator: &G,
    kind: PromptKind,
    subject: &str,
    case_count: usize,
    prompt: String,
) -> Result<Report, ReportError> {
    let text = generator.generate(&prompt).await?;
    Ok(Report {
        text: Some(text),
        ..Report::dry_run(kind, subject, case_count, prompt)
    })
}
