//! Gemini `generateContent` REST client.

use std::time::Duration;

use gamri_config::GeneratorConfig;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::http::check_response;
use crate::ReportGenerator;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate.
fn response_text(data: GenerateResponse) -> Result<String, ReportError> {
    let candidate = data
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ReportError::Parse("response has no candidates".into()))?;
    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() {
        return Err(ReportError::Parse(format!(
            "candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

/// HTTP client for a hosted Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl GeminiClient {
    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotConfigured`] when no API key is set, or
    /// [`ReportError::Http`] if the underlying client cannot be built.
    pub fn new(config: GeneratorConfig) -> Result<Self, ReportError> {
        if !config.is_configured() {
            return Err(ReportError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("gamri/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&self.config.model),
            urlencoding::encode(&self.config.api_key)
        )
    }
}

impl ReportGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ReportError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };
        tracing::debug!(model = %self.config.model, chars = prompt.chars().count(), "generateContent");
        let resp = check_response(self.http.post(self.url()).json(&body).send().await?).await?;
        let data: GenerateResponse = resp.json().await?;
        response_text(data)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
