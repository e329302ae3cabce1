//! Event description enhancement through the Gemini `generateContent` API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::AppError;

const PROMPT_PREFIX: &str = "Improve the following college event description so it sounds \
professional, engaging, and attractive to sponsors:\n\n";

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("request to Gemini failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Gemini response contained no text")]
    EmptyResponse,
}

impl From<EnhanceError> for AppError {
    fn from(err: EnhanceError) -> Self {
        match err {
            EnhanceError::NotConfigured => AppError::ServiceUnavailable(err.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

pub fn build_prompt(description: &str) -> String {
    format!("{PROMPT_PREFIX}{description}")
}

/// First candidate's first text part.
pub fn extract_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()?
        .text
}

/// Thin client over one Gemini model.
pub struct DescriptionEnhancer {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl DescriptionEnhancer {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub async fn enhance(&self, description: &str) -> Result<String, EnhanceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EnhanceError::NotConfigured)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let prompt = build_prompt(description);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnhanceError::Status { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = extract_text(parsed).ok_or(EnhanceError::EmptyResponse)?;

        tracing::debug!(model = %self.config.model, chars = text.len(), "Description enhanced");
        Ok(text)
    }
}
