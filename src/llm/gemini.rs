//! Gemini adapter using the generateContent REST API.
//!
//! Gemini tends to wrap JSON replies in markdown code fences, so the raw
//! text is defenced before it reaches the scanning extractor.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::extract;
use super::provider::MoveProvider;
use super::types::{MoveSuggestion, move_prompt_json_only};

#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub const NAME: &'static str = "gemini";

    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl MoveProvider for GeminiProvider {
    async fn suggest_move(&self, pgn: &str) -> Result<MoveSuggestion, LLMError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = Request {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: move_prompt_json_only(pgn),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api {
                provider: Self::NAME,
                status,
                message,
            });
        }

        let parsed: Response = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LLMError::Extraction {
                provider: Self::NAME,
            })?;

        let cleaned = extract::strip_code_fences(&text);
        extract::scan_json_object(&cleaned, Self::NAME)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

// --- Wire types ---

#[derive(serde::Serialize)]
struct Request {
    contents: Vec<RequestContent>,
}

#[derive(serde::Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Part {
    text: String,
}

#[derive(serde::Deserialize)]
struct Response {
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}
