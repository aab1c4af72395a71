//! Anthropic adapter using the native messages API.
//!
//! There is no strict JSON mode here, so the reply goes through the
//! scanning extractor.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::extract;
use super::provider::MoveProvider;
use super::types::{MoveSuggestion, move_prompt};

#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub const NAME: &'static str = "anthropic";
    pub const API_VERSION: &'static str = "2023-06-01";

    pub fn new(base_url: String, api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl MoveProvider for AnthropicProvider {
    async fn suggest_move(&self, pgn: &str) -> Result<MoveSuggestion, LLMError> {
        let url = format!("{}/v1/messages", self.base_url);

        let body = Request {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: move_prompt(pgn),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", Self::API_VERSION)
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
            .content
            .into_iter()
            .filter(|c| c.content_type == "text")
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");

        extract::scan_json_object(&text, Self::NAME)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

// --- Wire types ---

#[derive(serde::Serialize)]
struct Request {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(serde::Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(serde::Deserialize)]
struct Response {
    content: Vec<Content>,
}

#[derive(serde::Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    text: String,
}
