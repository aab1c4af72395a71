//! OpenAI adapter using the chat-completions JSON response mode.
//!
//! The vendor guarantees a syntactically valid JSON object in the reply
//! body, so extraction here is a plain parse with no brace scanning.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::extract;
use super::provider::MoveProvider;
use super::types::{MoveSuggestion, move_prompt};

const SYSTEM_PROMPT: &str = "You are a chess engine. Output JSON.";

#[derive(Debug)]
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAIProvider {
    pub const NAME: &'static str = "openai";

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
impl MoveProvider for OpenAIProvider {
    async fn suggest_move(&self, pgn: &str) -> Result<MoveSuggestion, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = Request {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: move_prompt(pgn),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
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
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LLMError::Extraction {
                provider: Self::NAME,
            })?;

        extract::parse_move_json(&content, Self::NAME)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

// --- Wire types ---

#[derive(serde::Serialize)]
struct Request {
    model: String,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(serde::Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(serde::Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(serde::Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(serde::Deserialize)]
struct ResponseMessage {
    content: String,
}
