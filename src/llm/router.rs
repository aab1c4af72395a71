//! Model-to-provider routing and the per-request provider factory.

use tracing::debug;

use crate::config::LlmConfig;

use super::anthropic::AnthropicProvider;
use super::error::LLMError;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::provider::MoveProvider;
use super::types::MoveSuggestion;

/// Select a provider by substring containment on the model identifier.
///
/// Matching is case-sensitive and tested in a fixed order (`gpt`, then
/// `claude`, then `gemini`), so an identifier containing several vendor
/// substrings resolves to the first match. No normalization, no alias
/// table.
///
/// Adapters are constructed fresh for every request: the credential is
/// caller-supplied and must not outlive the request, so there is nothing
/// to share or cache.
pub fn provider_for(
    model: &str,
    api_key: &str,
    config: &LlmConfig,
) -> Result<Box<dyn MoveProvider>, LLMError> {
    if model.contains("gpt") {
        Ok(Box::new(OpenAIProvider::new(
            config.openai_base_url.clone(),
            api_key.to_string(),
            model.to_string(),
        )))
    } else if model.contains("claude") {
        Ok(Box::new(AnthropicProvider::new(
            config.anthropic_base_url.clone(),
            api_key.to_string(),
            model.to_string(),
            config.max_tokens,
        )))
    } else if model.contains("gemini") {
        Ok(Box::new(GeminiProvider::new(
            config.gemini_base_url.clone(),
            api_key.to_string(),
            model.to_string(),
        )))
    } else {
        Err(LLMError::UnsupportedModel(model.to_string()))
    }
}

/// Route a move request to the matching provider and return the
/// normalized suggestion.
pub async fn suggest_move(
    pgn: &str,
    model: &str,
    api_key: &str,
    config: &LlmConfig,
) -> Result<MoveSuggestion, LLMError> {
    let provider = provider_for(model, api_key, config)?;
    debug!(provider = provider.name(), model, "dispatching move request");
    provider.suggest_move(pgn).await
}
