//! Provider trait for LLM move suggestions.

use async_trait::async_trait;

use super::error::LLMError;
use super::types::MoveSuggestion;

/// One LLM vendor with its own API format.
///
/// An adapter holds a caller-supplied credential and makes exactly one
/// outbound completion request per call: no retries, no caching, vendor
/// default timeouts. Any failure during the call converts to [`LLMError`]
/// rather than propagating as a panic.
#[async_trait]
pub trait MoveProvider: Send + Sync + std::fmt::Debug {
    /// Ask the vendor for the best move in the given PGN and normalize
    /// the reply.
    async fn suggest_move(&self, pgn: &str) -> Result<MoveSuggestion, LLMError>;

    /// Provider name, used for logging and extraction errors.
    fn name(&self) -> &'static str;
}
