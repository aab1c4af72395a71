//! LLM provider routing, adapters, and response extraction.

mod anthropic;
mod error;
mod extract;
mod gemini;
mod openai;
mod provider;
mod router;
mod types;

pub use error::LLMError;
pub use provider::MoveProvider;
pub use router::{provider_for, suggest_move};
pub use types::MoveSuggestion;
