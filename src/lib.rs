//! Grandmaster - a thin backend that forwards a chess game to an LLM and
//! asks it for the next move.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
