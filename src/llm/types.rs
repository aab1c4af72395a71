//! Common types and prompt templates for move suggestions.

use serde::{Deserialize, Serialize};

/// A normalized move suggestion extracted from an LLM reply.
///
/// The move is whatever string the model returned; it is not validated
/// against chess rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSuggestion {
    pub reasoning: String,
    #[serde(rename = "move")]
    pub best_move: String,
}

/// The grandmaster prompt for a PGN move list. The PGN is interpolated
/// verbatim, malformed input included.
pub(crate) fn move_prompt(pgn: &str) -> String {
    format!(
        "You are a chess grandmaster.\n\
         PGN: {pgn}\n\
         Analyze the position and determine the best move for the side to move.\n\
         Provide your response in JSON format with two keys: \"reasoning\" (string) \
         and \"move\" (string, UCI format e.g. e2e4).\n"
    )
}

/// Variant for vendors without a JSON response mode: asks for a bare JSON
/// object and nothing else.
pub(crate) fn move_prompt_json_only(pgn: &str) -> String {
    format!(
        "You are a chess grandmaster.\n\
         PGN: {pgn}\n\
         Analyze the position and determine the best move for the side to move.\n\
         Return ONLY a JSON object with keys: \"reasoning\" and \"move\" \
         (string, UCI format e.g. e2e4).\n"
    )
}
