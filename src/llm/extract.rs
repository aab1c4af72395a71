//! Response extraction: turning a raw LLM reply into a [`MoveSuggestion`].

use super::error::LLMError;
use super::types::MoveSuggestion;

/// Locate the first `{` and the last `}` in `text`, slice between them
/// (inclusive), and parse the slice as a move suggestion.
///
/// This is intentionally not a balanced-brace scanner: stray `{` or `}`
/// outside the intended object shift the slice, and a shifted slice either
/// fails to parse (extraction error) or parses to whatever the model put
/// there. Callers depend on exactly this first/last-brace behavior.
pub fn scan_json_object(text: &str, provider: &'static str) -> Result<MoveSuggestion, LLMError> {
    let start = text.find('{').ok_or(LLMError::Extraction { provider })?;
    let end = text.rfind('}').ok_or(LLMError::Extraction { provider })?;
    if end < start {
        return Err(LLMError::Extraction { provider });
    }
    parse_move_json(&text[start..=end], provider)
}

/// Parse text that should already be a complete JSON object with
/// `reasoning` and `move` keys. A missing key is an extraction failure,
/// never a partial result.
pub fn parse_move_json(json: &str, provider: &'static str) -> Result<MoveSuggestion, LLMError> {
    serde_json::from_str(json).map_err(|_| LLMError::Extraction { provider })
}

/// Remove literal markdown code-fence markers from a reply. Gemini wraps
/// JSON in ```` ```json ```` blocks more often than not.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}
