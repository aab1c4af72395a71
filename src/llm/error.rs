//! LLM error types.

use thiserror::Error;

/// Errors that can occur when routing to a provider or making an LLM call.
///
/// Every failure is terminal for its request: there are no retries and no
/// partial results.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP transport failure (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor returned a non-success status. The message is the raw
    /// response body, passed through to the caller verbatim.
    #[error("{provider} returned status {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// The vendor replied but the reply contained no parseable move JSON.
    #[error("could not parse JSON from {provider} response")]
    Extraction { provider: &'static str },

    /// The model identifier matched no known provider substring.
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_passes_body_through() {
        let err = LLMError::Api {
            provider: "openai",
            status: 401,
            message: "invalid api key".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("openai"));
        assert!(text.contains("401"));
        assert!(text.contains("invalid api key"));
    }

    #[test]
    fn extraction_error_names_provider() {
        let err = LLMError::Extraction { provider: "gemini" };
        assert_eq!(
            err.to_string(),
            "could not parse JSON from gemini response"
        );
    }

    #[test]
    fn unsupported_model_names_identifier() {
        let err = LLMError::UnsupportedModel("llama-3".to_string());
        assert_eq!(err.to_string(), "unsupported model: llama-3");
    }
}
