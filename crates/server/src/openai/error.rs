//! Error types for the `OpenAI` client.

use thiserror::Error;

/// Errors that can occur when interacting with the `OpenAI` API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response had no choices / empty content.
    #[error("empty response from model")]
    EmptyResponse,

    /// Failed to parse response content.
    #[error("parse error: {0}")]
    Parse(String),

    /// The call exceeded its deadline and was cancelled.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_error_display() {
        let err = OpenAiError::Api {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): invalid key");

        let err = OpenAiError::Timeout(10);
        assert_eq!(err.to_string(), "request timed out after 10 seconds");
    }
}
