//! Error types for the Gemini adapter

use debate_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no text (finish reason: {finish_reason})")]
    Empty { finish_reason: String },
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Transport(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Empty { finish_reason } => GatewayError::EmptyResponse { finish_reason },
            other @ (GeminiError::Transport(_)
            | GeminiError::Api { .. }
            | GeminiError::ParseError { .. }) => GatewayError::RequestFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_maps_to_empty_response() {
        let err: GatewayError = GeminiError::Empty {
            finish_reason: "SAFETY".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::EmptyResponse { finish_reason } if finish_reason == "SAFETY"));
    }

    #[test]
    fn test_api_error_maps_to_request_failed() {
        let err: GatewayError = GeminiError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Request failed: API error (HTTP 403): API key not valid"
        );
    }
}
