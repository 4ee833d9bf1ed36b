//! Provider adapters behind the generation gateway
//!
//! Each adapter speaks one provider's HTTP API and normalizes its
//! failures into the engine's [`GenerationError`] taxonomy. The engine
//! never sees a provider-specific error shape.

pub mod anthropic;
pub mod gemini;
pub mod openai;
pub mod routing;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use roundtable_application::GenerationError;
use roundtable_domain::GenerationRequest;

/// One provider's chat-completion capability
///
/// The model id is passed per call so a single client can serve several
/// role bindings against the same provider.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError>;
}

/// Map an HTTP status to the normalized error taxonomy
pub(crate) fn classify_status(status: u16, message: String) -> GenerationError {
    match status {
        401 | 403 => GenerationError::InvalidAuth,
        400 | 404 | 422 => GenerationError::InvalidRequest(message),
        429 => GenerationError::RateLimited,
        status => GenerationError::ServerError { status, message },
    }
}

/// Map a transport-level failure to the normalized error taxonomy
pub(crate) fn classify_transport(error: reqwest::Error) -> GenerationError {
    if error.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::ServerError {
            status: 0,
            message: error.to_string(),
        }
    }
}

/// Pass through a successful response, classify everything else
pub(crate) async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(classify_status(status.as_u16(), message))
}

/// A provider answered 2xx but carried no usable text
pub(crate) fn empty_completion() -> GenerationError {
    GenerationError::ServerError {
        status: 200,
        message: "response carried no text content".to_string(),
    }
}

/// A 2xx body that does not parse as the provider's response shape
pub(crate) fn malformed_response(error: impl std::fmt::Display) -> GenerationError {
    GenerationError::ServerError {
        status: 200,
        message: format!("malformed response body: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification_table() {
        assert_eq!(
            classify_status(401, "no key".into()),
            GenerationError::InvalidAuth
        );
        assert_eq!(
            classify_status(403, "forbidden".into()),
            GenerationError::InvalidAuth
        );
        assert_eq!(
            classify_status(400, "bad body".into()),
            GenerationError::InvalidRequest("bad body".into())
        );
        assert_eq!(
            classify_status(404, "no model".into()),
            GenerationError::InvalidRequest("no model".into())
        );
        assert_eq!(
            classify_status(429, "slow down".into()),
            GenerationError::RateLimited
        );
        assert_eq!(
            classify_status(503, "overloaded".into()),
            GenerationError::ServerError {
                status: 503,
                message: "overloaded".into()
            }
        );
    }

    #[test]
    fn test_fatal_and_transient_split_survives_classification() {
        assert!(!classify_status(401, String::new()).is_transient());
        assert!(!classify_status(422, String::new()).is_transient());
        assert!(classify_status(429, String::new()).is_transient());
        assert!(classify_status(500, String::new()).is_transient());
    }
}
