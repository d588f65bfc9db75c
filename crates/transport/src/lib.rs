//! The HTTP collaborator behind the linked services client.
//!
//! The client only builds [`Request`]s and decodes [`Response`] bodies; sending
//! them, authentication and status checking live behind [`Transport`]. Two
//! implementations ship here: [`ReqwestTransport`] for ARM and
//! [`MockTransport`] for tests.

#![forbid(unsafe_code)]

mod error;
mod http;
mod mock;
mod request;

pub use error::TransportError;
pub use http::{ReqwestTransport, TransportConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use mock::MockTransport;
pub use request::{Method, Request, Response};

/// Sends one request and returns the response once its status has been
/// checked against [`Request::expected_status`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

/// Longest response body kept in an [`TransportError::UnexpectedStatus`].
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Accept `response` if its status is one the request expects, otherwise turn
/// it into [`TransportError::UnexpectedStatus`]. A request without expected
/// statuses accepts any 2xx.
pub fn ensure_expected_status(request: &Request, response: Response) -> Result<Response, TransportError> {
    let ok = if request.expected_status.is_empty() {
        (200..300).contains(&response.status)
    } else {
        request.expected_status.contains(&response.status)
    };
    if ok {
        return Ok(response);
    }
    Err(TransportError::UnexpectedStatus {
        method: request.method.to_string(),
        url: request.path_or_url.clone(),
        status: response.status,
        body: response.text().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}
