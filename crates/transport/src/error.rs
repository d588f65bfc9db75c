/// Failures raised by a [`Transport`](crate::Transport).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{method} {url} returned unexpected status {status}: {body}")]
    UnexpectedStatus { method: String, url: String, status: u16, body: String },

    #[error("mock transport: {0}")]
    Mock(String),
}

impl TransportError {
    /// HTTP status of an unexpected response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::UnexpectedStatus { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::InvalidUrl { .. } | TransportError::Mock(_) => None,
        }
    }
}
