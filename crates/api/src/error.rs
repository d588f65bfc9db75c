use adf_ids::IdError;
use adf_transport::TransportError;

/// Errors returned by [`LinkedServicesClient`](crate::LinkedServicesClient).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network failure or unexpected status, as reported by the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("decoding {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding {target}: {source}")]
    Encode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Id(#[from] IdError),
}

impl Error {
    /// HTTP status behind the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
