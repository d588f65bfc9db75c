use std::collections::VecDeque;

use tokio::sync::Mutex;

use crate::{ensure_expected_status, Request, Response, Transport, TransportError};

/// In-memory transport for tests: replays queued responses in order and
/// records every request it was given.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Response, TransportError>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock that answers with `responses`, in order.
    pub fn with_responses(responses: impl IntoIterator<Item = Response>) -> Self {
        Self { responses: Mutex::new(responses.into_iter().map(Ok).collect()), requests: Mutex::default() }
    }

    pub async fn push_response(&self, response: Response) {
        self.responses.lock().await.push_back(Ok(response));
    }

    /// Queue a transport failure, e.g. to check errors are surfaced unchanged.
    pub async fn push_error(&self, error: TransportError) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// Requests seen so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }

    pub async fn remaining(&self) -> usize {
        self.responses.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().await.push(request.clone());
        let next = self.responses.lock().await.pop_front();
        match next {
            Some(Ok(response)) => ensure_expected_status(&request, response),
            Some(Err(e)) => Err(e),
            None => Err(TransportError::Mock(format!("no response queued for {} {}", request.method, request.path_or_url))),
        }
    }
}
