use std::fmt;
use std::time::{Duration, Instant};

use metrics::histogram;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::{ensure_expected_status, Request, Response, Transport, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Settings for [`ReqwestTransport`].
#[derive(Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// ARM endpoint; relative paths are appended below its path.
    pub endpoint: String,
    /// Pre-acquired bearer token, sent verbatim.
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), bearer_token: None, timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl TransportConfig {
    /// Read `ADF_ENDPOINT`, `ADF_BEARER_TOKEN` and `ADF_TIMEOUT_SECS`, falling
    /// back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("ADF_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let bearer_token = std::env::var("ADF_BEARER_TOKEN").ok().filter(|s| !s.is_empty());
        let timeout_secs = std::env::var("ADF_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self { endpoint, bearer_token, timeout_secs }
    }
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("endpoint", &self.endpoint)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// [`Transport`] over reqwest. Sends each request once; retries and token
/// refresh are left to whoever builds the config.
pub struct ReqwestTransport {
    http: reqwest::Client,
    endpoint: Url,
    bearer_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let mut endpoint = Url::parse(&config.endpoint)
            .map_err(|source| TransportError::InvalidUrl { url: config.endpoint.clone(), source })?;
        // Paths are joined below the endpoint, so a prefix such as `/arm` is kept.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { http, endpoint, bearer_token: config.bearer_token })
    }

    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(TransportConfig::from_env())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Absolute URL for `request`: next links pass through, paths are appended
    /// to the endpoint's own path, then the request's query pairs are appended.
    pub fn resolve(&self, request: &Request) -> Result<Url, TransportError> {
        let parsed = if request.is_absolute() {
            Url::parse(&request.path_or_url)
        } else {
            self.endpoint.join(&format!("./{}", request.path_or_url.trim_start_matches('/')))
        };
        let mut url =
            parsed.map_err(|source| TransportError::InvalidUrl { url: request.path_or_url.clone(), source })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let t0 = Instant::now();
        let url = self.resolve(&request)?;
        let request_id = Uuid::new_v4().to_string();

        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .header(ACCEPT, "application/json")
            .header(CLIENT_REQUEST_ID, request_id.as_str());
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body.clone());
        }

        let sent = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(method = %request.method, url = %url, request_id = %request_id, error = %e, "transport: send failed");
                return Err(e.into());
            }
        };
        let status = sent.status().as_u16();
        let headers = sent
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = sent.bytes().await?.to_vec();

        histogram!("adf_request_latency_ms", t0.elapsed().as_secs_f64() * 1000.0);
        debug!(
            method = %request.method,
            url = %url,
            request_id = %request_id,
            status,
            bytes = body.len(),
            took_ms = %t0.elapsed().as_millis(),
            "transport: response"
        );
        ensure_expected_status(&request, Response { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(TransportConfig::default()).unwrap()
    }

    #[test]
    fn relative_paths_join_the_endpoint() {
        let req = Request::get("/subscriptions/s/resourceGroups/rg").query("api-version", "2018-06-01");
        let url = transport().resolve(&req).unwrap();
        assert_eq!(
            url.as_str(),
            "https://management.azure.com/subscriptions/s/resourceGroups/rg?api-version=2018-06-01"
        );
    }

    #[test]
    fn absolute_links_pass_through() {
        let link = "https://management.azure.com/subscriptions/s/x?api-version=2018-06-01&%24skipToken=abc";
        let url = transport().resolve(&Request::get(link)).unwrap();
        assert_eq!(url.as_str(), link);
    }

    #[test]
    fn endpoint_path_prefix_is_kept() {
        for endpoint in ["https://proxy.example.com/arm", "https://proxy.example.com/arm/"] {
            let cfg = TransportConfig { endpoint: endpoint.into(), ..Default::default() };
            let transport = ReqwestTransport::new(cfg).unwrap();
            let req = Request::get("/subscriptions/s/resourceGroups/rg").query("api-version", "2018-06-01");
            assert_eq!(
                transport.resolve(&req).unwrap().as_str(),
                "https://proxy.example.com/arm/subscriptions/s/resourceGroups/rg?api-version=2018-06-01"
            );
        }
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let cfg = TransportConfig { endpoint: "not a url".into(), ..Default::default() };
        assert!(matches!(ReqwestTransport::new(cfg), Err(TransportError::InvalidUrl { .. })));
    }

    #[test]
    fn debug_hides_the_token() {
        let cfg = TransportConfig { bearer_token: Some("eyJ0eXAi".into()), ..Default::default() };
        assert!(!format!("{cfg:?}").contains("eyJ0eXAi"));
    }
}
