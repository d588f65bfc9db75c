use std::sync::Arc;
use std::time::Instant;

use adf_ids::{FactoryId, LinkedServiceId, ResourceId};
use adf_models::{LinkedServiceListResponse, LinkedServiceResource};
use adf_transport::{Method, ReqwestTransport, Request, Response, Transport};
use futures::{Stream, TryStreamExt};
use metrics::counter;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// ARM api-version sent with every request built from a path.
pub const API_VERSION: &str = "2018-06-01";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// ETag of a cached copy; the service answers 304 when it still matches.
    pub if_none_match: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrUpdateOptions {
    /// Only update when the stored ETag matches; `"*"` matches any.
    pub if_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetResponse {
    pub status: u16,
    pub etag: Option<String>,
    /// `None` when the service answered 304 Not Modified.
    pub model: Option<LinkedServiceResource>,
}

impl GetResponse {
    pub fn not_modified(&self) -> bool {
        self.status == 304
    }
}

/// One page of a factory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<LinkedServiceResource>,
    /// Absolute URL of the next page; `None` on the last page.
    pub next_link: Option<String>,
}

impl From<LinkedServiceListResponse> for Page {
    fn from(resp: LinkedServiceListResponse) -> Self {
        let next_link = resp.next_link().map(str::to_owned);
        Self { items: resp.value, next_link }
    }
}

enum Cursor {
    First(FactoryId),
    Next(String),
    Done,
}

/// CRUD and listing for the linked services of a factory.
#[derive(Clone)]
pub struct LinkedServicesClient {
    transport: Arc<dyn Transport>,
}

impl LinkedServicesClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client over [`ReqwestTransport`] configured from `ADF_*` env vars.
    pub fn from_env() -> Result<Self> {
        let transport = ReqwestTransport::from_env()?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub async fn get(&self, id: &LinkedServiceId, options: GetOptions) -> Result<GetResponse> {
        let t0 = Instant::now();
        let path = id.id();
        info!(id = %path, "api: get start");
        let request = arm_request(Method::GET, &path)
            .optional_header("If-None-Match", options.if_none_match.as_deref())
            .expect(&[200, 304]);
        let response = self.send("get", request).await?;

        let model = if response.status == 304 {
            None
        } else {
            Some(decode::<LinkedServiceResource>("LinkedServiceResource", &response)?)
        };
        let etag = response
            .header("ETag")
            .map(str::to_owned)
            .or_else(|| model.as_ref().and_then(|m| m.etag.clone()));
        info!(id = %path, status = response.status, took_ms = %t0.elapsed().as_millis(), "api: get ok");
        Ok(GetResponse { status: response.status, etag, model })
    }

    pub async fn create_or_update(
        &self,
        id: &LinkedServiceId,
        resource: &LinkedServiceResource,
        options: CreateOrUpdateOptions,
    ) -> Result<LinkedServiceResource> {
        let t0 = Instant::now();
        let path = id.id();
        info!(id = %path, kind = %resource.properties.tag(), "api: create_or_update start");
        let body = serde_json::to_vec(resource)
            .map_err(|source| Error::Encode { target: "LinkedServiceResource", source })?;
        let request = arm_request(Method::PUT, &path)
            .optional_header("If-Match", options.if_match.as_deref())
            .json_body(body)
            .expect(&[200]);
        let response = self.send("create_or_update", request).await?;
        let model = decode::<LinkedServiceResource>("LinkedServiceResource", &response)?;
        info!(id = %path, took_ms = %t0.elapsed().as_millis(), "api: create_or_update ok");
        Ok(model)
    }

    /// Delete a linked service. Returns `false` when there was nothing to delete
    /// (204).
    pub async fn delete(&self, id: &LinkedServiceId) -> Result<bool> {
        let t0 = Instant::now();
        let path = id.id();
        info!(id = %path, "api: delete start");
        let response = self.send("delete", arm_request(Method::DELETE, &path).expect(&[200, 204])).await?;
        let existed = response.status == 200;
        info!(id = %path, existed, took_ms = %t0.elapsed().as_millis(), "api: delete ok");
        Ok(existed)
    }

    /// First page of the factory's linked services.
    pub async fn list_by_factory(&self, factory_id: &FactoryId) -> Result<Page> {
        let path = format!("{}/linkedServices", factory_id.id());
        self.list_page(arm_request(Method::GET, &path).expect(&[200])).await
    }

    /// The page behind a `nextLink`. The link already carries its query, so it
    /// is sent unchanged.
    pub async fn list_by_factory_next(&self, next_link: &str) -> Result<Page> {
        self.list_page(Request::get(next_link).expect(&[200])).await
    }

    /// Every page in order, following `nextLink` until it is empty.
    pub fn pages<'a>(&'a self, factory_id: &FactoryId) -> impl Stream<Item = Result<Page>> + 'a {
        futures::stream::try_unfold(Cursor::First(factory_id.clone()), move |cursor| async move {
            let page = match cursor {
                Cursor::First(factory_id) => self.list_by_factory(&factory_id).await?,
                Cursor::Next(link) => self.list_by_factory_next(&link).await?,
                Cursor::Done => return Ok(None),
            };
            let next = match &page.next_link {
                Some(link) => Cursor::Next(link.clone()),
                None => Cursor::Done,
            };
            Ok::<_, Error>(Some((page, next)))
        })
    }

    /// All linked services of the factory, every page drained.
    pub async fn list_by_factory_complete(&self, factory_id: &FactoryId) -> Result<Vec<LinkedServiceResource>> {
        self.list_by_factory_complete_matching(factory_id, |_| true).await
    }

    /// All linked services of the factory for which `predicate` holds.
    pub async fn list_by_factory_complete_matching<F>(
        &self,
        factory_id: &FactoryId,
        predicate: F,
    ) -> Result<Vec<LinkedServiceResource>>
    where
        F: Fn(&LinkedServiceResource) -> bool,
    {
        let t0 = Instant::now();
        info!(factory = %factory_id.id(), "api: list complete start");
        let pages = self.pages(factory_id);
        futures::pin_mut!(pages);
        let mut items = Vec::new();
        let mut seen = 0usize;
        let mut page_count = 0usize;
        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            seen += page.items.len();
            items.extend(page.items.into_iter().filter(|r| predicate(r)));
        }
        info!(
            factory = %factory_id.id(),
            pages = page_count,
            seen,
            items = items.len(),
            took_ms = %t0.elapsed().as_millis(),
            "api: list complete ok"
        );
        Ok(items)
    }

    async fn list_page(&self, request: Request) -> Result<Page> {
        let url = request.path_or_url.clone();
        let response = self.send("list_by_factory", request).await?;
        let page: Page = decode::<LinkedServiceListResponse>("LinkedServiceListResponse", &response)?.into();
        counter!("adf_list_pages_total", 1u64);
        debug!(url = %url, items = page.items.len(), has_next = page.next_link.is_some(), "api: list page");
        Ok(page)
    }

    async fn send(&self, op: &'static str, request: Request) -> Result<Response> {
        counter!("adf_requests_total", 1u64, "op" => op);
        match self.transport.execute(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                counter!("adf_request_errors_total", 1u64, "op" => op);
                warn!(op, error = %e, "api: request failed");
                Err(e.into())
            }
        }
    }
}

fn arm_request(method: Method, path: &str) -> Request {
    Request::new(method, path).query("api-version", API_VERSION)
}

fn decode<T: DeserializeOwned>(target: &'static str, response: &Response) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|source| Error::Decode { target, source })
}
