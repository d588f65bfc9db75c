//! Data Factory linked services client.
//!
//! [`LinkedServicesClient`] issues the ARM requests for one resource family
//! through an injected [`Transport`] and decodes the responses into
//! [`adf_models`] types. Retries, authentication and timeouts belong to the
//! transport; this crate surfaces whatever the transport reports.

#![forbid(unsafe_code)]

mod client;
mod error;

pub use client::{CreateOrUpdateOptions, GetOptions, GetResponse, LinkedServicesClient, Page, API_VERSION};
pub use error::{Error, Result};

pub use adf_ids::{FactoryId, IdError, LinkedServiceId, ResourceId};
pub use adf_models::{LinkedService, LinkedServiceResource, LinkedServiceResourcePredicate, LinkedServiceType};
pub use adf_transport::{MockTransport, ReqwestTransport, Transport, TransportConfig, TransportError};

/// Typed id of a listed or fetched resource, parsed the way server-returned
/// ids are (static segments case-insensitive). `None` when the resource
/// carries no id.
pub fn linked_service_id(resource: &LinkedServiceResource) -> Result<Option<LinkedServiceId>> {
    match resource.id.as_deref() {
        Some(id) => Ok(Some(LinkedServiceId::parse_insensitively(id)?)),
        None => Ok(None),
    }
}
