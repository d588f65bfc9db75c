//! Typed models for Data Factory linked services.
//!
//! [`LinkedServiceResource`] is the ARM envelope; its `properties` decode into
//! the [`LinkedService`] union, which dispatches on `type` to one entry of the
//! connector table in [`connectors`]. Secrets inside a connector are their own
//! union ([`SecretBase`]), as are the authentication kinds of the Web
//! connector ([`WebLinkedServiceTypeProperties`]).

#![forbid(unsafe_code)]

pub mod common;
pub mod connectors;
pub mod enums;
mod linked_service;
pub mod secret;
pub mod web;

pub use common::{
    CredentialReference, IntegrationRuntimeReference, LinkedServiceBase, LinkedServiceReference, ParameterSpecification,
    ParameterType,
};
pub use linked_service::{
    LinkedService, LinkedServiceListResponse, LinkedServiceResource, LinkedServiceResourcePredicate, LinkedServiceType,
};
pub use secret::{AzureKeyVaultSecretReference, SecretBase, SecretType, SecureString};
pub use web::{WebAuthenticationType, WebLinkedServiceTypeProperties};

pub use adf_core::{DecodeError, OpenEnum, RawEnvelope};
