//! `typeProperties` of the generic Web linked service, which is itself a union
//! keyed on `authenticationType`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::secret::SecretBase;

/// Fields shared by every web authentication kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebCommonProperties {
    #[serde(default, deserialize_with = "adf_core::field::present")]
    pub url: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAnonymousAuthentication {
    pub url: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebBasicAuthentication {
    pub url: Value,
    pub username: Value,
    pub password: SecretBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebClientCertificateAuthentication {
    pub url: Value,
    /// Base64-encoded PFX file.
    pub pfx: SecretBase,
    pub password: SecretBase,
}

adf_core::discriminated_union! {
    pub enum WebLinkedServiceTypeProperties {
        tag: "authenticationType",
        kinds: WebAuthenticationType,
        base: WebCommonProperties,
        variants: {
            Anonymous(WebAnonymousAuthentication) => "Anonymous",
            Basic(WebBasicAuthentication) => "Basic",
            ClientCertificate(WebClientCertificateAuthentication) => "ClientCertificate",
        }
    }
}

impl WebLinkedServiceTypeProperties {
    /// Endpoint URL, whichever authentication kind is in use.
    pub fn url(&self) -> Option<&Value> {
        match self {
            WebLinkedServiceTypeProperties::Anonymous(a) => Some(&a.url),
            WebLinkedServiceTypeProperties::Basic(b) => Some(&b.url),
            WebLinkedServiceTypeProperties::ClientCertificate(c) => Some(&c.url),
            WebLinkedServiceTypeProperties::Unknown(raw) => raw.base.url.as_ref(),
        }
    }
}
