//! Types shared by every linked service: the common envelope fields and the
//! reference objects that point at other factory resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

adf_core::open_enum! {
    pub enum IntegrationRuntimeReferenceType {
        IntegrationRuntimeReference => "IntegrationRuntimeReference",
    }
}

adf_core::open_enum! {
    pub enum LinkedServiceReferenceType {
        LinkedServiceReference => "LinkedServiceReference",
    }
}

adf_core::open_enum! {
    pub enum CredentialReferenceType {
        CredentialReference => "CredentialReference",
    }
}

adf_core::open_enum! {
    /// Declared type of a linked service parameter.
    pub enum ParameterType {
        Array => "Array",
        Bool => "Bool",
        Float => "Float",
        Int => "Int",
        Object => "Object",
        SecureString => "SecureString",
        String => "String",
    }
}

/// Fields every linked service carries next to its `type` and `typeProperties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_via: Option<IntegrationRuntimeReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, ParameterSpecification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRuntimeReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
    pub reference_name: String,
    #[serde(rename = "type")]
    pub kind: IntegrationRuntimeReferenceType,
}

impl IntegrationRuntimeReference {
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            parameters: None,
            reference_name: reference_name.into(),
            kind: IntegrationRuntimeReferenceType::IntegrationRuntimeReference,
        }
    }
}

/// Pointer to another linked service in the same factory, e.g. the Key Vault
/// holding a secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedServiceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
    pub reference_name: String,
    #[serde(rename = "type")]
    pub kind: LinkedServiceReferenceType,
}

impl LinkedServiceReference {
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            parameters: None,
            reference_name: reference_name.into(),
            kind: LinkedServiceReferenceType::LinkedServiceReference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialReference {
    pub reference_name: String,
    #[serde(rename = "type")]
    pub kind: CredentialReferenceType,
}

impl CredentialReference {
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self { reference_name: reference_name.into(), kind: CredentialReferenceType::CredentialReference }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpecification {
    #[serde(default, deserialize_with = "adf_core::field::present", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(rename = "type")]
    pub kind: ParameterType,
}
