//! Secret values: either inline or a pointer into Azure Key Vault.
//!
//! Connector structs declare each secret field as [`SecretBase`] (or, where the
//! service only accepts vault references, [`AzureKeyVaultSecretReference`]).
//! Every field decodes through the union's own `Deserialize`, so a struct can
//! hold several secrets of different kinds next to ordinary scalars.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::common::LinkedServiceReference;

/// A secret stored in Azure Key Vault, reached through a Key Vault linked service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureKeyVaultSecretReference {
    pub store: LinkedServiceReference,
    /// Secret name; a string or an expression.
    pub secret_name: Value,
    #[serde(default, deserialize_with = "adf_core::field::present")]
    pub secret_version: Option<Value>,
}

impl AzureKeyVaultSecretReference {
    pub const TYPE: &'static str = "AzureKeyVaultSecret";

    pub fn new(store: impl Into<String>, secret_name: impl Into<String>) -> Self {
        Self {
            store: LinkedServiceReference::new(store),
            secret_name: Value::String(secret_name.into()),
            secret_version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.secret_version = Some(Value::String(version.into()));
        self
    }
}

// Also used directly as a field type, outside the union, so it writes its own
// discriminator.
impl Serialize for AzureKeyVaultSecretReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            store: &'a LinkedServiceReference,
            secret_name: &'a Value,
            #[serde(skip_serializing_if = "Option::is_none")]
            secret_version: Option<&'a Value>,
        }

        Wire {
            kind: Self::TYPE,
            store: &self.store,
            secret_name: &self.secret_name,
            secret_version: self.secret_version.as_ref(),
        }
        .serialize(serializer)
    }
}

/// An inline secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureString {
    pub value: String,
}

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString").field("value", &"***").finish()
    }
}

adf_core::discriminated_union! {
    /// A secret field value.
    pub enum SecretBase {
        tag: "type",
        kinds: SecretType,
        base: adf_core::NoCommonFields,
        variants: {
            AzureKeyVaultSecret(AzureKeyVaultSecretReference) => "AzureKeyVaultSecret",
            SecureString(SecureString) => "SecureString",
        }
    }
}

impl SecretBase {
    pub fn secure_string(value: impl Into<String>) -> Self {
        SecretBase::SecureString(SecureString::new(value))
    }

    pub fn key_vault(store: impl Into<String>, secret_name: impl Into<String>) -> Self {
        SecretBase::AzureKeyVaultSecret(AzureKeyVaultSecretReference::new(store, secret_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn secure_string_debug_is_redacted() {
        let s = SecretBase::secure_string("hunter2");
        let printed = format!("{s:?}");
        assert!(!printed.contains("hunter2"), "{printed}");
        assert!(printed.contains("***"));
    }

    #[test]
    fn direct_vault_reference_writes_its_type() {
        let r = AzureKeyVaultSecretReference::new("kv", "pwd").with_version("3");
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({
                "type": "AzureKeyVaultSecret",
                "store": {"referenceName": "kv", "type": "LinkedServiceReference"},
                "secretName": "pwd",
                "secretVersion": "3"
            })
        );
    }
}
