#![forbid(unsafe_code)]

use adf_models::connectors::{PostgreSqlLinkedService, PostgreSqlLinkedServiceTypeProperties};
use adf_models::web::{WebAnonymousAuthentication, WebBasicAuthentication, WebClientCertificateAuthentication};
use adf_models::{
    AzureKeyVaultSecretReference, LinkedService, SecretBase, SecretType, WebAuthenticationType,
    WebLinkedServiceTypeProperties,
};
use serde_json::{json, Value};

fn decode(v: Value) -> LinkedService {
    serde_json::from_value(v).expect("decode linked service")
}

#[test]
fn two_secrets_in_one_struct_dispatch_independently() {
    let input = json!({
        "type": "ServiceNow",
        "typeProperties": {
            "endpoint": "https://x.service-now.com",
            "authenticationType": "OAuth2",
            "username": "svc",
            "password": {"type": "SecureString", "value": "p@ss"},
            "clientSecret": {
                "type": "azurekeyvaultsecret",
                "store": {"referenceName": "kv", "type": "LinkedServiceReference"},
                "secretName": "sn-secret"
            }
        }
    });
    let ls = decode(input);
    let sn = match &ls {
        LinkedService::ServiceNow(sn) => sn,
        other => panic!("expected ServiceNow, got {other:?}"),
    };
    let props = &sn.type_properties;
    assert_eq!(props.username, Some(json!("svc")));
    assert_eq!(props.password, Some(SecretBase::secure_string("p@ss")));
    match props.client_secret.as_ref().unwrap() {
        SecretBase::AzureKeyVaultSecret(r) => {
            assert_eq!(r.store.reference_name, "kv");
            assert_eq!(r.secret_name, json!("sn-secret"));
            assert_eq!(r.secret_version, None);
        }
        other => panic!("expected key vault reference, got {other:?}"),
    }

    let out = serde_json::to_value(&ls).unwrap();
    assert_eq!(out["typeProperties"]["password"]["type"], "SecureString");
    assert_eq!(out["typeProperties"]["clientSecret"]["type"], "AzureKeyVaultSecret");
}

#[test]
fn unknown_secret_kind_is_kept() {
    let secret = json!({"type": "ManagedIdentitySecret", "identity": "mi-1"});
    let ls = decode(json!({"type": "SqlServer", "typeProperties": {"password": secret.clone()}}));
    let password = match &ls {
        LinkedService::SqlServer(s) => s.type_properties.password.clone().unwrap(),
        other => panic!("expected SqlServer, got {other:?}"),
    };
    assert!(password.is_unknown());
    assert_eq!(password.kind(), SecretType::Unrecognized("ManagedIdentitySecret".into()));
    assert_eq!(serde_json::to_value(&password).unwrap(), secret);
}

#[test]
fn secret_round_trip_keeps_tag_literal() {
    for secret in [
        SecretBase::secure_string("v"),
        SecretBase::key_vault("kv", "name"),
        SecretBase::AzureKeyVaultSecret(AzureKeyVaultSecretReference::new("kv", "name").with_version("2")),
    ] {
        let out = serde_json::to_value(&secret).unwrap();
        assert_eq!(out["type"], secret.tag());
        let back: SecretBase = serde_json::from_value(out).unwrap();
        assert_eq!(back, secret);
    }
}

#[test]
fn direct_vault_reference_field_carries_type() {
    let props = PostgreSqlLinkedServiceTypeProperties {
        connection_string: json!("host=pg"),
        encrypted_credential: None,
        password: Some(AzureKeyVaultSecretReference::new("kv", "pg-pwd")),
    };
    let ls: LinkedService = PostgreSqlLinkedService::new(props).into();
    let out = serde_json::to_value(&ls).unwrap();
    assert_eq!(out["type"], "PostgreSql");
    assert_eq!(out["typeProperties"]["password"]["type"], "AzureKeyVaultSecret");
    assert_eq!(decode(out), ls);
}

#[test]
fn web_auth_dispatches_on_authentication_type() {
    let input = json!({
        "type": "Web",
        "typeProperties": {
            "authenticationType": "basic",
            "url": "https://example.org/table",
            "username": "u",
            "password": {"type": "SecureString", "value": "p"}
        }
    });
    let ls = decode(input);
    let web = match &ls {
        LinkedService::Web(w) => w,
        other => panic!("expected Web, got {other:?}"),
    };
    assert_eq!(web.type_properties.kind(), WebAuthenticationType::Basic);
    match &web.type_properties {
        WebLinkedServiceTypeProperties::Basic(WebBasicAuthentication { username, .. }) => {
            assert_eq!(username, &json!("u"));
        }
        other => panic!("expected basic auth, got {other:?}"),
    }
    let out = serde_json::to_value(&ls).unwrap();
    assert_eq!(out["typeProperties"]["authenticationType"], "Basic");
    assert_eq!(out["type"], "Web");
}

#[test]
fn web_client_certificate_round_trip() {
    let props = WebLinkedServiceTypeProperties::ClientCertificate(WebClientCertificateAuthentication {
        url: json!("https://example.org"),
        pfx: SecretBase::secure_string("cGZ4"),
        password: SecretBase::key_vault("kv", "pfx-pwd"),
    });
    let out = serde_json::to_value(&props).unwrap();
    assert_eq!(out["authenticationType"], "ClientCertificate");
    assert_eq!(out.get("type"), None);
    let back: WebLinkedServiceTypeProperties = serde_json::from_value(out).unwrap();
    assert_eq!(back, props);
}

#[test]
fn unknown_web_auth_keeps_url() {
    let input = json!({"authenticationType": "Kerberos", "url": "https://example.org", "realm": "R"});
    let props: WebLinkedServiceTypeProperties = serde_json::from_value(input.clone()).unwrap();
    assert!(props.is_unknown());
    assert_eq!(props.url(), Some(&json!("https://example.org")));
    assert_eq!(serde_json::to_value(&props).unwrap(), input);
}

#[test]
fn web_anonymous_round_trip() {
    let props: WebLinkedServiceTypeProperties =
        WebAnonymousAuthentication { url: json!("https://example.com/data") }.into();
    let out = serde_json::to_value(&props).unwrap();
    assert_eq!(out, json!({"authenticationType": "Anonymous", "url": "https://example.com/data"}));

    let back: WebLinkedServiceTypeProperties =
        serde_json::from_value(json!({"authenticationType": "anonymous", "url": "https://example.com/data"})).unwrap();
    assert_eq!(back.kind(), WebAuthenticationType::Anonymous);
    assert_eq!(back, props);
    assert_eq!(serde_json::to_value(&back).unwrap()["authenticationType"], "Anonymous");
}

#[test]
fn null_secret_version_survives_a_round_trip() {
    let mut reference = AzureKeyVaultSecretReference::new("kv", "pg-password");
    reference.secret_version = Some(Value::Null);
    let out = serde_json::to_value(&reference).unwrap();
    assert_eq!(out["secretVersion"], Value::Null);
    assert!(out.as_object().unwrap().contains_key("secretVersion"));

    let back: AzureKeyVaultSecretReference = serde_json::from_value(out).unwrap();
    assert_eq!(back, reference);
}
