#![forbid(unsafe_code)]

use adf_core::OpenEnum;

adf_core::open_enum! {
    pub enum SqlServerAuthenticationType {
        Sql => "SQL",
        Windows => "Windows",
        UserAssignedManagedIdentity => "UserAssignedManagedIdentity",
    }
}

#[test]
fn known_values_match_case_insensitively() {
    for input in ["SQL", "sql", "Sql", "sQl"] {
        let parsed = SqlServerAuthenticationType::parse(input);
        assert_eq!(parsed, SqlServerAuthenticationType::Sql);
        assert_eq!(parsed.as_str(), "SQL");
    }
    assert_eq!(
        SqlServerAuthenticationType::parse("userassignedmanagedidentity"),
        SqlServerAuthenticationType::UserAssignedManagedIdentity
    );
}

#[test]
fn unknown_values_are_kept_verbatim() {
    let parsed = SqlServerAuthenticationType::parse("MadeUpValue");
    assert_eq!(parsed, SqlServerAuthenticationType::Unrecognized("MadeUpValue".to_string()));
    assert_eq!(parsed.to_string(), "MadeUpValue");
    assert!(!parsed.is_known());

    // Empty input is just another unknown value
    assert_eq!(SqlServerAuthenticationType::parse("").as_str(), "");
}

#[test]
fn serde_emits_canonical_casing() {
    let parsed: SqlServerAuthenticationType = serde_json::from_str(r#""windows""#).unwrap();
    assert_eq!(parsed, SqlServerAuthenticationType::Windows);
    assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""Windows""#);

    let unknown: SqlServerAuthenticationType = serde_json::from_str(r#""Kerberos""#).unwrap();
    assert_eq!(serde_json::to_string(&unknown).unwrap(), r#""Kerberos""#);
}

#[test]
fn non_string_json_is_rejected() {
    assert!(serde_json::from_str::<SqlServerAuthenticationType>("42").is_err());
}

#[test]
fn possible_values_lists_canonical_forms_in_order() {
    assert_eq!(
        SqlServerAuthenticationType::possible_values(),
        &["SQL", "Windows", "UserAssignedManagedIdentity"]
    );
    assert_eq!(<SqlServerAuthenticationType as OpenEnum>::possible_values().len(), 3);
}

#[test]
fn from_str_never_fails() {
    let parsed: SqlServerAuthenticationType = "WINDOWS".parse().unwrap();
    assert_eq!(parsed, SqlServerAuthenticationType::Windows);
    let generic = <SqlServerAuthenticationType as OpenEnum>::parse("other");
    assert_eq!(generic.as_str(), "other");
}
