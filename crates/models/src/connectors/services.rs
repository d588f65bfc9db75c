//! SaaS applications, HTTP endpoints and Azure compute services.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::common::CredentialReference;
use crate::enums::{
    GoogleBigQueryAuthenticationType, HttpAuthenticationType, ODataAadServicePrincipalCredentialType,
    ODataAuthenticationType, RestServiceAuthenticationType, ServiceNowAuthenticationType,
};
use crate::secret::SecretBase;
use crate::web::WebLinkedServiceTypeProperties;

connector! {
    /// Azure Key Vault; the store other linked services point at for secrets.
    AzureKeyVaultLinkedService => AzureKeyVaultLinkedServiceTypeProperties {
        required {
            base_url: Value,
        }
        optional {
            credential: CredentialReference,
        }
    }
}

connector! {
    AzureFunctionLinkedService => AzureFunctionLinkedServiceTypeProperties {
        required {
            function_app_url: Value,
        }
        optional {
            authentication: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            function_key: SecretBase,
            resource_id: Value,
        }
    }
}

connector! {
    AzureDatabricksLinkedService => AzureDatabricksLinkedServiceTypeProperties {
        required {
            domain: Value,
        }
        optional {
            access_token: SecretBase,
            authentication: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            existing_cluster_id: Value,
            instance_pool_id: Value,
            new_cluster_custom_tags: BTreeMap<String, Value>,
            new_cluster_driver_node_type: Value,
            new_cluster_enable_elastic_disk: Value,
            new_cluster_init_scripts: Value,
            new_cluster_log_destination: Value,
            new_cluster_node_type: Value,
            new_cluster_num_of_worker: Value,
            new_cluster_spark_conf: BTreeMap<String, Value>,
            new_cluster_spark_env_vars: BTreeMap<String, Value>,
            new_cluster_version: Value,
            policy_id: Value,
            workspace_resource_id: Value,
        }
    }
}

connector! {
    /// Amazon Marketplace Web Service.
    AmazonMwsLinkedService => AmazonMwsLinkedServiceTypeProperties {
        required {
            access_key_id: Value,
            endpoint: Value,
            #[serde(rename = "marketplaceID")]
            marketplace_id: Value,
            #[serde(rename = "sellerID")]
            seller_id: Value,
        }
        optional {
            encrypted_credential: String,
            mws_auth_token: SecretBase,
            secret_key: SecretBase,
            use_encrypted_endpoints: Value,
            use_host_verification: Value,
            use_peer_verification: Value,
        }
    }
}

connector! {
    SalesforceLinkedService => SalesforceLinkedServiceTypeProperties {
        optional {
            api_version: Value,
            encrypted_credential: String,
            environment_url: Value,
            password: SecretBase,
            security_token: SecretBase,
            username: Value,
        }
    }
}

connector! {
    /// Dynamics 365 / Dynamics CRM.
    DynamicsLinkedService => DynamicsLinkedServiceTypeProperties {
        required {
            authentication_type: Value,
            deployment_type: Value,
        }
        optional {
            credential: CredentialReference,
            encrypted_credential: String,
            host_name: Value,
            organization_name: Value,
            password: SecretBase,
            port: Value,
            service_principal_credential: SecretBase,
            service_principal_credential_type: Value,
            service_principal_id: Value,
            service_uri: Value,
            user_name: Value,
        }
    }
}

connector! {
    ServiceNowLinkedService => ServiceNowLinkedServiceTypeProperties {
        required {
            authentication_type: ServiceNowAuthenticationType,
            endpoint: Value,
        }
        optional {
            client_id: Value,
            client_secret: SecretBase,
            encrypted_credential: String,
            password: SecretBase,
            use_encrypted_endpoints: Value,
            use_host_verification: Value,
            use_peer_verification: Value,
            username: Value,
        }
    }
}

connector! {
    GoogleBigQueryLinkedService => GoogleBigQueryLinkedServiceTypeProperties {
        required {
            authentication_type: GoogleBigQueryAuthenticationType,
            project: Value,
        }
        optional {
            additional_projects: Value,
            client_id: SecretBase,
            client_secret: SecretBase,
            email: Value,
            encrypted_credential: String,
            key_file_path: Value,
            refresh_token: SecretBase,
            request_google_drive_scope: Value,
            trusted_cert_path: Value,
            use_system_trust_store: Value,
        }
    }
}

connector! {
    RestServiceLinkedService => RestServiceLinkedServiceTypeProperties {
        required {
            authentication_type: RestServiceAuthenticationType,
            url: Value,
        }
        optional {
            aad_resource_id: Value,
            auth_headers: Value,
            azure_cloud_type: Value,
            client_id: Value,
            client_secret: SecretBase,
            credential: CredentialReference,
            enable_server_certificate_validation: Value,
            encrypted_credential: String,
            password: SecretBase,
            resource: Value,
            scope: Value,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            tenant: Value,
            token_endpoint: Value,
            user_name: Value,
        }
    }
}

connector! {
    /// Generic HTTP file source.
    HttpLinkedService => HttpLinkedServiceTypeProperties {
        required {
            url: Value,
        }
        optional {
            auth_headers: Value,
            authentication_type: HttpAuthenticationType,
            cert_thumbprint: Value,
            embedded_cert_data: Value,
            enable_server_certificate_validation: Value,
            encrypted_credential: String,
            password: SecretBase,
            user_name: Value,
        }
    }
}

connector! {
    ODataLinkedService => ODataLinkedServiceTypeProperties {
        required {
            url: Value,
        }
        optional {
            aad_resource_id: Value,
            aad_service_principal_credential_type: ODataAadServicePrincipalCredentialType,
            auth_headers: Value,
            authentication_type: ODataAuthenticationType,
            azure_cloud_type: Value,
            encrypted_credential: String,
            password: SecretBase,
            service_principal_embedded_cert: SecretBase,
            service_principal_embedded_cert_password: SecretBase,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            tenant: Value,
            user_name: Value,
        }
    }
}

connector! {
    SapTableLinkedService => SapTableLinkedServiceTypeProperties {
        optional {
            client_id: Value,
            encrypted_credential: String,
            language: Value,
            logon_group: Value,
            message_server: Value,
            message_server_service: Value,
            password: SecretBase,
            server: Value,
            snc_library_path: Value,
            snc_mode: Value,
            snc_my_name: Value,
            snc_partner_name: Value,
            snc_qop: Value,
            system_id: Value,
            system_number: Value,
            user_name: Value,
        }
    }
}

linked_service!(
    /// Generic web table source; its `typeProperties` are a union keyed on
    /// `authenticationType`.
    WebLinkedService,
    WebLinkedServiceTypeProperties
);
