//! Relational and document databases.

use serde_json::Value;

use crate::common::CredentialReference;
use crate::enums::{
    AzureSqlDatabaseAuthenticationType, CosmosDbConnectionMode, MongoDbAuthenticationType, SapHanaAuthenticationType,
    SnowflakeAuthenticationType, SqlServerAuthenticationType,
};
use crate::secret::{AzureKeyVaultSecretReference, SecretBase};

connector! {
    AzureSqlDatabaseLinkedService => AzureSqlDatabaseLinkedServiceTypeProperties {
        optional {
            always_encrypted_settings: Value,
            authentication_type: AzureSqlDatabaseAuthenticationType,
            azure_cloud_type: Value,
            connection_string: Value,
            credential: CredentialReference,
            database: Value,
            encrypt: Value,
            encrypted_credential: String,
            password: AzureKeyVaultSecretReference,
            server: Value,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            tenant: Value,
            trust_server_certificate: Value,
            user_name: Value,
        }
    }
}

connector! {
    SqlServerLinkedService => SqlServerLinkedServiceTypeProperties {
        optional {
            always_encrypted_settings: Value,
            authentication_type: SqlServerAuthenticationType,
            connection_string: Value,
            credential: CredentialReference,
            database: Value,
            encrypt: Value,
            encrypted_credential: String,
            password: SecretBase,
            server: Value,
            trust_server_certificate: Value,
            user_name: Value,
        }
    }
}

connector! {
    PostgreSqlLinkedService => PostgreSqlLinkedServiceTypeProperties {
        required {
            connection_string: Value,
        }
        optional {
            encrypted_credential: String,
            password: AzureKeyVaultSecretReference,
        }
    }
}

connector! {
    MySqlLinkedService => MySqlLinkedServiceTypeProperties {
        required {
            connection_string: Value,
        }
        optional {
            encrypted_credential: String,
            password: AzureKeyVaultSecretReference,
        }
    }
}

connector! {
    OracleLinkedService => OracleLinkedServiceTypeProperties {
        required {
            connection_string: Value,
        }
        optional {
            encrypted_credential: String,
            password: AzureKeyVaultSecretReference,
        }
    }
}

connector! {
    SnowflakeLinkedService => SnowflakeLinkedServiceTypeProperties {
        required {
            connection_string: Value,
        }
        optional {
            encrypted_credential: String,
            password: AzureKeyVaultSecretReference,
        }
    }
}

connector! {
    SnowflakeV2LinkedService => SnowflakeV2LinkedServiceTypeProperties {
        required {
            account_identifier: Value,
            database: Value,
            warehouse: Value,
        }
        optional {
            authentication_type: SnowflakeAuthenticationType,
            client_id: Value,
            client_secret: SecretBase,
            encrypted_credential: String,
            password: SecretBase,
            private_key: SecretBase,
            private_key_passphrase: SecretBase,
            scope: Value,
            tenant_id: Value,
            user: Value,
        }
    }
}

connector! {
    CosmosDbLinkedService => CosmosDbLinkedServiceTypeProperties {
        optional {
            account_endpoint: Value,
            account_key: SecretBase,
            azure_cloud_type: Value,
            connection_mode: CosmosDbConnectionMode,
            connection_string: Value,
            credential: CredentialReference,
            database: Value,
            encrypted_credential: String,
            service_principal_credential: SecretBase,
            service_principal_credential_type: Value,
            service_principal_id: Value,
            tenant: Value,
        }
    }
}

connector! {
    MongoDbLinkedService => MongoDbLinkedServiceTypeProperties {
        required {
            database_name: Value,
            server: Value,
        }
        optional {
            allow_self_signed_server_cert: Value,
            auth_source: Value,
            authentication_type: MongoDbAuthenticationType,
            enable_ssl: Value,
            encrypted_credential: String,
            password: SecretBase,
            port: Value,
            username: Value,
        }
    }
}

connector! {
    MongoDbV2LinkedService => MongoDbV2LinkedServiceTypeProperties {
        required {
            connection_string: Value,
            database: Value,
        }
    }
}

connector! {
    OdbcLinkedService => OdbcLinkedServiceTypeProperties {
        required {
            connection_string: Value,
        }
        optional {
            authentication_type: Value,
            credential: SecretBase,
            encrypted_credential: String,
            password: SecretBase,
            user_name: Value,
        }
    }
}

connector! {
    SapHanaLinkedService => SapHanaLinkedServiceProperties {
        optional {
            authentication_type: SapHanaAuthenticationType,
            connection_string: Value,
            encrypted_credential: String,
            password: SecretBase,
            server: Value,
            user_name: Value,
        }
    }
}
