//! File and object stores.

use serde_json::Value;

use crate::common::CredentialReference;
use crate::enums::{AzureStorageAuthenticationType, FtpAuthenticationType, SftpAuthenticationType};
use crate::secret::{AzureKeyVaultSecretReference, SecretBase};

connector! {
    /// Azure Blob Storage.
    AzureBlobStorageLinkedService => AzureBlobStorageLinkedServiceTypeProperties {
        optional {
            account_key: AzureKeyVaultSecretReference,
            account_kind: Value,
            authentication_type: AzureStorageAuthenticationType,
            azure_cloud_type: Value,
            connection_string: Value,
            container_uri: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            sas_token: AzureKeyVaultSecretReference,
            sas_uri: Value,
            service_endpoint: Value,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            tenant: Value,
        }
    }
}

connector! {
    /// Azure Data Lake Storage Gen2.
    AzureBlobFSLinkedService => AzureBlobFSLinkedServiceTypeProperties {
        optional {
            account_key: Value,
            azure_cloud_type: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            sas_token: SecretBase,
            sas_uri: Value,
            service_principal_credential: SecretBase,
            service_principal_credential_type: Value,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            tenant: Value,
            url: Value,
        }
    }
}

connector! {
    /// Azure Data Lake Storage Gen1.
    AzureDataLakeStoreLinkedService => AzureDataLakeStoreLinkedServiceTypeProperties {
        required {
            data_lake_store_uri: Value,
        }
        optional {
            account_name: Value,
            azure_cloud_type: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            resource_group_name: Value,
            service_principal_id: Value,
            service_principal_key: SecretBase,
            subscription_id: Value,
            tenant: Value,
        }
    }
}

connector! {
    AzureFileStorageLinkedService => AzureFileStorageLinkedServiceTypeProperties {
        optional {
            account_key: AzureKeyVaultSecretReference,
            connection_string: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            file_share: Value,
            host: Value,
            password: SecretBase,
            sas_token: AzureKeyVaultSecretReference,
            sas_uri: Value,
            service_endpoint: Value,
            snapshot: Value,
            user_id: Value,
        }
    }
}

connector! {
    AzureTableStorageLinkedService => AzureTableStorageLinkedServiceTypeProperties {
        optional {
            account_key: AzureKeyVaultSecretReference,
            connection_string: Value,
            credential: CredentialReference,
            encrypted_credential: String,
            sas_token: AzureKeyVaultSecretReference,
            sas_uri: Value,
            service_endpoint: Value,
        }
    }
}

connector! {
    AmazonS3LinkedService => AmazonS3LinkedServiceTypeProperties {
        optional {
            access_key_id: Value,
            authentication_type: Value,
            encrypted_credential: String,
            secret_access_key: SecretBase,
            service_url: Value,
            session_token: SecretBase,
        }
    }
}

connector! {
    GoogleCloudStorageLinkedService => GoogleCloudStorageLinkedServiceTypeProperties {
        optional {
            access_key_id: Value,
            encrypted_credential: String,
            secret_access_key: SecretBase,
            service_url: Value,
        }
    }
}

connector! {
    HdfsLinkedService => HdfsLinkedServiceTypeProperties {
        required {
            url: Value,
        }
        optional {
            authentication_type: Value,
            encrypted_credential: String,
            password: SecretBase,
            user_name: Value,
        }
    }
}

connector! {
    FtpServerLinkedService => FtpServerLinkedServiceTypeProperties {
        required {
            host: Value,
        }
        optional {
            authentication_type: FtpAuthenticationType,
            enable_server_certificate_validation: Value,
            enable_ssl: Value,
            encrypted_credential: String,
            password: SecretBase,
            port: Value,
            user_name: Value,
        }
    }
}

connector! {
    SftpServerLinkedService => SftpServerLinkedServiceTypeProperties {
        required {
            host: Value,
        }
        optional {
            authentication_type: SftpAuthenticationType,
            encrypted_credential: String,
            host_key_fingerprint: Value,
            pass_phrase: SecretBase,
            password: SecretBase,
            port: Value,
            private_key_content: SecretBase,
            private_key_path: Value,
            skip_host_key_validation: Value,
            user_name: Value,
        }
    }
}
