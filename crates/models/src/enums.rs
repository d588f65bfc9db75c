//! Open enums used inside connector `typeProperties`.

use adf_core::open_enum;

open_enum! {
    pub enum SqlServerAuthenticationType {
        Sql => "SQL",
        Windows => "Windows",
        UserAssignedManagedIdentity => "UserAssignedManagedIdentity",
    }
}

open_enum! {
    pub enum AzureSqlDatabaseAuthenticationType {
        Sql => "SQL",
        ServicePrincipal => "ServicePrincipal",
        SystemAssignedManagedIdentity => "SystemAssignedManagedIdentity",
        UserAssignedManagedIdentity => "UserAssignedManagedIdentity",
    }
}

open_enum! {
    /// Shared by the blob, file and table storage connectors.
    pub enum AzureStorageAuthenticationType {
        Anonymous => "Anonymous",
        AccountKey => "AccountKey",
        SasUri => "SasUri",
        ServicePrincipal => "ServicePrincipal",
        Msi => "Msi",
    }
}

open_enum! {
    pub enum HttpAuthenticationType {
        Anonymous => "Anonymous",
        Basic => "Basic",
        Digest => "Digest",
        Windows => "Windows",
        ClientCertificate => "ClientCertificate",
    }
}

open_enum! {
    pub enum SftpAuthenticationType {
        Basic => "Basic",
        SshPublicKey => "SshPublicKey",
        MultiFactor => "MultiFactor",
    }
}

open_enum! {
    pub enum FtpAuthenticationType {
        Basic => "Basic",
        Anonymous => "Anonymous",
    }
}

open_enum! {
    pub enum RestServiceAuthenticationType {
        Anonymous => "Anonymous",
        Basic => "Basic",
        AadServicePrincipal => "AadServicePrincipal",
        ManagedServiceIdentity => "ManagedServiceIdentity",
        OAuth2ClientCredential => "OAuth2ClientCredential",
    }
}

open_enum! {
    pub enum CosmosDbConnectionMode {
        Gateway => "Gateway",
        Direct => "Direct",
    }
}

open_enum! {
    pub enum SapHanaAuthenticationType {
        Basic => "Basic",
        Windows => "Windows",
    }
}

open_enum! {
    pub enum MongoDbAuthenticationType {
        Basic => "Basic",
        Anonymous => "Anonymous",
    }
}

open_enum! {
    pub enum SnowflakeAuthenticationType {
        Basic => "Basic",
        KeyPair => "KeyPair",
        AadServicePrincipal => "AADServicePrincipal",
    }
}

open_enum! {
    pub enum GoogleBigQueryAuthenticationType {
        ServiceAuthentication => "ServiceAuthentication",
        UserAuthentication => "UserAuthentication",
    }
}

open_enum! {
    pub enum ServiceNowAuthenticationType {
        Basic => "Basic",
        OAuth2 => "OAuth2",
    }
}

open_enum! {
    pub enum ODataAuthenticationType {
        Basic => "Basic",
        Anonymous => "Anonymous",
        Windows => "Windows",
        AadServicePrincipal => "AadServicePrincipal",
        ManagedServiceIdentity => "ManagedServiceIdentity",
    }
}

open_enum! {
    pub enum ODataAadServicePrincipalCredentialType {
        ServicePrincipalKey => "ServicePrincipalKey",
        ServicePrincipalCert => "ServicePrincipalCert",
    }
}
