use serde::{Deserialize, Serialize};

use crate::common::LinkedServiceBase;
use crate::connectors::*;

macro_rules! linked_service_union {
    ($( $variant:ident($ty:ty) => $lit:literal ),+ $(,)?) => {
        adf_core::discriminated_union! {
            /// The `properties` of a linked service resource, selected by `type`.
            pub enum LinkedService {
                tag: "type",
                kinds: LinkedServiceType,
                base: LinkedServiceBase,
                variants: {
                    $( $variant($ty) => $lit ),+
                }
            }
        }

        impl LinkedService {
            /// Envelope fields shared by every connector.
            pub fn base(&self) -> &LinkedServiceBase {
                match self {
                    $( LinkedService::$variant(v) => &v.base, )+
                    LinkedService::Unknown(raw) => &raw.base,
                }
            }
        }
    };
}

linked_service_union! {
    // storage
    AzureBlobStorage(AzureBlobStorageLinkedService) => "AzureBlobStorage",
    AzureBlobFS(AzureBlobFSLinkedService) => "AzureBlobFS",
    AzureDataLakeStore(AzureDataLakeStoreLinkedService) => "AzureDataLakeStore",
    AzureFileStorage(AzureFileStorageLinkedService) => "AzureFileStorage",
    AzureTableStorage(AzureTableStorageLinkedService) => "AzureTableStorage",
    AmazonS3(AmazonS3LinkedService) => "AmazonS3",
    GoogleCloudStorage(GoogleCloudStorageLinkedService) => "GoogleCloudStorage",
    Hdfs(HdfsLinkedService) => "Hdfs",
    FtpServer(FtpServerLinkedService) => "FtpServer",
    Sftp(SftpServerLinkedService) => "Sftp",
    // database
    AzureSqlDatabase(AzureSqlDatabaseLinkedService) => "AzureSqlDatabase",
    SqlServer(SqlServerLinkedService) => "SqlServer",
    PostgreSql(PostgreSqlLinkedService) => "PostgreSql",
    MySql(MySqlLinkedService) => "MySql",
    Oracle(OracleLinkedService) => "Oracle",
    Snowflake(SnowflakeLinkedService) => "Snowflake",
    SnowflakeV2(SnowflakeV2LinkedService) => "SnowflakeV2",
    CosmosDb(CosmosDbLinkedService) => "CosmosDb",
    MongoDb(MongoDbLinkedService) => "MongoDb",
    MongoDbV2(MongoDbV2LinkedService) => "MongoDbV2",
    Odbc(OdbcLinkedService) => "Odbc",
    SapHana(SapHanaLinkedService) => "SapHana",
    // services
    AzureKeyVault(AzureKeyVaultLinkedService) => "AzureKeyVault",
    AzureFunction(AzureFunctionLinkedService) => "AzureFunction",
    AzureDatabricks(AzureDatabricksLinkedService) => "AzureDatabricks",
    AmazonMws(AmazonMwsLinkedService) => "AmazonMWS",
    Salesforce(SalesforceLinkedService) => "Salesforce",
    Dynamics(DynamicsLinkedService) => "Dynamics",
    ServiceNow(ServiceNowLinkedService) => "ServiceNow",
    GoogleBigQuery(GoogleBigQueryLinkedService) => "GoogleBigQuery",
    RestService(RestServiceLinkedService) => "RestService",
    HttpServer(HttpLinkedService) => "HttpServer",
    OData(ODataLinkedService) => "OData",
    Web(WebLinkedService) => "Web",
    SapTable(SapTableLinkedService) => "SapTable",
}

/// A linked service as stored in a factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedServiceResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ARM resource type, e.g. `Microsoft.DataFactory/factories/linkedservices`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub properties: LinkedService,
}

impl LinkedServiceResource {
    /// A resource body for create-or-update; the read-only fields stay unset.
    pub fn new(properties: impl Into<LinkedService>) -> Self {
        Self { etag: None, id: None, name: None, resource_type: None, properties: properties.into() }
    }
}

/// One page of `ListByFactory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedServiceListResponse {
    #[serde(default)]
    pub value: Vec<LinkedServiceResource>,
    #[serde(rename = "nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl LinkedServiceListResponse {
    /// The continuation link, if there is another page.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Client-side filter over listed resources. Every field that is set must
/// match exactly, except `kind`, which compares the connector type
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedServiceResourcePredicate {
    pub etag: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub kind: Option<LinkedServiceType>,
}

impl LinkedServiceResourcePredicate {
    pub fn matches(&self, input: &LinkedServiceResource) -> bool {
        fn field_matches(want: &Option<String>, got: &Option<String>) -> bool {
            match want {
                Some(want) => got.as_deref() == Some(want.as_str()),
                None => true,
            }
        }

        if !field_matches(&self.etag, &input.etag)
            || !field_matches(&self.id, &input.id)
            || !field_matches(&self.name, &input.name)
            || !field_matches(&self.resource_type, &input.resource_type)
        {
            return false;
        }
        match &self.kind {
            // Same folding as the type registry, so unmodelled kinds match too.
            Some(kind) => input.properties.tag().to_lowercase() == kind.as_str().to_lowercase(),
            None => true,
        }
    }
}
