use std::path::Path;
use std::str::FromStr;

use adf_api::{
    linked_service_id, CreateOrUpdateOptions, FactoryId, GetOptions, LinkedServiceId, LinkedServiceResource,
    LinkedServiceResourcePredicate, LinkedServiceType, LinkedServicesClient, ResourceId,
};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "adfctl", version, about = "Data Factory linked services CLI")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t = Output::Human)]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Output { Human, Json }

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch one linked service
    Get {
        /// Linked service id, e.g. /subscriptions/.../factories/df/linkedServices/name
        id: String,
        /// Only return a body when the ETag no longer matches
        #[arg(long = "if-none-match")]
        if_none_match: Option<String>,
    },
    /// List every linked service of a factory (all pages)
    Ls {
        /// Factory id, e.g. /subscriptions/.../providers/Microsoft.DataFactory/factories/df
        factory: String,
        /// Keep only the linked service with this name
        #[arg(long = "name")]
        name: Option<String>,
        /// Keep only this connector type, e.g. AzureBlobStorage
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Create or update a linked service from a JSON or YAML file
    Put {
        id: String,
        /// Resource body ({"properties": {...}}) or just its properties
        #[arg(long = "file", short = 'f')]
        file: std::path::PathBuf,
        #[arg(long = "if-match")]
        if_match: Option<String>,
    },
    /// Delete a linked service
    Rm { id: String },
    /// Parse and explain a factory or linked service id without calling the service
    ParseId {
        id: String,
        /// Match static segments case-insensitively, as for ids returned by the service
        #[arg(long = "insensitive", action = ArgAction::SetTrue)]
        insensitive: bool,
    },
    /// List the connector types this client models
    Kinds,
}

fn init_tracing() {
    let env = std::env::var("ADF_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();
}

fn init_metrics() {
    if let Ok(addr) = std::env::var("ADF_METRICS_ADDR") {
        if let Ok(sock) = addr.parse::<std::net::SocketAddr>() {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            match builder.with_http_listener(sock).install() {
                Ok(_) => tracing::info!(addr = %addr, "Prometheus metrics exporter listening"),
                Err(e) => tracing::warn!(error = %e, "failed to install metrics exporter"),
            }
        } else {
            tracing::warn!(addr = %addr, "invalid ADF_METRICS_ADDR; expected host:port");
        }
    }
}

fn parse_linked_service_id(input: &str) -> Result<LinkedServiceId> {
    LinkedServiceId::parse(input).with_context(|| {
        format!("invalid linked service id; expected segments:\n{}", LinkedServiceId::segments_description())
    })
}

fn parse_factory_id(input: &str) -> Result<FactoryId> {
    FactoryId::parse(input)
        .with_context(|| format!("invalid factory id; expected segments:\n{}", FactoryId::segments_description()))
}

/// Decode a resource body. A document without `properties` is taken to be the
/// properties themselves.
fn parse_resource(doc: Value) -> Result<LinkedServiceResource> {
    let doc = match doc {
        Value::Object(map) if map.contains_key("properties") => Value::Object(map),
        Value::Object(map) => serde_json::json!({ "properties": Value::Object(map) }),
        _ => bail!("expected a JSON object"),
    };
    Ok(serde_json::from_value(doc)?)
}

fn load_resource(path: &Path) -> Result<LinkedServiceResource> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_yaml = matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml"));
    let doc: Value = if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("parsing YAML {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing JSON {}", path.display()))?
    };
    parse_resource(doc).with_context(|| format!("decoding linked service from {}", path.display()))
}

fn print_resource(output: Output, resource: &LinkedServiceResource) -> Result<()> {
    match output {
        Output::Human => {
            println!("name:        {}", resource.name.as_deref().unwrap_or("-"));
            println!("type:        {}", resource.properties.tag());
            println!("etag:        {}", resource.etag.as_deref().unwrap_or("-"));
            if let Some(desc) = &resource.properties.base().description {
                println!("description: {}", desc);
            }
            if resource.properties.is_unknown() {
                println!("note:        connector type not modelled by this client; fields kept as received");
            }
            println!("{}", serde_json::to_string_pretty(&resource.properties)?);
        }
        Output::Json => println!("{}", serde_json::to_string_pretty(resource)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    init_metrics();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { id, if_none_match } => {
            let id = parse_linked_service_id(&id)?;
            info!(id = %id.id(), "get invoked");
            let client = LinkedServicesClient::from_env()?;
            let resp = client.get(&id, GetOptions { if_none_match }).await?;
            match resp.model {
                Some(model) => print_resource(cli.output, &model)?,
                None => match cli.output {
                    Output::Human => println!("not modified (etag {})", resp.etag.as_deref().unwrap_or("-")),
                    Output::Json => {
                        println!("{}", serde_json::json!({"status": resp.status, "etag": resp.etag}))
                    }
                },
            }
        }
        Commands::Ls { factory, name, kind } => {
            let factory = parse_factory_id(&factory)?;
            info!(factory = %factory.id(), name = ?name, kind = ?kind, "ls invoked");
            let predicate = LinkedServiceResourcePredicate {
                name,
                kind: kind.as_deref().map(LinkedServiceType::parse),
                ..Default::default()
            };
            let client = LinkedServicesClient::from_env()?;
            let items = client.list_by_factory_complete_matching(&factory, |r| predicate.matches(r)).await?;
            match cli.output {
                Output::Human => {
                    println!("{:<32} {:<24} ETAG", "NAME", "TYPE");
                    for item in &items {
                        println!(
                            "{:<32} {:<24} {}",
                            item.name.as_deref().unwrap_or("-"),
                            item.properties.tag(),
                            item.etag.as_deref().unwrap_or("-")
                        );
                    }
                }
                Output::Json => println!("{}", serde_json::to_string_pretty(&items)?),
            }
        }
        Commands::Put { id, file, if_match } => {
            let id = parse_linked_service_id(&id)?;
            let resource = load_resource(&file)?;
            info!(id = %id.id(), kind = %resource.properties.tag(), "put invoked");
            let client = LinkedServicesClient::from_env()?;
            let saved = client.create_or_update(&id, &resource, CreateOrUpdateOptions { if_match }).await?;
            if let Some(returned) = linked_service_id(&saved)? {
                if returned != id {
                    tracing::warn!(sent = %id.id(), returned = %returned.id(), "service returned a different id");
                }
            }
            print_resource(cli.output, &saved)?;
        }
        Commands::Rm { id } => {
            let id = parse_linked_service_id(&id)?;
            info!(id = %id.id(), "rm invoked");
            let client = LinkedServicesClient::from_env()?;
            let existed = client.delete(&id).await?;
            match cli.output {
                Output::Human => {
                    if existed {
                        println!("deleted {}", id.linked_service_name);
                    } else {
                        println!("{} did not exist", id.linked_service_name);
                    }
                }
                Output::Json => println!("{}", serde_json::json!({"id": id.id(), "deleted": existed})),
            }
        }
        Commands::ParseId { id, insensitive } => {
            let parsed = if insensitive {
                LinkedServiceId::parse_insensitively(&id)
            } else {
                LinkedServiceId::parse(&id)
            };
            match parsed {
                Ok(ls) => match cli.output {
                    Output::Human => println!("{}", ls),
                    Output::Json => println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                        "kind": "linkedService",
                        "id": ls.id(),
                        "subscriptionId": ls.subscription_id,
                        "resourceGroupName": ls.resource_group_name,
                        "factoryName": ls.factory_name,
                        "linkedServiceName": ls.linked_service_name,
                    }))?),
                },
                Err(ls_err) => {
                    let factory = if insensitive { FactoryId::parse_insensitively(&id) } else { FactoryId::parse(&id) };
                    match factory {
                        Ok(f) => match cli.output {
                            Output::Human => println!("{}", f),
                            Output::Json => println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                                "kind": "factory",
                                "id": f.id(),
                                "subscriptionId": f.subscription_id,
                                "resourceGroupName": f.resource_group_name,
                                "factoryName": f.factory_name,
                            }))?),
                        },
                        Err(_) => {
                            return Err(anyhow::Error::new(ls_err).context(format!(
                                "not a factory or linked service id; expected segments:\n{}",
                                LinkedServiceId::segments_description()
                            )));
                        }
                    }
                }
            }
        }
        Commands::Kinds => {
            let kinds = LinkedServiceType::possible_values();
            match cli.output {
                Output::Human => {
                    for k in kinds {
                        println!("{}", k);
                    }
                }
                Output::Json => println!("{}", serde_json::to_string_pretty(kinds)?),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adf_api::LinkedService;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_properties_are_wrapped() {
        let r = parse_resource(serde_json::json!({"type": "AzureBlobStorage", "typeProperties": {"connectionString": "x"}}))
            .unwrap();
        assert!(matches!(r.properties, LinkedService::AzureBlobStorage(_)));
        assert_eq!(r.name, None);
    }

    #[test]
    fn full_resource_is_kept() {
        let r = parse_resource(serde_json::json!({
            "name": "kv",
            "properties": {"type": "AzureKeyVault", "typeProperties": {"baseUrl": "https://kv.vault.azure.net"}}
        }))
        .unwrap();
        assert_eq!(r.name.as_deref(), Some("kv"));
        assert!(matches!(r.properties, LinkedService::AzureKeyVault(_)));
    }

    #[test]
    fn yaml_documents_decode_like_json() {
        let doc: Value = serde_yaml::from_str("type: SqlServer\ntypeProperties:\n  server: sql01\n  authenticationType: windows\n").unwrap();
        let r = parse_resource(doc).unwrap();
        let out = serde_json::to_value(&r.properties).unwrap();
        assert_eq!(out["typeProperties"]["authenticationType"], "Windows");
    }

    #[test]
    fn arrays_are_rejected() {
        assert!(parse_resource(serde_json::json!([1, 2])).is_err());
    }

    #[test]
    fn user_ids_are_strict() {
        let id = "/subscriptions/s/resourcegroups/rg/providers/Microsoft.DataFactory/factories/df/linkedServices/x";
        assert!(parse_linked_service_id(id).is_err());
        assert!(parse_factory_id("/subscriptions/s/resourceGroups/rg/providers/Microsoft.DataFactory/factories/df").is_ok());
    }
}
