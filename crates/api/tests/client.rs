#![forbid(unsafe_code)]

use std::sync::Arc;

use adf_api::{
    linked_service_id, CreateOrUpdateOptions, Error, FactoryId, GetOptions, LinkedService, LinkedServiceResource,
    LinkedServiceResourcePredicate, LinkedServiceType, LinkedServicesClient, MockTransport, TransportError,
    API_VERSION,
};
use adf_models::connectors::{AzureKeyVaultLinkedService, AzureKeyVaultLinkedServiceTypeProperties};
use adf_transport::{Method, Response};
use futures::TryStreamExt;
use serde_json::{json, Value};

const FACTORY: &str = "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.DataFactory/factories/df-1";

fn factory() -> FactoryId {
    FactoryId::new("sub-1", "rg-1", "df-1")
}

fn resource_json(name: &str, kind: &str) -> Value {
    json!({
        "id": format!("{FACTORY}/linkedservices/{name}"),
        "name": name,
        "type": "Microsoft.DataFactory/factories/linkedservices",
        "etag": format!("etag-{name}"),
        "properties": {"type": kind, "typeProperties": {"connectionString": "x", "url": "https://x", "host": "h"}}
    })
}

fn ok(body: Value) -> Response {
    Response::new(200, serde_json::to_vec(&body).unwrap())
}

fn client_with(responses: Vec<Response>) -> (LinkedServicesClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::with_responses(responses));
    (LinkedServicesClient::new(mock.clone()), mock)
}

fn names(items: &[LinkedServiceResource]) -> Vec<&str> {
    items.iter().map(|r| r.name.as_deref().unwrap_or("")).collect()
}

#[tokio::test]
async fn get_builds_arm_request_and_decodes() {
    let (client, mock) = client_with(vec![
        ok(resource_json("blob", "AzureBlobStorage")).with_header("ETag", "\"0a00\""),
    ]);
    let id = factory().linked_service("blob");
    let resp = client.get(&id, GetOptions::default()).await.unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.etag.as_deref(), Some("\"0a00\""));
    let model = resp.model.unwrap();
    assert_eq!(model.properties.kind(), LinkedServiceType::AzureBlobStorage);

    let sent = mock.requests().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::GET);
    assert_eq!(sent[0].path_or_url, format!("{FACTORY}/linkedServices/blob"));
    assert_eq!(sent[0].query_value("api-version"), Some(API_VERSION));
    assert_eq!(sent[0].header_value("If-None-Match"), None);
}

#[tokio::test]
async fn get_falls_back_to_body_etag() {
    let (client, _mock) = client_with(vec![ok(resource_json("blob", "AzureBlobStorage"))]);
    let resp = client.get(&factory().linked_service("blob"), GetOptions::default()).await.unwrap();
    assert_eq!(resp.etag.as_deref(), Some("etag-blob"));
}

#[tokio::test]
async fn get_not_modified_has_no_model() {
    let (client, mock) = client_with(vec![Response::new(304, Vec::new()).with_header("ETag", "\"0a00\"")]);
    let options = GetOptions { if_none_match: Some("\"0a00\"".into()) };
    let resp = client.get(&factory().linked_service("blob"), options).await.unwrap();

    assert!(resp.not_modified());
    assert!(resp.model.is_none());
    assert_eq!(resp.etag.as_deref(), Some("\"0a00\""));
    assert_eq!(mock.requests().await[0].header_value("If-None-Match"), Some("\"0a00\""));
}

#[tokio::test]
async fn get_keeps_unknown_connectors() {
    let body = json!({
        "name": "future",
        "properties": {"type": "SomeFutureConnector", "typeProperties": {"foo": "bar"}}
    });
    let (client, _mock) = client_with(vec![ok(body)]);
    let resp = client.get(&factory().linked_service("future"), GetOptions::default()).await.unwrap();
    match resp.model.unwrap().properties {
        LinkedService::Unknown(raw) => {
            assert_eq!(raw.tag, "SomeFutureConnector");
            assert_eq!(raw.values["typeProperties"], json!({"foo": "bar"}));
        }
        other => panic!("expected fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_status_is_surfaced_unchanged() {
    let body = json!({"error": {"code": "NotFound", "message": "no such linked service"}});
    let (client, mock) = client_with(vec![Response::new(404, serde_json::to_vec(&body).unwrap())]);
    let err = client.get(&factory().linked_service("missing"), GetOptions::default()).await.unwrap_err();

    assert!(err.is_not_found(), "{err}");
    match err {
        Error::Transport(TransportError::UnexpectedStatus { method, status, body, .. }) => {
            assert_eq!(method, "GET");
            assert_eq!(status, 404);
            assert!(body.contains("no such linked service"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert_eq!(mock.requests().await.len(), 1, "no retry");
}

#[tokio::test]
async fn transport_failures_propagate() {
    let mock = Arc::new(MockTransport::new());
    mock.push_error(TransportError::Mock("connection reset".into())).await;
    let client = LinkedServicesClient::new(mock);
    let err = client.delete(&factory().linked_service("x")).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Mock(_))), "{err}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn bad_body_is_a_decode_error() {
    let (client, _mock) = client_with(vec![Response::new(200, "not json")]);
    let err = client.get(&factory().linked_service("x"), GetOptions::default()).await.unwrap_err();
    match err {
        Error::Decode { target, .. } => assert_eq!(target, "LinkedServiceResource"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_or_update_sends_tagged_body_and_if_match() {
    let props = AzureKeyVaultLinkedServiceTypeProperties { base_url: json!("https://kv.vault.azure.net"), credential: None };
    let resource = LinkedServiceResource::new(AzureKeyVaultLinkedService::new(props));
    let mut echoed = serde_json::to_value(&resource).unwrap();
    echoed["name"] = json!("kv");
    echoed["etag"] = json!("e2");
    let (client, mock) = client_with(vec![ok(echoed)]);

    let id = factory().linked_service("kv");
    let options = CreateOrUpdateOptions { if_match: Some("e1".into()) };
    let saved = client.create_or_update(&id, &resource, options).await.unwrap();
    assert_eq!(saved.etag.as_deref(), Some("e2"));
    assert_eq!(saved.properties, resource.properties);

    let sent = mock.requests().await;
    let sent = &sent[0];
    assert_eq!(sent.method, Method::PUT);
    assert_eq!(sent.header_value("If-Match"), Some("e1"));
    assert_eq!(sent.expected_status, vec![200]);
    let body: Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
    assert_eq!(body["properties"]["type"], "AzureKeyVault");
    assert_eq!(body["properties"]["typeProperties"]["baseUrl"], "https://kv.vault.azure.net");
}

#[tokio::test]
async fn create_or_update_rejects_201() {
    let (client, _mock) = client_with(vec![Response::new(201, "{}")]);
    let resource: LinkedServiceResource =
        serde_json::from_value(json!({"properties": {"type": "AzureBlobStorage", "typeProperties": {}}})).unwrap();
    let err = client
        .create_or_update(&factory().linked_service("b"), &resource, CreateOrUpdateOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(201));
}

#[tokio::test]
async fn delete_reports_whether_something_existed() {
    let (client, mock) = client_with(vec![Response::new(200, Vec::new()), Response::new(204, Vec::new())]);
    let id = factory().linked_service("gone");
    assert!(client.delete(&id).await.unwrap());
    assert!(!client.delete(&id).await.unwrap());
    assert_eq!(mock.requests().await[0].method, Method::DELETE);
}

#[tokio::test]
async fn complete_listing_follows_next_link_in_order() {
    let next = "https://management.azure.com/next-page?api-version=2018-06-01&%24skipToken=abc";
    let (client, mock) = client_with(vec![
        ok(json!({
            "value": [resource_json("a", "AzureBlobStorage"), resource_json("b", "SqlServer")],
            "nextLink": next
        })),
        ok(json!({"value": [resource_json("c", "SomeFutureConnector")]})),
    ]);

    let items = client.list_by_factory_complete(&factory()).await.unwrap();
    assert_eq!(names(&items), vec!["a", "b", "c"]);
    assert!(items[2].properties.is_unknown());

    let sent = mock.requests().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].path_or_url, format!("{FACTORY}/linkedServices"));
    assert_eq!(sent[0].query_value("api-version"), Some(API_VERSION));
    assert_eq!(sent[1].path_or_url, next);
    assert!(sent[1].query.is_empty());
}

#[tokio::test]
async fn empty_next_link_stops_paging() {
    let (client, mock) = client_with(vec![ok(json!({"value": [resource_json("a", "AzureBlobStorage")], "nextLink": ""}))]);
    let items = client.list_by_factory_complete(&factory()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(mock.requests().await.len(), 1);
}

#[tokio::test]
async fn first_page_only() {
    let (client, mock) = client_with(vec![ok(json!({"value": [resource_json("a", "AzureBlobStorage")], "nextLink": "https://x/next"}))]);
    let page = client.list_by_factory(&factory()).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_link.as_deref(), Some("https://x/next"));
    assert_eq!(mock.requests().await.len(), 1);
}

#[tokio::test]
async fn pages_stream_yields_each_page() {
    let (client, _mock) = client_with(vec![
        ok(json!({"value": [resource_json("a", "AzureBlobStorage")], "nextLink": "https://x/2"})),
        ok(json!({"value": [], "nextLink": "https://x/3"})),
        ok(json!({"value": [resource_json("b", "AzureBlobStorage")]})),
    ]);
    let pages: Vec<_> = client.pages(&factory()).try_collect().await.unwrap();
    let sizes: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
    assert_eq!(sizes, vec![1, 0, 1]);
}

#[tokio::test]
async fn paging_error_stops_the_listing() {
    let (client, mock) = client_with(vec![
        ok(json!({"value": [resource_json("a", "AzureBlobStorage")], "nextLink": "https://x/2"})),
        Response::new(500, "boom"),
    ]);
    let err = client.list_by_factory_complete(&factory()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(mock.requests().await.len(), 2);
}

#[tokio::test]
async fn complete_listing_with_predicate() {
    let (client, _mock) = client_with(vec![
        ok(json!({"value": [resource_json("a", "AzureBlobStorage"), resource_json("b", "SqlServer")], "nextLink": "https://x/2"})),
        ok(json!({"value": [resource_json("c", "azureblobstorage")]})),
    ]);
    let predicate = LinkedServiceResourcePredicate { kind: Some(LinkedServiceType::AzureBlobStorage), ..Default::default() };
    let items = client.list_by_factory_complete_matching(&factory(), |r| predicate.matches(r)).await.unwrap();
    assert_eq!(names(&items), vec!["a", "c"]);
}

#[test]
fn server_ids_parse_insensitively() {
    let r: LinkedServiceResource = serde_json::from_value(resource_json("blob", "AzureBlobStorage")).unwrap();
    let id = linked_service_id(&r).unwrap().unwrap();
    assert_eq!(id, factory().linked_service("blob"));

    let no_id = LinkedServiceResource { id: None, ..r.clone() };
    assert_eq!(linked_service_id(&no_id).unwrap(), None);

    let bad = LinkedServiceResource { id: Some("/subscriptions/s".into()), ..r };
    assert!(matches!(linked_service_id(&bad), Err(Error::Id(_))));
}
