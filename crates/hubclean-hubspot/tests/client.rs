//! Integration tests for `HubspotClient` using wiremock HTTP mocks.

use hubclean_hubspot::{get_contacts, FetchError, HubspotClient, HubspotError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> HubspotClient {
    HubspotClient::with_base_url("fake-token", 5, "hubclean-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn contact_json(id: &str, archived: bool) -> serde_json::Value {
    json!({
        "id": id,
        "properties": {
            "createdate": "2023-06-20T14:30:53.618Z",
            "email": format!("test_contact_{id}@gmail.com"),
            "firstname": "Test Contact",
            "lastmodifieddate": "2023-06-20T14:30:58.364Z",
            "lastname": id,
        },
        "createdAt": "2023-06-20T14:30:53.618Z",
        "updatedAt": "2023-06-20T14:30:58.364Z",
        "archived": archived,
    })
}

// ---------------------------------------------------------------------------
// Account details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn account_details_returns_raw_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account-info/v3/details"))
        .and(header("authorization", "Bearer fake-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":"Mock Data"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let body = client.account_details().await.expect("should succeed");

    assert_eq!(body, r#"{"data":"Mock Data"}"#);
}

#[tokio::test]
async fn account_details_accepts_any_2xx_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account-info/v3/details"))
        .respond_with(ResponseTemplate::new(203).set_body_string(r#"{"portalId":1}"#))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let body = client.account_details().await.expect("203 is a success");

    assert_eq!(body, r#"{"portalId":1}"#);
}

#[tokio::test]
async fn account_details_reports_status_and_body_on_error() {
    let server = MockServer::start().await;
    let error_body = r#"{"status":"error","message":"Invalid token"}"#;

    Mock::given(method("GET"))
        .and(path("/account-info/v3/details"))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.account_details().await.unwrap_err();

    assert!(
        matches!(err, FetchError::AccountDetailsStatus { status: 400, .. }),
        "got: {err:?}"
    );
    let message = err.to_string();
    assert!(message.contains("Status: 400"), "message: {message}");
    assert_eq!(
        message,
        format!("Error while fetching HubSpot account details. Status: 400. Body: {error_body}")
    );
}

#[tokio::test]
async fn account_details_reports_connection_failure() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client.account_details().await.unwrap_err();

    assert!(matches!(err, FetchError::AccountDetails(_)), "got: {err:?}");
    assert!(
        err.to_string()
            .starts_with("Error while fetching HubSpot account details. "),
        "message: {err}"
    );
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_contacts_returns_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .and(query_param("archived", "false"))
        .and(query_param("limit", "100"))
        .and(header("authorization", "Bearer fake-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [contact_json("1", false), contact_json("2", false)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let contacts = client.list_contacts(false).await.expect("should succeed");

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, "1");
    assert_eq!(
        contacts[1].properties.email.as_deref(),
        Some("test_contact_2@gmail.com")
    );
}

#[tokio::test]
async fn list_contacts_follows_paging_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .and(query_param("after", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [contact_json("3", true)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .and(query_param("archived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [contact_json("1", true), contact_json("2", true)],
            "paging": { "next": { "after": "page-2", "link": "ignored" } }
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let contacts = client.list_contacts(true).await.expect("should succeed");

    let ids: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert!(contacts.iter().all(|c| c.archived));
}

#[tokio::test]
async fn list_contacts_surfaces_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired token"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_contacts(false).await.unwrap_err();

    assert!(
        matches!(err, HubspotError::UnexpectedStatus { status: 401, ref body } if body == "expired token"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn list_contacts_surfaces_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_contacts(false).await.unwrap_err();

    assert!(matches!(err, HubspotError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn get_contacts_prefixes_client_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = get_contacts(&client, false).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error while fetching HubSpot contacts. unexpected HTTP status 500: boom"
    );
}
