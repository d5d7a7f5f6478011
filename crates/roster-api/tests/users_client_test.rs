// Integration tests for `UsersClient` using wiremock.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roster_api::{Error, UserRecord, UsersClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, UsersClient) {
    let server = MockServer::start().await;
    let client = UsersClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn sample_user() -> UserRecord {
    UserRecord {
        id: "1700000000000".into(),
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        phone: "9876543210".into(),
        gender: "female".into(),
    }
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": "1", "name": "Asha Rao", "email": "asha@example.com", "phone": "9876543210", "gender": "female" },
        { "id": "2", "name": "Dev Mehta", "email": "dev@example.com", "phone": "8765432109", "gender": "male" },
    ]);

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Asha Rao");
    assert_eq!(users[1].id, "2");
    assert_eq!(users[1].gender, "male");
}

#[tokio::test]
async fn test_list_users_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let users = client.list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_user_posts_record() {
    let (server, client) = setup().await;

    let user = sample_user();

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(&user))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    client.create_user(&user).await.unwrap();
}

#[tokio::test]
async fn test_update_user_puts_to_id_path() {
    let (server, client) = setup().await;

    let user = sample_user();

    Mock::given(method("PUT"))
        .and(path(format!("/users/{}", user.id)))
        .and(body_json(&user))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.update_user(&user).await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/users/1700000000000"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.delete_user("1700000000000").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/users/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let mut user = sample_user();
    user.id = "missing".into();
    let result = client.update_user(&user).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected Api 404 error, got: {other:?}"),
    }
    let err = client.update_user(&user).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_error_500_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.list_users().await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_users().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_connection_refused() {
    // Nothing is listening on this port.
    let client =
        UsersClient::from_reqwest("http://127.0.0.1:9", reqwest::Client::new()).unwrap();

    let result = client.list_users().await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}
