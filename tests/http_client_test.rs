//! Integration tests for the chat-completion client against a mock server.

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use commit_suggest::error::ApiError;
use commit_suggest::llm::{CompletionClient, FALLBACK_MESSAGE, build_messages, generate_message};
use commit_suggest::{Config, HttpCompletionClient};

use common::test_config;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

async fn mount_reply(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generate_message_returns_trimmed_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("Authorization", "Bearer sk-test"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "New: add login"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));
    let message = generate_message(&client, "+function userLogin() {}").await;

    assert_eq!(message, "New: add login");
}

#[tokio::test]
async fn test_request_body_has_system_then_user_message() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "  Fix: typo\n"}}]
        })),
    )
    .await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));
    let reply = client.complete(&build_messages("+DIFF_MARKER")).await.unwrap();
    assert_eq!(reply, "Fix: typo");

    let requests: Vec<Request> = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert!(messages[1]["content"].as_str().unwrap().contains("+DIFF_MARKER"));
}

#[tokio::test]
async fn test_server_error_returns_status() {
    let server = MockServer::start().await;
    mount_reply(&server, ResponseTemplate::new(500).set_body_string("upstream down")).await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));

    match client.complete(&build_messages("+x")).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_yields_fallback_message() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "invalid key"}})),
    )
    .await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));
    assert_eq!(generate_message(&client, "+x").await, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_malformed_json_yields_fallback_message() {
    let server = MockServer::start().await;
    mount_reply(&server, ResponseTemplate::new(200).set_body_string("{not json")).await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));
    assert_eq!(generate_message(&client, "+x").await, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_missing_fields_yield_fallback_message() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"choices": [{"message": {}}]})),
    )
    .await;

    let client = HttpCompletionClient::new(test_config(&server.uri()));
    assert_eq!(generate_message(&client, "+x").await, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_connection_refused_yields_fallback_message() {
    // Reserve a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = Config {
        api_key: "sk-test".to_string(),
        endpoint: format!("http://127.0.0.1:{}/v1/chat/completions", port),
        model: "gpt-4o-mini".to_string(),
    };
    let client = HttpCompletionClient::new(config);

    assert!(matches!(
        client.complete(&build_messages("+x")).await,
        Err(ApiError::Request(_))
    ));
    assert_eq!(generate_message(&client, "+x").await, FALLBACK_MESSAGE);
}
