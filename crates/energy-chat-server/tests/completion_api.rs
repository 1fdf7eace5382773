//! LlmService tests against a mocked upstream chat-completions endpoint.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use energy_chat_server::config::LlmConfig;
use energy_chat_server::models::chat::{ChatMessage, CompletionRequest};
use energy_chat_server::services::conversation::LlmProvider;
use energy_chat_server::services::LlmService;
use energy_chat_server::utils::error::ApiError;

fn service(base_url: String) -> LlmService {
    LlmService::new(LlmConfig {
        base_url,
        api_key: "test-key".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        timeout_seconds: 5,
    })
}

fn request() -> CompletionRequest {
    CompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hello")])
}

#[tokio::test]
async fn sends_bearer_auth_and_exact_wire_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hello"},
                "finish_reason": "stop"
            }],
            "usage": {"total_tokens": 42}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = service(server.uri()).complete(&request()).await.unwrap();

    assert_eq!(response.id, "abc123");
    assert_eq!(response.model, "gpt-3.5-turbo");
    assert_eq!(response.choices[0].message.content, "hello");
    assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.total_tokens, 42);
}

#[tokio::test]
async fn non_2xx_maps_to_upstream_error_with_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let result = service(server.uri()).complete(&request()).await;

    match result {
        Err(ApiError::UpstreamError(msg)) => {
            assert!(msg.contains("500"), "missing status in: {}", msg);
            assert!(msg.contains("boom"), "missing body in: {}", msg);
        }
        other => panic!("expected UpstreamError, got {:?}", other.map(|r| r.id)),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = service(server.uri()).complete(&request()).await;

    assert!(matches!(result, Err(ApiError::DeserializationError(_))));
}

#[tokio::test]
async fn unreachable_upstream_maps_to_upstream_error() {
    // Port 9 (discard) with nothing listening.
    let result = service("http://127.0.0.1:9".to_string())
        .complete(&request())
        .await;

    assert!(matches!(result, Err(ApiError::UpstreamError(_))));
}
