use super::*;
use axum::Json;
use axum::Router;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Serve a fake `/v1/chat/completions` on an ephemeral port.
async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(req): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                recorder.lock().unwrap().push((auth, req));
                (status, Json(reply))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1/"), seen)
}

fn completion(content: &str) -> Value {
    serde_json::json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4 }
    })
}

// ===== parsing =====

#[test]
fn cc_parse_text_response() {
    let json = completion("Hello!").to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Hello!");
    assert_eq!(resp.model, "gpt-4o-mini");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 12);
    assert_eq!(resp.output_tokens, 4);
}

#[test]
fn cc_parse_length_finish_maps_to_max_tokens() {
    let json = serde_json::json!({
        "choices": [{ "message": { "content": "cut" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn cc_parse_null_content_is_empty_text() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.text.is_empty());
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o-mini", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(matches!(parse_chat_completions_response("not json"), Err(LlmError::ApiParse(_))));
}

#[test]
fn system_message_is_prepended_when_present() {
    let messages = [Message::user("hi")];
    let built = build_chat_completions_messages("be brief", &messages);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].role, "system");
    assert_eq!(built[1].content, "hi");

    let built = build_chat_completions_messages("  ", &messages);
    assert_eq!(built.len(), 1);
}

// ===== HTTP round trip against a fake upstream =====

#[tokio::test]
async fn chat_sends_bearer_auth_and_sampling_options() {
    let (base_url, seen) = spawn_upstream(StatusCode::OK, completion("Sure.")).await;
    let client = OpenAiClient::new("sk-test".into(), base_url, LlmTimeouts::default()).unwrap();

    let options = ChatOptions { temperature: 0.5, response_format: ResponseFormat::JsonObject };
    let resp = client
        .chat("gpt-4o-mini", 256, "Only return JSON.", &[Message::user("topic")], options)
        .await
        .unwrap();
    assert_eq!(resp.text, "Sure.");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 256);
    assert_eq!(body["response_format"]["type"], "json_object");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "topic");
    assert!((body["temperature"].as_f64().unwrap() - 0.5).abs() < 1e-6);
}

#[tokio::test]
async fn chat_omits_response_format_for_text() {
    let (base_url, seen) = spawn_upstream(StatusCode::OK, completion("ok")).await;
    let client = OpenAiClient::new("sk-test".into(), base_url, LlmTimeouts::default()).unwrap();

    client
        .chat("gpt-4o-mini", 64, "", &[Message::user("q")], ChatOptions::default())
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen[0].1.get("response_format").is_none());
}

#[tokio::test]
async fn chat_non_200_is_api_response_error_with_body() {
    let (base_url, _seen) =
        spawn_upstream(StatusCode::UNAUTHORIZED, serde_json::json!({ "error": "bad key" })).await;
    let client = OpenAiClient::new("sk-bad".into(), base_url, LlmTimeouts::default()).unwrap();

    let err = client
        .chat("gpt-4o-mini", 64, "", &[Message::user("q")], ChatOptions::default())
        .await
        .unwrap_err();
    match err {
        LlmError::ApiResponse { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_unreachable_upstream_is_request_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiClient::new("sk".into(), format!("http://{addr}/v1"), LlmTimeouts::default()).unwrap();
    let err = client
        .chat("gpt-4o-mini", 64, "", &[Message::user("q")], ChatOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ApiRequest(_)));
}
