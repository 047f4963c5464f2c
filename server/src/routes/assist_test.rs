use super::*;
use crate::llm::LlmChat;
use crate::llm::types::{ChatOptions, ChatResponse, LlmError, Message};
use crate::routes::api_routes;
use crate::state::test_helpers;
use serde_json::Value;
use std::sync::Arc;

struct EchoLlm;

#[async_trait::async_trait]
impl LlmChat for EchoLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        system: &str,
        messages: &[Message],
        _options: ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        let text = if system.contains("Only return JSON") {
            r#"{"sources":[{"title":"Echo","url":"https://echo.test"}]}"#.to_owned()
        } else {
            format!("Echoing the question.\nYou asked: {}", messages[0].content)
        };
        Ok(ChatResponse { text, model: "echo".into(), stop_reason: "end_turn".into(), input_tokens: 0, output_tokens: 0 })
    }
}

/// Serve the API router on an ephemeral port and return its base URL.
async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_routes(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn assist_without_upstream_returns_placeholder() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/assist"))
        .json(&serde_json::json!({ "text": "What research methods did you use?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reasoning"], "Thinking about: \"What research methods did you use?\"");
    assert!(body["reply"].as_str().unwrap().contains("Key point 1"));
    assert_eq!(body["sources"].as_array().unwrap().len(), 5);
    assert_eq!(body["sources"][0]["title"], "AI SDK");
}

#[tokio::test]
async fn assist_with_upstream_splits_reasoning_and_reply() {
    let base = spawn_app(test_helpers::test_app_state_with_llm(Arc::new(EchoLlm))).await;
    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/assist"))
        .json(&serde_json::json!({ "text": "timeline?" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["reasoning"], "Echoing the question.");
    assert_eq!(body["reply"], "You asked: timeline?");
    assert_eq!(body["sources"].as_array().unwrap().len(), 1);
    assert_eq!(body["sources"][0]["url"], "https://echo.test");
}

#[tokio::test]
async fn assist_malformed_body_still_returns_200_with_fallback() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/assist"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reasoning"], "Thinking…");
    assert!(body["reply"].as_str().unwrap().starts_with("Demo response (error fallback): "));
    assert!(body["sources"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn assist_missing_content_type_still_returns_200() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/assist"))
        .body(r#"{"text":"hi"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(!body["reply"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}
