//! REST helper for the assist endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the chat panel only
//! submits from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures all collapse into an error string.
//! The chat panel maps any error to its network fallback reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AssistResponse;
#[cfg(any(test, feature = "hydrate"))]
use super::types::AssistRequest;

#[cfg(any(test, feature = "hydrate"))]
const ASSIST_ENDPOINT: &str = "/api/assist";

#[cfg(any(test, feature = "hydrate"))]
fn assist_request(text: &str) -> AssistRequest {
    AssistRequest { text: text.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn assist_failed_message(status: u16) -> String {
    format!("assist request failed: {status}")
}

/// Ask the server for a reply via `POST /api/assist`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server answers
/// with a non-OK status, or the body does not decode.
pub async fn post_assist(text: &str) -> Result<AssistResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ASSIST_ENDPOINT)
            .json(&assist_request(text))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(assist_failed_message(resp.status()));
        }
        resp.json::<AssistResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
