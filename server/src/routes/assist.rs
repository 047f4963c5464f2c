//! Assist route: the chat panel's single network call.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use tracing::warn;

use crate::services::assist::{self, AssistRequest, AssistResponse};
use crate::state::AppState;

/// `POST /api/assist`: answer a question with reasoning, reply, and sources.
///
/// Always `200 OK`. An unreadable body is folded into fallback text like
/// every other failure.
pub async fn assist(
    State(state): State<AppState>,
    body: Result<Json<AssistRequest>, JsonRejection>,
) -> Json<AssistResponse> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(status = %rejection.status(), error = %detail, "assist: unreadable request body");
            return Json(assist::error_fallback_response(&detail));
        }
    };

    Json(assist::answer(state.llm.as_deref(), &request.text, &state.assist).await)
}

#[cfg(test)]
#[path = "assist_test.rs"]
mod tests;
