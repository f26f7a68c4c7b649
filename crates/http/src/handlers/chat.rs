use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use caramel_core::{ChatReply, ChatRequestBody, ChatStatus};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn chat_status(State(state): State<Arc<AppState>>) -> Json<ChatStatus> {
    Json(state.chat.status())
}

/// The body is read raw so a non-JSON payload gets the same 400 as a blank message.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let request = ChatRequestBody::from_slice(&body);
    let outcome = state.chat.respond(&request).await?;
    if let Some(failure) = outcome.failure {
        tracing::debug!(?failure, "answered chat with canned reply");
    }
    Ok(Json(outcome.reply))
}
