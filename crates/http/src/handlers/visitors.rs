use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use caramel_core::VisitorCountResponse;
use caramel_core::constants::VISITOR_UPDATED_MESSAGE;

use crate::AppState;
use crate::response_types::VisitorCountFailure;

/// Counts a visit; served for both GET and POST.
pub async fn visitor_count(State(state): State<Arc<AppState>>) -> Response {
    match state.visitors.record_visit().await {
        Ok(record) => Json(VisitorCountResponse {
            count: record.count,
            message: VISITOR_UPDATED_MESSAGE.to_owned(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "visitor count update failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(VisitorCountFailure::default())).into_response()
        },
    }
}
