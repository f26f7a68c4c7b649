use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use caramel_service::{ServiceError, content_type_for};

use crate::AppState;
use crate::api_error::ApiError;

/// Bytes of one gallery photo, so listed URLs resolve when the server hosts the blobs.
pub async fn get_image(
    State(state): State<Arc<AppState>>,
    Path((container, name)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let bytes = match state.gallery.fetch_image(&container, &name).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) | Err(ServiceError::InvalidInput(_)) => {
            return Err(ApiError::NotFound(format!("image '{container}/{name}' not found")));
        },
        Err(e) => return Err(e.into()),
    };
    Ok((
        [(CONTENT_TYPE, content_type_for(&name)), (CACHE_CONTROL, "public, max-age=3600")],
        bytes,
    )
        .into_response())
}
