use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;

/// Public URLs of every gallery photo. Any storage failure is a 500.
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let urls = state.gallery.list_image_urls().await.map_err(|e| ApiError::Internal(e.into()))?;
    Ok(Json(urls))
}
