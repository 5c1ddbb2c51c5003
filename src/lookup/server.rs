//! HTTP surface of the filename lookup
//!
//! `POST /api/extract-filename { fileId }` → `{ filename, fileId }` or
//! `{ error }`. CORS is open to any origin; the editor may be hosted anywhere.

use super::{extract_filename, DriveFiles, ExtractFilenameRequest, ExtractFilenameResponse, LookupConfig, LookupError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const EXTRACT_FILENAME_PATH: &str = "/api/extract-filename";

pub struct AppState<D> {
    pub config: LookupConfig,
    pub drive: D,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), "lookup rejected: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

async fn extract<D>(
    State(state): State<Arc<AppState<D>>>,
    body: Result<Json<ExtractFilenameRequest>, JsonRejection>,
) -> Result<Json<ExtractFilenameResponse>, LookupError>
where
    D: DriveFiles + Send + Sync + 'static,
{
    let Json(request) = body.map_err(|e| LookupError::BadRequest(e.body_text()))?;
    let response = extract_filename(request, &state.config, &state.drive).await?;
    tracing::info!(file_id = %response.file_id, filename = %response.filename, "filename resolved");
    Ok(Json(response))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// Router serving the lookup endpoint with CORS and request tracing
pub fn router<D>(state: AppState<D>) -> Router
where
    D: DriveFiles + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            EXTRACT_FILENAME_PATH,
            post(extract::<D>).options(preflight).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}
