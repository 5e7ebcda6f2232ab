//! Data export and import endpoints

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Multipart;

use crate::{
    error::{AppError, AppResult},
    models::ImportSummary,
};

const EXPORT_FILENAME: &str = "printhub-data.json";

/// Export all data as a downloadable JSON file
#[utoipa::path(
    get,
    path = "/snapshot",
    tag = "snapshot",
    responses(
        (status = 200, description = "Complete data set", body = crate::models::Snapshot)
    )
)]
pub async fn export_snapshot(State(state): State<crate::AppState>) -> impl IntoResponse {
    let snapshot = state.services.snapshot.export().await;
    (
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
        )],
        Json(snapshot),
    )
}

/// Replace all data with the posted document
#[utoipa::path(
    put,
    path = "/snapshot",
    tag = "snapshot",
    request_body = crate::models::Snapshot,
    responses(
        (status = 200, description = "Data replaced", body = ImportSummary),
        (status = 400, description = "Malformed document, nothing changed", body = crate::error::ErrorResponse)
    )
)]
pub async fn import_snapshot(
    State(state): State<crate::AppState>,
    body: Bytes,
) -> AppResult<Json<ImportSummary>> {
    let summary = state.services.snapshot.import_bytes(&body).await?;
    Ok(Json(summary))
}

/// Replace all data with an uploaded file (multipart field `file`)
#[utoipa::path(
    post,
    path = "/snapshot/upload",
    tag = "snapshot",
    request_body(content_type = "multipart/form-data", content = String),
    responses(
        (status = 200, description = "Data replaced", body = ImportSummary),
        (status = 400, description = "Missing or malformed file, nothing changed", body = crate::error::ErrorResponse)
    )
)]
pub async fn upload_snapshot(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportSummary>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let summary = state.services.snapshot.import_bytes(&bytes).await?;
        return Ok(Json(summary));
    }

    Err(AppError::BadRequest("Missing 'file' field".to_string()))
}
