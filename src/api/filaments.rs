//! Filament inventory API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{AppJson, AppPath, AppQuery};
use crate::{
    error::AppResult,
    models::filament::{CreateFilament, FilamentView, UpdateFilament, WeighFilament},
};

/// Query parameters for listing filaments
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct FilamentQuery {
    /// Only spools below the low-filament threshold
    #[serde(default)]
    pub low_only: bool,
}

/// List filament spools
#[utoipa::path(
    get,
    path = "/filaments",
    tag = "filaments",
    params(FilamentQuery),
    responses(
        (status = 200, description = "Filament list", body = Vec<FilamentView>)
    )
)]
pub async fn list_filaments(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<FilamentQuery>,
) -> Json<Vec<FilamentView>> {
    Json(state.services.filaments.list(query.low_only).await)
}

/// Get filament by ID
#[utoipa::path(
    get,
    path = "/filaments/{id}",
    tag = "filaments",
    params(("id" = String, Path, description = "Filament ID")),
    responses(
        (status = 200, description = "Filament details", body = FilamentView),
        (status = 404, description = "Filament not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_filament(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<FilamentView>> {
    let filament = state.services.filaments.get_by_id(&id).await?;
    Ok(Json(filament))
}

/// Add a full spool
#[utoipa::path(
    post,
    path = "/filaments",
    tag = "filaments",
    request_body = CreateFilament,
    responses(
        (status = 201, description = "Filament created", body = FilamentView),
        (status = 400, description = "Invalid filament", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_filament(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateFilament>,
) -> AppResult<(StatusCode, Json<FilamentView>)> {
    let filament = state.services.filaments.create(data).await?;
    Ok((StatusCode::CREATED, Json(filament)))
}

/// Update a spool
#[utoipa::path(
    put,
    path = "/filaments/{id}",
    tag = "filaments",
    params(("id" = String, Path, description = "Filament ID")),
    request_body = UpdateFilament,
    responses(
        (status = 200, description = "Filament updated", body = FilamentView),
        (status = 404, description = "Filament not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_filament(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<UpdateFilament>,
) -> AppResult<Json<FilamentView>> {
    let filament = state.services.filaments.update(&id, data).await?;
    Ok(Json(filament))
}

/// Set remaining filament from a scale reading
#[utoipa::path(
    post,
    path = "/filaments/{id}/weigh",
    tag = "filaments",
    params(("id" = String, Path, description = "Filament ID")),
    request_body = WeighFilament,
    responses(
        (status = 200, description = "Remaining weight updated", body = FilamentView),
        (status = 400, description = "Reading below empty spool weight", body = crate::error::ErrorResponse),
        (status = 404, description = "Filament not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn weigh_filament(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<WeighFilament>,
) -> AppResult<Json<FilamentView>> {
    let filament = state.services.filaments.weigh(&id, data).await?;
    Ok(Json(filament))
}

/// Delete a spool
#[utoipa::path(
    delete,
    path = "/filaments/{id}",
    tag = "filaments",
    params(("id" = String, Path, description = "Filament ID")),
    responses(
        (status = 204, description = "Filament deleted")
    )
)]
pub async fn delete_filament(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    state.services.filaments.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
