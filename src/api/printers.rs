//! Printer API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::printer::{CreatePrinter, Printer, UpdatePrinter},
};

/// List all printers
#[utoipa::path(
    get,
    path = "/printers",
    tag = "printers",
    responses(
        (status = 200, description = "Printer list", body = Vec<Printer>)
    )
)]
pub async fn list_printers(State(state): State<crate::AppState>) -> Json<Vec<Printer>> {
    Json(state.services.printers.list().await)
}

/// Get printer by ID
#[utoipa::path(
    get,
    path = "/printers/{id}",
    tag = "printers",
    params(("id" = String, Path, description = "Printer ID")),
    responses(
        (status = 200, description = "Printer details", body = Printer),
        (status = 404, description = "Printer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_printer(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Printer>> {
    let printer = state.services.printers.get_by_id(&id).await?;
    Ok(Json(printer))
}

/// Add a printer (status starts Idle)
#[utoipa::path(
    post,
    path = "/printers",
    tag = "printers",
    request_body = CreatePrinter,
    responses(
        (status = 201, description = "Printer created", body = Printer),
        (status = 400, description = "Invalid printer", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_printer(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreatePrinter>,
) -> AppResult<(StatusCode, Json<Printer>)> {
    let printer = state.services.printers.create(data).await?;
    Ok((StatusCode::CREATED, Json(printer)))
}

/// Update a printer
#[utoipa::path(
    put,
    path = "/printers/{id}",
    tag = "printers",
    params(("id" = String, Path, description = "Printer ID")),
    request_body = UpdatePrinter,
    responses(
        (status = 200, description = "Printer updated", body = Printer),
        (status = 404, description = "Printer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_printer(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<UpdatePrinter>,
) -> AppResult<Json<Printer>> {
    let printer = state.services.printers.update(&id, data).await?;
    Ok(Json(printer))
}

/// Delete a printer
#[utoipa::path(
    delete,
    path = "/printers/{id}",
    tag = "printers",
    params(("id" = String, Path, description = "Printer ID")),
    responses(
        (status = 204, description = "Printer deleted")
    )
)]
pub async fn delete_printer(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    state.services.printers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
