//! Print queue API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{AppJson, AppPath, AppQuery};
use crate::{
    error::AppResult,
    models::job::{CreatePrintJob, JobQuery, PrintJob, UpdatePrintJob},
};

/// List print jobs
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(JobQuery),
    responses(
        (status = 200, description = "Print queue", body = Vec<PrintJob>)
    )
)]
pub async fn list_jobs(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<JobQuery>,
) -> Json<Vec<PrintJob>> {
    Json(state.services.jobs.list(&query).await)
}

/// Get print job by ID
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 200, description = "Print job details", body = PrintJob),
        (status = 404, description = "Print job not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<PrintJob>> {
    let job = state.services.jobs.get_by_id(&id).await?;
    Ok(Json(job))
}

/// Queue a print job
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreatePrintJob,
    responses(
        (status = 201, description = "Print job queued", body = PrintJob),
        (status = 400, description = "Invalid print job", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_job(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreatePrintJob>,
) -> AppResult<(StatusCode, Json<PrintJob>)> {
    let job = state.services.jobs.create(data).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Update a print job's description
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = String, Path, description = "Print job ID")),
    request_body = UpdatePrintJob,
    responses(
        (status = 200, description = "Print job updated", body = PrintJob),
        (status = 404, description = "Print job not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<UpdatePrintJob>,
) -> AppResult<Json<PrintJob>> {
    let job = state.services.jobs.update(&id, data).await?;
    Ok(Json(job))
}

/// Delete a print job
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 204, description = "Print job deleted")
    )
)]
pub async fn delete_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    state.services.jobs.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
