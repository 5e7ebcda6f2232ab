//! Scheduler board and job transition endpoints

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{job::AssignJob, AssignmentCheck, Board, Filament, PrintJob, Printer},
    scheduler::Completion,
};

/// Result of completing a print
#[derive(Serialize, ToSchema)]
pub struct CompletionResponse {
    pub job: PrintJob,
    /// Spool after deduction; absent if it was deleted
    pub filament: Option<Filament>,
    pub printer: Option<Printer>,
}

impl From<Completion> for CompletionResponse {
    fn from(c: Completion) -> Self {
        Self {
            job: c.job,
            filament: c.filament,
            printer: c.printer,
        }
    }
}

/// Scheduler board: queued jobs, printer lanes and intervention times
#[utoipa::path(
    get,
    path = "/board",
    tag = "scheduler",
    responses(
        (status = 200, description = "Board contents", body = Board)
    )
)]
pub async fn get_board(State(state): State<crate::AppState>) -> Json<Board> {
    Json(state.services.scheduler.board().await)
}

/// Check a job against every printer
#[utoipa::path(
    get,
    path = "/jobs/{id}/targets",
    tag = "scheduler",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 200, description = "One check per printer", body = Vec<AssignmentCheck>),
        (status = 404, description = "Print job not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_targets(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Vec<AssignmentCheck>>> {
    let targets = state.services.scheduler.targets(&id).await?;
    Ok(Json(targets))
}

/// Check a job against one printer
#[utoipa::path(
    get,
    path = "/jobs/{id}/validate/{printer_id}",
    tag = "scheduler",
    params(
        ("id" = String, Path, description = "Print job ID"),
        ("printer_id" = String, Path, description = "Printer ID")
    ),
    responses(
        (status = 200, description = "Assignment check", body = AssignmentCheck),
        (status = 404, description = "Job or printer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_assignment(
    State(state): State<crate::AppState>,
    AppPath((id, printer_id)): AppPath<(String, String)>,
) -> AppResult<Json<AssignmentCheck>> {
    let check = state.services.scheduler.validate(&id, &printer_id).await?;
    Ok(Json(check))
}

/// Spools matching a job's type and color requirements
#[utoipa::path(
    get,
    path = "/jobs/{id}/filaments",
    tag = "scheduler",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 200, description = "Compatible spools", body = Vec<Filament>),
        (status = 404, description = "Print job not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_compatible_filaments(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Vec<Filament>>> {
    let filaments = state.services.scheduler.compatible_filaments(&id).await?;
    Ok(Json(filaments))
}

/// Assign a queued job to a printer and spool
#[utoipa::path(
    post,
    path = "/jobs/{id}/assign",
    tag = "scheduler",
    params(("id" = String, Path, description = "Print job ID")),
    request_body = AssignJob,
    responses(
        (status = 200, description = "Job scheduled", body = PrintJob),
        (status = 400, description = "Missing or mismatched filament", body = crate::error::ErrorResponse),
        (status = 404, description = "Job, printer or filament not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Job is not queued", body = crate::error::ErrorResponse),
        (status = 422, description = "Printer cannot take this job", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<AssignJob>,
) -> AppResult<Json<PrintJob>> {
    let job = state.services.scheduler.assign(&id, data).await?;
    Ok(Json(job))
}

/// Start a scheduled job
#[utoipa::path(
    post,
    path = "/jobs/{id}/start",
    tag = "scheduler",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 200, description = "Job printing", body = PrintJob),
        (status = 409, description = "Job is not scheduled", body = crate::error::ErrorResponse)
    )
)]
pub async fn start_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<PrintJob>> {
    let job = state.services.scheduler.start(&id).await?;
    Ok(Json(job))
}

/// Complete a printing job, deducting filament
#[utoipa::path(
    post,
    path = "/jobs/{id}/complete",
    tag = "scheduler",
    params(("id" = String, Path, description = "Print job ID")),
    responses(
        (status = 200, description = "Job completed", body = CompletionResponse),
        (status = 409, description = "Job is not printing", body = crate::error::ErrorResponse)
    )
)]
pub async fn complete_job(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<CompletionResponse>> {
    let completion = state.services.scheduler.complete(&id).await?;
    Ok(Json(completion.into()))
}
