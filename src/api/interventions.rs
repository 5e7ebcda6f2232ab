//! Intervention time API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::intervention::{CreateInterventionTime, InterventionTime, UpdateInterventionTime},
};

/// List intervention times
#[utoipa::path(
    get,
    path = "/intervention-times",
    tag = "intervention-times",
    responses(
        (status = 200, description = "Intervention times", body = Vec<InterventionTime>)
    )
)]
pub async fn list_intervention_times(
    State(state): State<crate::AppState>,
) -> Json<Vec<InterventionTime>> {
    Json(state.services.interventions.list().await)
}

#[utoipa::path(
    get,
    path = "/intervention-times/{id}",
    tag = "intervention-times",
    params(("id" = String, Path, description = "Intervention time ID")),
    responses(
        (status = 200, description = "Intervention time", body = InterventionTime),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_intervention_time(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<InterventionTime>> {
    let time = state.services.interventions.get_by_id(&id).await?;
    Ok(Json(time))
}

#[utoipa::path(
    post,
    path = "/intervention-times",
    tag = "intervention-times",
    request_body = CreateInterventionTime,
    responses(
        (status = 201, description = "Intervention time created", body = InterventionTime),
        (status = 400, description = "Invalid time or days", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_intervention_time(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateInterventionTime>,
) -> AppResult<(StatusCode, Json<InterventionTime>)> {
    let time = state.services.interventions.create(data).await?;
    Ok((StatusCode::CREATED, Json(time)))
}

#[utoipa::path(
    put,
    path = "/intervention-times/{id}",
    tag = "intervention-times",
    params(("id" = String, Path, description = "Intervention time ID")),
    request_body = UpdateInterventionTime,
    responses(
        (status = 200, description = "Intervention time updated", body = InterventionTime),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_intervention_time(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
    AppJson(data): AppJson<UpdateInterventionTime>,
) -> AppResult<Json<InterventionTime>> {
    let time = state.services.interventions.update(&id, data).await?;
    Ok(Json(time))
}

#[utoipa::path(
    delete,
    path = "/intervention-times/{id}",
    tag = "intervention-times",
    params(("id" = String, Path, description = "Intervention time ID")),
    responses(
        (status = 204, description = "Intervention time deleted")
    )
)]
pub async fn delete_intervention_time(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    state.services.interventions.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
