//! Dropdown option endpoints

use axum::{
    extract::State,
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{dropdown::AddDropdownOption, DropdownCategory, DropdownOptions},
};

/// Remembered values for the form dropdowns
#[utoipa::path(
    get,
    path = "/dropdown-options",
    tag = "options",
    responses(
        (status = 200, description = "Dropdown options", body = DropdownOptions)
    )
)]
pub async fn get_options(State(state): State<crate::AppState>) -> Json<DropdownOptions> {
    Json(state.services.options.list().await)
}

/// Add a value to one category
#[utoipa::path(
    post,
    path = "/dropdown-options/{category}",
    tag = "options",
    params(("category" = DropdownCategory, Path, description = "brands, types, colors or urgencies")),
    request_body = AddDropdownOption,
    responses(
        (status = 200, description = "Updated dropdown options", body = DropdownOptions),
        (status = 400, description = "Blank value", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_option(
    State(state): State<crate::AppState>,
    AppPath(category): AppPath<DropdownCategory>,
    AppJson(data): AppJson<AddDropdownOption>,
) -> AppResult<Json<DropdownOptions>> {
    let options = state.services.options.add(category, data).await?;
    Ok(Json(options))
}
