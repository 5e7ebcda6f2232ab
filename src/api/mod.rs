//! API handlers for Print Hub REST endpoints

pub mod events;
pub mod filaments;
pub mod health;
pub mod interventions;
pub mod jobs;
pub mod openapi;
pub mod options;
pub mod printers;
pub mod scheduler;
pub mod snapshot;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor; rejections use the standard error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor; rejections use the standard error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query extractor; rejections use the standard error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Printers
        .route("/printers", get(printers::list_printers))
        .route("/printers", post(printers::create_printer))
        .route("/printers/:id", get(printers::get_printer))
        .route("/printers/:id", put(printers::update_printer))
        .route("/printers/:id", delete(printers::delete_printer))
        // Filaments
        .route("/filaments", get(filaments::list_filaments))
        .route("/filaments", post(filaments::create_filament))
        .route("/filaments/:id", get(filaments::get_filament))
        .route("/filaments/:id", put(filaments::update_filament))
        .route("/filaments/:id", delete(filaments::delete_filament))
        .route("/filaments/:id/weigh", post(filaments::weigh_filament))
        // Print queue
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs", post(jobs::create_job))
        .route("/jobs/:id", get(jobs::get_job))
        .route("/jobs/:id", put(jobs::update_job))
        .route("/jobs/:id", delete(jobs::delete_job))
        // Scheduler
        .route("/jobs/:id/filaments", get(scheduler::list_compatible_filaments))
        .route("/jobs/:id/targets", get(scheduler::list_targets))
        .route(
            "/jobs/:id/validate/:printer_id",
            get(scheduler::validate_assignment),
        )
        .route("/jobs/:id/assign", post(scheduler::assign_job))
        .route("/jobs/:id/start", post(scheduler::start_job))
        .route("/jobs/:id/complete", post(scheduler::complete_job))
        .route("/board", get(scheduler::get_board))
        // Intervention times
        .route("/intervention-times", get(interventions::list_intervention_times))
        .route("/intervention-times", post(interventions::create_intervention_time))
        .route("/intervention-times/:id", get(interventions::get_intervention_time))
        .route("/intervention-times/:id", put(interventions::update_intervention_time))
        .route("/intervention-times/:id", delete(interventions::delete_intervention_time))
        // Dropdown options
        .route("/dropdown-options", get(options::get_options))
        .route("/dropdown-options/:category", post(options::add_option))
        // Export / import
        .route("/snapshot", get(snapshot::export_snapshot))
        .route("/snapshot", put(snapshot::import_snapshot))
        .route("/snapshot/upload", post(snapshot::upload_snapshot))
        // Notifications
        .route("/events", get(events::completion_events))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
