//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    events, filaments, health, interventions, jobs, options, printers, scheduler, snapshot,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Print Hub API",
        version = "0.1.0",
        description = "3D printer filament inventory, print queue and assignment REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Printers
        printers::list_printers,
        printers::get_printer,
        printers::create_printer,
        printers::update_printer,
        printers::delete_printer,
        // Filaments
        filaments::list_filaments,
        filaments::get_filament,
        filaments::create_filament,
        filaments::update_filament,
        filaments::weigh_filament,
        filaments::delete_filament,
        // Jobs
        jobs::list_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        // Scheduler
        scheduler::get_board,
        scheduler::list_targets,
        scheduler::validate_assignment,
        scheduler::list_compatible_filaments,
        scheduler::assign_job,
        scheduler::start_job,
        scheduler::complete_job,
        // Intervention times
        interventions::list_intervention_times,
        interventions::get_intervention_time,
        interventions::create_intervention_time,
        interventions::update_intervention_time,
        interventions::delete_intervention_time,
        // Options
        options::get_options,
        options::add_option,
        // Snapshot
        snapshot::export_snapshot,
        snapshot::import_snapshot,
        snapshot::upload_snapshot,
        // Events
        events::completion_events,
    ),
    components(
        schemas(
            // Printers
            crate::models::Printer,
            crate::models::PrinterStatus,
            crate::models::printer::CreatePrinter,
            crate::models::printer::UpdatePrinter,
            // Filaments
            crate::models::Filament,
            crate::models::FilamentView,
            crate::models::filament::CreateFilament,
            crate::models::filament::UpdateFilament,
            crate::models::filament::WeighFilament,
            filaments::FilamentQuery,
            // Jobs
            crate::models::PrintJob,
            crate::models::JobStatus,
            crate::models::InterventionChoice,
            crate::models::JobSort,
            crate::models::job::JobQuery,
            crate::models::job::CreatePrintJob,
            crate::models::job::UpdatePrintJob,
            crate::models::job::AssignJob,
            // Scheduler
            crate::models::Board,
            crate::models::PrinterLane,
            crate::models::AssignmentCheck,
            crate::scheduler::AssignmentError,
            scheduler::CompletionResponse,
            // Intervention times
            crate::models::InterventionTime,
            crate::models::intervention::CreateInterventionTime,
            crate::models::intervention::UpdateInterventionTime,
            // Options
            crate::models::DropdownCategory,
            crate::models::DropdownOptions,
            crate::models::dropdown::AddDropdownOption,
            // Snapshot
            crate::models::Snapshot,
            crate::models::ImportSummary,
            // Events
            crate::models::CompletionEvent,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "printers", description = "Printer management"),
        (name = "filaments", description = "Filament inventory"),
        (name = "jobs", description = "Print queue"),
        (name = "scheduler", description = "Assignment board and job lifecycle"),
        (name = "intervention-times", description = "Times someone is available at the printers"),
        (name = "options", description = "Form dropdown values"),
        (name = "snapshot", description = "Data export and import"),
        (name = "events", description = "Completion notifications")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
