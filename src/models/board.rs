//! Scheduler board views

use serde::Serialize;
use utoipa::ToSchema;

use super::{intervention::InterventionTime, job::PrintJob, printer::Printer};

/// One printer with the jobs currently occupying it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrinterLane {
    pub printer: Printer,
    /// Scheduled and printing jobs, in creation order
    pub jobs: Vec<PrintJob>,
}

/// Everything the assignment board displays
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub queued: Vec<PrintJob>,
    pub lanes: Vec<PrinterLane>,
    pub intervention_times: Vec<InterventionTime>,
}

/// Result of a speculative assignment check
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCheck {
    pub printer_id: String,
    pub printer_name: String,
    pub valid: bool,
    /// Rejection message when not valid
    pub reason: Option<String>,
}
