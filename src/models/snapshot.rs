//! Whole-store export document

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    dropdown::DropdownOptions, filament::Filament, intervention::InterventionTime,
    job::PrintJob, printer::Printer,
};

/// Export/import document. Field names match the data files written by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub printers: Vec<Printer>,
    pub filaments: Vec<Filament>,
    pub print_queue: Vec<PrintJob>,
    pub intervention_times: Vec<InterventionTime>,
    #[serde(default)]
    pub dropdown_options: DropdownOptions,
}

/// Counts of records loaded by an import
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub printers: usize,
    pub filaments: usize,
    pub print_jobs: usize,
    pub intervention_times: usize,
}

impl From<&Snapshot> for ImportSummary {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            printers: snapshot.printers.len(),
            filaments: snapshot.filaments.len(),
            print_jobs: snapshot.print_queue.len(),
            intervention_times: snapshot.intervention_times.len(),
        }
    }
}
