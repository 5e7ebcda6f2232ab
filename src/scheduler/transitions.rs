//! Job lifecycle transitions and their side effects on printers and spools.
//!
//! Every transition checks all guards before mutating anything, so a
//! rejected call leaves the store exactly as it was.

use crate::{
    error::{AppError, AppResult},
    models::{
        job::AssignJob, Filament, InterventionChoice, JobStatus, PrintJob, Printer,
        PrinterStatus,
    },
    repository::Store,
};

use super::validation::{filament_matches, validate_assignment};

/// Outcome of completing a job
#[derive(Debug, Clone)]
pub struct Completion {
    pub job: PrintJob,
    /// Spool after deduction; `None` if it no longer exists
    pub filament: Option<Filament>,
    /// Printer after its status refresh; `None` if it no longer exists
    pub printer: Option<Printer>,
}

/// Validated assignment parameters
#[derive(Debug, Clone)]
pub struct Assignment {
    pub printer_id: String,
    pub filament_id: String,
    pub buffer_hr: f64,
    pub intervention_choice: InterventionChoice,
}

impl Assignment {
    pub fn from_request(request: AssignJob, default_buffer_hr: f64) -> Self {
        Self {
            printer_id: request.printer_id,
            filament_id: request.filament_id,
            buffer_hr: request.buffer_hr.unwrap_or(default_buffer_hr),
            intervention_choice: request.intervention_choice,
        }
    }
}

fn expect_status(job: &PrintJob, expected: JobStatus, event: &str) -> AppResult<()> {
    if job.status != expected {
        return Err(AppError::InvalidTransition(format!(
            "cannot {} job '{}': it is {}, expected {}",
            event, job.name, job.status, expected
        )));
    }
    Ok(())
}

/// Queued -> Scheduled. Puts the job on a printer with a chosen spool.
pub fn assign(store: &mut Store, job_id: &str, assignment: Assignment) -> AppResult<PrintJob> {
    let job = store
        .jobs_get_by_id(job_id)
        .ok_or_else(|| AppError::job_not_found(job_id))?;
    expect_status(job, JobStatus::Queued, "assign")?;

    let printer = store
        .printers_get_by_id(&assignment.printer_id)
        .ok_or_else(|| AppError::printer_not_found(&assignment.printer_id))?;
    validate_assignment(job, printer)?;

    if assignment.filament_id.trim().is_empty() {
        return Err(AppError::Validation("Please select a filament".to_string()));
    }
    let filament = store
        .filaments_get_by_id(&assignment.filament_id)
        .ok_or_else(|| AppError::filament_not_found(&assignment.filament_id))?;
    if !filament_matches(job, filament) {
        return Err(AppError::Validation(format!(
            "Filament {} {} {} does not match the job requirements",
            filament.brand, filament.filament_type, filament.color
        )));
    }

    if !assignment.buffer_hr.is_finite() || assignment.buffer_hr < 0.0 {
        return Err(AppError::Validation(
            "Buffer time cannot be negative".to_string(),
        ));
    }

    let jobs = store.jobs_mut();
    let job = jobs
        .get_mut(job_id)
        .ok_or_else(|| AppError::job_not_found(job_id))?;
    job.status = JobStatus::Scheduled;
    job.assigned_printer_id = Some(assignment.printer_id.clone());
    job.assigned_filament_id = Some(assignment.filament_id);
    job.buffer_hr = Some(assignment.buffer_hr);
    job.intervention_choice = Some(assignment.intervention_choice);
    let job = job.clone();

    refresh_printer_status(store, &assignment.printer_id);
    Ok(job)
}

/// Scheduled -> Printing
pub fn start(store: &mut Store, job_id: &str) -> AppResult<PrintJob> {
    let job = store
        .jobs_mut()
        .get_mut(job_id)
        .ok_or_else(|| AppError::job_not_found(job_id))?;
    expect_status(job, JobStatus::Scheduled, "start")?;

    job.status = JobStatus::Printing;
    Ok(job.clone())
}

/// Printing -> Completed. Deducts usage from the spool (never below zero)
/// and frees the printer once nothing else occupies it.
pub fn complete(store: &mut Store, job_id: &str) -> AppResult<Completion> {
    let job = store
        .jobs_get_by_id(job_id)
        .ok_or_else(|| AppError::job_not_found(job_id))?;
    expect_status(job, JobStatus::Printing, "complete")?;

    let filament_id = job.assigned_filament_id.clone().ok_or_else(|| {
        AppError::Validation(format!("No filament assigned to job '{}'", job.name))
    })?;
    let printer_id = job.assigned_printer_id.clone();
    let usage_g = job.filament_usage_g;

    let filament = match store.filaments_mut().get_mut(&filament_id) {
        Some(filament) => {
            filament.consume(usage_g);
            Some(filament.clone())
        }
        None => {
            tracing::warn!(job_id, filament_id = %filament_id, "Assigned spool no longer exists, nothing deducted");
            None
        }
    };

    let job = store
        .jobs_mut()
        .get_mut(job_id)
        .ok_or_else(|| AppError::job_not_found(job_id))?;
    job.status = JobStatus::Completed;
    let job = job.clone();

    let printer = printer_id.and_then(|id| refresh_printer_status(store, &id));

    Ok(Completion {
        job,
        filament,
        printer,
    })
}

/// Derive a printer's status from the jobs assigned to it
pub fn refresh_printer_status(store: &mut Store, printer_id: &str) -> Option<Printer> {
    let busy = !store.jobs_active_on(printer_id).is_empty();
    let printer = store.printers_mut().get_mut(printer_id)?;
    printer.status = if busy {
        PrinterStatus::Printing
    } else {
        PrinterStatus::Idle
    };
    Some(printer.clone())
}
