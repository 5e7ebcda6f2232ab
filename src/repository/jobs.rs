//! Print job domain methods on Store

use super::Store;
use crate::models::{
    job::{sort_jobs, CreatePrintJob, JobSort, PrintJob, UpdatePrintJob},
    DropdownCategory, JobStatus,
};

impl Store {
    /// List jobs, optionally filtered by status, in the requested order
    pub fn jobs_list(&self, status: Option<JobStatus>, sort: JobSort) -> Vec<PrintJob> {
        let mut jobs: Vec<PrintJob> = self
            .jobs
            .iter()
            .filter(|j| status.map_or(true, |s| j.status == s))
            .cloned()
            .collect();
        sort_jobs(&mut jobs, sort);
        jobs
    }

    pub fn jobs_get_by_id(&self, id: &str) -> Option<&PrintJob> {
        self.jobs.get(id)
    }

    /// Jobs occupying a printer (Scheduled or Printing)
    pub fn jobs_active_on(&self, printer_id: &str) -> Vec<PrintJob> {
        self.jobs
            .iter()
            .filter(|j| j.status.is_active())
            .filter(|j| j.assigned_printer_id.as_deref() == Some(printer_id))
            .cloned()
            .collect()
    }

    /// Queue a new job
    pub fn jobs_create(&mut self, data: CreatePrintJob) -> PrintJob {
        let job = PrintJob::new(self.jobs.next_id(), data);
        self.register_job_options(&job);
        self.jobs.insert(job.clone());
        job
    }

    /// Merge descriptive fields into an existing job; `None` if the id is unknown
    pub fn jobs_update(&mut self, id: &str, data: UpdatePrintJob) -> Option<PrintJob> {
        let job = self.jobs.get_mut(id)?;
        job.apply(data);
        let job = job.clone();
        self.register_job_options(&job);
        Some(job)
    }

    /// Remove a job if present. Printer and filament changes already made
    /// on its behalf are kept.
    pub fn jobs_delete(&mut self, id: &str) -> bool {
        self.jobs.remove(id).is_some()
    }

    fn register_job_options(&mut self, job: &PrintJob) {
        if let Some(required_type) = &job.required_type {
            self.dropdown_options
                .insert(DropdownCategory::Types, required_type);
        }
        if let Some(required_color) = &job.required_color {
            self.dropdown_options
                .insert(DropdownCategory::Colors, required_color);
        }
        if let Some(urgency) = &job.urgency {
            self.dropdown_options
                .insert(DropdownCategory::Urgencies, urgency);
        }
    }
}
