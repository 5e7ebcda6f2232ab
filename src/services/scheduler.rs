//! Scheduler service: assignment checks, job transitions and the board view

use crate::{
    error::{AppError, AppResult},
    models::{
        job::AssignJob, AssignmentCheck, Board, CompletionEvent, Filament, JobSort, JobStatus,
        PrintJob, Printer, PrinterLane,
    },
    repository::Repository,
    scheduler::{self, Assignment, Completion},
};

use super::notifications::Notifier;

#[derive(Clone)]
pub struct SchedulerService {
    repository: Repository,
    default_buffer_hr: f64,
    notifier: Notifier,
}

fn check(job: &PrintJob, printer: &Printer) -> AssignmentCheck {
    let result = scheduler::validate_assignment(job, printer);
    AssignmentCheck {
        printer_id: printer.id.clone(),
        printer_name: printer.name.clone(),
        valid: result.is_ok(),
        reason: result.err().map(|e| e.to_string()),
    }
}

impl SchedulerService {
    pub fn new(repository: Repository, default_buffer_hr: f64, notifier: Notifier) -> Self {
        Self {
            repository,
            default_buffer_hr,
            notifier,
        }
    }

    /// Check a job against one printer without changing anything
    pub async fn validate(&self, job_id: &str, printer_id: &str) -> AppResult<AssignmentCheck> {
        let store = self.repository.read().await;
        let job = store
            .jobs_get_by_id(job_id)
            .ok_or_else(|| AppError::job_not_found(job_id))?;
        let printer = store
            .printers_get_by_id(printer_id)
            .ok_or_else(|| AppError::printer_not_found(printer_id))?;
        Ok(check(job, printer))
    }

    /// Check a job against every printer, in printer order
    pub async fn targets(&self, job_id: &str) -> AppResult<Vec<AssignmentCheck>> {
        let store = self.repository.read().await;
        let job = store
            .jobs_get_by_id(job_id)
            .ok_or_else(|| AppError::job_not_found(job_id))?;
        Ok(store.printers().iter().map(|p| check(job, p)).collect())
    }

    /// Spools that satisfy the job's type and color requirements
    pub async fn compatible_filaments(&self, job_id: &str) -> AppResult<Vec<Filament>> {
        let store = self.repository.read().await;
        let job = store
            .jobs_get_by_id(job_id)
            .ok_or_else(|| AppError::job_not_found(job_id))?;
        Ok(scheduler::compatible_filaments(job, store.filaments().iter())
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn assign(&self, job_id: &str, request: AssignJob) -> AppResult<PrintJob> {
        let assignment = Assignment::from_request(request, self.default_buffer_hr);
        let printer_id = assignment.printer_id.clone();

        let result = scheduler::assign(&mut *self.repository.write().await, job_id, assignment);
        match &result {
            Ok(job) => tracing::info!(
                job_id,
                printer_id = %printer_id,
                filament_id = ?job.assigned_filament_id,
                buffer_hr = ?job.buffer_hr,
                "Print job scheduled"
            ),
            Err(e) => tracing::warn!(job_id, printer_id = %printer_id, "Assignment rejected: {}", e),
        }
        result
    }

    pub async fn start(&self, job_id: &str) -> AppResult<PrintJob> {
        let result = scheduler::start(&mut *self.repository.write().await, job_id);
        match &result {
            Ok(job) => tracing::info!(job_id, printer_id = ?job.assigned_printer_id, "Print started"),
            Err(e) => tracing::warn!(job_id, "Start rejected: {}", e),
        }
        result
    }

    /// Finish a print and notify subscribers
    pub async fn complete(&self, job_id: &str) -> AppResult<Completion> {
        let result = scheduler::complete(&mut *self.repository.write().await, job_id);
        match &result {
            Ok(completion) => {
                tracing::info!(
                    job_id,
                    printer_id = ?completion.job.assigned_printer_id,
                    remaining_g = ?completion.filament.as_ref().map(|f| f.remaining_g),
                    "Print completed"
                );
                self.notifier.publish(CompletionEvent::new(
                    &completion.job.id,
                    &completion.job.name,
                    completion.job.assigned_printer_id.clone(),
                ));
            }
            Err(e) => tracing::warn!(job_id, "Completion rejected: {}", e),
        }
        result
    }

    /// Queued jobs, one lane per printer with the jobs occupying it, and
    /// the intervention times
    pub async fn board(&self) -> Board {
        let store = self.repository.read().await;
        Board {
            queued: store.jobs_list(Some(JobStatus::Queued), JobSort::Created),
            lanes: store
                .printers()
                .iter()
                .map(|printer| PrinterLane {
                    jobs: store.jobs_active_on(&printer.id),
                    printer: printer.clone(),
                })
                .collect(),
            intervention_times: store.interventions_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            filament::CreateFilament, job::CreatePrintJob, printer::CreatePrinter,
            InterventionChoice, PrinterStatus,
        },
        repository::Store,
    };

    struct Setup {
        service: SchedulerService,
        notifier: Notifier,
        small: String,
        large: String,
        spool: String,
        job: String,
    }

    async fn setup() -> Setup {
        let mut store = Store::default();
        let small = store
            .printers_create(CreatePrinter {
                name: "A1 mini".into(),
                bed_size_x: 180.0,
                bed_size_y: 180.0,
                has_ams: Some(true),
            })
            .id;
        let large = store
            .printers_create(CreatePrinter {
                name: "X1C".into(),
                bed_size_x: 256.0,
                bed_size_y: 256.0,
                has_ams: Some(true),
            })
            .id;
        let spool = store
            .filaments_create(CreateFilament {
                brand: "Sunlu".into(),
                filament_type: "PLA".into(),
                color: "White".into(),
                color_hex: None,
                initial_weight_g: 1000.0,
                empty_spool_weight_g: 150.0,
            })
            .id;
        let job = store
            .jobs_create(CreatePrintJob {
                name: "Helmet".into(),
                url: None,
                print_time_hr: 12.0,
                filament_usage_g: 300.0,
                required_type: Some("PLA".into()),
                required_color: None,
                urgency: None,
                print_size_x: Some(200.0),
                print_size_y: Some(190.0),
                ams_required: None,
                compatible_printer_ids: None,
            })
            .id;

        let notifier = Notifier::new(8);
        Setup {
            service: SchedulerService::new(Repository::new(store), 0.25, notifier.clone()),
            notifier,
            small,
            large,
            spool,
            job,
        }
    }

    fn request(printer_id: &str, filament_id: &str) -> AssignJob {
        AssignJob {
            printer_id: printer_id.into(),
            filament_id: filament_id.into(),
            buffer_hr: None,
            intervention_choice: InterventionChoice::Finish,
        }
    }

    #[tokio::test]
    async fn test_targets_mark_small_bed_invalid() {
        let s = setup().await;
        let targets = s.service.targets(&s.job).await.unwrap();
        assert_eq!(targets.len(), 2);
        assert!(!targets[0].valid);
        assert!(targets[0].reason.as_deref().unwrap().contains("exceeds bed size"));
        assert!(targets[1].valid);
        assert_eq!(targets[1].reason, None);

        let single = s.service.validate(&s.job, &s.large).await.unwrap();
        assert_eq!(single, targets[1]);
    }

    #[tokio::test]
    async fn test_assign_uses_default_buffer() {
        let s = setup().await;
        let job = s
            .service
            .assign(&s.job, request(&s.large, &s.spool))
            .await
            .unwrap();
        assert_eq!(job.buffer_hr, Some(0.25));
        assert_eq!(job.status, JobStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_rejected_assignment_is_typed() {
        let s = setup().await;
        let err = s
            .service
            .assign(&s.job, request(&s.small, &s.spool))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Assignment(_)));
        assert!(s.service.board().await.queued.iter().any(|j| j.id == s.job));
    }

    #[tokio::test]
    async fn test_complete_publishes_notification() {
        let s = setup().await;
        let mut rx = s.notifier.subscribe();

        s.service
            .assign(&s.job, request(&s.large, &s.spool))
            .await
            .unwrap();
        s.service.start(&s.job).await.unwrap();
        let completion = s.service.complete(&s.job).await.unwrap();

        assert_eq!(completion.filament.unwrap().remaining_g, 700.0);
        assert_eq!(completion.printer.unwrap().status, PrinterStatus::Idle);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.job_id, s.job);
        assert_eq!(event.printer_id.as_deref(), Some(s.large.as_str()));
    }

    #[tokio::test]
    async fn test_board_lanes() {
        let s = setup().await;
        s.service
            .assign(&s.job, request(&s.large, &s.spool))
            .await
            .unwrap();
        s.service.start(&s.job).await.unwrap();

        let board = s.service.board().await;
        assert!(board.queued.is_empty());
        assert_eq!(board.lanes.len(), 2);
        assert!(board.lanes[0].jobs.is_empty());
        assert_eq!(board.lanes[1].jobs[0].status, JobStatus::Printing);
        assert_eq!(board.lanes[1].printer.status, PrinterStatus::Printing);
    }

    #[tokio::test]
    async fn test_compatible_filaments_unknown_job() {
        let s = setup().await;
        assert_eq!(s.service.compatible_filaments(&s.job).await.unwrap().len(), 1);
        assert!(matches!(
            s.service.compatible_filaments("job_missing").await,
            Err(AppError::NotFound(_))
        ));
    }
}
