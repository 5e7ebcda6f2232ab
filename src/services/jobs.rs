//! Print queue service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::job::{CreatePrintJob, JobQuery, PrintJob, UpdatePrintJob},
    repository::Repository,
};

#[derive(Clone)]
pub struct JobsService {
    repository: Repository,
}

impl JobsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &JobQuery) -> Vec<PrintJob> {
        self.repository
            .read()
            .await
            .jobs_list(query.status, query.sort.unwrap_or_default())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<PrintJob> {
        self.repository
            .read()
            .await
            .jobs_get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::job_not_found(id))
    }

    /// Add a job to the queue in Queued state
    pub async fn create(&self, data: CreatePrintJob) -> AppResult<PrintJob> {
        data.validate()?;
        let job = self.repository.write().await.jobs_create(data);
        tracing::info!(job_id = %job.id, name = %job.name, "Print job queued");
        Ok(job)
    }

    /// Update descriptive fields. Status and assignment only change through
    /// the scheduler.
    pub async fn update(&self, id: &str, data: UpdatePrintJob) -> AppResult<PrintJob> {
        data.validate()?;
        let job = self
            .repository
            .write()
            .await
            .jobs_update(id, data)
            .ok_or_else(|| AppError::job_not_found(id))?;
        tracing::info!(job_id = %job.id, "Print job updated");
        Ok(job)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.write().await.jobs_delete(id) {
            tracing::info!(job_id = %id, "Print job deleted");
        } else {
            tracing::debug!(job_id = %id, "Delete of unknown print job ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{job::JobSort, JobStatus};

    fn request(name: &str, urgency: Option<&str>) -> CreatePrintJob {
        CreatePrintJob {
            name: name.into(),
            url: None,
            print_time_hr: 2.0,
            filament_usage_g: 40.0,
            required_type: None,
            required_color: None,
            urgency: urgency.map(String::from),
            print_size_x: None,
            print_size_y: None,
            ams_required: None,
            compatible_printer_ids: None,
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_urgency() {
        let service = JobsService::new(Repository::default());
        service.create(request("a", None)).await.unwrap();
        service.create(request("b", Some("Low"))).await.unwrap();
        service.create(request("c", Some("High"))).await.unwrap();

        let query = JobQuery {
            sort: Some(JobSort::Urgency),
            status: None,
        };
        let names: Vec<_> = service
            .list(&query)
            .await
            .into_iter()
            .map(|j| j.name)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_status_filter() {
        let service = JobsService::new(Repository::default());
        service.create(request("a", None)).await.unwrap();

        let query = JobQuery {
            sort: None,
            status: Some(JobStatus::Completed),
        };
        assert!(service.list(&query).await.is_empty());
        assert_eq!(service.list(&JobQuery::default()).await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_zero_usage() {
        let service = JobsService::new(Repository::default());
        let mut data = request("a", None);
        data.filament_usage_g = 0.0;
        assert!(matches!(service.create(data).await, Err(AppError::Validation(_))));
    }
}
