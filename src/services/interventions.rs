//! Intervention time service

use crate::{
    error::{AppError, AppResult},
    models::intervention::{CreateInterventionTime, InterventionTime, UpdateInterventionTime},
    repository::Repository,
};

#[derive(Clone)]
pub struct InterventionsService {
    repository: Repository,
}

impl InterventionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<InterventionTime> {
        self.repository.read().await.interventions_list()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<InterventionTime> {
        self.repository
            .read()
            .await
            .interventions_get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::intervention_not_found(id))
    }

    pub async fn create(&self, data: CreateInterventionTime) -> AppResult<InterventionTime> {
        data.check()?;
        let time = self.repository.write().await.interventions_create(data);
        tracing::info!(time_id = %time.id, name = %time.name, at = %time.time, "Intervention time added");
        Ok(time)
    }

    pub async fn update(
        &self,
        id: &str,
        data: UpdateInterventionTime,
    ) -> AppResult<InterventionTime> {
        data.check()?;
        let time = self
            .repository
            .write()
            .await
            .interventions_update(id, data)
            .ok_or_else(|| AppError::intervention_not_found(id))?;
        tracing::info!(time_id = %time.id, "Intervention time updated");
        Ok(time)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.write().await.interventions_delete(id) {
            tracing::info!(time_id = %id, "Intervention time deleted");
        }
        Ok(())
    }
}
