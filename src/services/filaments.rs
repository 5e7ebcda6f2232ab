//! Filament inventory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::filament::{CreateFilament, FilamentView, UpdateFilament, WeighFilament},
    repository::Repository,
};

#[derive(Clone)]
pub struct FilamentsService {
    repository: Repository,
    low_threshold_g: f64,
}

impl FilamentsService {
    pub fn new(repository: Repository, low_threshold_g: f64) -> Self {
        Self {
            repository,
            low_threshold_g,
        }
    }

    /// All spools, or only those running low
    pub async fn list(&self, low_only: bool) -> Vec<FilamentView> {
        let store = self.repository.read().await;
        let filaments = if low_only {
            store.filaments_low(self.low_threshold_g)
        } else {
            store.filaments_list()
        };
        filaments
            .into_iter()
            .map(|f| FilamentView::new(f, self.low_threshold_g))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<FilamentView> {
        self.repository
            .read()
            .await
            .filaments_get_by_id(id)
            .cloned()
            .map(|f| FilamentView::new(f, self.low_threshold_g))
            .ok_or_else(|| AppError::filament_not_found(id))
    }

    pub async fn create(&self, data: CreateFilament) -> AppResult<FilamentView> {
        data.validate()?;
        let filament = self.repository.write().await.filaments_create(data);
        tracing::info!(
            filament_id = %filament.id,
            brand = %filament.brand,
            filament_type = %filament.filament_type,
            color = %filament.color,
            "Filament added"
        );
        Ok(FilamentView::new(filament, self.low_threshold_g))
    }

    pub async fn update(&self, id: &str, data: UpdateFilament) -> AppResult<FilamentView> {
        data.validate()?;
        let filament = self
            .repository
            .write()
            .await
            .filaments_update(id, data)
            .ok_or_else(|| AppError::filament_not_found(id))?;
        tracing::info!(filament_id = %filament.id, remaining_g = filament.remaining_g, "Filament updated");
        Ok(FilamentView::new(filament, self.low_threshold_g))
    }

    /// Record a scale reading of spool plus filament
    pub async fn weigh(&self, id: &str, data: WeighFilament) -> AppResult<FilamentView> {
        let result = self.repository.write().await.filaments_weigh(id, data.reading_g);
        match result {
            Ok(filament) => {
                tracing::info!(filament_id = %id, reading_g = data.reading_g, remaining_g = filament.remaining_g, "Filament weighed");
                Ok(FilamentView::new(filament, self.low_threshold_g))
            }
            Err(e) => {
                tracing::warn!(filament_id = %id, reading_g = data.reading_g, "Weighing rejected: {}", e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.write().await.filaments_delete(id) {
            tracing::info!(filament_id = %id, "Filament deleted");
        } else {
            tracing::debug!(filament_id = %id, "Delete of unknown filament ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spool(initial_weight_g: f64) -> CreateFilament {
        CreateFilament {
            brand: "Hatchbox".into(),
            filament_type: "PETG".into(),
            color: "Blue".into(),
            color_hex: Some("#0000ff".into()),
            initial_weight_g,
            empty_spool_weight_g: 200.0,
        }
    }

    #[tokio::test]
    async fn test_low_only_filter() {
        let service = FilamentsService::new(Repository::default(), 100.0);
        service.create(spool(1000.0)).await.unwrap();
        let small = service.create(spool(50.0)).await.unwrap();

        assert_eq!(service.list(false).await.len(), 2);
        let low = service.list(true).await;
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].filament.id, small.filament.id);
        assert!(low[0].is_low);
    }

    #[tokio::test]
    async fn test_weigh_rejects_light_reading() {
        let service = FilamentsService::new(Repository::default(), 100.0);
        let created = service.create(spool(1000.0)).await.unwrap();
        let id = created.filament.id.clone();

        let result = service.weigh(&id, WeighFilament { reading_g: 150.0 }).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.get_by_id(&id).await.unwrap().filament.remaining_g, 1000.0);

        let weighed = service.weigh(&id, WeighFilament { reading_g: 700.0 }).await.unwrap();
        assert_eq!(weighed.filament.remaining_g, 500.0);
        assert_eq!(weighed.fill_percent, 50.0);
    }

    #[tokio::test]
    async fn test_create_validates() {
        let service = FilamentsService::new(Repository::default(), 100.0);
        let mut data = spool(1000.0);
        data.brand = String::new();
        assert!(service.create(data).await.is_err());

        let mut data = spool(1000.0);
        data.brand = "   ".into();
        assert!(matches!(service.create(data).await, Err(AppError::Validation(_))));
        assert!(service.list(false).await.is_empty());
    }
}
