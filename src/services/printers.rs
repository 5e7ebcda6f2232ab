//! Printer service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::printer::{CreatePrinter, Printer, UpdatePrinter},
    repository::Repository,
};

#[derive(Clone)]
pub struct PrintersService {
    repository: Repository,
}

impl PrintersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Printer> {
        self.repository.read().await.printers_list()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Printer> {
        self.repository
            .read()
            .await
            .printers_get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::printer_not_found(id))
    }

    pub async fn create(&self, data: CreatePrinter) -> AppResult<Printer> {
        data.validate()?;
        let printer = self.repository.write().await.printers_create(data);
        tracing::info!(printer_id = %printer.id, name = %printer.name, "Printer added");
        Ok(printer)
    }

    pub async fn update(&self, id: &str, data: UpdatePrinter) -> AppResult<Printer> {
        data.validate()?;
        let printer = self
            .repository
            .write()
            .await
            .printers_update(id, data)
            .ok_or_else(|| AppError::printer_not_found(id))?;
        tracing::info!(printer_id = %printer.id, "Printer updated");
        Ok(printer)
    }

    /// Remove a printer. Jobs assigned to it keep their assignment.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.write().await.printers_delete(id) {
            tracing::info!(printer_id = %id, "Printer deleted");
        } else {
            tracing::debug!(printer_id = %id, "Delete of unknown printer ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ender() -> CreatePrinter {
        CreatePrinter {
            name: "Ender 3".into(),
            bed_size_x: 220.0,
            bed_size_y: 220.0,
            has_ams: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_bed() {
        let service = PrintersService::new(Repository::default());
        let mut data = ender();
        data.bed_size_x = 0.0;
        assert!(matches!(service.create(data).await, Err(AppError::Validation(_))));
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = PrintersService::new(Repository::default());
        let mut data = ender();
        data.name = " \t ".into();
        assert!(matches!(service.create(data).await, Err(AppError::Validation(_))));
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let service = PrintersService::new(Repository::default());
        let result = service.update("printer_missing", UpdatePrinter::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = PrintersService::new(Repository::default());
        let printer = service.create(ender()).await.unwrap();
        service.delete(&printer.id).await.unwrap();
        service.delete(&printer.id).await.unwrap();
        assert!(service.get_by_id(&printer.id).await.is_err());
    }
}
