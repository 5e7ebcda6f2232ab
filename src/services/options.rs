//! Dropdown option service

use crate::{
    error::{AppError, AppResult},
    models::{dropdown::AddDropdownOption, DropdownCategory, DropdownOptions},
    repository::Repository,
};

#[derive(Clone)]
pub struct OptionsService {
    repository: Repository,
}

impl OptionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> DropdownOptions {
        self.repository.read().await.dropdown_options().clone()
    }

    /// Add a value to a category. Adding a known value is a no-op.
    pub async fn add(
        &self,
        category: DropdownCategory,
        data: AddDropdownOption,
    ) -> AppResult<DropdownOptions> {
        if data.value.trim().is_empty() {
            return Err(AppError::Validation("Option value is required".to_string()));
        }

        let mut store = self.repository.write().await;
        if store.options_add(category, &data.value) {
            tracing::info!(?category, value = %data.value.trim(), "Dropdown option added");
        }
        Ok(store.dropdown_options().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_reject_blank() {
        let service = OptionsService::new(Repository::default());
        let options = service
            .add(
                DropdownCategory::Brands,
                AddDropdownOption {
                    value: " Prusament ".into(),
                },
            )
            .await
            .unwrap();
        assert!(options.get(DropdownCategory::Brands).contains("Prusament"));

        let result = service
            .add(DropdownCategory::Colors, AddDropdownOption { value: "  ".into() })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
