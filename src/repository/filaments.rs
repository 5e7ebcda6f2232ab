//! Filament domain methods on Store

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{
        filament::{CreateFilament, Filament, UpdateFilament},
        DropdownCategory,
    },
};

impl Store {
    /// List all spools in creation order
    pub fn filaments_list(&self) -> Vec<Filament> {
        self.filaments.to_vec()
    }

    pub fn filaments_get_by_id(&self, id: &str) -> Option<&Filament> {
        self.filaments.get(id)
    }

    /// Spools below the given remaining weight
    pub fn filaments_low(&self, threshold_g: f64) -> Vec<Filament> {
        self.filaments
            .iter()
            .filter(|f| f.is_low(threshold_g))
            .cloned()
            .collect()
    }

    /// Add a full spool and remember its brand, type and color
    pub fn filaments_create(&mut self, data: CreateFilament) -> Filament {
        let filament = Filament::new(self.filaments.next_id(), data);
        self.register_filament_options(&filament);
        self.filaments.insert(filament.clone());
        filament
    }

    /// Merge fields into an existing spool; `None` if the id is unknown
    pub fn filaments_update(&mut self, id: &str, data: UpdateFilament) -> Option<Filament> {
        let filament = self.filaments.get_mut(id)?;
        filament.apply(data);
        let filament = filament.clone();
        self.register_filament_options(&filament);
        Some(filament)
    }

    /// Set remaining filament from a scale reading of spool plus filament.
    /// A reading lighter than the empty spool is rejected and nothing changes.
    pub fn filaments_weigh(&mut self, id: &str, reading_g: f64) -> AppResult<Filament> {
        let filament = self
            .filaments
            .get_mut(id)
            .ok_or_else(|| AppError::filament_not_found(id))?;

        let remaining = filament.remaining_from_reading(reading_g).ok_or_else(|| {
            AppError::Validation(format!(
                "Current weight {}g cannot be less than empty spool weight {}g",
                reading_g, filament.empty_spool_weight_g
            ))
        })?;

        filament.remaining_g = remaining;
        Ok(filament.clone())
    }

    /// Remove a finished spool if present
    pub fn filaments_delete(&mut self, id: &str) -> bool {
        self.filaments.remove(id).is_some()
    }

    fn register_filament_options(&mut self, filament: &Filament) {
        self.dropdown_options
            .insert(DropdownCategory::Brands, &filament.brand);
        self.dropdown_options
            .insert(DropdownCategory::Types, &filament.filament_type);
        self.dropdown_options
            .insert(DropdownCategory::Colors, &filament.color);
    }
}
