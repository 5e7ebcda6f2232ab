//! Filament spool model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::not_blank;

fn default_color_hex() -> String {
    "#000000".to_string()
}

/// Filament spool record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Filament {
    pub id: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub filament_type: String,
    pub color: String,
    #[serde(default = "default_color_hex")]
    pub color_hex: String,
    /// Net filament weight of a full spool (g)
    #[serde(rename = "initialFilamentWeight_g")]
    pub initial_weight_g: f64,
    /// Weight of the spool itself (g)
    #[serde(rename = "emptySpoolWeight_g")]
    pub empty_spool_weight_g: f64,
    /// Filament left on the spool (g)
    #[serde(rename = "remaining_g")]
    pub remaining_g: f64,
}

impl Filament {
    pub fn new(id: String, data: CreateFilament) -> Self {
        Self {
            id,
            brand: data.brand.trim().to_string(),
            filament_type: data.filament_type.trim().to_string(),
            color: data.color.trim().to_string(),
            color_hex: data.color_hex.unwrap_or_else(default_color_hex),
            initial_weight_g: data.initial_weight_g,
            empty_spool_weight_g: data.empty_spool_weight_g,
            remaining_g: data.initial_weight_g,
        }
    }

    pub fn apply(&mut self, data: UpdateFilament) {
        if let Some(brand) = data.brand {
            self.brand = brand.trim().to_string();
        }
        if let Some(filament_type) = data.filament_type {
            self.filament_type = filament_type.trim().to_string();
        }
        if let Some(color) = data.color {
            self.color = color.trim().to_string();
        }
        if let Some(color_hex) = data.color_hex {
            self.color_hex = color_hex;
        }
        if let Some(initial) = data.initial_weight_g {
            self.initial_weight_g = initial;
        }
        if let Some(empty) = data.empty_spool_weight_g {
            self.empty_spool_weight_g = empty;
        }
        if let Some(remaining) = data.remaining_g {
            self.remaining_g = remaining;
        }
    }

    /// Filament left for a total scale reading, `None` when the reading is
    /// lighter than the empty spool
    pub fn remaining_from_reading(&self, reading_g: f64) -> Option<f64> {
        let remaining = reading_g - self.empty_spool_weight_g;
        (remaining >= 0.0).then_some(remaining)
    }

    /// Deduct usage, never going below zero
    pub fn consume(&mut self, usage_g: f64) {
        self.remaining_g = (self.remaining_g - usage_g).max(0.0);
    }

    /// Fill level for display, clamped to 0..=100
    pub fn fill_percent(&self) -> f64 {
        if self.initial_weight_g <= 0.0 {
            return 0.0;
        }
        (self.remaining_g / self.initial_weight_g * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_low(&self, threshold_g: f64) -> bool {
        self.remaining_g < threshold_g
    }
}

/// Create filament request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilament {
    #[validate(custom(function = "not_blank", message = "Brand is required"))]
    pub brand: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Type is required"))]
    pub filament_type: String,
    #[validate(custom(function = "not_blank", message = "Color is required"))]
    pub color: String,
    pub color_hex: Option<String>,
    #[serde(rename = "initialFilamentWeight_g")]
    #[validate(range(exclusive_min = 0.0, message = "Initial weight must be positive"))]
    pub initial_weight_g: f64,
    #[serde(rename = "emptySpoolWeight_g")]
    #[validate(range(min = 0.0, message = "Empty spool weight cannot be negative"))]
    pub empty_spool_weight_g: f64,
}

/// Update filament request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilament {
    #[validate(custom(function = "not_blank", message = "Brand is required"))]
    pub brand: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Type is required"))]
    pub filament_type: Option<String>,
    #[validate(custom(function = "not_blank", message = "Color is required"))]
    pub color: Option<String>,
    pub color_hex: Option<String>,
    #[serde(rename = "initialFilamentWeight_g")]
    #[validate(range(exclusive_min = 0.0, message = "Initial weight must be positive"))]
    pub initial_weight_g: Option<f64>,
    #[serde(rename = "emptySpoolWeight_g")]
    #[validate(range(min = 0.0, message = "Empty spool weight cannot be negative"))]
    pub empty_spool_weight_g: Option<f64>,
    /// Manual override; may exceed the initial weight
    #[serde(rename = "remaining_g")]
    #[validate(range(min = 0.0, message = "Remaining weight cannot be negative"))]
    pub remaining_g: Option<f64>,
}

/// Scale reading for a spool (filament plus spool)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WeighFilament {
    #[serde(rename = "reading_g")]
    pub reading_g: f64,
}

/// Filament with display-only derived values
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilamentView {
    #[serde(flatten)]
    pub filament: Filament,
    pub fill_percent: f64,
    pub is_low: bool,
}

impl FilamentView {
    pub fn new(filament: Filament, low_threshold_g: f64) -> Self {
        Self {
            fill_percent: filament.fill_percent(),
            is_low: filament.is_low(low_threshold_g),
            filament,
        }
    }
}
