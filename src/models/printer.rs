//! Printer model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::PrinterStatus;
use super::validation::not_blank;

/// Printer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    pub id: String,
    pub name: String,
    /// Bed width (mm)
    pub bed_size_x: f64,
    /// Bed depth (mm)
    pub bed_size_y: f64,
    /// Whether an Automatic Material System is fitted
    #[serde(rename = "hasAMS", default)]
    pub has_ams: bool,
    #[serde(default)]
    pub status: PrinterStatus,
}

impl Printer {
    pub fn new(id: String, data: CreatePrinter) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            bed_size_x: data.bed_size_x,
            bed_size_y: data.bed_size_y,
            has_ams: data.has_ams.unwrap_or(false),
            status: PrinterStatus::Idle,
        }
    }

    /// Merge supplied fields; status is left to the scheduler
    pub fn apply(&mut self, data: UpdatePrinter) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(x) = data.bed_size_x {
            self.bed_size_x = x;
        }
        if let Some(y) = data.bed_size_y {
            self.bed_size_y = y;
        }
        if let Some(has_ams) = data.has_ams {
            self.has_ams = has_ams;
        }
    }
}

/// Create printer request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrinter {
    #[validate(custom(function = "not_blank", message = "Printer name is required"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Bed size must be positive"))]
    pub bed_size_x: f64,
    #[validate(range(exclusive_min = 0.0, message = "Bed size must be positive"))]
    pub bed_size_y: f64,
    #[serde(rename = "hasAMS")]
    pub has_ams: Option<bool>,
}

/// Update printer request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrinter {
    #[validate(custom(function = "not_blank", message = "Printer name is required"))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Bed size must be positive"))]
    pub bed_size_x: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "Bed size must be positive"))]
    pub bed_size_y: Option<f64>,
    #[serde(rename = "hasAMS")]
    pub has_ams: Option<bool>,
}
