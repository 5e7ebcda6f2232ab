//! Intervention time model
//!
//! A recurring moment when someone is around to tend the printers
//! (swap a spool, clear the bed). Informational only.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::validation::not_blank;

/// Intervention time record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InterventionTime {
    pub id: String,
    pub name: String,
    /// Time of day (HH:MM)
    pub time: String,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday
    pub days: Vec<u8>,
}

impl InterventionTime {
    pub fn new(id: String, data: CreateInterventionTime) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            time: data.time.trim().to_string(),
            days: normalize_days(data.days),
        }
    }

    pub fn apply(&mut self, data: UpdateInterventionTime) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(time) = data.time {
            self.time = time.trim().to_string();
        }
        if let Some(days) = data.days {
            self.days = normalize_days(days);
        }
    }
}

fn weekday(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

fn normalize_days(mut days: Vec<u8>) -> Vec<u8> {
    days.sort_unstable();
    days.dedup();
    days
}

fn check_time(time: &str) -> AppResult<()> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("Invalid time of day '{}', expected HH:MM", time)))
}

fn check_days(days: &[u8]) -> AppResult<()> {
    if days.is_empty() {
        return Err(AppError::Validation("Select at least one day".to_string()));
    }
    if let Some(bad) = days.iter().find(|&&d| weekday(d).is_none()) {
        return Err(AppError::Validation(format!("Invalid weekday index {}", bad)));
    }
    Ok(())
}

/// Create intervention time request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateInterventionTime {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    /// Time of day (HH:MM)
    pub time: String,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday
    pub days: Vec<u8>,
}

impl CreateInterventionTime {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        check_time(&self.time)?;
        check_days(&self.days)
    }
}

/// Update intervention time request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateInterventionTime {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: Option<String>,
    pub time: Option<String>,
    pub days: Option<Vec<u8>>,
}

impl UpdateInterventionTime {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        if let Some(time) = &self.time {
            check_time(time)?;
        }
        if let Some(days) = &self.days {
            check_days(days)?;
        }
        Ok(())
    }
}
