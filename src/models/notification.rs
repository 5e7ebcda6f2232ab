//! Events pushed to connected clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A print job reached Completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub job_id: String,
    pub job_name: String,
    pub printer_id: Option<String>,
    pub completed_at: DateTime<Utc>,
    /// Human readable notification body
    pub message: String,
}

impl CompletionEvent {
    pub fn new(job_id: &str, job_name: &str, printer_id: Option<String>) -> Self {
        Self {
            job_id: job_id.to_string(),
            job_name: job_name.to_string(),
            printer_id,
            completed_at: Utc::now(),
            message: format!("{} has finished printing!", job_name),
        }
    }
}
