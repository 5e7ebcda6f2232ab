//! Print job model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{InterventionChoice, JobStatus, Urgency};
use super::validation::not_blank;

/// Print job record.
///
/// Optional text fields travel as `""` when absent, as in exported data files.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    pub id: String,
    pub name: String,
    /// Model source link
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = String)]
    pub url: Option<String>,
    #[serde(rename = "printTime_hr")]
    pub print_time_hr: f64,
    #[serde(rename = "filamentUsage_g")]
    pub filament_usage_g: f64,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = String)]
    pub required_type: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = String)]
    pub required_color: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = String)]
    pub urgency: Option<String>,
    /// Footprint width (mm), 0 when unknown
    #[serde(default)]
    pub print_size_x: f64,
    /// Footprint depth (mm), 0 when unknown
    #[serde(default)]
    pub print_size_y: f64,
    #[serde(default)]
    pub ams_required: bool,
    /// Printers allowed to run this job; empty means any
    #[serde(default)]
    pub compatible_printer_ids: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_printer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_filament_id: Option<String>,
    #[serde(rename = "buffer_hr", default, skip_serializing_if = "Option::is_none")]
    pub buffer_hr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention_choice: Option<InterventionChoice>,
}

impl PrintJob {
    pub fn new(id: String, data: CreatePrintJob) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            url: non_blank(data.url),
            print_time_hr: data.print_time_hr,
            filament_usage_g: data.filament_usage_g,
            required_type: non_blank(data.required_type),
            required_color: non_blank(data.required_color),
            urgency: non_blank(data.urgency),
            print_size_x: data.print_size_x.unwrap_or(0.0),
            print_size_y: data.print_size_y.unwrap_or(0.0),
            ams_required: data.ams_required.unwrap_or(false),
            compatible_printer_ids: data.compatible_printer_ids.unwrap_or_default(),
            status: JobStatus::Queued,
            assigned_printer_id: None,
            assigned_filament_id: None,
            buffer_hr: None,
            intervention_choice: None,
        }
    }

    /// Merge descriptive fields. Status and assignment belong to the scheduler.
    pub fn apply(&mut self, data: UpdatePrintJob) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(url) = data.url {
            self.url = non_blank(Some(url));
        }
        if let Some(hours) = data.print_time_hr {
            self.print_time_hr = hours;
        }
        if let Some(usage) = data.filament_usage_g {
            self.filament_usage_g = usage;
        }
        if let Some(required_type) = data.required_type {
            self.required_type = non_blank(Some(required_type));
        }
        if let Some(required_color) = data.required_color {
            self.required_color = non_blank(Some(required_color));
        }
        if let Some(urgency) = data.urgency {
            self.urgency = non_blank(Some(urgency));
        }
        if let Some(x) = data.print_size_x {
            self.print_size_x = x;
        }
        if let Some(y) = data.print_size_y {
            self.print_size_y = y;
        }
        if let Some(ams_required) = data.ams_required {
            self.ams_required = ams_required;
        }
        if let Some(ids) = data.compatible_printer_ids {
            self.compatible_printer_ids = ids;
        }
    }

    /// Footprint, if both dimensions were given
    pub fn footprint(&self) -> Option<(f64, f64)> {
        (self.print_size_x > 0.0 && self.print_size_y > 0.0)
            .then_some((self.print_size_x, self.print_size_y))
    }

    /// Assignment fields are present exactly when the status says so
    pub fn assignment_consistent(&self) -> bool {
        let assigned = self.assigned_printer_id.is_some() && self.assigned_filament_id.is_some();
        let unassigned = self.assigned_printer_id.is_none()
            && self.assigned_filament_id.is_none()
            && self.buffer_hr.is_none();
        if self.status.is_assigned() {
            assigned
        } else {
            unassigned
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Create print job request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrintJob {
    #[validate(custom(function = "not_blank", message = "Job name is required"))]
    pub name: String,
    pub url: Option<String>,
    #[serde(rename = "printTime_hr")]
    #[validate(range(exclusive_min = 0.0, message = "Print time must be positive"))]
    pub print_time_hr: f64,
    #[serde(rename = "filamentUsage_g")]
    #[validate(range(exclusive_min = 0.0, message = "Filament usage must be positive"))]
    pub filament_usage_g: f64,
    pub required_type: Option<String>,
    pub required_color: Option<String>,
    /// Any label from the urgency dropdown
    pub urgency: Option<String>,
    #[validate(range(min = 0.0, message = "Print size cannot be negative"))]
    pub print_size_x: Option<f64>,
    #[validate(range(min = 0.0, message = "Print size cannot be negative"))]
    pub print_size_y: Option<f64>,
    pub ams_required: Option<bool>,
    pub compatible_printer_ids: Option<Vec<String>>,
}

/// Update print job request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrintJob {
    #[validate(custom(function = "not_blank", message = "Job name is required"))]
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "printTime_hr")]
    #[validate(range(exclusive_min = 0.0, message = "Print time must be positive"))]
    pub print_time_hr: Option<f64>,
    #[serde(rename = "filamentUsage_g")]
    #[validate(range(exclusive_min = 0.0, message = "Filament usage must be positive"))]
    pub filament_usage_g: Option<f64>,
    pub required_type: Option<String>,
    pub required_color: Option<String>,
    /// Any label from the urgency dropdown
    pub urgency: Option<String>,
    #[validate(range(min = 0.0, message = "Print size cannot be negative"))]
    pub print_size_x: Option<f64>,
    #[validate(range(min = 0.0, message = "Print size cannot be negative"))]
    pub print_size_y: Option<f64>,
    pub ams_required: Option<bool>,
    pub compatible_printer_ids: Option<Vec<String>>,
}

/// Queue ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    /// Creation order
    #[default]
    Created,
    /// High, Medium, Low, then custom labels and unset
    Urgency,
    Name,
}

/// Query parameters for listing jobs
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct JobQuery {
    pub sort: Option<JobSort>,
    pub status: Option<JobStatus>,
}

/// Sort jobs in place; stable, so ties keep creation order
pub fn sort_jobs(jobs: &mut [PrintJob], sort: JobSort) {
    match sort {
        JobSort::Created => {}
        JobSort::Urgency => jobs.sort_by_key(|j| Urgency::rank_of(j.urgency.as_deref())),
        JobSort::Name => jobs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}

/// Assign job request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignJob {
    pub printer_id: String,
    /// Selected spool; an empty id means nothing was selected
    pub filament_id: String,
    #[serde(rename = "bufferHr")]
    pub buffer_hr: Option<f64>,
    pub intervention_choice: InterventionChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(name: &str, urgency: Option<&str>) -> PrintJob {
        PrintJob::new(
            format!("job_{}", name),
            CreatePrintJob {
                name: name.into(),
                url: None,
                print_time_hr: 1.0,
                filament_usage_g: 10.0,
                required_type: Some("  ".into()),
                required_color: None,
                urgency: urgency.map(String::from),
                print_size_x: None,
                print_size_y: None,
                ams_required: None,
                compatible_printer_ids: None,
            },
        )
    }

    #[test]
    fn test_new_job_is_queued_and_unassigned() {
        let j = job("benchy", None);
        assert_eq!(j.status, JobStatus::Queued);
        assert_eq!(j.required_type, None);
        assert!(j.footprint().is_none());
        assert!(j.assignment_consistent());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let j: PrintJob = serde_json::from_value(json!({
            "id": "job_1",
            "name": "Bracket",
            "url": "",
            "printTime_hr": 2.5,
            "filamentUsage_g": 40,
            "requiredType": "PETG",
            "requiredColor": "",
            "urgency": "",
            "printSizeX": 0,
            "printSizeY": 0,
            "amsRequired": false,
            "compatiblePrinterIds": []
        }))
        .unwrap();
        assert_eq!(j.url, None);
        assert_eq!(j.required_type.as_deref(), Some("PETG"));
        assert_eq!(j.urgency, None);
        assert_eq!(j.status, JobStatus::Queued);

        let value = serde_json::to_value(&j).unwrap();
        assert_eq!(value["url"], "");
        assert_eq!(value["urgency"], "");
        assert!(value.get("assignedPrinterId").is_none());
    }

    #[test]
    fn test_sort_by_urgency_is_stable() {
        let mut jobs = vec![
            job("a", None),
            job("b", Some("Low")),
            job("c", Some("High")),
            job("d", Some("Low")),
            job("e", Some("Medium")),
        ];
        sort_jobs(&mut jobs, JobSort::Urgency);
        let names: Vec<_> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["c", "e", "b", "d", "a"]);
    }

    #[test]
    fn test_custom_urgency_sorts_with_unset() {
        let mut jobs = vec![
            job("a", Some("Critical")),
            job("b", None),
            job("c", Some("Low")),
            job("d", Some("  ")),
        ];
        assert_eq!(jobs[0].urgency.as_deref(), Some("Critical"));
        assert_eq!(jobs[3].urgency, None);
        sort_jobs(&mut jobs, JobSort::Urgency);
        let names: Vec<_> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_custom_urgency_round_trips() {
        let j: PrintJob = serde_json::from_value(json!({
            "id": "job_1",
            "name": "Gear",
            "printTime_hr": 1,
            "filamentUsage_g": 12,
            "urgency": "Critical"
        }))
        .unwrap();
        assert_eq!(j.urgency.as_deref(), Some("Critical"));
        assert_eq!(serde_json::to_value(&j).unwrap()["urgency"], "Critical");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let data: CreatePrintJob = serde_json::from_value(json!({
            "name": "   ",
            "printTime_hr": 1,
            "filamentUsage_g": 5
        }))
        .unwrap();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let update = UpdatePrintJob {
            name: Some("\t".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_assignment_consistency() {
        let mut j = job("x", None);
        j.status = JobStatus::Scheduled;
        assert!(!j.assignment_consistent());
        j.assigned_printer_id = Some("printer_1".into());
        j.assigned_filament_id = Some("fila_1".into());
        j.buffer_hr = Some(0.25);
        assert!(j.assignment_consistent());
    }
}
