//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// PrinterStatus
// ---------------------------------------------------------------------------

/// Printer activity, derived from the jobs assigned to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PrinterStatus {
    #[default]
    Idle,
    Printing,
}

impl std::fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PrinterStatus::Idle => "Idle",
            PrinterStatus::Printing => "Printing",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Print job lifecycle: Queued -> Scheduled -> Printing -> Completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JobStatus {
    #[default]
    Queued,
    Scheduled,
    Printing,
    Completed,
}

impl JobStatus {
    /// The job occupies its printer
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Scheduled | JobStatus::Printing)
    }

    /// The job carries printer/filament assignment fields
    pub fn is_assigned(self) -> bool {
        !matches!(self, JobStatus::Queued)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            JobStatus::Queued => "Queued",
            JobStatus::Scheduled => "Scheduled",
            JobStatus::Printing => "Printing",
            JobStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Built-in urgency labels, ranked for ordering the queue.
///
/// Jobs store urgency as free text so the dropdown can grow new labels;
/// anything outside these three sorts after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Sort rank: High first
    pub fn rank(self) -> u8 {
        match self {
            Urgency::High => 1,
            Urgency::Medium => 2,
            Urgency::Low => 3,
        }
    }

    /// Rank of a stored label; unset and custom labels share the last slot
    pub fn rank_of(label: Option<&str>) -> u8 {
        label
            .and_then(|l| l.parse::<Urgency>().ok())
            .map_or(u8::MAX, Urgency::rank)
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Urgency::Low),
            "Medium" => Ok(Urgency::Medium),
            "High" => Ok(Urgency::High),
            other => Err(format!("unknown urgency '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// InterventionChoice
// ---------------------------------------------------------------------------

/// How a job was placed relative to an intervention time.
/// Recorded on assignment; no timing computation reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterventionChoice {
    /// Job should finish at the intervention time
    Finish,
    /// Job should start at the intervention time
    Start,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_flags() {
        assert!(!JobStatus::Queued.is_assigned());
        assert!(JobStatus::Completed.is_assigned());
        assert!(JobStatus::Scheduled.is_active());
        assert!(!JobStatus::Completed.is_active());
    }

    #[test]
    fn test_urgency_parse() {
        assert_eq!("High".parse::<Urgency>(), Ok(Urgency::High));
        assert!("Urgent".parse::<Urgency>().is_err());
        assert!(Urgency::High.rank() < Urgency::Low.rank());
    }

    #[test]
    fn test_custom_urgency_ranks_last() {
        assert_eq!(Urgency::rank_of(Some("High")), 1);
        assert_eq!(Urgency::rank_of(Some("Critical")), u8::MAX);
        assert_eq!(Urgency::rank_of(None), u8::MAX);
        assert!(Urgency::rank_of(Some("Low")) < Urgency::rank_of(Some("Critical")));
    }

    #[test]
    fn test_intervention_choice_wire_format() {
        assert_eq!(
            serde_json::to_string(&InterventionChoice::Finish).unwrap(),
            "\"FINISH\""
        );
    }
}
