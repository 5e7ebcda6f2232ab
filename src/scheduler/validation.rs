//! Job-to-printer compatibility checks.
//!
//! Pure functions: safe to call speculatively, e.g. to mark drop targets.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{Filament, PrintJob, Printer};

/// Why a job cannot go on a printer
#[derive(Debug, Clone, PartialEq, Error, Serialize, ToSchema)]
pub enum AssignmentError {
    #[error("This printer is not compatible with this job")]
    IncompatiblePrinter,

    #[error("This job requires AMS, but the printer does not have AMS")]
    AmsUnavailable,

    #[error("Print size ({print_x}x{print_y}mm) exceeds bed size ({bed_x}x{bed_y}mm)")]
    BedTooSmall {
        print_x: f64,
        print_y: f64,
        bed_x: f64,
        bed_y: f64,
    },
}

/// Check a job against a printer. Checks run in order and stop at the first
/// failure: printer whitelist, AMS, bed size.
pub fn validate_assignment(job: &PrintJob, printer: &Printer) -> Result<(), AssignmentError> {
    if !job.compatible_printer_ids.is_empty()
        && !job.compatible_printer_ids.iter().any(|id| *id == printer.id)
    {
        return Err(AssignmentError::IncompatiblePrinter);
    }

    if job.ams_required && !printer.has_ams {
        return Err(AssignmentError::AmsUnavailable);
    }

    if let Some((print_x, print_y)) = job.footprint() {
        if !fits_bed(print_x, print_y, printer.bed_size_x, printer.bed_size_y) {
            return Err(AssignmentError::BedTooSmall {
                print_x,
                print_y,
                bed_x: printer.bed_size_x,
                bed_y: printer.bed_size_y,
            });
        }
    }

    Ok(())
}

/// A footprint fits as-is or turned by 90 degrees
pub fn fits_bed(print_x: f64, print_y: f64, bed_x: f64, bed_y: f64) -> bool {
    (print_x <= bed_x && print_y <= bed_y) || (print_x <= bed_y && print_y <= bed_x)
}

/// Spools matching the job's required type and color; an unset
/// requirement matches anything
pub fn compatible_filaments<'a, I>(job: &PrintJob, filaments: I) -> Vec<&'a Filament>
where
    I: IntoIterator<Item = &'a Filament>,
{
    filaments
        .into_iter()
        .filter(|f| filament_matches(job, f))
        .collect()
}

pub fn filament_matches(job: &PrintJob, filament: &Filament) -> bool {
    let type_match = job
        .required_type
        .as_deref()
        .map_or(true, |t| filament.filament_type == t);
    let color_match = job
        .required_color
        .as_deref()
        .map_or(true, |c| filament.color == c);
    type_match && color_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        filament::CreateFilament, job::CreatePrintJob, printer::CreatePrinter,
    };

    fn printer(x: f64, y: f64, has_ams: bool) -> Printer {
        Printer::new(
            "printer_1".into(),
            CreatePrinter {
                name: "Test".into(),
                bed_size_x: x,
                bed_size_y: y,
                has_ams: Some(has_ams),
            },
        )
    }

    fn job(x: f64, y: f64) -> PrintJob {
        PrintJob::new(
            "job_1".into(),
            CreatePrintJob {
                name: "Part".into(),
                url: None,
                print_time_hr: 1.0,
                filament_usage_g: 20.0,
                required_type: None,
                required_color: None,
                urgency: None,
                print_size_x: Some(x),
                print_size_y: Some(y),
                ams_required: None,
                compatible_printer_ids: None,
            },
        )
    }

    fn spool(id: &str, filament_type: &str, color: &str) -> Filament {
        Filament::new(
            id.into(),
            CreateFilament {
                brand: "Sunlu".into(),
                filament_type: filament_type.into(),
                color: color.into(),
                color_hex: None,
                initial_weight_g: 1000.0,
                empty_spool_weight_g: 200.0,
            },
        )
    }

    #[test]
    fn test_oversized_job_rejected_on_square_bed() {
        let bed = printer(220.0, 220.0, false);
        for (x, y) in [(250.0, 200.0), (200.0, 250.0), (100.0, 250.0)] {
            let err = validate_assignment(&job(x, y), &bed).unwrap_err();
            assert!(matches!(err, AssignmentError::BedTooSmall { .. }));
        }
    }

    #[test]
    fn test_bed_message_names_both_sizes() {
        let err = validate_assignment(&job(250.0, 200.0), &printer(220.0, 220.0, false))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Print size (250x200mm) exceeds bed size (220x220mm)"
        );
    }

    #[test]
    fn test_rotated_fit_accepted() {
        let bed = printer(300.0, 200.0, false);
        assert!(validate_assignment(&job(180.0, 280.0), &bed).is_ok());
        assert!(validate_assignment(&job(280.0, 180.0), &bed).is_ok());
        assert!(validate_assignment(&job(280.0, 280.0), &bed).is_err());
    }

    #[test]
    fn test_fit_is_symmetric_under_bed_rotation() {
        let sizes = [50.0, 180.0, 200.0, 220.0, 256.0, 300.0];
        for &x in &sizes {
            for &y in &sizes {
                for &a in &sizes {
                    for &b in &sizes {
                        assert_eq!(fits_bed(x, y, a, b), fits_bed(x, y, b, a));
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_footprint_skips_bed_check() {
        assert!(validate_assignment(&job(0.0, 500.0), &printer(100.0, 100.0, false)).is_ok());
    }

    #[test]
    fn test_check_order() {
        let mut j = job(500.0, 500.0);
        j.ams_required = true;
        j.compatible_printer_ids = vec!["printer_other".into()];
        let bed = printer(100.0, 100.0, false);

        assert_eq!(
            validate_assignment(&j, &bed),
            Err(AssignmentError::IncompatiblePrinter)
        );
        j.compatible_printer_ids.push("printer_1".into());
        assert_eq!(
            validate_assignment(&j, &bed),
            Err(AssignmentError::AmsUnavailable)
        );
        j.ams_required = false;
        assert!(matches!(
            validate_assignment(&j, &bed),
            Err(AssignmentError::BedTooSmall { .. })
        ));
    }

    #[test]
    fn test_ams_printer_accepts_ams_job() {
        let mut j = job(100.0, 100.0);
        j.ams_required = true;
        assert!(validate_assignment(&j, &printer(256.0, 256.0, true)).is_ok());
    }

    #[test]
    fn test_compatible_filaments() {
        let spools = vec![
            spool("fila_1", "PLA", "Black"),
            spool("fila_2", "PETG", "Black"),
            spool("fila_3", "PLA", "White"),
        ];

        let mut j = job(10.0, 10.0);
        assert_eq!(compatible_filaments(&j, &spools).len(), 3);

        j.required_type = Some("PLA".into());
        let ids: Vec<_> = compatible_filaments(&j, &spools)
            .into_iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["fila_1", "fila_3"]);

        j.required_color = Some("White".into());
        let ids: Vec<_> = compatible_filaments(&j, &spools)
            .into_iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["fila_3"]);

        j.required_type = None;
        j.required_color = Some("Black".into());
        assert_eq!(compatible_filaments(&j, &spools).len(), 2);
    }
}
