//! Whole-store export and import

use serde_json::Value;

use super::{Collection, Store};
use crate::{
    error::{AppError, AppResult},
    models::Snapshot,
};

impl Store {
    /// Copy of the complete store in export form
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            printers: self.printers.to_vec(),
            filaments: self.filaments.to_vec(),
            print_queue: self.jobs.to_vec(),
            intervention_times: self.intervention_times.to_vec(),
            dropdown_options: self.dropdown_options.clone(),
        }
    }

    /// Replace the whole store with the snapshot. The replacement is built
    /// first; on any error `self` is untouched.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> AppResult<()> {
        *self = Store::try_from(snapshot)?;
        Ok(())
    }
}

impl TryFrom<Snapshot> for Store {
    type Error = AppError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        if let Some(job) = snapshot
            .print_queue
            .iter()
            .find(|j| !j.assignment_consistent())
        {
            return Err(AppError::Import(format!(
                "print job '{}' has status {} but inconsistent assignment fields",
                job.id, job.status
            )));
        }

        Ok(Store {
            printers: Collection::from_records(snapshot.printers).map_err(AppError::Import)?,
            filaments: Collection::from_records(snapshot.filaments).map_err(AppError::Import)?,
            jobs: Collection::from_records(snapshot.print_queue).map_err(AppError::Import)?,
            intervention_times: Collection::from_records(snapshot.intervention_times)
                .map_err(AppError::Import)?,
            dropdown_options: snapshot.dropdown_options,
        })
    }
}

/// Decode an import document: must be a JSON object of the export shape
pub fn parse_snapshot(document: Value) -> AppResult<Snapshot> {
    if !document.is_object() {
        return Err(AppError::Import(
            "import document must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(document).map_err(|e| AppError::Import(e.to_string()))
}

/// Decode an import document from raw bytes
pub fn parse_snapshot_bytes(bytes: &[u8]) -> AppResult<Snapshot> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::Import(format!("invalid JSON: {}", e)))?;
    parse_snapshot(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        filament::CreateFilament, intervention::CreateInterventionTime, job::CreatePrintJob,
        printer::CreatePrinter, DropdownCategory,
    };
    use serde_json::json;

    fn populated() -> Store {
        let mut store = Store::default();
        store.printers_create(CreatePrinter {
            name: "Ender 3".into(),
            bed_size_x: 220.0,
            bed_size_y: 220.0,
            has_ams: Some(false),
        });
        store.filaments_create(CreateFilament {
            brand: "Overture".into(),
            filament_type: "PLA".into(),
            color: "Black".into(),
            color_hex: None,
            initial_weight_g: 1000.0,
            empty_spool_weight_g: 215.0,
        });
        store.jobs_create(CreatePrintJob {
            name: "Benchy".into(),
            url: None,
            print_time_hr: 1.5,
            filament_usage_g: 15.0,
            required_type: Some("PLA".into()),
            required_color: None,
            urgency: None,
            print_size_x: Some(60.0),
            print_size_y: Some(31.0),
            ams_required: None,
            compatible_printer_ids: None,
        });
        store.interventions_create(CreateInterventionTime {
            name: "Evening".into(),
            time: "19:00".into(),
            days: vec![1, 2, 3, 4, 5],
        });
        store.options_add(DropdownCategory::Brands, "Elegoo");
        store
    }

    #[test]
    fn test_round_trip_through_json() {
        let store = populated();
        let exported = store.export_snapshot();
        let text = serde_json::to_string(&exported).unwrap();

        let mut restored = Store::default();
        restored
            .import_snapshot(parse_snapshot_bytes(text.as_bytes()).unwrap())
            .unwrap();
        assert_eq!(restored.export_snapshot(), exported);
    }

    #[test]
    fn test_import_restores_deleted_filament() {
        let mut store = populated();
        let exported = store.export_snapshot();
        let spool = store.filaments_list().remove(0);

        assert!(store.filaments_delete(&spool.id));
        assert!(store.filaments_get_by_id(&spool.id).is_none());

        store.import_snapshot(exported).unwrap();
        assert_eq!(store.filaments_get_by_id(&spool.id), Some(&spool));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(parse_snapshot(json!([1, 2, 3])), Err(AppError::Import(_))));
        assert!(matches!(parse_snapshot_bytes(b"{not json"), Err(AppError::Import(_))));
        assert!(matches!(
            parse_snapshot(json!({ "printers": "nope" })),
            Err(AppError::Import(_))
        ));
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let mut store = populated();
        let before = store.export_snapshot();

        let mut bad = before.clone();
        let duplicate = bad.printers[0].clone();
        bad.printers.push(duplicate);
        assert!(matches!(store.import_snapshot(bad), Err(AppError::Import(_))));

        let mut bad = before.clone();
        bad.print_queue[0].status = crate::models::JobStatus::Scheduled;
        assert!(matches!(store.import_snapshot(bad), Err(AppError::Import(_))));

        assert_eq!(store.export_snapshot(), before);
    }

    #[test]
    fn test_accepts_ui_data_file() {
        let document = json!({
            "printers": [
                {"id": "printer_1712", "name": "A1 mini", "bedSizeX": 180, "bedSizeY": 180, "hasAMS": true, "status": "Printing"}
            ],
            "filaments": [
                {"id": "fila_1713", "brand": "Bambu", "type": "PLA", "color": "Red", "colorHex": "#ff0000",
                 "initialFilamentWeight_g": 1000, "emptySpoolWeight_g": 250, "remaining_g": 420}
            ],
            "printQueue": [
                {"id": "job_1714", "name": "Clip", "url": "", "printTime_hr": 0.5, "filamentUsage_g": 5,
                 "requiredType": "", "requiredColor": "", "urgency": "High", "printSizeX": 20, "printSizeY": 10,
                 "amsRequired": false, "compatiblePrinterIds": [], "status": "Scheduled",
                 "assignedPrinterId": "printer_1712", "assignedFilamentId": "fila_1713", "buffer_hr": 0.25}
            ],
            "interventionTimes": [
                {"id": "time_1715", "name": "Lunch", "time": "12:00", "days": [1, 2, 3, 4, 5]}
            ],
            "dropdownOptions": {"brands": ["Bambu"], "types": ["PLA"], "colors": ["Red"], "urgencies": ["Low", "Medium", "High"]}
        });

        let mut store = Store::default();
        store.import_snapshot(parse_snapshot(document).unwrap()).unwrap();
        let job = store.jobs_get_by_id("job_1714").unwrap();
        assert_eq!(job.buffer_hr, Some(0.25));
        assert_eq!(store.dropdown_options().brands.len(), 1);
        assert_eq!(store.filaments_get_by_id("fila_1713").unwrap().remaining_g, 420.0);
    }
}
