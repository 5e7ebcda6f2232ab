//! Printer domain methods on Store

use super::Store;
use crate::models::printer::{CreatePrinter, Printer, UpdatePrinter};

impl Store {
    /// List all printers in creation order
    pub fn printers_list(&self) -> Vec<Printer> {
        self.printers.to_vec()
    }

    pub fn printers_get_by_id(&self, id: &str) -> Option<&Printer> {
        self.printers.get(id)
    }

    /// Create a printer; it starts Idle
    pub fn printers_create(&mut self, data: CreatePrinter) -> Printer {
        let printer = Printer::new(self.printers.next_id(), data);
        self.printers.insert(printer.clone());
        printer
    }

    /// Merge fields into an existing printer; `None` if the id is unknown
    pub fn printers_update(&mut self, id: &str, data: UpdatePrinter) -> Option<Printer> {
        let printer = self.printers.get_mut(id)?;
        printer.apply(data);
        Some(printer.clone())
    }

    /// Remove a printer if present. Jobs assigned to it keep their ids.
    pub fn printers_delete(&mut self, id: &str) -> bool {
        self.printers.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrinterStatus;

    fn create(name: &str) -> CreatePrinter {
        CreatePrinter {
            name: name.into(),
            bed_size_x: 220.0,
            bed_size_y: 220.0,
            has_ams: None,
        }
    }

    #[test]
    fn test_crud() {
        let mut store = Store::default();
        let a = store.printers_create(create("Ender 3"));
        let b = store.printers_create(create("P1S"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, PrinterStatus::Idle);

        let updated = store
            .printers_update(
                &b.id,
                UpdatePrinter {
                    has_ams: Some(true),
                    bed_size_x: Some(256.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.has_ams);
        assert_eq!(updated.bed_size_x, 256.0);
        assert_eq!(updated.bed_size_y, 220.0);
        assert_eq!(updated.name, "P1S");

        assert!(store.printers_delete(&a.id));
        let names: Vec<_> = store.printers_list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["P1S"]);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut store = Store::default();
        store.printers_create(create("Ender 3"));
        let before = store.printers_list();

        assert!(store
            .printers_update("printer_missing", UpdatePrinter::default())
            .is_none());
        assert!(!store.printers_delete("printer_missing"));
        assert_eq!(store.printers_list(), before);
    }
}
