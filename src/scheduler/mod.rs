//! Assignment rules: which job may go on which printer, and how a job
//! moves through its lifecycle

pub mod transitions;
pub mod validation;

pub use transitions::{assign, complete, refresh_printer_status, start, Assignment, Completion};
pub use validation::{compatible_filaments, fits_bed, validate_assignment, AssignmentError};
