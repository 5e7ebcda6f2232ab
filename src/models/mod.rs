//! Data models for Print Hub

pub mod board;
pub mod dropdown;
pub mod enums;
pub mod filament;
pub mod intervention;
pub mod job;
pub mod notification;
pub mod printer;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use board::{AssignmentCheck, Board, PrinterLane};
pub use dropdown::{DropdownCategory, DropdownOptions};
pub use enums::{InterventionChoice, JobStatus, PrinterStatus, Urgency};
pub use filament::{Filament, FilamentView};
pub use intervention::InterventionTime;
pub use job::{JobSort, PrintJob};
pub use notification::CompletionEvent;
pub use printer::Printer;
pub use snapshot::{ImportSummary, Snapshot};
