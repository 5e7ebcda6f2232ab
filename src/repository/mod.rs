//! In-memory store and the shared handle services use to reach it

mod collection;
pub mod filaments;
pub mod interventions;
pub mod jobs;
pub mod options;
pub mod printers;
pub mod snapshot;

use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use collection::{Collection, Record};

use crate::models::{DropdownOptions, Filament, InterventionTime, PrintJob, Printer};

/// All application data. Plain synchronous data structure; every
/// mutation is a method on it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    printers: Collection<Printer>,
    filaments: Collection<Filament>,
    jobs: Collection<PrintJob>,
    intervention_times: Collection<InterventionTime>,
    dropdown_options: DropdownOptions,
}

/// Shared handle to the store.
///
/// Services take the write lock once per user action, so an action either
/// fully commits or fully rejects before the next one runs.
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create a repository owning the given store
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}

impl Store {
    pub fn printers(&self) -> &Collection<Printer> {
        &self.printers
    }

    pub fn filaments(&self) -> &Collection<Filament> {
        &self.filaments
    }

    pub fn jobs(&self) -> &Collection<PrintJob> {
        &self.jobs
    }

    pub fn intervention_times(&self) -> &Collection<InterventionTime> {
        &self.intervention_times
    }

    pub fn dropdown_options(&self) -> &DropdownOptions {
        &self.dropdown_options
    }

    pub(crate) fn printers_mut(&mut self) -> &mut Collection<Printer> {
        &mut self.printers
    }

    pub(crate) fn filaments_mut(&mut self) -> &mut Collection<Filament> {
        &mut self.filaments
    }

    pub(crate) fn jobs_mut(&mut self) -> &mut Collection<PrintJob> {
        &mut self.jobs
    }
}

impl Record for Printer {
    const PREFIX: &'static str = "printer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Filament {
    const PREFIX: &'static str = "fila";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for PrintJob {
    const PREFIX: &'static str = "job";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for InterventionTime {
    const PREFIX: &'static str = "time";

    fn id(&self) -> &str {
        &self.id
    }
}
