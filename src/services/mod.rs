//! Business logic services

pub mod filaments;
pub mod interventions;
pub mod jobs;
pub mod notifications;
pub mod options;
pub mod printers;
pub mod scheduler;
pub mod snapshot;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub printers: printers::PrintersService,
    pub filaments: filaments::FilamentsService,
    pub jobs: jobs::JobsService,
    pub interventions: interventions::InterventionsService,
    pub options: options::OptionsService,
    pub snapshot: snapshot::SnapshotService,
    pub scheduler: scheduler::SchedulerService,
    pub notifications: notifications::Notifier,
}

impl Services {
    /// Create all services sharing the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let notifications = notifications::Notifier::new(config.notifications.channel_capacity);

        Self {
            printers: printers::PrintersService::new(repository.clone()),
            filaments: filaments::FilamentsService::new(
                repository.clone(),
                config.data.low_filament_threshold_g,
            ),
            jobs: jobs::JobsService::new(repository.clone()),
            interventions: interventions::InterventionsService::new(repository.clone()),
            options: options::OptionsService::new(repository.clone()),
            snapshot: snapshot::SnapshotService::new(repository.clone()),
            scheduler: scheduler::SchedulerService::new(
                repository,
                config.scheduler.default_buffer_hr,
                notifications.clone(),
            ),
            notifications,
        }
    }
}
