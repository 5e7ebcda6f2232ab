//! Export and import of the complete data set

use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{ImportSummary, Snapshot},
    repository::{
        snapshot::parse_snapshot_bytes,
        Repository,
    },
};

#[derive(Clone)]
pub struct SnapshotService {
    repository: Repository,
}

impl SnapshotService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn export(&self) -> Snapshot {
        self.repository.read().await.export_snapshot()
    }

    /// Replace everything with a raw JSON file body
    pub async fn import_bytes(&self, bytes: &[u8]) -> AppResult<ImportSummary> {
        self.replace(parse_snapshot_bytes(bytes)).await
    }

    /// Import a data file from disk
    pub async fn import_file(&self, path: impl AsRef<Path>) -> AppResult<ImportSummary> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::Internal(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.import_bytes(&bytes).await
    }

    async fn replace(&self, parsed: AppResult<Snapshot>) -> AppResult<ImportSummary> {
        let snapshot = parsed.inspect_err(|e| tracing::warn!("Import rejected: {}", e))?;
        let summary = ImportSummary::from(&snapshot);

        self.repository
            .write()
            .await
            .import_snapshot(snapshot)
            .inspect_err(|e| tracing::warn!("Import rejected: {}", e))?;

        tracing::info!(
            printers = summary.printers,
            filaments = summary.filaments,
            print_jobs = summary.print_jobs,
            intervention_times = summary.intervention_times,
            "Data imported"
        );
        Ok(summary)
    }
}
