//! Teacher-dashboard state: material rows and ingestion progress.

#[cfg(test)]
#[path = "materials_test.rs"]
mod materials_test;

use crate::net::types::{IngestStatus, MaterialRecord, MaterialStatus};

/// Material list plus workspace ingestion feedback.
#[derive(Clone, Debug)]
pub struct MaterialsState {
    pub items: Vec<MaterialRecord>,
    pub loading: bool,
    /// One-line indexing status log, e.g. `"INDEXING: week3.pdf"`.
    pub status_line: Option<String>,
    /// Resync request in flight.
    pub syncing: bool,
}

impl Default for MaterialsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            status_line: None,
            syncing: false,
        }
    }
}

impl MaterialsState {
    /// Number of fully indexed materials.
    pub fn ready_count(&self) -> usize {
        self.items
            .iter()
            .filter(|m| m.status == MaterialStatus::Ready)
            .count()
    }

    /// Knowledge-base readiness as a 0..=100 percentage.
    pub fn readiness_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let ready = self.ready_count() as f64;
        let total = self.items.len() as f64;
        (ready / total * 100.0).round() as u8
    }
}

/// Fold a workspace ingestion report into the material rows.
///
/// A ready workspace marks every row ready at 100%; otherwise rows that are
/// not yet ready pick up the reported progress. Returns the status line to
/// display.
pub fn apply_ingest_status(items: &mut [MaterialRecord], status: &IngestStatus) -> String {
    if status.is_ready() {
        for m in items.iter_mut() {
            m.status = MaterialStatus::Ready;
            m.progress = 100;
        }
        return "System ready. Workspace fully indexed.".to_owned();
    }

    for m in items.iter_mut() {
        if m.status != MaterialStatus::Ready {
            m.status = MaterialStatus::Processing;
            m.progress = status.progress;
        }
    }
    match &status.current_file {
        Some(file) => format!("{}: {file}", status.status.to_uppercase()),
        None => status.status.to_uppercase(),
    }
}

/// Mark the given rows failed after an upload error.
pub fn mark_upload_failed(items: &mut [MaterialRecord], failed_ids: &[String]) {
    for m in items.iter_mut() {
        if failed_ids.iter().any(|id| id == &m.id) {
            m.status = MaterialStatus::Error;
            m.progress = 0;
        }
    }
}
