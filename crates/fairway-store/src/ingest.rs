//! Ingestion driver: one sequential pass over the static image catalog.
//!
//! Per-entry lifecycle: file missing → `Missing`; natural key already in
//! the store → `Skipped`; otherwise encode and run the insertion chain →
//! `Inserted` or `Failed`. No entry outcome aborts the pass; only a
//! missing images directory at startup is a hard failure, before any
//! remote call is made.

use std::path::Path;
use std::time::Instant;

use tokio::fs;
use tracing::{debug, info, warn};

use fairway_core::{
    detect_mime, CatalogEntry, EntryReport, Error, IngestStatus, IngestSummary, NewCourseImage,
    Result, StoredImage,
};

use crate::images::ReferenceStore;

/// Result of one full catalog pass.
#[derive(Debug)]
pub struct IngestOutcome {
    /// Terminal state of every catalog entry, in catalog order.
    pub reports: Vec<EntryReport>,
    /// Verification listing read back after the pass.
    pub stored: Vec<StoredImage>,
    pub summary: IngestSummary,
}

/// Process the full catalog once against the given store.
///
/// The images directory must exist; anything else is reported per entry
/// and the pass continues.
pub async fn run_catalog(
    store: &dyn ReferenceStore,
    images_dir: &Path,
    catalog: &[CatalogEntry],
) -> Result<IngestOutcome> {
    let dir_exists = fs::metadata(images_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !dir_exists {
        return Err(Error::NotFound(format!(
            "images directory {} does not exist",
            images_dir.display()
        )));
    }

    let start = Instant::now();
    info!(
        subsystem = "store",
        component = "ingest",
        op = "run",
        entries = catalog.len(),
        images_dir = %images_dir.display(),
        "Starting image ingestion"
    );

    let mut reports = Vec::with_capacity(catalog.len());
    let mut summary = IngestSummary::default();

    for entry in catalog {
        let report = process_entry(store, entry, &images_dir.join(entry.file)).await;
        summary.record(report.status);
        reports.push(report);
    }

    // Acceptance check: read back what the store now holds. A failure
    // here must not discard the per-entry results.
    let stored = match store.list_images().await {
        Ok(stored) => stored,
        Err(e) => {
            warn!(
                subsystem = "store",
                component = "ingest",
                error = %e,
                "Verification query failed"
            );
            Vec::new()
        }
    };

    info!(
        subsystem = "store",
        component = "ingest",
        op = "complete",
        inserted = summary.inserted,
        skipped = summary.skipped,
        missing = summary.missing,
        failed = summary.failed,
        stored_total = stored.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Ingestion pass complete"
    );

    Ok(IngestOutcome {
        reports,
        stored,
        summary,
    })
}

async fn process_entry(
    store: &dyn ReferenceStore,
    entry: &CatalogEntry,
    path: &Path,
) -> EntryReport {
    let report = |status: IngestStatus, detail: Option<String>| EntryReport {
        file: entry.file.to_string(),
        course_id: entry.course_id,
        status,
        detail,
    };

    let file_exists = fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false);
    if !file_exists {
        warn!(
            subsystem = "store",
            component = "ingest",
            file = entry.file,
            course_id = entry.course_id,
            "Image file not found"
        );
        return report(
            IngestStatus::Missing,
            Some(format!("file not found: {}", path.display())),
        );
    }

    match store.image_exists(entry.course_id, entry.image_type).await {
        Ok(true) => {
            info!(
                subsystem = "store",
                component = "ingest",
                file = entry.file,
                course_id = entry.course_id,
                image_type = %entry.image_type,
                "Image already stored, skipping"
            );
            return report(IngestStatus::Skipped, None);
        }
        Ok(false) => {}
        // Presence unknown: abort this entry rather than risk a duplicate.
        Err(e) => {
            return report(
                IngestStatus::Failed,
                Some(format!("existence check failed: {e}")),
            );
        }
    }

    let data = match fs::read(path).await {
        Ok(data) => data,
        Err(e) => return report(IngestStatus::Failed, Some(format!("read failed: {e}"))),
    };

    let mime_type = detect_mime(entry.file, &data);
    let image = NewCourseImage::from_catalog(entry, mime_type, data);
    debug!(
        subsystem = "store",
        component = "ingest",
        file = entry.file,
        file_size = image.file_size,
        mime_type = %image.mime_type,
        "Encoded payload"
    );

    match store.insert_image(&image).await {
        Ok(method) => {
            info!(
                subsystem = "store",
                component = "ingest",
                file = entry.file,
                course_id = entry.course_id,
                method,
                file_size = image.file_size,
                "Image inserted"
            );
            report(IngestStatus::Inserted, Some(format!("via {method}")))
        }
        Err(e) => {
            warn!(
                subsystem = "store",
                component = "ingest",
                file = entry.file,
                course_id = entry.course_id,
                error = %e,
                "All insertion strategies failed"
            );
            report(IngestStatus::Failed, Some(e.to_string()))
        }
    }
}
