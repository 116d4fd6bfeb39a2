//! Driver-level tests over the mock store: idempotence, per-entry
//! tolerance, and the missing-directory hard failure.

use std::path::Path;

use tempfile::TempDir;

use fairway_core::{IngestStatus, AERIAL_CATALOG};
use fairway_store::ingest::run_catalog;
use fairway_store::mock::MockStore;
use fairway_store::sqlgen;

/// Write a fake JPEG for every catalog entry, returning the directory.
fn populate_images() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (index, entry) in AERIAL_CATALOG.iter().enumerate() {
        // Distinct contents per course so round-trip checks are meaningful.
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend(std::iter::repeat(index as u8).take(16 + index));
        std::fs::write(dir.path().join(entry.file), data).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_first_run_inserts_everything() {
    let dir = populate_images();
    let store = MockStore::new();

    let outcome = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(outcome.summary.inserted, AERIAL_CATALOG.len());
    assert_eq!(outcome.summary.skipped, 0);
    assert_eq!(outcome.stored.len(), AERIAL_CATALOG.len());
    assert!(outcome
        .reports
        .iter()
        .all(|r| r.status == IngestStatus::Inserted));
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let dir = populate_images();
    let store = MockStore::new();

    let first = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();
    let second = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(first.summary.inserted, AERIAL_CATALOG.len());
    assert_eq!(second.summary.skipped, AERIAL_CATALOG.len());
    assert_eq!(second.summary.inserted, 0);
    // Store state is unchanged by the second pass.
    assert_eq!(second.stored.len(), AERIAL_CATALOG.len());
    assert_eq!(store.inserted_images().len(), AERIAL_CATALOG.len());
}

#[tokio::test]
async fn test_stored_payload_round_trips() {
    let dir = populate_images();
    let store = MockStore::new();

    run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    for (entry, image) in AERIAL_CATALOG.iter().zip(store.inserted_images()) {
        let on_disk = std::fs::read(dir.path().join(entry.file)).unwrap();
        assert_eq!(image.data, on_disk);
        assert_eq!(image.file_size as usize, on_disk.len());
        assert_eq!(image.mime_type, "image/jpeg");
    }
}

#[tokio::test]
async fn test_missing_file_is_reported_and_pass_continues() {
    let dir = populate_images();
    std::fs::remove_file(dir.path().join(AERIAL_CATALOG[1].file)).unwrap();
    let store = MockStore::new();

    let outcome = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(outcome.summary.missing, 1);
    assert_eq!(outcome.summary.inserted, AERIAL_CATALOG.len() - 1);
    assert_eq!(outcome.reports[1].status, IngestStatus::Missing);
}

#[tokio::test]
async fn test_pre_existing_entry_is_skipped_not_reinserted() {
    let dir = populate_images();
    let store = MockStore::new().with_existing(
        AERIAL_CATALOG[0].course_id,
        AERIAL_CATALOG[0].image_type,
    );

    let outcome = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(outcome.summary.skipped, 1);
    assert_eq!(outcome.summary.inserted, AERIAL_CATALOG.len() - 1);
    // The guarded entry never reached an insert call.
    assert!(!store
        .calls()
        .contains(&format!("insert:{}:aerial", AERIAL_CATALOG[0].course_id)));
}

#[tokio::test]
async fn test_failed_inserts_do_not_abort_the_pass() {
    let dir = populate_images();
    let store = MockStore::new().failing_inserts();

    let outcome = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(outcome.summary.failed, AERIAL_CATALOG.len());
    assert!(outcome
        .reports
        .iter()
        .all(|r| r.status == IngestStatus::Failed));
}

#[tokio::test]
async fn test_existence_check_error_fails_entry_without_insert() {
    let dir = populate_images();
    let store = MockStore::new().failing_existence_checks();

    let outcome = run_catalog(&store, dir.path(), AERIAL_CATALOG).await.unwrap();

    assert_eq!(outcome.summary.failed, AERIAL_CATALOG.len());
    assert!(store.calls().iter().all(|c| !c.starts_with("insert:")));
}

#[tokio::test]
async fn test_missing_directory_is_hard_failure_with_zero_store_calls() {
    let store = MockStore::new();

    let result = run_catalog(
        &store,
        Path::new("/nonexistent/images"),
        AERIAL_CATALOG,
    )
    .await;

    assert!(result.is_err());
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_sqlgen_writes_insert_and_verify_files() {
    let images = populate_images();
    let out = TempDir::new().unwrap();

    let generated = sqlgen::generate_insert_files(images.path(), out.path(), AERIAL_CATALOG)
        .await
        .unwrap();

    assert_eq!(generated.insert_files.len(), AERIAL_CATALOG.len());
    assert!(generated.missing.is_empty());
    assert!(generated.verify_file.is_file());

    let first = std::fs::read_to_string(&generated.insert_files[0]).unwrap();
    assert!(first.contains("INSERT INTO course_images"));
    assert!(first.contains("::bytea"));
}
