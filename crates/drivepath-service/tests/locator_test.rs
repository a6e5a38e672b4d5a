//! File lookup, existence, and deletion against an in-memory store.

mod helpers;

use drivepath_core::error::{AppError, ErrorKind};
use drivepath_core::types::ObjectId;
use drivepath_storage::MemoryStore;

use helpers::{TestDrive, file, folder, sample_drive};

#[tokio::test]
async fn test_find_file_in_nested_folder() {
    let drive = sample_drive(100);
    let entry = drive
        .fs
        .find_file("Projects/Reports/summary.txt")
        .await
        .unwrap()
        .expect("file should exist");
    assert_eq!(entry.id.as_str(), "f1");
}

#[tokio::test]
async fn test_leaf_match_is_case_sensitive() {
    let drive = sample_drive(100);

    let upper = drive
        .fs
        .find_file("projects/reports/Summary.TXT")
        .await
        .unwrap()
        .expect("file should exist");
    assert_eq!(upper.id.as_str(), "f2");

    assert!(!drive.fs.file_exists("Projects/Reports/SUMMARY.txt").await.unwrap());
}

#[tokio::test]
async fn test_loose_store_matches_are_rejected() {
    let drive = TestDrive::new(
        MemoryStore::new()
            .with_folders([folder("1", "docs", &[])])
            .with_entries([file("f1", "file.txt", &["1"])]),
    );

    // The store answers the query, but only with a differently-cased name.
    assert!(!drive.fs.file_exists("docs/File.txt").await.unwrap());
    assert_eq!(drive.store.entry_calls(), 1);
}

#[tokio::test]
async fn test_missing_parent_skips_leaf_query() {
    let drive = sample_drive(100);
    assert!(!drive.fs.file_exists("missingdir/x.txt").await.unwrap());
    assert_eq!(drive.store.entry_calls(), 0);
}

#[tokio::test]
async fn test_root_level_file_searches_without_parent() {
    let drive = sample_drive(100);
    assert!(drive.fs.file_exists("readme.md").await.unwrap());
    assert!(drive.fs.file_exists("/readme.md").await.unwrap());
    assert!(drive.fs.file_exists("./readme.md").await.unwrap());
    assert_eq!(drive.store.folder_calls(), 0);
}

#[tokio::test]
async fn test_leaf_scoped_to_resolved_parent() {
    let drive = sample_drive(100);
    // notes.md lives under Team, not under Projects.
    assert!(drive.fs.file_exists("Team/notes.md").await.unwrap());
    assert!(!drive.fs.file_exists("Projects/notes.md").await.unwrap());
}

#[tokio::test]
async fn test_leaf_results_are_paged() {
    let drive = TestDrive::new(
        MemoryStore::new()
            .with_page_size(1)
            .with_folders([folder("1", "docs", &[])])
            .with_entries([
                file("f1", "Report.pdf", &["1"]),
                file("f2", "report.pdf", &["1"]),
            ]),
    );

    let entry = drive
        .fs
        .find_file("docs/report.pdf")
        .await
        .unwrap()
        .expect("second page holds the exact match");
    assert_eq!(entry.id.as_str(), "f2");
    assert_eq!(drive.store.entry_calls(), 2);
}

#[tokio::test]
async fn test_folder_path_locates_folder_entry() {
    let drive = sample_drive(100);
    let entry = drive
        .fs
        .find_file("Projects/Reports")
        .await
        .unwrap()
        .expect("folder should be found");
    assert!(entry.is_folder());
    assert_eq!(entry.id.as_str(), "2");
}

#[tokio::test]
async fn test_delete_existing_file() {
    let drive = sample_drive(100);
    drive.fs.delete_file("Team/notes.md").await.unwrap();

    assert_eq!(drive.store.delete_calls(), 1);
    assert!(!drive.store.contains(&ObjectId::new("f3")).await);
    assert!(!drive.fs.file_exists("Team/notes.md").await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_file_fails_without_request() {
    let drive = sample_drive(100);
    let err = drive.fs.delete_file("Team/absent.md").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(drive.store.delete_calls(), 0);
}

#[tokio::test]
async fn test_delete_surfaces_store_failure() {
    let drive = sample_drive(100);
    drive
        .store
        .fail_next_delete(AppError::transport("quota exceeded"))
        .await;

    let err = drive.fs.delete_file("readme.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(drive.store.delete_calls(), 1);
    assert!(drive.store.contains(&ObjectId::new("f4")).await);
}

#[tokio::test]
async fn test_ensure_file_exists_reports_not_found() {
    let drive = sample_drive(100);
    let err = drive.fs.ensure_file_exists("nope.txt").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_search_returns_loose_matches() {
    let drive = sample_drive(100);
    let parent = ObjectId::new("2");
    let results = drive.fs.search("SUMMARY.TXT", Some(&parent)).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_transport_error_during_leaf_query() {
    let drive = sample_drive(100);
    drive
        .store
        .fail_next_call(AppError::transport("503 backend error"))
        .await;

    let err = drive.fs.file_exists("readme.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
}

#[tokio::test]
async fn test_transport_error_after_parent_resolved() {
    let drive = sample_drive(100);
    // Call 1 lists folders, call 2 is the leaf query.
    drive
        .store
        .fail_on_call(2, AppError::transport("503 backend error"))
        .await;

    let err = drive
        .fs
        .file_exists("Projects/Reports/summary.txt")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(drive.store.folder_calls(), 1);
    assert_eq!(drive.store.entry_calls(), 1);
}
