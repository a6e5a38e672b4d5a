//! Folder resolution against an in-memory store.

mod helpers;

use drivepath_core::error::{AppError, ErrorKind};
use drivepath_core::types::ObjectId;
use drivepath_storage::MemoryStore;

use helpers::{TestDrive, folder, sample_drive};

fn ids(resolution: &drivepath_service::Resolution) -> Vec<Option<String>> {
    resolution
        .segments()
        .iter()
        .map(|s| s.folder_id.as_ref().map(ObjectId::to_string))
        .collect()
}

#[tokio::test]
async fn test_resolves_two_level_path() {
    let drive = TestDrive::new(
        MemoryStore::new().with_folders([folder("1", "a", &[]), folder("2", "b", &["1"])]),
    );

    let ab = drive.fs.resolve("a/b").await.unwrap();
    assert_eq!(ids(&ab), vec![Some("1".into()), Some("2".into())]);

    let ac = drive.fs.resolve("a/c").await.unwrap();
    assert_eq!(ids(&ac), vec![Some("1".into()), None]);
    assert!(!drive.fs.folder_exists("a/c").await.unwrap());
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let drive = sample_drive(2);

    let first = drive.fs.resolve("/Projects//Reports/").await.unwrap();
    let second = drive.fs.resolve("/Projects//Reports/").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.folder_id().map(ObjectId::as_str), Some("2"));
}

#[tokio::test]
async fn test_each_resolution_refetches_the_listing() {
    let drive = sample_drive(100);

    drive.fs.folder_exists("Projects").await.unwrap();
    drive.fs.folder_exists("Projects").await.unwrap();
    assert_eq!(drive.store.folder_calls(), 2);

    drive.store.add_folder(folder("5", "Archive", &["1"])).await;
    assert!(drive.fs.folder_exists("projects/archive").await.unwrap());
}

#[tokio::test]
async fn test_case_insensitive_folder_match() {
    let drive = sample_drive(100);
    assert_eq!(
        drive.fs.find_folder("projects/REPORTS").await.unwrap(),
        Some(ObjectId::new("2"))
    );
}

#[tokio::test]
async fn test_shared_drive_folder_is_root_eligible() {
    let drive = sample_drive(100);
    assert_eq!(drive.fs.find_folder("team").await.unwrap(), Some(ObjectId::new("4")));
}

#[tokio::test]
async fn test_nested_folder_is_not_at_root() {
    let drive = sample_drive(100);
    assert!(!drive.fs.folder_exists("Reports").await.unwrap());
}

#[tokio::test]
async fn test_empty_path_is_not_a_folder() {
    let drive = sample_drive(100);
    assert!(!drive.fs.folder_exists("/").await.unwrap());
    assert_eq!(drive.store.folder_calls(), 0);
}

#[tokio::test]
async fn test_pages_are_merged_without_drops() {
    // Page size 1 spreads the four folders across four pages.
    let drive = sample_drive(1);
    assert!(drive.fs.folder_exists("Projects/reports-old").await.unwrap());
    assert!(drive.fs.folder_exists("Team").await.unwrap());
    assert_eq!(drive.store.folder_calls(), 2 * 4);
}

#[tokio::test]
async fn test_token_alongside_empty_final_page_keeps_paging() {
    let drive = TestDrive::new(
        MemoryStore::new()
            .with_page_size(1)
            .with_trailing_empty_page()
            .with_folders([folder("1", "a", &[]), folder("2", "b", &["1"])]),
    );

    assert!(drive.fs.folder_exists("a/b").await.unwrap());
    // Two populated pages plus the empty terminal page.
    assert_eq!(drive.store.folder_calls(), 3);
}

#[tokio::test]
async fn test_duplicate_ids_across_pages_collapse() {
    let drive = TestDrive::new(MemoryStore::new().with_page_size(1).with_folders([
        folder("1", "a", &[]),
        folder("2", "b", &["1"]),
        folder("2", "c", &["1"]),
    ]));

    assert!(!drive.fs.folder_exists("a/b").await.unwrap());
    assert!(drive.fs.folder_exists("a/c").await.unwrap());
}

#[tokio::test]
async fn test_transport_error_is_surfaced() {
    let drive = sample_drive(100);
    drive
        .store
        .fail_next_call(AppError::transport("connection reset"))
        .await;

    let err = drive.fs.folder_exists("Projects").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
}

#[tokio::test]
async fn test_transport_error_on_later_folder_page() {
    let drive = sample_drive(1);
    drive
        .store
        .fail_on_call(2, AppError::transport("503 backend error"))
        .await;

    let err = drive.fs.folder_exists("Projects/Reports").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(drive.store.folder_calls(), 2);
}
