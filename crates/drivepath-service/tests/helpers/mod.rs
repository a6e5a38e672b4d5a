//! Shared fixtures for the filesystem integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use drivepath_core::types::{DirectoryRecord, DriveEntry, ObjectId};
use drivepath_service::DriveFilesystem;
use drivepath_storage::MemoryStore;

/// A filesystem view together with the store behind it.
pub struct TestDrive {
    /// The store, for seeding and call counting.
    pub store: Arc<MemoryStore>,
    /// The view under test.
    pub fs: DriveFilesystem,
}

impl TestDrive {
    /// Wrap a configured store.
    pub fn new(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let fs = DriveFilesystem::new(store.clone());
        Self { store, fs }
    }
}

/// Folder record shorthand.
pub fn folder(id: &str, name: &str, parents: &[&str]) -> DirectoryRecord {
    DirectoryRecord::new(id, name, parents.iter().map(|p| ObjectId::new(*p)))
}

/// File record shorthand.
pub fn file(id: &str, name: &str, parents: &[&str]) -> DriveEntry {
    DriveEntry::new(id, name).with_parents(parents.iter().map(|p| ObjectId::new(*p)))
}

/// A small drive:
///
/// ```text
/// Projects/            (1)
///   Reports/           (2)
///     summary.txt      (f1)
///     Summary.TXT      (f2)
///   reports-old/       (3)
/// Team/                (4, parent is a shared drive root)
///   notes.md           (f3)
/// readme.md            (f4, no parent folder)
/// ```
pub fn sample_drive(page_size: usize) -> TestDrive {
    TestDrive::new(
        MemoryStore::new()
            .with_page_size(page_size)
            .with_folders([
                folder("1", "Projects", &[]),
                folder("2", "Reports", &["1"]),
                folder("3", "reports-old", &["1"]),
                folder("4", "Team", &["0ASharedDriveRoot"]),
            ])
            .with_entries([
                file("f1", "summary.txt", &["2"]),
                file("f2", "Summary.TXT", &["2"]),
                file("f3", "notes.md", &["4"]),
                file("f4", "readme.md", &[]),
            ]),
    )
}
