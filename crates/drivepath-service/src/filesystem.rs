//! Path-addressed view over a remote store.

use std::sync::Arc;

use tracing::info;

use drivepath_core::error::AppError;
use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::{DriveEntry, ObjectId};

use crate::file::locator::EntryLocator;
use crate::folder::resolver::{PathResolver, Resolution};

/// Answers existence questions and deletes entries by slash-delimited path.
///
/// Nothing is cached between calls: each operation re-reads the folder
/// listing, so results always reflect the store's current state.
#[derive(Debug, Clone)]
pub struct DriveFilesystem {
    store: Arc<dyn RemoteStore>,
    resolver: PathResolver,
    locator: EntryLocator,
}

impl DriveFilesystem {
    /// Create a filesystem view over a remote store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            resolver: PathResolver::new(store.clone()),
            locator: EntryLocator::new(store.clone()),
            store,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn RemoteStore> {
        &self.store
    }

    /// Resolve every segment of a folder path.
    pub async fn resolve(&self, path: &str) -> AppResult<Resolution> {
        self.resolver.resolve(path).await
    }

    /// The id of the folder at `path`.
    pub async fn find_folder(&self, path: &str) -> AppResult<Option<ObjectId>> {
        self.resolver.find_folder(path).await
    }

    /// Whether every segment of `path` resolves to a folder.
    pub async fn folder_exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.find_folder(path).await?.is_some())
    }

    /// The entry at `path`, matched by exact name inside its parent folder.
    pub async fn find_file(&self, path: &str) -> AppResult<Option<DriveEntry>> {
        self.locator.locate(path).await
    }

    /// Whether an entry exists at `path`.
    pub async fn file_exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.find_file(path).await?.is_some())
    }

    /// The entry at `path`, or a `NotFound` error.
    pub async fn ensure_file_exists(&self, path: &str) -> AppResult<DriveEntry> {
        self.find_file(path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File does not exist: {path}")))
    }

    /// Delete the entry at `path`.
    ///
    /// Fails with `NotFound` (and sends no delete request) when nothing is
    /// there; otherwise returns the store's delete result unchanged.
    pub async fn delete_file(&self, path: &str) -> AppResult<()> {
        let entry = self.ensure_file_exists(path).await?;
        self.store.delete_by_id(&entry.id).await?;
        info!(path, id = %entry.id, "Deleted entry");
        Ok(())
    }

    /// Ad hoc name search, optionally scoped to one parent folder. Returns
    /// whatever the store considers a match.
    pub async fn search(
        &self,
        name: &str,
        parent_id: Option<&ObjectId>,
    ) -> AppResult<Vec<DriveEntry>> {
        self.locator.search(name, parent_id.cloned()).await
    }
}
