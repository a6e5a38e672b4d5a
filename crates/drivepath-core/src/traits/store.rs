//! Remote object store trait consumed by path resolution.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{DirectoryRecord, DriveEntry, LeafQuery, ObjectId, Page};

/// A flat, paginated object listing with parent-id references.
///
/// The store has no hierarchical query: folders come back as one flat set and
/// the caller rebuilds the tree. Implementations live in `drivepath-storage`.
#[async_trait]
pub trait RemoteStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "google-drive", "memory").
    fn provider_type(&self) -> &str;

    /// List one page of folder objects that are not trashed, across every
    /// location the caller can see.
    async fn list_folders(&self, page_token: Option<&str>) -> AppResult<Page<DirectoryRecord>>;

    /// List one page of objects matching a name, optionally under one parent.
    ///
    /// The remote may return loose matches; callers verify names themselves.
    async fn list_entries(
        &self,
        query: &LeafQuery,
        page_token: Option<&str>,
    ) -> AppResult<Page<DriveEntry>>;

    /// Delete an object by id.
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()>;
}
