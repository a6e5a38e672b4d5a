//! In-memory remote store.
//!
//! Mimics the Drive listing contract closely enough to exercise path
//! resolution: offset tokens, loose (case-insensitive) name search, and
//! folders showing up in entry searches.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use drivepath_core::error::AppError;
use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::pagination::DEFAULT_PAGE_SIZE;
use drivepath_core::types::record::FOLDER_MIME_TYPE;
use drivepath_core::types::{DirectoryRecord, DriveEntry, LeafQuery, ObjectId, Page};

/// Remote store backed by in-process vectors.
#[derive(Debug)]
pub struct MemoryStore {
    /// Folder and file records in enumeration order.
    state: RwLock<MemoryState>,
    /// Records per page.
    page_size: usize,
    /// Emit a non-null token alongside the last non-empty page, followed by an
    /// empty terminal page.
    trailing_empty_page: bool,
    /// Number of `list_folders` calls.
    folder_calls: AtomicUsize,
    /// Number of `list_entries` calls.
    entry_calls: AtomicUsize,
    /// Number of `delete_by_id` calls.
    delete_calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct MemoryState {
    folders: Vec<DirectoryRecord>,
    entries: Vec<DriveEntry>,
    /// Calls still allowed through, and the error the next one after them gets.
    pending_failure: Option<(usize, AppError)>,
    pending_delete_failure: Option<AppError>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
            page_size: DEFAULT_PAGE_SIZE as usize,
            trailing_empty_page: false,
            folder_calls: AtomicUsize::new(0),
            entry_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Set the number of records returned per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// End every listing with an empty page reached through a non-null token.
    pub fn with_trailing_empty_page(mut self) -> Self {
        self.trailing_empty_page = true;
        self
    }

    /// Seed folder records.
    pub fn with_folders(mut self, folders: impl IntoIterator<Item = DirectoryRecord>) -> Self {
        self.state.get_mut().folders.extend(folders);
        self
    }

    /// Seed file records.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = DriveEntry>) -> Self {
        self.state.get_mut().entries.extend(entries);
        self
    }

    /// Append a folder record.
    pub async fn add_folder(&self, folder: DirectoryRecord) {
        self.state.write().await.folders.push(folder);
    }

    /// Append a file record.
    pub async fn add_entry(&self, entry: DriveEntry) {
        self.state.write().await.entries.push(entry);
    }

    /// Make the next remote call fail with `err`.
    pub async fn fail_next_call(&self, err: AppError) {
        self.fail_on_call(1, err).await;
    }

    /// Make the `n`th remote call from now fail with `err`. Listings and
    /// deletes both count; `n` of 0 is treated as 1.
    pub async fn fail_on_call(&self, n: usize, err: AppError) {
        self.state.write().await.pending_failure = Some((n.max(1), err));
    }

    /// Make the next delete fail with `err`, leaving listings untouched.
    pub async fn fail_next_delete(&self, err: AppError) {
        self.state.write().await.pending_delete_failure = Some(err);
    }

    /// Whether a record with this id is still stored.
    pub async fn contains(&self, id: &ObjectId) -> bool {
        let state = self.state.read().await;
        state.entries.iter().any(|e| &e.id == id) || state.folders.iter().any(|f| &f.id == id)
    }

    /// Number of folder listing calls served.
    pub fn folder_calls(&self) -> usize {
        self.folder_calls.load(Ordering::SeqCst)
    }

    /// Number of entry listing calls served.
    pub fn entry_calls(&self) -> usize {
        self.entry_calls.load(Ordering::SeqCst)
    }

    /// Number of delete calls served.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    async fn take_failure(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        match state.pending_failure.take() {
            Some((remaining, err)) if remaining <= 1 => Err(err),
            Some((remaining, err)) => {
                state.pending_failure = Some((remaining - 1, err));
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn paginate<T: Clone>(&self, items: &[T], page_token: Option<&str>) -> AppResult<Page<T>> {
        let offset = match page_token {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| AppError::transport(format!("Invalid page token: {token}")))?,
            None => 0,
        };

        if offset >= items.len() {
            return Ok(Page::last(Vec::new()));
        }

        let end = (offset + self.page_size).min(items.len());
        let next = if end < items.len() || self.trailing_empty_page {
            Some(end.to_string())
        } else {
            None
        };

        Ok(Page::new(items[offset..end].to_vec(), next))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn list_folders(&self, page_token: Option<&str>) -> AppResult<Page<DirectoryRecord>> {
        self.folder_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure().await?;

        let state = self.state.read().await;
        let page = self.paginate(&state.folders, page_token)?;
        debug!(
            returned = page.items.len(),
            has_more = page.continuation().is_some(),
            "Served memory folder page"
        );
        Ok(page)
    }

    async fn list_entries(
        &self,
        query: &LeafQuery,
        page_token: Option<&str>,
    ) -> AppResult<Page<DriveEntry>> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure().await?;

        let state = self.state.read().await;
        let wanted = query.name.to_lowercase();
        let in_scope = |parents: &[ObjectId]| match &query.parent_id {
            Some(parent) => parents.contains(parent),
            None => true,
        };

        let folders = state
            .folders
            .iter()
            .filter(|f| f.name.to_lowercase() == wanted && in_scope(&f.parent_ids))
            .map(|f| {
                DriveEntry::new(f.id.clone(), f.name.clone())
                    .with_parents(f.parent_ids.iter().cloned())
                    .with_mime_type(FOLDER_MIME_TYPE)
            });
        let files = state
            .entries
            .iter()
            .filter(|e| e.name.to_lowercase() == wanted && in_scope(&e.parent_ids))
            .cloned();

        let matches: Vec<DriveEntry> = folders.chain(files).collect();
        self.paginate(&matches, page_token)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure().await?;

        let mut state = self.state.write().await;
        if let Some(err) = state.pending_delete_failure.take() {
            return Err(err);
        }
        let before = state.entries.len() + state.folders.len();
        state.entries.retain(|e| &e.id != id);
        state.folders.retain(|f| &f.id != id);

        if state.entries.len() + state.folders.len() == before {
            return Err(AppError::not_found(format!("Object {id} not found")));
        }
        Ok(())
    }
}
