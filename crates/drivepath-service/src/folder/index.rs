//! Flat folder index built from a full folder listing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::{DirectoryRecord, ObjectId};

/// Every folder the store reported, addressable by id.
///
/// Iteration follows the order in which the store enumerated the folders. A
/// record whose id was already seen replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    records: Vec<DirectoryRecord>,
    positions: HashMap<ObjectId, usize>,
}

impl DirectoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same id.
    pub fn insert(&mut self, record: DirectoryRecord) {
        match self.positions.get(&record.id) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.positions.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a folder by id.
    pub fn get(&self, id: &ObjectId) -> Option<&DirectoryRecord> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    /// Whether a folder with this id was indexed.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of indexed folders.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no folders.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate folders in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryRecord> {
        self.records.iter()
    }

    /// Whether a folder sits at the top of the indexed hierarchy: it has no
    /// parents, or none of its parents were indexed (e.g. a shared drive root).
    pub fn is_root_eligible(&self, record: &DirectoryRecord) -> bool {
        record.parent_ids.iter().all(|parent| !self.contains(parent))
    }
}

impl FromIterator<DirectoryRecord> for DirectoryIndex {
    fn from_iter<I: IntoIterator<Item = DirectoryRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// Fetches the complete folder listing and flattens it into a [`DirectoryIndex`].
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    store: Arc<dyn RemoteStore>,
}

impl IndexBuilder {
    /// Create a builder over a remote store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Page through every folder until the store stops returning a token.
    pub async fn build(&self) -> AppResult<DirectoryIndex> {
        let mut index = DirectoryIndex::new();
        let mut token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.store.list_folders(token.as_deref()).await?;
            pages += 1;
            token = page.continuation().map(str::to_string);

            for record in page.items {
                index.insert(record);
            }

            if token.is_none() {
                break;
            }
        }

        debug!(
            provider = self.store.provider_type(),
            pages,
            folders = index.len(),
            "Built directory index"
        );
        Ok(index)
    }
}
