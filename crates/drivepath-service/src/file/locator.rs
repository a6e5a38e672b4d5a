//! Leaf lookup: resolve the parent folder, then search by exact name.

use std::sync::Arc;

use tracing::debug;

use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::{DriveEntry, LeafQuery, ObjectId};

use crate::folder::resolver::{PathResolver, split_segments};

/// Split a path into its parent directory and final component.
///
/// Trailing slashes are ignored. The parent is `None` when the entry lives
/// at the root (no slash, `./name`, or `/name`).
pub fn split_path(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.trim_end_matches('/');
    let (dirname, basename) = match trimmed.rsplit_once('/') {
        Some((dir, base)) => (dir, base),
        None => ("", trimmed),
    };

    let parent = if dirname == "." || split_segments(dirname).is_empty() {
        None
    } else {
        Some(dirname)
    };
    (parent, basename)
}

/// Locates files (or any object) by full path.
#[derive(Debug, Clone)]
pub struct EntryLocator {
    store: Arc<dyn RemoteStore>,
    resolver: PathResolver,
}

impl EntryLocator {
    /// Create a locator over a remote store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            resolver: PathResolver::new(store.clone()),
            store,
        }
    }

    /// Find the entry at `path`.
    ///
    /// Returns `Ok(None)` when the parent folder does not resolve (no leaf
    /// query is issued) or when no candidate's name matches exactly.
    pub async fn locate(&self, path: &str) -> AppResult<Option<DriveEntry>> {
        let (dirname, basename) = split_path(path);
        if basename.is_empty() {
            debug!(path, "Path has no final component");
            return Ok(None);
        }

        let parent_id = match dirname {
            Some(dirname) => match self.resolver.find_folder(dirname).await? {
                Some(id) => Some(id),
                None => {
                    debug!(path, dirname, "Parent folder does not exist");
                    return Ok(None);
                }
            },
            None => None,
        };

        let candidates = self.search(basename, parent_id).await?;
        let found = candidates.into_iter().find(|entry| entry.name == basename);

        if found.is_none() {
            debug!(path, basename, "No entry with an exact name match");
        }
        Ok(found)
    }

    /// Every entry the store returns for `name` (optionally under `parent_id`),
    /// across all pages. The store may return loose matches.
    pub async fn search(
        &self,
        name: &str,
        parent_id: Option<ObjectId>,
    ) -> AppResult<Vec<DriveEntry>> {
        let query = LeafQuery::new(name, parent_id);
        let mut entries = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self.store.list_entries(&query, token.as_deref()).await?;
            token = page.continuation().map(str::to_string);
            entries.extend(page.items);

            if token.is_none() {
                break;
            }
        }

        debug!(name, candidates = entries.len(), "Entry search finished");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_nested() {
        assert_eq!(split_path("a/b/c.txt"), (Some("a/b"), "c.txt"));
        assert_eq!(split_path("/a/b/c.txt"), (Some("/a/b"), "c.txt"));
    }

    #[test]
    fn test_split_path_root_forms() {
        assert_eq!(split_path("c.txt"), (None, "c.txt"));
        assert_eq!(split_path("./c.txt"), (None, "c.txt"));
        assert_eq!(split_path("/c.txt"), (None, "c.txt"));
        assert_eq!(split_path("//c.txt"), (None, "c.txt"));
    }

    #[test]
    fn test_split_path_trailing_slash() {
        assert_eq!(split_path("a/b/"), (Some("a"), "b"));
        assert_eq!(split_path("/"), (None, ""));
        assert_eq!(split_path(""), (None, ""));
    }
}
