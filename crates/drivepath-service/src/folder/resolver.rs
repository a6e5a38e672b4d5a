//! Slash-delimited path resolution over the flat folder index.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::{DirectoryRecord, ObjectId};

use super::index::{DirectoryIndex, IndexBuilder};

/// One path segment and the folder it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSegment {
    /// The segment as written in the path.
    pub name: String,
    /// The folder id, or `None` when the segment did not resolve.
    pub folder_id: Option<ObjectId>,
}

/// Per-segment outcome of resolving a path.
///
/// Segments after the first unresolved one are always unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    segments: Vec<ResolvedSegment>,
}

impl Resolution {
    /// The segments in path order.
    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    /// Whether the path had any non-empty segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether every segment resolved (false for an empty path).
    pub fn is_complete(&self) -> bool {
        !self.segments.is_empty() && self.segments.iter().all(|s| s.folder_id.is_some())
    }

    /// The id of the folder the whole path denotes.
    pub fn folder_id(&self) -> Option<&ObjectId> {
        if !self.is_complete() {
            return None;
        }
        self.segments.last().and_then(|s| s.folder_id.as_ref())
    }

    /// The first segment that did not resolve.
    pub fn first_unresolved(&self) -> Option<&ResolvedSegment> {
        self.segments.iter().find(|s| s.folder_id.is_none())
    }
}

/// Split a path on `/`, dropping empty segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Walk `segments` down `index`, starting at the root.
pub fn resolve_in(index: &DirectoryIndex, segments: &[&str]) -> Resolution {
    let mut resolved = Vec::with_capacity(segments.len());
    let mut expected_parent: Option<ObjectId> = None;
    let mut broken = false;

    for segment in segments {
        let found = if broken {
            None
        } else {
            find_child(index, segment, expected_parent.as_ref()).map(|r| r.id.clone())
        };

        match &found {
            Some(id) => expected_parent = Some(id.clone()),
            None => broken = true,
        }

        resolved.push(ResolvedSegment {
            name: (*segment).to_string(),
            folder_id: found,
        });
    }

    Resolution { segments: resolved }
}

/// Find the folder named `segment` under `parent` (or at the root).
///
/// The first qualifying record in index order wins.
fn find_child<'a>(
    index: &'a DirectoryIndex,
    segment: &str,
    parent: Option<&ObjectId>,
) -> Option<&'a DirectoryRecord> {
    let mut candidates = index.iter().filter(|record| {
        record.name_matches(segment)
            && match parent {
                Some(parent) => record.has_parent(parent),
                None => index.is_root_eligible(record),
            }
    });

    let first = candidates.next()?;
    let others = candidates.count();
    if others > 0 {
        warn!(
            segment,
            chosen = %first.id,
            others,
            "Several folders match this segment; using the first enumerated"
        );
    }
    Some(first)
}

/// Resolves paths to folder ids, re-reading the folder listing on every call.
#[derive(Debug, Clone)]
pub struct PathResolver {
    index_builder: IndexBuilder,
}

impl PathResolver {
    /// Create a resolver over a remote store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            index_builder: IndexBuilder::new(store),
        }
    }

    /// Resolve every segment of `path`.
    ///
    /// A path without segments resolves to an empty result without a listing.
    pub async fn resolve(&self, path: &str) -> AppResult<Resolution> {
        let segments = split_segments(path);
        if segments.is_empty() {
            return Ok(Resolution::default());
        }

        let index = self.index_builder.build().await?;
        let resolution = resolve_in(&index, &segments);

        match resolution.first_unresolved() {
            Some(missing) => debug!(path, segment = %missing.name, "Path did not resolve"),
            None => debug!(path, "Path resolved"),
        }
        Ok(resolution)
    }

    /// The id of the folder at `path`, if every segment resolves.
    pub async fn find_folder(&self, path: &str) -> AppResult<Option<ObjectId>> {
        let resolution = self.resolve(path).await?;
        Ok(resolution.folder_id().cloned())
    }
}
