//! Records returned by the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ObjectId;

/// MIME type the Drive API assigns to folder objects.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// One folder object as returned by a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// Remote identifier.
    pub id: ObjectId,
    /// Display name (not unique at any level).
    pub name: String,
    /// Parent folder ids in the order the store reports them. Empty when the
    /// store omits the field.
    #[serde(default)]
    pub parent_ids: Vec<ObjectId>,
}

impl DirectoryRecord {
    /// Create a folder record.
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        parent_ids: impl IntoIterator<Item = ObjectId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_ids: parent_ids.into_iter().collect(),
        }
    }

    /// Whether the name matches a path segment, ignoring case.
    pub fn name_matches(&self, segment: &str) -> bool {
        self.name.to_lowercase() == segment.to_lowercase()
    }

    /// Whether `parent` is among this folder's parents.
    pub fn has_parent(&self, parent: &ObjectId) -> bool {
        self.parent_ids.iter().any(|p| p == parent)
    }
}

/// Any remote object returned by an entry listing (usually a file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveEntry {
    /// Remote identifier.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
    /// MIME type, if the store reported one.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// File extension, if the store reported one.
    #[serde(default)]
    pub file_extension: Option<String>,
    /// Parent folder ids.
    #[serde(default)]
    pub parent_ids: Vec<ObjectId>,
    /// Last modification time.
    #[serde(default)]
    pub modified_time: Option<DateTime<Utc>>,
}

impl DriveEntry {
    /// Create an entry with only an id and a name.
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mime_type: None,
            file_extension: None,
            parent_ids: Vec::new(),
            modified_time: None,
        }
    }

    /// Set the parent folder ids.
    pub fn with_parents(mut self, parent_ids: impl IntoIterator<Item = ObjectId>) -> Self {
        self.parent_ids = parent_ids.into_iter().collect();
        self
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Whether this entry is a folder object.
    pub fn is_folder(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }
}

/// Filter for an entry listing: a name, optionally scoped to one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafQuery {
    /// Name to search for.
    pub name: String,
    /// Restrict the search to children of this folder.
    pub parent_id: Option<ObjectId>,
}

impl LeafQuery {
    /// Create a query for `name`, optionally under `parent_id`.
    pub fn new(name: impl Into<String>, parent_id: Option<ObjectId>) -> Self {
        Self {
            name: name.into(),
            parent_id,
        }
    }
}
