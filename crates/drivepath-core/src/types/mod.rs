//! Shared domain types: identifiers, remote records, and pagination.

pub mod id;
pub mod pagination;
pub mod record;

pub use id::ObjectId;
pub use pagination::Page;
pub use record::{DirectoryRecord, DriveEntry, LeafQuery};
