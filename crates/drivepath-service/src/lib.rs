//! # drivepath-service
//!
//! Resolves slash-delimited paths against a remote store whose only notion of
//! hierarchy is parent ids on folder records. Three layers, each built on the
//! previous one:
//!
//! - [`folder::IndexBuilder`] pages through every folder into a flat index.
//! - [`folder::PathResolver`] walks path segments down that index.
//! - [`file::EntryLocator`] resolves the parent folder and matches the leaf
//!   name exactly.
//!
//! [`DriveFilesystem`] bundles them behind path-based operations.

pub mod file;
pub mod filesystem;
pub mod folder;

pub use file::EntryLocator;
pub use filesystem::DriveFilesystem;
pub use folder::{DirectoryIndex, IndexBuilder, PathResolver, Resolution};
