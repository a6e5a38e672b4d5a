//! Folder index and path resolution.

pub mod index;
pub mod resolver;

pub use index::{DirectoryIndex, IndexBuilder};
pub use resolver::{PathResolver, Resolution, ResolvedSegment};
