//! Remote store implementations.

#[cfg(feature = "google-drive")]
pub mod google_drive;
pub mod memory;

#[cfg(feature = "google-drive")]
pub use google_drive::GoogleDriveStore;
pub use memory::MemoryStore;
