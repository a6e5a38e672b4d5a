//! # drivepath-storage
//!
//! Remote store implementations for drivepath: the Drive v3 REST API and an
//! in-memory store used by tests and local experiments.

pub mod providers;

#[cfg(feature = "google-drive")]
pub use providers::GoogleDriveStore;
pub use providers::MemoryStore;
