//! Core traits defined in `drivepath-core` and implemented by other crates.

pub mod store;

pub use store::RemoteStore;
