//! Leaf entry lookup.

pub mod locator;

pub use locator::EntryLocator;
