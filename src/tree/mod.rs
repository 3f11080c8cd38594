//! Tree index over flat parent-referencing records

pub mod entry;
pub mod index;

pub use entry::IndexEntry;
pub use index::{MemoStats, TreeIndex};
