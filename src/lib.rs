//! Treestore: In-Memory Tree Index
//!
//! Indexes a flat list of parent-referencing records into an immutable tree
//! that answers item lookup, direct children, all descendants and ancestor
//! chain queries. Traversal results are memoized per id.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod logging;
pub mod memo;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::{ApiError, TreeError};
pub use tree::TreeIndex;
pub use types::{Identifier, Record};
