//! Index entries: a record paired with its direct children

use crate::types::Identifier;

/// Index entry for one record
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Position of the source record in the index's copy of the input
    pub source: usize,
    /// Ids of records whose `parent` is this record's id, in input order
    pub children_ids: Vec<Identifier>,
}
