//! TreeIndex
//!
//! Immutable index built once from an ordered list of records. Answers item
//! lookup, direct children, all descendants (breadth-first) and the ancestor
//! chain. The two traversal queries are memoized per id for the lifetime of
//! the index.

use super::entry::IndexEntry;
use crate::error::TreeError;
use crate::memo::Memo;
use crate::types::{Identifier, Record};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, trace};

/// Positions into `TreeIndex::records`
type Positions = Arc<[usize]>;

/// Computation counters for the memoized queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub all_children_computed: usize,
    pub all_parents_computed: usize,
}

pub struct TreeIndex {
    records: Vec<Record>,
    entries: HashMap<Identifier, IndexEntry>,
    descendants: Memo<Identifier, Positions>,
    ancestors: Memo<Identifier, Positions>,
}

impl TreeIndex {
    /// Build an index from a copy of `records`.
    ///
    /// Never fails. With duplicate ids the last record wins the id slot.
    pub fn new(records: &[Record]) -> Self {
        Self::build(records.to_vec())
    }

    fn build(records: Vec<Record>) -> Self {
        let mut by_parent: HashMap<&Identifier, Vec<Identifier>> = HashMap::new();
        for record in &records {
            by_parent
                .entry(&record.parent)
                .or_default()
                .push(record.id.clone());
        }

        let mut entries = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for (position, record) in records.iter().enumerate() {
            let entry = IndexEntry {
                source: position,
                children_ids: by_parent.get(&record.id).cloned().unwrap_or_default(),
            };
            if entries.insert(record.id.clone(), entry).is_some() {
                duplicates += 1;
            }
        }

        debug!(
            record_count = records.len(),
            duplicates,
            "Built tree index"
        );

        Self {
            records,
            entries,
            descendants: Memo::new(),
            ancestors: Memo::new(),
        }
    }

    /// All records in their original order
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    pub fn get_item(&self, id: &Identifier) -> Option<&Record> {
        self.entries.get(id).map(|entry| &self.records[entry.source])
    }

    /// Direct children of `id`, in input order.
    ///
    /// A known record without children yields an empty list; an unknown id
    /// is `NodeNotFound`.
    pub fn get_children(&self, id: &Identifier) -> Result<Vec<&Record>, TreeError> {
        let entry = self.entry(id)?;
        Ok(self
            .child_positions(entry)
            .map(|position| &self.records[position])
            .collect())
    }

    /// Every descendant of `id`, breadth-first.
    pub fn get_all_children(&self, id: &Identifier) -> Result<Vec<&Record>, TreeError> {
        let positions = self
            .descendants
            .get_or_try_insert_with(id, || self.collect_descendants(id))?;
        Ok(self.resolve(&positions))
    }

    /// Ancestors of `id`, nearest first.
    ///
    /// The walk ends at the first `parent` that is not a known id.
    pub fn get_all_parents(&self, id: &Identifier) -> Result<Vec<&Record>, TreeError> {
        let positions = self
            .ancestors
            .get_or_try_insert_with(id, || self.collect_ancestors(id))?;
        Ok(self.resolve(&positions))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn memo_stats(&self) -> MemoStats {
        MemoStats {
            all_children_computed: self.descendants.computed(),
            all_parents_computed: self.ancestors.computed(),
        }
    }

    fn entry(&self, id: &Identifier) -> Result<&IndexEntry, TreeError> {
        self.entries
            .get(id)
            .ok_or_else(|| TreeError::NodeNotFound(id.clone()))
    }

    fn child_positions<'a>(&'a self, entry: &'a IndexEntry) -> impl Iterator<Item = usize> + 'a {
        entry
            .children_ids
            .iter()
            .filter_map(|child_id| self.entries.get(child_id).map(|child| child.source))
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Record> {
        positions
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    fn collect_descendants(&self, id: &Identifier) -> Result<Positions, TreeError> {
        trace!(%id, "Computing descendants");
        let root = self.entry(id)?;

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut queue: VecDeque<usize> = self.child_positions(root).collect();

        while let Some(position) = queue.pop_front() {
            // Duplicate ids or cycles can enqueue a record twice
            if !seen.insert(position) {
                continue;
            }
            found.push(position);
            if let Some(entry) = self.entries.get(&self.records[position].id) {
                queue.extend(self.child_positions(entry));
            }
        }

        Ok(found.into())
    }

    fn collect_ancestors(&self, id: &Identifier) -> Result<Positions, TreeError> {
        trace!(%id, "Computing ancestors");
        let start = self.entry(id)?;

        let mut seen = HashSet::from([start.source]);
        let mut found = Vec::new();
        let mut current = &self.records[start.source];

        while let Some(parent) = self.entries.get(&current.parent) {
            if !seen.insert(parent.source) {
                break;
            }
            found.push(parent.source);
            current = &self.records[parent.source];
        }

        Ok(found.into())
    }
}

impl FromIterator<Record> for TreeIndex {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}
