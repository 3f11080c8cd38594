//! Memoization by key
//!
//! A small cache shared by the traversal queries of `TreeIndex`. Reads take a
//! shared lock; a miss computes outside any lock and inserts if still absent,
//! so concurrent first access is safe and every caller sees the same value.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-key result cache. Entries are never invalidated.
pub struct Memo<K, V> {
    cache: RwLock<HashMap<K, V>>,
    /// Number of times the wrapped computation actually ran
    computed: AtomicUsize,
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            computed: AtomicUsize::new(0),
        }
    }

    /// Return the cached value for `key`, or run `compute` and cache its result.
    ///
    /// Errors are passed through and not cached.
    pub fn get_or_try_insert_with<E, F>(&self, key: &K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.cache.read().get(key) {
            return Ok(value.clone());
        }

        let value = compute()?;
        self.computed.fetch_add(1, Ordering::Relaxed);

        // Another thread may have filled the slot meanwhile; keep the first.
        let mut cache = self.cache.write();
        Ok(cache.entry(key.clone()).or_insert(value).clone())
    }

    /// Number of computations performed so far
    pub fn computed(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for Memo<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
