//! Registry of parsed documents, keyed by name.
//!
//! A `DocumentCache` is created once by the host and passed to whatever needs
//! it. Loaders insert a document after a successful parse; everything else
//! only reads. Documents are handed out as `Arc<Value>`, so a reader keeps its
//! snapshot even if the entry is later replaced.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::value::Value;

#[derive(Debug, Default)]
pub struct DocumentCache {
    docs: Mutex<HashMap<String, Arc<Value>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Value>>> {
        // Entries are whole values swapped in one step, so a panic elsewhere
        // cannot leave the map half-updated.
        self.docs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `doc` under `key`, returning the document it replaced.
    pub fn insert(&self, key: impl Into<String>, doc: Value) -> Option<Arc<Value>> {
        self.lock().insert(key.into(), Arc::new(doc))
    }

    pub fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn remove(&self, key: &str) -> Option<Arc<Value>> {
        self.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Cached keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}
