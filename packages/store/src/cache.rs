use std::collections::BTreeMap;

use crate::store::KvStore;

/// Buffered overlay over another store.
///
/// Writes and deletes accumulate in memory and become visible to readers of
/// this overlay immediately, while the parent store stays untouched until
/// [`write`] commits the buffer. Dropping the overlay without calling
/// [`write`] discards every buffered change, which is how a failed state
/// transition is rolled back.
///
/// [`write`]: CacheStore::write
pub struct CacheStore<'a> {
    parent: &'a mut dyn KvStore,
    /// `Some` buffers a pending write, `None` a pending delete.
    buffer: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> CacheStore<'a> {
    pub fn new(parent: &'a mut dyn KvStore) -> Self {
        CacheStore {
            parent,
            buffer: BTreeMap::new(),
        }
    }

    /// Commits the buffered operations to the parent store, in key order,
    /// and consumes the overlay.
    pub fn write(self) {
        for (key, entry) in self.buffer {
            match entry {
                Some(value) => self.parent.set(&key, &value),
                None => self.parent.delete(&key),
            }
        }
    }
}

impl KvStore for CacheStore<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.buffer.get(key) {
            Some(entry) => entry.clone(),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.buffer.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn delete(&mut self, key: &[u8]) {
        self.buffer.insert(key.to_vec(), None);
    }
}
