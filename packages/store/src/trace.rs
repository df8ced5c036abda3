use std::cell::RefCell;
use std::io::Write;

use serde::{Deserialize, Serialize};

use cosmwasm_std::Binary;

use crate::store::KvStore;

/// One traced store operation, serialized as a single JSON line. Keys and
/// values are base64 so arbitrary bytes survive the encoding.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TraceEntry {
    pub operation: String,
    pub key: Binary,
    pub value: Option<Binary>,
}

/// Pass-through overlay that records every operation, reads included, to a
/// writer before forwarding it to the parent store.
///
/// When combined with a [`CacheStore`], the trace goes underneath the
/// cache: the log then holds exactly the operations committed to the
/// backing store, and buffered writes discarded with the cache never
/// appear in it.
///
/// Tracing is a debugging facility: a failing writer panics rather than
/// silently losing part of the operation log.
///
/// [`CacheStore`]: crate::CacheStore
pub struct TraceStore<'a, W: Write> {
    parent: &'a mut dyn KvStore,
    writer: RefCell<W>,
}

impl<'a, W: Write> TraceStore<'a, W> {
    pub fn new(parent: &'a mut dyn KvStore, writer: W) -> Self {
        TraceStore {
            parent,
            writer: RefCell::new(writer),
        }
    }

    /// Returns the writer, ending the trace.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn record(&self, operation: &str, key: &[u8], value: Option<&[u8]>) {
        let entry = TraceEntry {
            operation: operation.to_owned(),
            key: Binary::from(key),
            value: value.map(Binary::from),
        };
        let mut writer = self.writer.borrow_mut();
        serde_json::to_writer(&mut *writer, &entry).expect("trace writer failed");
        writer.write_all(b"\n").expect("trace writer failed");
    }
}

impl<W: Write> KvStore for TraceStore<'_, W> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        let value = self.parent.get(key);
        self.record("read", key, value.as_deref());
        value
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.record("write", key, Some(value));
        self.parent.set(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.record("delete", key, None);
        self.parent.delete(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cache::CacheStore;
    use crate::memory::MemStore;

    fn entries(log: &[u8]) -> Vec<TraceEntry> {
        log.split(|byte| *byte == b'\n')
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::from_slice(line).unwrap())
            .collect()
    }

    #[test]
    fn records_operations_in_order() {
        let mut parent = MemStore::new();

        let mut traced = TraceStore::new(&mut parent, Vec::new());
        traced.set(b"key", b"value");
        assert_eq!(traced.get(b"key"), Some(b"value".to_vec()));
        traced.delete(b"key");
        assert_eq!(traced.get(b"key"), None);

        let log = traced.into_writer();
        let entries = entries(&log);
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0].operation, "write");
        assert_eq!(entries[0].key, Binary::from(b"key".as_slice()));
        assert_eq!(entries[0].value, Some(Binary::from(b"value".as_slice())));

        assert_eq!(entries[1].operation, "read");
        assert_eq!(entries[1].value, Some(Binary::from(b"value".as_slice())));

        assert_eq!(entries[2].operation, "delete");
        assert_eq!(entries[2].value, None);

        assert_eq!(entries[3].operation, "read");
        assert_eq!(entries[3].value, None);
    }

    #[test]
    fn forwards_to_the_parent_store() {
        let mut parent = MemStore::new();

        let mut traced = TraceStore::new(&mut parent, Vec::new());
        traced.set(b"key", b"value");
        drop(traced);

        assert_eq!(parent.get(b"key"), Some(b"value".to_vec()));
    }

    #[test]
    fn cache_wrap_with_trace_logs_only_committed_operations() {
        let mut parent = MemStore::new();
        parent.set(b"key", b"base");

        let mut traced = TraceStore::new(&mut parent, Vec::new());

        {
            let mut cache = CacheStore::new(&mut traced);
            assert_eq!(cache.get(b"key"), Some(b"base".to_vec()));
            cache.set(b"key", b"discarded");
            // dropped without write(), so the buffered value is rolled back
        }

        let mut cache = CacheStore::new(&mut traced);
        cache.set(b"key", b"committed");
        cache.write();

        let log = traced.into_writer();
        let entries = entries(&log);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].operation, "read");
        assert_eq!(entries[0].value, Some(Binary::from(b"base".as_slice())));

        // the discarded write never reached the trace
        assert_eq!(entries[1].operation, "write");
        assert_eq!(entries[1].value, Some(Binary::from(b"committed".as_slice())));

        assert_eq!(parent.get(b"key"), Some(b"committed".to_vec()));
    }
}
