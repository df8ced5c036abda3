mod cache;
mod memory;
mod store;
mod trace;

pub use cache::CacheStore;
pub use memory::MemStore;
pub use store::KvStore;
pub use trace::{TraceEntry, TraceStore};
