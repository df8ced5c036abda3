/// The raw key-value surface the state machine is built on. The host maps
/// this onto its database; the overlays in this crate wrap any
/// implementation to add buffering and operation tracing.
pub trait KvStore {
    /// Returns the stored value, or `None` if the key is absent.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Stores the value under the key, replacing any previous value.
    fn set(&mut self, key: &[u8], value: &[u8]);

    /// Removes the key. Deleting an absent key is a no-op.
    fn delete(&mut self, key: &[u8]);
}
