/// String-keyed associative container.
///
/// Misses and duplicate inserts are ordinary outcomes reported through the
/// return value, never errors.
pub trait HashTable<V> {
    /// Inserts a key-value pair.
    ///
    /// # Returns
    ///
    /// `true` if the pair was stored, `false` if the key was already present.
    /// An existing value is never overwritten.
    fn insert(&mut self, key: String, value: V) -> bool;

    /// Deletes the entry for `key`.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the key was absent.
    fn remove(&mut self, key: &str) -> bool;

    /// Point lookup.
    fn view(&self, key: &str) -> Option<&V>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
