use alloc::vec::Vec;

/// Contract shared by every tree-backed map in this crate.
///
/// All implementations store unique, totally ordered keys and treat a
/// duplicate insert as an overwrite of the stored value. Lookups and
/// removals of absent keys are ordinary outcomes, not errors.
pub trait OrderedMap<K: Ord, V> {
    /// Inserts `value` under `key`, overwriting any previous value.
    fn insert(&mut self, key: K, value: V);

    /// Returns the value stored under `key`, if any.
    fn search(&self, key: &K) -> Option<&V>;

    /// Removes the entry for `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &K);

    /// Returns a snapshot of all entries in ascending key order.
    fn iteration(&self) -> Vec<(&K, &V)>;
}
