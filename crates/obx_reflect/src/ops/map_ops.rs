use crate::Reflect;

// -----------------------------------------------------------------------------
// Map trait

/// A trait for type-erased operations on key-value maps.
///
/// Implemented for `HashMap<K, V>` and `BTreeMap<K, V>` by
/// [`crate::impls`]. Keys are matched by downcasting, so a lookup with a key
/// of the wrong type simply misses.
pub trait Map: Reflect {
    /// Returns a reference to the value stored under `key`, if any.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    ///
    /// Iteration order follows the underlying map.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
