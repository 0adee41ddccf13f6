use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

// -----------------------------------------------------------------------------
// TypeIdMap

/// Per-type storage: one `V` for each [`TypeId`].
///
/// `TypeId`s are already well distributed, so keys are not re-hashed.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use bt_utils::TypeIdMap;
///
/// let mut wire_names = TypeIdMap::new();
/// wire_names.get_or_insert(TypeId::of::<u8>(), || "byte");
///
/// assert_eq!(wire_names.get(&TypeId::of::<u8>()), Some(&"byte"));
/// assert_eq!(wire_names.get(&TypeId::of::<u16>()), None);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// The value stored for `type_id`, created by `init` when absent.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, init: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(init)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of types with a stored value.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored values, in no particular order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn init_runs_once_per_type() {
        let mut map = TypeIdMap::<u32>::new();
        *map.get_or_insert(TypeId::of::<u16>(), || 1) += 1;
        *map.get_or_insert(TypeId::of::<u16>(), || 100) += 1;
        map.get_or_insert(TypeId::of::<i16>(), || 7);

        assert_eq!(map.get(&TypeId::of::<u16>()), Some(&3));
        assert_eq!(map.len(), 2);
        assert_eq!(map.values().sum::<u32>(), 10);

        map.clear();
        assert!(map.is_empty());
    }
}
