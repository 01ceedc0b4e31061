use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

use ahash::HashMap;

/// Identifies a `T` (a track, a section, a tab...). Ids of different kinds can't be mixed up, and
/// two calls to [`Id::arbitrary`] never return the same number, whatever the kind.
pub struct Id<T>(NonZeroU64, PhantomData<fn() -> T>);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl<T> Id<T> {
    /// A fresh id, unique for the lifetime of the process.
    pub fn arbitrary() -> Self {
        let next = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        // starts at 1 and would need 2^64 ids to wrap back to 0
        Self(NonZeroU64::new(next).unwrap_or(NonZeroU64::MIN), PhantomData)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        let kind = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "{kind}#{}", self.0)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

#[cfg(feature = "egui")]
impl<T> From<Id<T>> for egui::Id {
    fn from(value: Id<T>) -> Self {
        egui::Id::new(value.0)
    }
}

/// Owns the values for a set of ids.
#[derive(Clone)]
pub struct IdMap<T, V = T>(HashMap<Id<T>, V>);

impl<T, V> IdMap<T, V> {
    pub fn new() -> Self {
        Self(HashMap::default())
    }

    pub fn get(&self, id: Id<T>) -> Option<&V> {
        self.0.get(&id)
    }
    pub fn get_mut(&mut self, id: Id<T>) -> Option<&mut V> {
        self.0.get_mut(&id)
    }

    /// For ids that are known to be present, e.g. ones read from an index kept in sync with the
    /// map.
    pub fn force_get(&self, id: Id<T>) -> &V {
        self.get(id).unwrap_or_else(|| panic!("{id:?} isn't in the map"))
    }

    /// Panics if `id` already has a value.
    pub fn insert(&mut self, id: Id<T>, value: V) {
        if self.0.insert(id, value).is_some() {
            panic!("{id:?} was inserted twice");
        }
    }
}

impl<T, V> Default for IdMap<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V: fmt::Debug> fmt::Debug for IdMap<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Id, IdMap};

    struct Marker;

    #[test]
    fn test_arbitrary_ids_are_distinct() {
        let a = Id::<Marker>::arbitrary();
        let b = Id::<Marker>::arbitrary();
        assert_ne!(a, b);
        assert!(format!("{a:?}").starts_with("Marker#"));
    }

    #[test]
    fn test_lookups() {
        let mut map = IdMap::<Marker, &str>::new();
        let id = Id::arbitrary();
        map.insert(id, "one");
        *map.get_mut(id).unwrap() = "uno";
        assert_eq!(map.force_get(id), &"uno");
        assert_eq!(map.get(Id::arbitrary()), None);
    }

    #[test]
    #[should_panic]
    fn test_double_insert_panics() {
        let mut map = IdMap::<Marker, u32>::new();
        let id = Id::arbitrary();
        map.insert(id, 1);
        map.insert(id, 2);
    }
}
