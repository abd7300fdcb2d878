//! Two-way unique mapping with single-owner semantics.

use std::collections::HashMap;
use std::hash::Hash;

/// Bidirectional map in which every key and every value belongs to at most
/// one pair.
///
/// Both directions are kept mutually consistent: for any stored pair
/// `(k, v)`, looking up `k` yields `v` and looking up `v` yields `k`.
/// Inserting a pair that collides with an existing key or value first evicts
/// the stale pairing on both sides, so [`BidiMap::insert`] never fails.
#[derive(Clone, Debug, Default)]
pub struct BidiMap<K, V> {
    forward: HashMap<K, V>,
    backward: HashMap<V, K>,
}

impl<K, V> BidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }

    /// Establishes the pair `(key, value)`, evicting any pair that currently
    /// claims either side.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(old_value) = self.forward.remove(&key) {
            let _ = self.backward.remove(&old_value);
        }
        if let Some(old_key) = self.backward.remove(&value) {
            let _ = self.forward.remove(&old_key);
        }
        let _ = self.forward.insert(key.clone(), value.clone());
        let _ = self.backward.insert(value, key);
    }

    /// Removes the pair keyed by `key`, returning its value; a no-op when the
    /// key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        let _ = self.backward.remove(&value);
        Some(value)
    }

    /// Looks up the value paired with `key`.
    #[must_use]
    pub fn get_by_key(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    /// Looks up the key paired with `value`.
    #[must_use]
    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.backward.get(value)
    }

    /// Reports whether any pair claims `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    /// Reports whether any pair claims `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.backward.contains_key(value)
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Reports whether the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::BidiMap;

    #[test]
    fn lookups_work_in_both_directions() {
        let mut map = BidiMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        assert_eq!(map.get_by_key(&"a"), Some(&1));
        assert_eq!(map.get_by_value(&2), Some(&"b"));
        assert!(map.contains_key(&"b"));
        assert!(map.contains_value(&1));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn inserting_existing_key_evicts_old_value() {
        let mut map = BidiMap::new();
        map.insert("a", 1);
        map.insert("a", 2);

        assert_eq!(map.get_by_key(&"a"), Some(&2));
        assert!(!map.contains_value(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn inserting_existing_value_evicts_old_key() {
        let mut map = BidiMap::new();
        map.insert("a", 1);
        map.insert("b", 1);

        assert_eq!(map.get_by_value(&1), Some(&"b"));
        assert!(!map.contains_key(&"a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_clears_both_directions() {
        let mut map = BidiMap::new();
        map.insert("a", 1);

        assert_eq!(map.remove(&"a"), Some(1));
        assert!(!map.contains_key(&"a"));
        assert!(!map.contains_value(&1));
        assert!(map.is_empty());
        assert_eq!(map.remove(&"a"), None);
    }

    #[test]
    fn directions_stay_consistent_under_churn() {
        let mut map = BidiMap::new();
        map.insert(1, 'x');
        map.insert(2, 'y');
        map.insert(1, 'y');
        let _ = map.remove(&2);
        map.insert(3, 'x');

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_by_key(&1), Some(&'y'));
        assert_eq!(map.get_by_key(&3), Some(&'x'));
        assert_eq!(map.get_by_value(&'y'), Some(&1));
        assert_eq!(map.get_by_value(&'x'), Some(&3));
    }
}
