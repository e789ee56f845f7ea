//! `HashMap` backed chrono map and its mutable views.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::{debug, trace};

use super::ChronoCollection;
use super::reconcile::{self, record_added, record_removed, record_removed_all};

/// A hash map that records the key-value pairs added and removed since its
/// checkpoint.
///
/// The unit of change is the pair. Replacing the value of a key is
/// recorded as the old pair removed and the new pair added, so a key can
/// appear in both delta maps at once.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::chrono::{ChronoCollection, ChronoMap};
///
/// let mut map: ChronoMap<&str, i32> = [("a", 1)].into_iter().collect();
/// map.insert("a", 2);
///
/// assert_eq!(map.removed().get("a"), Some(&1));
/// assert_eq!(map.added().get("a"), Some(&2));
///
/// // Restoring the checkpoint value cancels both records
/// map.insert("a", 1);
/// assert!(!map.has_changes());
/// ```
#[derive(Clone)]
pub struct ChronoMap<K, V, S = RandomState> {
    live: HashMap<K, V, S>,
    added: HashMap<K, V, S>,
    removed: HashMap<K, V, S>,
}

impl<K, V> ChronoMap<K, V, RandomState> {
    /// Creates an empty map. The checkpoint is the empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V, S: Clone> ChronoMap<K, V, S> {
    /// Creates an empty map whose live and delta stores use `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            live: HashMap::with_hasher(hasher.clone()),
            added: HashMap::with_hasher(hasher.clone()),
            removed: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a map holding `entries`, which become the checkpoint.
    #[must_use]
    pub fn from_checkpoint(entries: HashMap<K, V, S>) -> Self {
        let hasher = entries.hasher().clone();
        Self {
            live: entries,
            added: HashMap::with_hasher(hasher.clone()),
            removed: HashMap::with_hasher(hasher),
        }
    }
}

impl<K, V, S> ChronoMap<K, V, S> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns an iterator over the live entries, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.live.iter()
    }

    /// Returns an iterator over the live keys.
    #[inline]
    pub fn keys(&self) -> std::collections::hash_map::Keys<'_, K, V> {
        self.live.keys()
    }

    /// Returns an iterator over the live values.
    #[inline]
    pub fn values(&self) -> std::collections::hash_map::Values<'_, K, V> {
        self.live.values()
    }

    /// Consumes the map and returns the live entries.
    #[must_use]
    pub fn into_inner(self) -> HashMap<K, V, S> {
        self.live
    }
}

impl<K, V, S> ChronoMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live.contains_key(key)
    }

    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// Storing a value equal to the current one is not a change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.live.insert(key.clone(), value.clone()) {
            Some(previous) if previous == value => Some(previous),
            Some(previous) => {
                record_removed(
                    &mut self.added,
                    &mut self.removed,
                    (key.clone(), previous.clone()),
                );
                record_added(&mut self.added, &mut self.removed, (key, value));
                Some(previous)
            }
            None => {
                record_added(&mut self.added, &mut self.removed, (key, value));
                None
            }
        }
    }

    /// Inserts every entry of `entries`.
    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.live.remove_entry(key)?;
        record_removed(&mut self.added, &mut self.removed, entry.clone());
        Some(entry)
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for entry in self.live.extract_if(|key, value| !predicate(key, &*value)) {
            record_removed(&mut self.added, &mut self.removed, entry);
        }
    }

    /// Removes every entry, recording each as removed.
    pub fn clear(&mut self) {
        if self.live.is_empty() {
            return;
        }
        record_removed_all(&mut self.added, &mut self.removed, self.live.drain());
        debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            "cleared chrono map"
        );
    }

    /// Returns a mutable view of the keys.
    pub fn keys_mut(&mut self) -> KeySetMut<'_, K, V, S> {
        KeySetMut { map: self }
    }

    /// Returns a mutable view of the entries.
    pub fn entries_mut(&mut self) -> EntrySetMut<'_, K, V, S> {
        EntrySetMut { map: self }
    }

    /// Returns a mutable view of the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, S> {
        ValuesMut { map: self }
    }
}

impl<K, V, S> ChronoCollection for ChronoMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    type Live = HashMap<K, V, S>;
    type Delta = HashMap<K, V, S>;

    fn live(&self) -> &Self::Live {
        &self.live
    }

    fn added(&self) -> &Self::Delta {
        &self.added
    }

    fn removed(&self) -> &Self::Delta {
        &self.removed
    }

    fn reset(&mut self) {
        debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            "reset chrono map checkpoint"
        );
        reconcile::reset::<(K, V), _>(&mut self.added, &mut self.removed);
    }

    fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

impl<K, V, S: Default> Default for ChronoMap<K, V, S> {
    fn default() -> Self {
        Self {
            live: HashMap::default(),
            added: HashMap::default(),
            removed: HashMap::default(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChronoMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChronoMap")
            .field("live", &self.live)
            .field("added", &self.added)
            .field("removed", &self.removed)
            .finish()
    }
}

/// Collecting establishes a checkpoint: the collected entries are not
/// recorded as added.
impl<K, V, S> FromIterator<(K, V)> for ChronoMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
            added: HashMap::default(),
            removed: HashMap::default(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for ChronoMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChronoMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

// =============================================================================
// Views
// =============================================================================

/// Mutable view of the keys of a [`ChronoMap`].
///
/// Removing a key removes its entry and is reconciled like
/// [`ChronoMap::remove`].
pub struct KeySetMut<'a, K, V, S = RandomState> {
    map: &'a mut ChronoMap<K, V, S>,
}

impl<K, V, S> KeySetMut<'_, K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there is no key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> std::collections::hash_map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Removes the entry under `key`; returns `true` if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove_entry(key).is_some()
    }

    /// Keeps only the entries whose key satisfies `predicate`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.retain(|key, _| predicate(key));
    }
}

/// Mutable view of the entries of a [`ChronoMap`].
pub struct EntrySetMut<'a, K, V, S = RandomState> {
    map: &'a mut ChronoMap<K, V, S>,
}

impl<K, V, S> EntrySetMut<'_, K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there is no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if `key` maps to a value equal to `value`.
    #[must_use]
    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.map.get(key) == Some(value)
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Removes the entry `(key, value)`.
    ///
    /// Nothing happens, and `false` is returned, unless `key` currently maps
    /// to a value equal to `value`.
    pub fn remove(&mut self, key: &K, value: &V) -> bool {
        if !self.contains(key, value) {
            return false;
        }
        self.map.remove_entry(key).is_some()
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.map.retain(predicate);
    }
}

/// Mutable view of the values of a [`ChronoMap`].
pub struct ValuesMut<'a, K, V, S = RandomState> {
    map: &'a mut ChronoMap<K, V, S>,
}

impl<K, V, S> ValuesMut<'_, K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there is no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if some key maps to `value`.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.map.values().any(|stored| stored == value)
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> std::collections::hash_map::Values<'_, K, V> {
        self.map.values()
    }

    /// Removes one entry whose value equals `value`; returns `true` if one
    /// was found. Which entry is removed is unspecified when several match.
    pub fn remove(&mut self, value: &V) -> bool {
        let Some(key) = self
            .map
            .iter()
            .find(|(_, stored)| *stored == value)
            .map(|(key, _)| key.clone())
        else {
            return false;
        };
        trace!("removing chrono map entry through its values view");
        self.map.remove_entry(&key).is_some()
    }

    /// Keeps only the entries whose value satisfies `predicate`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&V) -> bool,
    {
        self.map.retain(|_, value| predicate(value));
    }
}
