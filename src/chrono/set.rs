//! `HashSet` backed chrono set.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::debug;

use super::ChronoCollection;
use super::reconcile::{self, record_added, record_removed, record_removed_all};
use crate::sequence::Lookup;

/// A hash set that records the elements added and removed since its
/// checkpoint.
///
/// Only calls that actually change the live set are reconciled: inserting
/// a present element or removing an absent one leaves the deltas alone.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::chrono::{ChronoCollection, ChronoSet};
///
/// let mut set: ChronoSet<i32> = [1, 2].into_iter().collect();
/// set.insert(3);
/// set.insert(3);
/// set.remove(&1);
///
/// assert_eq!(set.added().len(), 1);
/// assert!(set.removed().contains(&1));
/// ```
#[derive(Clone)]
pub struct ChronoSet<T, S = RandomState> {
    live: HashSet<T, S>,
    added: HashSet<T, S>,
    removed: HashSet<T, S>,
}

impl<T> ChronoSet<T, RandomState> {
    /// Creates an empty set. The checkpoint is the empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<T, S: Clone> ChronoSet<T, S> {
    /// Creates an empty set whose live and delta stores use `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            live: HashSet::with_hasher(hasher.clone()),
            added: HashSet::with_hasher(hasher.clone()),
            removed: HashSet::with_hasher(hasher),
        }
    }

    /// Creates a set holding `elements`, which become the checkpoint.
    #[must_use]
    pub fn from_checkpoint(elements: HashSet<T, S>) -> Self {
        let hasher = elements.hasher().clone();
        Self {
            live: elements,
            added: HashSet::with_hasher(hasher.clone()),
            removed: HashSet::with_hasher(hasher),
        }
    }
}

impl<T, S> ChronoSet<T, S> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns an iterator over the live elements, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.live.iter()
    }

    /// Consumes the set and returns the live elements.
    #[must_use]
    pub fn into_inner(self) -> HashSet<T, S> {
        self.live
    }
}

impl<T, S> ChronoSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if `value` is in the set.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live.contains(value)
    }

    /// Inserts `element`; returns `true` if it was absent.
    pub fn insert(&mut self, element: T) -> bool {
        if self.live.contains(&element) {
            return false;
        }
        self.live.insert(element.clone());
        record_added(&mut self.added, &mut self.removed, element);
        true
    }

    /// Removes `value`; returns `true` if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.live.take(value) {
            Some(element) => {
                record_removed(&mut self.added, &mut self.removed, element);
                true
            }
            None => false,
        }
    }

    /// Inserts every element of `elements`; returns `true` if any was new.
    pub fn insert_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(false, |modified, element| self.insert(element) || modified)
    }

    /// Removes every member of `other`; returns `true` if any was present.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Lookup<T> + ?Sized,
    {
        if other.lookup_len() < self.live.len() {
            other
                .members()
                .fold(false, |modified, element| self.remove(element) || modified)
        } else {
            let before = self.live.len();
            self.retain(|element| !other.holds(element));
            before != self.live.len()
        }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self.live.extract_if(|element| !predicate(element)) {
            record_removed(&mut self.added, &mut self.removed, element);
        }
    }

    /// Removes every element, recording each as removed.
    pub fn clear(&mut self) {
        if self.live.is_empty() {
            return;
        }
        record_removed_all(&mut self.added, &mut self.removed, self.live.drain());
        debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            "cleared chrono set"
        );
    }
}

impl<T, S> ChronoCollection for ChronoSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Live = HashSet<T, S>;
    type Delta = HashSet<T, S>;

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
            "reset chrono set checkpoint"
        );
        reconcile::reset::<T, _>(&mut self.added, &mut self.removed);
    }

    fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

impl<T, S: Default> Default for ChronoSet<T, S> {
    fn default() -> Self {
        Self {
            live: HashSet::default(),
            added: HashSet::default(),
            removed: HashSet::default(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ChronoSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChronoSet")
            .field("live", &self.live)
            .field("added", &self.added)
            .field("removed", &self.removed)
            .finish()
    }
}

/// Collecting establishes a checkpoint: the collected elements are not
/// recorded as added.
impl<T, S> FromIterator<T> for ChronoSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
            added: HashSet::default(),
            removed: HashSet::default(),
        }
    }
}

impl<T, S> Extend<T> for ChronoSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, S> IntoIterator for &'a ChronoSet<T, S> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_redundant_calls_leave_deltas_alone() {
        let mut set: ChronoSet<i32> = [1].into_iter().collect();
        assert!(!set.insert(1));
        assert!(!set.remove(&2));
        assert!(!set.has_changes());
    }

    #[rstest]
    fn test_clear_reconciles_every_element() {
        let mut set: ChronoSet<i32> = [1, 2].into_iter().collect();
        set.insert(3);
        set.clear();
        assert!(set.added().is_empty());
        assert_eq!(set.removed(), &[1, 2].into_iter().collect::<HashSet<_>>());
    }

    #[rstest]
    #[case(vec![2])]
    #[case(vec![2, 5, 6, 7, 8])]
    fn test_remove_all_either_strategy(#[case] other: Vec<i32>) {
        let mut set: ChronoSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(set.remove_all(&other));
        assert!(!set.contains(&2));
        assert_eq!(set.removed().len(), 1);
    }
}
