//! `Vec` backed chrono list.

use std::fmt;

use tracing::debug;

use super::ChronoCollection;
use super::reconcile::{self, record_added, record_added_all, record_removed, record_removed_all};
use crate::error::CollectionError;
use crate::sequence::Lookup;
use crate::splice::check_range;

/// A list that records the elements added and removed since its checkpoint.
///
/// Duplicates are allowed, and the delta stores are lists as well: adding
/// the same value twice after a checkpoint records it twice.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::chrono::{ChronoCollection, ChronoList};
///
/// let mut list = ChronoList::from_checkpoint(vec![1, 2]);
/// list.push(3);
/// list.remove(&1);
/// assert_eq!(list.as_slice(), &[2, 3]);
/// assert_eq!(list.added(), &vec![3]);
/// assert_eq!(list.removed(), &vec![1]);
///
/// // Removing what was added since the checkpoint nets out
/// list.remove(&3);
/// assert!(list.added().is_empty());
/// ```
#[derive(Clone)]
pub struct ChronoList<T> {
    live: Vec<T>,
    added: Vec<T>,
    removed: Vec<T>,
}

impl<T> ChronoList<T> {
    /// Creates an empty list. The checkpoint is the empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            added: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Creates a list holding `elements`, which become the checkpoint.
    #[must_use]
    pub const fn from_checkpoint(elements: Vec<T>) -> Self {
        Self {
            live: elements,
            added: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live.get(index)
    }

    /// Returns the live elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.live
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.live.iter()
    }

    /// Consumes the list and returns the live elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.live
    }
}

impl<T: Clone + PartialEq> ChronoList<T> {
    /// Returns `true` if `element` is in the list.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.live.contains(element)
    }

    /// Returns the position of the first occurrence of `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.live.iter().position(|item| item == element)
    }

    /// Appends `element`.
    pub fn push(&mut self, element: T) {
        self.live.push(element.clone());
        record_added(&mut self.added, &mut self.removed, element);
    }

    /// Appends `element`; always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.push(element);
        true
    }

    /// Inserts `element` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        if index > self.live.len() {
            return Err(CollectionError::out_of_bounds(index, self.live.len()));
        }
        self.live.insert(index, element.clone());
        record_added(&mut self.added, &mut self.removed, element);
        Ok(())
    }

    /// Appends every element of `elements`; returns `true` if any was given.
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.live.len();
        self.live.extend(elements);
        record_added_all(
            &mut self.added,
            &mut self.removed,
            self.live[start..].iter().cloned(),
        );
        self.live.len() != start
    }

    /// Inserts every element of `elements` at `index`, in iteration order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    pub fn insert_all<I>(&mut self, index: usize, elements: I) -> Result<bool, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.live.len() {
            return Err(CollectionError::out_of_bounds(index, self.live.len()));
        }
        let inserted: Vec<T> = elements.into_iter().collect();
        self.live.splice(index..index, inserted.iter().cloned());
        let modified = !inserted.is_empty();
        record_added_all(&mut self.added, &mut self.removed, inserted);
        Ok(modified)
    }

    /// Replaces the element at `index` and returns the replaced one.
    ///
    /// Recorded as the new element added and the old one removed.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        let len = self.live.len();
        let slot = self
            .live
            .get_mut(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, len))?;
        let previous = std::mem::replace(slot, element.clone());
        record_added(&mut self.added, &mut self.removed, element);
        record_removed(&mut self.added, &mut self.removed, previous.clone());
        Ok(previous)
    }

    /// Removes the first occurrence of `element`; returns `true` if found.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => {
                let removed = self.live.remove(index);
                record_removed(&mut self.added, &mut self.removed, removed);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.live.len() {
            return Err(CollectionError::out_of_bounds(index, self.live.len()));
        }
        let element = self.live.remove(index);
        record_removed(&mut self.added, &mut self.removed, element.clone());
        Ok(element)
    }

    /// Removes the half-open range `[begin, end)` and returns its elements.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfBounds`] if `begin` or `end` exceeds `len()`
    /// - [`CollectionError::InvalidRange`] if `end < begin`
    pub fn remove_range(&mut self, begin: usize, end: usize) -> Result<Vec<T>, CollectionError> {
        check_range(begin, end, self.live.len())?;
        let drained: Vec<T> = self.live.drain(begin..end).collect();
        record_removed_all(&mut self.added, &mut self.removed, drained.iter().cloned());
        Ok(drained)
    }

    /// Removes every occurrence of every member of `other`; returns `true`
    /// if the list changed.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Lookup<T> + ?Sized,
    {
        let before = self.live.len();
        self.retain(|element| !other.holds(element));
        before != self.live.len()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self.live.extract_if(.., |element| !predicate(element)) {
            record_removed(&mut self.added, &mut self.removed, element);
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if self.live.is_empty() {
            return;
        }
        record_removed_all(&mut self.added, &mut self.removed, self.live.drain(..));
        debug!(
            added = self.added.len(),
            removed = self.removed.len(),
            "cleared chrono list"
        );
    }
}

impl<T: Clone + PartialEq> ChronoCollection for ChronoList<T> {
    type Live = Vec<T>;
    type Delta = Vec<T>;

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
            "reset chrono list checkpoint"
        );
        reconcile::reset::<T, _>(&mut self.added, &mut self.removed);
    }

    fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

impl<T> Default for ChronoList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChronoList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChronoList")
            .field("live", &self.live)
            .field("added", &self.added)
            .field("removed", &self.removed)
            .finish()
    }
}

/// Collecting establishes a checkpoint: the collected elements are not
/// recorded as added.
impl<T> FromIterator<T> for ChronoList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_checkpoint(iter.into_iter().collect())
    }
}

impl<T: Clone + PartialEq> Extend<T> for ChronoList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a ChronoList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_set_same_value_nets_out() {
        let mut list = ChronoList::from_checkpoint(vec!['a', 'b']);
        assert_eq!(list.set(0, 'a'), Ok('a'));
        assert!(!list.has_changes());
    }

    #[rstest]
    fn test_remove_range_reconciles_each_element() {
        let mut list = ChronoList::from_checkpoint(vec![1, 2, 3]);
        list.push(4);
        assert_eq!(list.remove_range(2, 4), Ok(vec![3, 4]));
        assert!(list.added().is_empty());
        assert_eq!(list.removed(), &vec![3]);
        assert_eq!(
            list.remove_range(2, 1),
            Err(CollectionError::InvalidRange { begin: 2, end: 1 })
        );
    }

    #[rstest]
    fn test_duplicates_are_counted_per_occurrence() {
        let mut list = ChronoList::from_checkpoint(vec![7]);
        list.push(7);
        list.push(7);
        assert_eq!(list.added(), &vec![7, 7]);
        list.clear();
        assert!(list.added().is_empty());
        assert_eq!(list.removed(), &vec![7]);
    }
}
