//! The reconciliation rule shared by every chrono collection.
//!
//! Given the `added` and `removed` delta stores of a collection:
//!
//! - an element newly inserted into the live collection cancels a pending
//!   removal if there is one, and is otherwise recorded as added
//! - an element newly deleted from the live collection cancels a pending
//!   addition if there is one, and is otherwise recorded as removed
//!
//! Bulk changes are folds of the single-element rule. Callers apply the
//! rule exactly once per element that actually changed.
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::chrono::reconcile::{record_added, record_removed};
//! use std::collections::HashSet;
//!
//! let mut added: HashSet<&str> = HashSet::new();
//! let mut removed: HashSet<&str> = HashSet::new();
//!
//! record_removed(&mut added, &mut removed, "x");
//! assert!(removed.contains("x"));
//!
//! // Adding it back nets out to "unchanged since the checkpoint"
//! record_added(&mut added, &mut removed, "x");
//! assert!(added.is_empty() && removed.is_empty());
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Storage for one side of a delta.
///
/// Implemented for `Vec` (list deltas, where the same value may be recorded
/// more than once), `HashSet` (set deltas) and `HashMap` (map deltas, whose
/// elements are key-value pairs).
pub trait DeltaStore<E> {
    /// Returns `true` if `element` is recorded.
    fn holds(&self, element: &E) -> bool;

    /// Drops one record of `element`; returns `true` if there was one.
    fn discard(&mut self, element: &E) -> bool;

    /// Records `element`.
    fn record(&mut self, element: E);

    /// Drops every record.
    fn clear_records(&mut self);

    /// Number of records.
    fn record_count(&self) -> usize;
}

impl<T: PartialEq> DeltaStore<T> for Vec<T> {
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn discard(&mut self, element: &T) -> bool {
        match self.iter().position(|item| item == element) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn record(&mut self, element: T) {
        self.push(element);
    }

    fn clear_records(&mut self) {
        self.clear();
    }

    fn record_count(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash, S: BuildHasher> DeltaStore<T> for HashSet<T, S> {
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn discard(&mut self, element: &T) -> bool {
        self.remove(element)
    }

    fn record(&mut self, element: T) {
        self.insert(element);
    }

    fn clear_records(&mut self) {
        self.clear();
    }

    fn record_count(&self) -> usize {
        self.len()
    }
}

/// A pair is held only if the key maps to an equal value.
impl<K: Eq + Hash, V: PartialEq, S: BuildHasher> DeltaStore<(K, V)> for HashMap<K, V, S> {
    fn holds(&self, (key, value): &(K, V)) -> bool {
        self.get(key) == Some(value)
    }

    fn discard(&mut self, element: &(K, V)) -> bool {
        if self.holds(element) {
            self.remove(&element.0);
            true
        } else {
            false
        }
    }

    fn record(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn clear_records(&mut self) {
        self.clear();
    }

    fn record_count(&self) -> usize {
        self.len()
    }
}

/// Applies the rule for an element newly inserted into the live collection.
pub fn record_added<E, D>(added: &mut D, removed: &mut D, element: E)
where
    D: DeltaStore<E> + ?Sized,
{
    if !removed.discard(&element) {
        added.record(element);
    }
}

/// Applies the rule for an element newly deleted from the live collection.
pub fn record_removed<E, D>(added: &mut D, removed: &mut D, element: E)
where
    D: DeltaStore<E> + ?Sized,
{
    if !added.discard(&element) {
        removed.record(element);
    }
}

/// Folds [`record_added`] over `elements`.
pub fn record_added_all<E, D, I>(added: &mut D, removed: &mut D, elements: I)
where
    D: DeltaStore<E> + ?Sized,
    I: IntoIterator<Item = E>,
{
    for element in elements {
        record_added(added, removed, element);
    }
}

/// Folds [`record_removed`] over `elements`.
pub fn record_removed_all<E, D, I>(added: &mut D, removed: &mut D, elements: I)
where
    D: DeltaStore<E> + ?Sized,
    I: IntoIterator<Item = E>,
{
    for element in elements {
        record_removed(added, removed, element);
    }
}

/// Clears both delta stores, establishing a new checkpoint.
pub fn reset<E, D>(added: &mut D, removed: &mut D)
where
    D: DeltaStore<E> + ?Sized,
{
    added.clear_records();
    removed.clear_records();
}
