//! Mutable ordered sequence with set semantics.
//!
//! This module provides [`OrderedUniqueSequence`], a container that is at
//! the same time an indexable list and a membership set.
//!
//! # Overview
//!
//! Two representations are kept in lock step:
//! - a hash set (`members`) answering membership in O(1) on average
//! - a flat `Vec` (`elements`) holding the live elements in positional order
//!
//! Every mutating entry point updates both before it returns, so the two
//! always hold exactly the same elements, without duplicates and without
//! gaps in the positional part.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity          |
//! |------------------|---------------------|
//! | `add`            | O(1) amortized      |
//! | `insert`         | O(n)                |
//! | `contains`       | O(1) average        |
//! | `get`            | O(1)                |
//! | `index_of`       | O(n)                |
//! | `remove`         | O(n)                |
//! | `remove_at`      | O(n)                |
//! | `set`            | O(n)                |
//! | `remove_all`     | O(min(n, m) * n)    |
//!
//! Positions are not indexed: `index_of` is a linear scan over the live
//! prefix, which is the price of keeping both O(1) membership and O(1)
//! positional access.
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::sequence::OrderedUniqueSequence;
//!
//! let mut sequence = OrderedUniqueSequence::new();
//! assert!(sequence.add("a"));
//! assert!(sequence.add("b"));
//! assert!(sequence.add("c"));
//!
//! // Re-adding is a no-op: position and length are unchanged
//! assert!(!sequence.add("a"));
//! assert_eq!(sequence.as_slice(), &["a", "b", "c"]);
//!
//! assert!(sequence.remove("b"));
//! assert_eq!(sequence.index_of("c"), Some(1));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use tracing::trace;

use super::MembershipHasher;
use super::cursor::SequenceCursor;
use super::lookup::Lookup;
use crate::error::CollectionError;

/// Capacity used when none is given, and the floor compaction never goes below.
pub const DEFAULT_CAPACITY: usize = 10;

/// Ratio used to grow the capacity when the sequence is full.
pub const DEFAULT_GROWTH_FACTOR: f32 = 0.75;

// =============================================================================
// SequenceConfig
// =============================================================================

/// Construction parameters for an [`OrderedUniqueSequence`].
///
/// # Examples
///
/// ```rust
/// use ledger_collections::sequence::{OrderedUniqueSequence, SequenceConfig};
///
/// let sequence: OrderedUniqueSequence<u32> = SequenceConfig::new()
///     .initial_capacity(64)
///     .growth_factor(1.5)
///     .build()
///     .unwrap();
/// assert!(sequence.capacity() >= 64);
///
/// let rejected = SequenceConfig::new().growth_factor(0.0).build::<u32>();
/// assert!(rejected.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceConfig {
    initial_capacity: usize,
    growth_factor: f32,
}

impl SequenceConfig {
    /// Creates a configuration holding the defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Sets the number of slots allocated up front.
    #[must_use]
    pub const fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the ratio used to grow the backing storage when it is full.
    #[must_use]
    pub const fn growth_factor(mut self, growth_factor: f32) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Checks that the configuration can be built.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidConfiguration`] if the growth factor is not
    /// a finite, strictly positive number.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 0.0 {
            return Err(CollectionError::InvalidConfiguration {
                reason: "growth factor must be a finite number greater than zero",
            });
        }
        Ok(())
    }

    /// Builds an empty sequence with this configuration.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`SequenceConfig::validate`].
    pub fn build<T: Clone + Eq + Hash>(self) -> Result<OrderedUniqueSequence<T>, CollectionError> {
        self.validate()?;
        Ok(OrderedUniqueSequence {
            members: HashSet::with_capacity_and_hasher(
                self.initial_capacity,
                MembershipHasher::default(),
            ),
            elements: Vec::with_capacity(self.initial_capacity),
            growth_factor: self.growth_factor,
        })
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// OrderedUniqueSequence
// =============================================================================

/// An ordered, indexable sequence whose elements are unique.
///
/// Adding an element that is already present does nothing: the index at
/// which it was first inserted does not change. Equality is order
/// sensitive, like a list.
///
/// Live mutable sub-range views are not offered, see
/// [`OrderedUniqueSequence::sub_sequence_mut`].
///
/// # Type Parameters
///
/// * `T` - The element type. Mutation requires `Clone + Eq + Hash`; one
///   clone of every element lives in the membership index.
#[derive(Clone)]
pub struct OrderedUniqueSequence<T> {
    members: HashSet<T, MembershipHasher>,
    elements: Vec<T>,
    growth_factor: f32,
}

impl<T> OrderedUniqueSequence<T> {
    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of slots currently allocated for elements.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the ratio used to grow the backing storage.
    #[inline]
    #[must_use]
    pub const fn growth_factor(&self) -> f32 {
        self.growth_factor
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let sequence = OrderedUniqueSequence::from(["x", "y"]);
    /// assert_eq!(sequence.get(1), Ok(&"y"));
    /// assert!(sequence.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.elements
            .get(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.len()))
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the live elements in positional order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in positional order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the sequence and returns its elements in positional order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Live mutable views over a sub-range are not supported.
    ///
    /// Writing through a `&mut [T]` would bypass the membership index, and
    /// a live view would have to track structural changes made to both
    /// representations. Use [`OrderedUniqueSequence::as_slice`] for a
    /// read-only range instead.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::Unsupported`].
    pub fn sub_sequence_mut(
        &mut self,
        _begin: usize,
        _end: usize,
    ) -> Result<&mut [T], CollectionError> {
        Err(CollectionError::unsupported("sub_sequence_mut"))
    }
}

impl<T: Clone + Eq + Hash> OrderedUniqueSequence<T> {
    /// Creates an empty sequence with the default capacity and growth factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let sequence: OrderedUniqueSequence<i32> = OrderedUniqueSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence able to hold `capacity` elements without
    /// growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity_and_hasher(capacity, MembershipHasher::default()),
            elements: Vec::with_capacity(capacity),
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Returns `true` if the sequence contains `element`.
    ///
    /// # Complexity
    ///
    /// O(1) on average.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(element)
    }

    /// Returns `true` if every member of `other` is contained in the sequence.
    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Lookup<T> + ?Sized,
    {
        other.members().all(|element| self.members.contains(element))
    }

    /// Returns the position of `element`, or `None` if it is absent.
    ///
    /// Absent elements are rejected through the membership index before
    /// any scan takes place.
    ///
    /// # Complexity
    ///
    /// O(n) for present elements.
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.members.contains(element) {
            return None;
        }
        self.elements
            .iter()
            .position(|item| item.borrow() == element)
    }

    /// Same as [`OrderedUniqueSequence::index_of`]: an element occurs at
    /// most once.
    #[inline]
    pub fn last_index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(element)
    }

    /// Appends `element` unless it is already present.
    ///
    /// Returns `true` if the sequence changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::new();
    /// assert!(sequence.add(1));
    /// assert!(!sequence.add(1));
    /// assert_eq!(sequence.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        if self.members.contains(&element) {
            return false;
        }
        self.ensure_capacity(self.len() + 1);
        self.insert_slot(self.len(), element)
    }

    /// Inserts `element` at `index`, shifting later elements to the right.
    ///
    /// `index == len()` appends. If `element` is already present it is
    /// left where it is: the call is a no-op returning `Ok(false)`, not a
    /// move.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from([1, 3]);
    /// assert_eq!(sequence.insert(1, 2), Ok(true));
    /// assert_eq!(sequence.insert(0, 3), Ok(false));
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<bool, CollectionError> {
        if index > self.len() {
            return Err(CollectionError::out_of_bounds(index, self.len()));
        }
        Ok(self.insert_unchecked(index, element))
    }

    /// Replaces the element at `index` with `element` and returns the
    /// element previously there.
    ///
    /// If `element` already occurs at another position, that occurrence is
    /// removed first and its slot compacted. The sequence then shrinks by
    /// one, and `element` ends up where the replaced element used to be.
    /// When that occurrence precedes `index`, the replaced and returned
    /// element is the one that was at `index` before the compaction, not
    /// the one shifted into that slot.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from(['A', 'C', 'D']);
    /// assert_eq!(sequence.set(0, 'D'), Ok('A'));
    /// assert_eq!(sequence.as_slice(), &['D', 'C']);
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        self.replace_at(index, element)
            .map(|(previous, _)| previous)
    }

    /// Removes `element` if present and returns `true` if it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from(["A", "B", "C"]);
    /// assert!(sequence.remove("B"));
    /// assert!(!sequence.remove("B"));
    /// assert_eq!(sequence.as_slice(), &["A", "C"]);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.remove_element(element) {
            self.compact();
            true
        } else {
            false
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len() {
            return Err(CollectionError::out_of_bounds(index, self.len()));
        }
        let element = self.remove_slot(index);
        self.compact();
        Ok(element)
    }

    /// Appends every element of `elements` in iteration order, skipping
    /// those already present.
    ///
    /// Returns `true` if at least one element was added.
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all_unchecked(self.len(), elements)
    }

    /// Inserts every element of `elements` starting at `index`, preserving
    /// their iteration order. Duplicates are skipped one by one and do not
    /// consume an insertion slot.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from([1, 5]);
    /// assert_eq!(sequence.insert_all(1, [2, 5, 3, 4]), Ok(true));
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, elements: I) -> Result<bool, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len() {
            return Err(CollectionError::out_of_bounds(index, self.len()));
        }
        Ok(self.insert_all_unchecked(index, elements))
    }

    /// Removes every element of `other` and returns `true` if the sequence
    /// changed.
    ///
    /// When `other` is smaller than the sequence, its members are removed
    /// one by one by value. Otherwise the sequence is walked once and each
    /// element is tested against `other`.
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Lookup<T> + ?Sized,
    {
        let modified = if self.len() > other.lookup_len() {
            let mut modified = false;
            for element in other.members() {
                modified |= self.remove_element(element);
            }
            modified
        } else {
            let before = self.len();
            self.retain_unchecked(|element| !other.holds(element));
            before != self.len()
        };
        if modified {
            self.compact();
        }
        modified
    }

    /// Keeps only the elements that are members of `other` and returns
    /// `true` if the sequence changed.
    pub fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Lookup<T> + ?Sized,
    {
        let before = self.len();
        self.retain_unchecked(|element| other.holds(element));
        let modified = before != self.len();
        if modified {
            self.compact();
        }
        modified
    }

    /// Keeps only the elements for which `predicate` returns `true`,
    /// preserving their order.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len();
        self.retain_unchecked(predicate);
        if before != self.len() {
            self.compact();
        }
    }

    /// Removes every element and releases storage above the default capacity.
    pub fn clear(&mut self) {
        self.members.clear();
        self.elements.clear();
        self.elements.shrink_to(DEFAULT_CAPACITY);
    }

    /// Replaces each element with the result of `operator`, front to back.
    ///
    /// Each replacement follows [`OrderedUniqueSequence::set`]: mapping an
    /// element onto a value that occurs later drops that later occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ledger_collections::sequence::OrderedUniqueSequence;
    ///
    /// let mut sequence = OrderedUniqueSequence::from([1, 2, 3]);
    /// sequence.replace_all(|element| element * 10);
    /// assert_eq!(sequence.as_slice(), &[10, 20, 30]);
    /// ```
    pub fn replace_all<F>(&mut self, mut operator: F)
    where
        F: FnMut(&T) -> T,
    {
        let before = self.len();
        let mut index = 0;
        while index < self.len() {
            let replacement = operator(&self.elements[index]);
            let (_, compacted) = self.replace_slot(index, replacement);
            // A compacted slot before `index` shifted the next element onto it.
            if !matches!(compacted, Some(removed) if removed < index) {
                index += 1;
            }
        }
        if before != self.len() {
            self.compact();
        }
    }

    /// Sorts the elements in place. Membership is unaffected.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.elements.sort();
    }

    /// Sorts the elements in place with a comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.elements.sort_by(compare);
    }

    /// Returns a copy of the elements in positional order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns a bidirectional cursor positioned before the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    pub fn cursor(&mut self, index: usize) -> Result<SequenceCursor<'_, T>, CollectionError> {
        if index > self.len() {
            return Err(CollectionError::out_of_bounds(index, self.len()));
        }
        Ok(SequenceCursor::new(self, index))
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor_front(&mut self) -> SequenceCursor<'_, T> {
        SequenceCursor::new(self, 0)
    }

    /// Returns a cursor positioned after the last element.
    pub fn cursor_back(&mut self) -> SequenceCursor<'_, T> {
        let len = self.len();
        SequenceCursor::new(self, len)
    }

    // -------------------------------------------------------------------------
    // Shared internals. Cursors mutate through these as well.
    // -------------------------------------------------------------------------

    /// Inserts at an index already known to be within `[0, len]`.
    pub(super) fn insert_unchecked(&mut self, index: usize, element: T) -> bool {
        if self.members.contains(&element) {
            return false;
        }
        self.ensure_capacity(self.len() + 1);
        self.insert_slot(index, element)
    }

    /// Replaces the element at `index` and reports the slot of the prior
    /// occurrence of `element` that had to be compacted away, if any.
    pub(super) fn replace_at(
        &mut self,
        index: usize,
        element: T,
    ) -> Result<(T, Option<usize>), CollectionError> {
        if index >= self.len() {
            return Err(CollectionError::out_of_bounds(index, self.len()));
        }
        let (previous, compacted) = self.replace_slot(index, element);
        if compacted.is_some() {
            self.compact();
        }
        Ok((previous, compacted))
    }

    fn insert_all_unchecked<I>(&mut self, index: usize, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        self.ensure_capacity(self.len() + elements.size_hint().0);
        let mut insertion_index = index;
        for element in elements {
            if self.insert_unchecked(insertion_index, element) {
                insertion_index += 1;
            }
        }
        insertion_index != index
    }

    fn insert_slot(&mut self, index: usize, element: T) -> bool {
        self.members.insert(element.clone());
        self.elements.insert(index, element);
        true
    }

    fn remove_slot(&mut self, index: usize) -> T {
        let element = self.elements.remove(index);
        self.members.remove(&element);
        element
    }

    fn remove_element<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index_of(element) {
            Some(index) => {
                self.remove_slot(index);
                true
            }
            None => false,
        }
    }

    fn retain_unchecked<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let members = &mut self.members;
        self.elements.retain(|element| {
            let keep = predicate(element);
            if !keep {
                members.remove(element);
            }
            keep
        });
    }

    /// Writes `element` into slot `index` and returns the displaced element
    /// together with the slot of the prior occurrence of `element`, if one
    /// had to be compacted away.
    fn replace_slot(&mut self, index: usize, element: T) -> (T, Option<usize>) {
        match self.index_of(&element) {
            Some(existing) if existing == index => {
                (std::mem::replace(&mut self.elements[index], element), None)
            }
            Some(existing) => {
                self.elements.remove(existing);
                let target = if existing < index { index - 1 } else { index };
                let previous = std::mem::replace(&mut self.elements[target], element);
                self.members.remove(&previous);
                (previous, Some(existing))
            }
            None => {
                self.members.insert(element.clone());
                let previous = std::mem::replace(&mut self.elements[index], element);
                self.members.remove(&previous);
                (previous, None)
            }
        }
    }

    fn ensure_capacity(&mut self, minimum: usize) {
        let capacity = self.elements.capacity();
        if minimum <= capacity {
            return;
        }
        let limit = isize::MAX.unsigned_abs() / size_of::<T>().max(1);
        let grown = grown_capacity(minimum, self.growth_factor, limit);
        if self
            .elements
            .try_reserve_exact(grown - self.elements.len())
            .is_err()
        {
            self.elements.reserve_exact(minimum - self.elements.len());
        }
        self.members.reserve(minimum - self.members.len());
        trace!(
            from = capacity,
            to = self.elements.capacity(),
            "grew ordered sequence storage"
        );
    }

    /// Shrinks the backing storage once usage falls under half of it.
    fn compact(&mut self) {
        let capacity = self.elements.capacity();
        let target = (capacity / 2).max(DEFAULT_CAPACITY);
        if self.elements.len() < capacity / 2 && target < capacity {
            self.elements.shrink_to(target);
            trace!(
                from = capacity,
                to = self.elements.capacity(),
                len = self.elements.len(),
                "compacted ordered sequence storage"
            );
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn grown_capacity(minimum: usize, growth_factor: f32, limit: usize) -> usize {
    let scaled = minimum as f64 * (f64::from(growth_factor) + 1.0);
    if scaled >= limit as f64 {
        return minimum;
    }
    (scaled as usize).saturating_add(1).clamp(minimum, limit.max(minimum))
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone + Eq + Hash> Default for OrderedUniqueSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedUniqueSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedUniqueSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for OrderedUniqueSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for OrderedUniqueSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for OrderedUniqueSequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.elements == other
    }
}

impl<T: Hash> Hash for OrderedUniqueSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T> Index<usize> for OrderedUniqueSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedUniqueSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::with_capacity(seeded_capacity(iter.size_hint().0));
        sequence.add_all(iter);
        sequence
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedUniqueSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for OrderedUniqueSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for OrderedUniqueSequence<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedUniqueSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedUniqueSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Capacity used when seeding from a source of `len` elements.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn seeded_capacity(len: usize) -> usize {
    let scaled = (len as f64 / f64::from(DEFAULT_GROWTH_FACTOR)) as usize;
    scaled.saturating_add(1).max(DEFAULT_CAPACITY)
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedUniqueSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("OrderedUniqueSequence", 3)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("len", &self.len())?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "OrderedUniqueSequence")]
struct PersistedSequence<T> {
    capacity: usize,
    len: usize,
    elements: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedUniqueSequence<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let persisted = PersistedSequence::<T>::deserialize(deserializer)?;
        if persisted.len != persisted.elements.len() {
            return Err(serde::de::Error::invalid_length(
                persisted.elements.len(),
                &"as many elements as the recorded len",
            ));
        }
        // The recorded capacity is honored, bounded so that a forged
        // header cannot force an arbitrary allocation.
        let capacity = persisted
            .capacity
            .clamp(persisted.len, persisted.len.max(DEFAULT_CAPACITY) * 4);
        let mut sequence = Self::with_capacity(capacity);
        for element in persisted.elements {
            sequence.add(element);
        }
        Ok(sequence)
    }
}

static_assertions::assert_impl_all!(OrderedUniqueSequence<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedUniqueSequence<String>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
