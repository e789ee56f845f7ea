//! Bidirectional cursor over an [`OrderedUniqueSequence`].
//!
//! A cursor sits *between* elements: `next` returns the element after it
//! and moves forward, `previous` returns the element before it and moves
//! back. The element returned last is the cursor's *current* element, the
//! one `remove` and `set` act on.
//!
//! All mutation goes through the owning sequence, so uniqueness, the
//! membership index and storage compaction behave exactly as for direct
//! calls. The cursor borrows the sequence mutably, which rules out a
//! second cursor (or any other access) invalidating its positions.
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::sequence::OrderedUniqueSequence;
//!
//! let mut sequence = OrderedUniqueSequence::from([1, 2, 3, 4]);
//! let mut cursor = sequence.cursor_front();
//! while let Some(element) = cursor.next() {
//!     if element % 2 == 0 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(sequence.as_slice(), &[1, 3]);
//! ```

use std::hash::Hash;

use super::OrderedUniqueSequence;
use crate::error::{CollectionError, IteratorStateError};

/// A cursor with `next`/`previous` movement and in-place mutation.
///
/// Created by [`OrderedUniqueSequence::cursor`],
/// [`OrderedUniqueSequence::cursor_front`] and
/// [`OrderedUniqueSequence::cursor_back`].
pub struct SequenceCursor<'a, T> {
    sequence: &'a mut OrderedUniqueSequence<T>,
    cursor: usize,
    last_returned: Option<usize>,
    just_removed: bool,
}

impl<'a, T: Clone + Eq + Hash> SequenceCursor<'a, T> {
    pub(super) const fn new(sequence: &'a mut OrderedUniqueSequence<T>, index: usize) -> Self {
        Self {
            sequence,
            cursor: index,
            last_returned: None,
            just_removed: false,
        }
    }

    /// Returns `true` if `next` would return an element.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.sequence.len()
    }

    /// Returns `true` if `previous` would return an element.
    #[inline]
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Index of the element `next` would return.
    #[inline]
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.cursor
    }

    /// Index of the element `previous` would return, `None` at the front.
    #[inline]
    #[must_use]
    pub const fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Returns the element after the cursor and moves past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        self.last_returned = Some(index);
        self.just_removed = false;
        self.sequence.as_slice().get(index)
    }

    /// Returns the element before the cursor and moves in front of it.
    pub fn previous(&mut self) -> Option<&T> {
        let index = self.cursor.checked_sub(1)?;
        self.cursor = index;
        self.last_returned = Some(index);
        self.just_removed = false;
        self.sequence.as_slice().get(index)
    }

    /// Returns the current element, the one `remove` and `set` would affect.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current_slot()
            .ok()
            .and_then(|slot| self.sequence.as_slice().get(slot))
    }

    /// Removes the current element from the sequence and returns it.
    ///
    /// # Errors
    ///
    /// - [`IteratorStateError::NoCurrentElement`] if neither `next` nor
    ///   `previous` returned an element since creation or the last `add`
    /// - [`IteratorStateError::AlreadyRemoved`] on a second removal without
    ///   an intervening advance
    ///
    /// The sequence is left unchanged on error.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        let slot = self.current_slot()?;
        let element = self.sequence.remove_at(slot)?;
        if slot < self.cursor {
            self.cursor -= 1;
        }
        self.just_removed = true;
        Ok(element)
    }

    /// Replaces the current element with `element` and returns the element
    /// it replaced.
    ///
    /// Follows [`OrderedUniqueSequence::set`]: if `element` occurs elsewhere,
    /// that occurrence is compacted away and the cursor keeps pointing
    /// between the same neighbours.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SequenceCursor::remove`].
    pub fn set(&mut self, element: T) -> Result<T, CollectionError> {
        let slot = self.current_slot()?;
        let (previous, compacted) = self.sequence.replace_at(slot, element)?;
        if let Some(removed) = compacted {
            if removed < self.cursor {
                self.cursor -= 1;
            }
            if removed < slot {
                self.last_returned = Some(slot - 1);
            }
        }
        Ok(previous)
    }

    /// Inserts `element` right before the cursor.
    ///
    /// The cursor moves past the new element, so a following `next` is
    /// unaffected. Nothing happens if `element` is already present. Either
    /// way the cursor no longer has a current element.
    ///
    /// Returns `true` if the element was inserted.
    pub fn add(&mut self, element: T) -> bool {
        let inserted = self.sequence.insert_unchecked(self.cursor, element);
        if inserted {
            self.cursor += 1;
        }
        self.last_returned = None;
        self.just_removed = false;
        inserted
    }

    fn current_slot(&self) -> Result<usize, IteratorStateError> {
        if self.just_removed {
            return Err(IteratorStateError::AlreadyRemoved);
        }
        self.last_returned
            .ok_or(IteratorStateError::NoCurrentElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_remove_after_previous_keeps_cursor() {
        let mut sequence = OrderedUniqueSequence::from(['a', 'b', 'c']);
        let mut cursor = sequence.cursor_back();
        assert_eq!(cursor.previous(), Some(&'c'));
        assert_eq!(cursor.previous(), Some(&'b'));
        assert_eq!(cursor.remove(), Ok('b'));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(), Some(&'c'));
        assert_eq!(sequence.as_slice(), &['a', 'c']);
    }

    #[rstest]
    fn test_set_compacting_earlier_duplicate_moves_cursor_back() {
        let mut sequence = OrderedUniqueSequence::from([1, 2, 3, 4]);
        let mut cursor = sequence.cursor_front();
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.set(1), Ok(3));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(), Some(&4));
        assert_eq!(sequence.as_slice(), &[2, 1, 4]);
    }

    #[rstest]
    fn test_add_clears_current_element() {
        let mut sequence = OrderedUniqueSequence::from([1, 3]);
        let mut cursor = sequence.cursor_front();
        cursor.next();
        assert!(cursor.add(2));
        assert!(!cursor.add(3));
        assert_eq!(cursor.current(), None);
        assert_eq!(
            cursor.remove(),
            Err(CollectionError::IteratorState(
                IteratorStateError::NoCurrentElement
            ))
        );
        assert_eq!(cursor.next(), Some(&3));
        assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    }
}
