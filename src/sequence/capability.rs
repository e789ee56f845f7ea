//! Capability traits and the read-only decorator.
//!
//! [`SequenceView`] and [`SequenceMut`] describe what an ordered unique
//! sequence offers, independent of how access is arbitrated. The core
//! [`OrderedUniqueSequence`] implements both; decorators such as
//! [`Unmodifiable`] and `Synchronized` wrap any implementation and forward
//! to it.
//!
//! Elements are returned by value so that implementations guarding their
//! state behind a lock can take part.

use std::hash::Hash;

use super::OrderedUniqueSequence;
use crate::error::CollectionError;

/// Read access to an ordered unique sequence.
pub trait SequenceView<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there is no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    fn element_at(&self, index: usize) -> Result<T, CollectionError>;

    /// Returns the position of `element`.
    fn position_of(&self, element: &T) -> Option<usize>;

    /// Returns a copy of every element in positional order.
    fn snapshot(&self) -> Vec<T>;
}

/// Mutating access to an ordered unique sequence.
///
/// Every method returns a `Result` so that decorators can refuse the call.
pub trait SequenceMut<T>: SequenceView<T> {
    /// See [`OrderedUniqueSequence::add`].
    ///
    /// # Errors
    ///
    /// Implementation defined; the core sequence never fails.
    fn add(&mut self, element: T) -> Result<bool, CollectionError>;

    /// See [`OrderedUniqueSequence::insert`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    fn insert(&mut self, index: usize, element: T) -> Result<bool, CollectionError>;

    /// See [`OrderedUniqueSequence::set`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError>;

    /// See [`OrderedUniqueSequence::remove`].
    ///
    /// # Errors
    ///
    /// Implementation defined; the core sequence never fails.
    fn remove(&mut self, element: &T) -> Result<bool, CollectionError>;

    /// See [`OrderedUniqueSequence::remove_at`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError>;

    /// See [`OrderedUniqueSequence::clear`].
    ///
    /// # Errors
    ///
    /// Implementation defined; the core sequence never fails.
    fn clear(&mut self) -> Result<(), CollectionError>;
}

impl<T: Clone + Eq + Hash> SequenceView<T> for OrderedUniqueSequence<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn element_at(&self, index: usize) -> Result<T, CollectionError> {
        self.get(index).cloned()
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.index_of(element)
    }

    fn snapshot(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone + Eq + Hash> SequenceMut<T> for OrderedUniqueSequence<T> {
    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        Ok(Self::add(self, element))
    }

    fn insert(&mut self, index: usize, element: T) -> Result<bool, CollectionError> {
        Self::insert(self, index, element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        Self::set(self, index, element)
    }

    fn remove(&mut self, element: &T) -> Result<bool, CollectionError> {
        Ok(Self::remove(self, element))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        Self::remove_at(self, index)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Self::clear(self);
        Ok(())
    }
}

impl<T, C: SequenceView<T> + ?Sized> SequenceView<T> for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    fn element_at(&self, index: usize) -> Result<T, CollectionError> {
        (**self).element_at(index)
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        (**self).position_of(element)
    }

    fn snapshot(&self) -> Vec<T> {
        (**self).snapshot()
    }
}

// =============================================================================
// Unmodifiable
// =============================================================================

/// Read-only decorator: reads are forwarded, every mutation fails with
/// [`CollectionError::Unsupported`] and leaves the inner sequence untouched.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::sequence::{
///     OrderedUniqueSequence, SequenceMut, SequenceView, Unmodifiable,
/// };
///
/// let sequence = OrderedUniqueSequence::from([1, 2]);
/// let mut read_only = Unmodifiable::new(&sequence);
///
/// assert_eq!(read_only.element_at(1), Ok(2));
/// assert!(read_only.add(3).is_err());
/// assert_eq!(sequence.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Unmodifiable<C> {
    inner: C,
}

impl<C> Unmodifiable<C> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped value for reading.
    #[must_use]
    pub const fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwraps the decorator.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C: SequenceView<T>> SequenceView<T> for Unmodifiable<C> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.inner.contains(element)
    }

    fn element_at(&self, index: usize) -> Result<T, CollectionError> {
        self.inner.element_at(index)
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.inner.position_of(element)
    }

    fn snapshot(&self) -> Vec<T> {
        self.inner.snapshot()
    }
}

impl<T, C: SequenceView<T>> SequenceMut<T> for Unmodifiable<C> {
    fn add(&mut self, _element: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("add"))
    }

    fn insert(&mut self, _index: usize, _element: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("insert"))
    }

    fn set(&mut self, _index: usize, _element: T) -> Result<T, CollectionError> {
        Err(CollectionError::unsupported("set"))
    }

    fn remove(&mut self, _element: &T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported("remove"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T, CollectionError> {
        Err(CollectionError::unsupported("remove_at"))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported("clear"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn exercise<S: SequenceMut<i32>>(sequence: &mut S) -> Vec<Result<(), CollectionError>> {
        vec![
            sequence.add(9).map(drop),
            sequence.insert(0, 8).map(drop),
            sequence.set(0, 7).map(drop),
            sequence.remove(&9).map(drop),
            sequence.remove_at(0).map(drop),
            sequence.clear(),
        ]
    }

    #[rstest]
    fn test_core_sequence_through_traits() {
        let mut sequence = OrderedUniqueSequence::from([1]);
        assert!(exercise(&mut sequence).iter().all(Result::is_ok));
        assert!(SequenceView::is_empty(&sequence));
    }

    #[rstest]
    fn test_unmodifiable_refuses_every_mutation() {
        let sequence = OrderedUniqueSequence::from([1, 2, 3]);
        let mut read_only = Unmodifiable::new(sequence);
        let results = exercise(&mut read_only);
        assert!(results.iter().all(|result| matches!(
            result,
            Err(CollectionError::Unsupported { .. })
        )));
        assert_eq!(read_only.snapshot(), vec![1, 2, 3]);
        assert_eq!(read_only.position_of(&3), Some(2));
    }
}
