//! Mutual-exclusion wrapper for sequences.
//!
//! [`Synchronized`] serializes every call through one
//! [`parking_lot::Mutex`]. Each call is atomic on its own; a sequence of
//! calls is not. Run multi-step work under a single lock with
//! [`Synchronized::with_mut`] or [`Synchronized::lock`].
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::sequence::OrderedUniqueSequence;
//! use ledger_collections::sync::Synchronized;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shared = Arc::new(Synchronized::new(OrderedUniqueSequence::new()));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             for value in 0..50 {
//!                 shared.add(worker * 50 + value);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.len(), 200);
//! ```

use std::fmt;
use std::hash::Hash;

use parking_lot::{Mutex, MutexGuard};

use crate::error::CollectionError;
use crate::sequence::{OrderedUniqueSequence, SequenceMut, SequenceView};

/// A value guarded by a mutex, exposing the sequence capabilities with one
/// lock acquisition per call.
pub struct Synchronized<C> {
    inner: Mutex<C>,
}

impl<C> Synchronized<C> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Runs `f` with shared access under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Acquires the lock and returns its guard.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock()
    }

    /// Returns the inner value without locking.
    pub fn get_mut(&mut self) -> &mut C {
        self.inner.get_mut()
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<T: Clone + Eq + Hash> Synchronized<OrderedUniqueSequence<T>> {
    /// See [`OrderedUniqueSequence::add`].
    pub fn add(&self, element: T) -> bool {
        self.inner.lock().add(element)
    }

    /// See [`OrderedUniqueSequence::insert`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len()`.
    pub fn insert(&self, index: usize, element: T) -> Result<bool, CollectionError> {
        self.inner.lock().insert(index, element)
    }

    /// See [`OrderedUniqueSequence::set`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&self, index: usize, element: T) -> Result<T, CollectionError> {
        self.inner.lock().set(index, element)
    }

    /// See [`OrderedUniqueSequence::remove`].
    pub fn remove(&self, element: &T) -> bool {
        self.inner.lock().remove(element)
    }

    /// See [`OrderedUniqueSequence::remove_at`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Result<T, CollectionError> {
        self.inner.lock().remove_at(index)
    }

    /// See [`OrderedUniqueSequence::contains`].
    pub fn contains(&self, element: &T) -> bool {
        self.inner.lock().contains(element)
    }

    /// See [`OrderedUniqueSequence::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`OrderedUniqueSequence::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn element_at(&self, index: usize) -> Result<T, CollectionError> {
        self.inner.lock().get(index).cloned()
    }

    /// Returns a copy of the elements, taken under one lock.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().to_vec()
    }
}

impl<T, C: SequenceView<T>> SequenceView<T> for Synchronized<C> {
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn contains(&self, element: &T) -> bool {
        self.inner.lock().contains(element)
    }

    fn element_at(&self, index: usize) -> Result<T, CollectionError> {
        self.inner.lock().element_at(index)
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.inner.lock().position_of(element)
    }

    fn snapshot(&self) -> Vec<T> {
        self.inner.lock().snapshot()
    }
}

impl<T, C: SequenceMut<T>> SequenceMut<T> for Synchronized<C> {
    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.inner.get_mut().add(element)
    }

    fn insert(&mut self, index: usize, element: T) -> Result<bool, CollectionError> {
        self.inner.get_mut().insert(index, element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        self.inner.get_mut().set(index, element)
    }

    fn remove(&mut self, element: &T) -> Result<bool, CollectionError> {
        self.inner.get_mut().remove(element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.inner.get_mut().remove_at(index)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.inner.get_mut().clear()
    }
}

impl<C: Default> Default for Synchronized<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for Synchronized<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Synchronized");
        match self.inner.try_lock() {
            Some(guard) => debug.field("inner", &*guard),
            None => debug.field("inner", &format_args!("<locked>")),
        };
        debug.finish()
    }
}

static_assertions::assert_impl_all!(Synchronized<OrderedUniqueSequence<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Synchronized<OrderedUniqueSequence<String>>: Send, Sync);
