//! Argument shape for the bulk operations of [`OrderedUniqueSequence`].
//!
//! [`OrderedUniqueSequence::remove_all`] picks its strategy from the size of
//! its argument, and either walks the argument or probes it for
//! membership. [`Lookup`] exposes exactly those three capabilities.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::OrderedUniqueSequence;

/// A finite collection that can be sized, probed, and walked.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::sequence::{Lookup, OrderedUniqueSequence};
/// use std::collections::HashSet;
///
/// let mut sequence = OrderedUniqueSequence::from([1, 2, 3, 4]);
/// let unwanted: HashSet<i32> = [2, 4].into_iter().collect();
///
/// assert_eq!(unwanted.lookup_len(), 2);
/// assert!(sequence.remove_all(&unwanted));
/// assert_eq!(sequence.as_slice(), &[1, 3]);
/// ```
pub trait Lookup<T> {
    /// Iterator over the members.
    type Members<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of members.
    fn lookup_len(&self) -> usize;

    /// Returns `true` if `element` is a member.
    fn holds(&self, element: &T) -> bool;

    /// Returns an iterator over the members.
    fn members(&self) -> Self::Members<'_>;
}

impl<T: PartialEq> Lookup<T> for [T] {
    type Members<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        self.len()
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T: PartialEq, const N: usize> Lookup<T> for [T; N] {
    type Members<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        N
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T: PartialEq> Lookup<T> for Vec<T> {
    type Members<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        self.len()
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Lookup<T> for HashSet<T, S> {
    type Members<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        self.len()
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T: Ord> Lookup<T> for BTreeSet<T> {
    type Members<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        self.len()
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T: Clone + Eq + Hash> Lookup<T> for OrderedUniqueSequence<T> {
    type Members<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn lookup_len(&self) -> usize {
        self.len()
    }

    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sized_and_probed<C: Lookup<i32> + ?Sized>(lookup: &C) -> (usize, bool, Vec<i32>) {
        (
            lookup.lookup_len(),
            lookup.holds(&2),
            lookup.members().copied().collect(),
        )
    }

    #[rstest]
    fn test_slice_and_vec_agree() {
        let vec = vec![1, 2, 3];
        assert_eq!(sized_and_probed(vec.as_slice()), sized_and_probed(&vec));
        assert_eq!(sized_and_probed(&[1, 2, 3]), (3, true, vec![1, 2, 3]));
    }

    #[rstest]
    fn test_btree_set_members_sorted() {
        let set: BTreeSet<i32> = [3, 1].into_iter().collect();
        assert_eq!(sized_and_probed(&set), (2, false, vec![1, 3]));
    }

    #[rstest]
    fn test_sequence_is_a_lookup() {
        let sequence = OrderedUniqueSequence::from([2, 9]);
        assert_eq!(sized_and_probed(&sequence), (2, true, vec![2, 9]));
    }
}
