//! Ordered unique sequences.
//!
//! This module provides a mutable container that is simultaneously a list
//! and a set:
//!
//! - [`OrderedUniqueSequence`]: hash-indexed membership plus a positional
//!   array, kept in lock step
//! - [`SequenceCursor`]: bidirectional cursor mutating through the sequence
//! - [`SequenceView`] / [`SequenceMut`]: capability traits shared with the
//!   decorators
//! - [`Unmodifiable`]: read-only decorator
//! - [`Lookup`]: argument shape for bulk removal and retention
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::sequence::OrderedUniqueSequence;
//!
//! // Duplicates in the source collapse, the first occurrence wins
//! let mut sequence = OrderedUniqueSequence::from(["A", "B", "A", "C"]);
//! assert_eq!(sequence.as_slice(), &["A", "B", "C"]);
//!
//! sequence.remove("B");
//! assert_eq!(sequence.index_of("C"), Some(1));
//!
//! sequence.add("D");
//! sequence.set(0, "D").unwrap();
//! assert_eq!(sequence.as_slice(), &["D", "C"]);
//! ```

// =============================================================================
// Membership Hasher
// =============================================================================

/// Hasher used by the membership index.
///
/// `fxhash` takes precedence over `ahash` when both features are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type MembershipHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type MembershipHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type MembershipHasher = std::collections::hash_map::RandomState;

mod capability;
mod cursor;
mod lookup;
mod ordered_unique;

pub use capability::SequenceMut;
pub use capability::SequenceView;
pub use capability::Unmodifiable;
pub use cursor::SequenceCursor;
pub use lookup::Lookup;
pub use ordered_unique::DEFAULT_CAPACITY;
pub use ordered_unique::DEFAULT_GROWTH_FACTOR;
pub use ordered_unique::OrderedUniqueSequence;
pub use ordered_unique::SequenceConfig;
