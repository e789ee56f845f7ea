//! # ledger-collections
//!
//! Collections that keep two representations of their contents in lock
//! step.
//!
//! ## Overview
//!
//! - **Ordered Unique Sequences**: a list that is also a set. A hash-based
//!   membership index and a positional array are updated together by every
//!   mutation, including mutation through a bidirectional cursor.
//! - **Chrono Collections**: list, set and map wrappers that record which
//!   elements were added and which were removed since a checkpoint, with
//!   additions and removals of the same element cancelling out.
//! - **Decorators**: a read-only view and a mutex-guarded wrapper that
//!   implement the same capability traits as the sequence itself.
//! - **Splice Helpers**: pure slice functions that remove or insert ranges.
//!
//! ## Feature Flags
//!
//! - `sequence`: [`OrderedUniqueSequence`](sequence::OrderedUniqueSequence)
//!   and its cursor and decorators
//! - `chrono`: change-tracking collections (requires `sequence`)
//! - `sync`: `Synchronized` wrapper built on `parking_lot`
//! - `serde`: persisted-state encoding of ordered unique sequences
//! - `fxhash` / `ahash`: alternative hashers for the membership index
//! - `full`: `sequence`, `chrono`, `sync` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use ledger_collections::prelude::*;
//!
//! let mut sequence = OrderedUniqueSequence::from(["A", "B", "C"]);
//! sequence.remove("B");
//! assert_eq!(sequence.index_of("C"), Some(1));
//!
//! let mut tracked: ChronoSet<&str> = sequence.iter().copied().collect();
//! tracked.remove("A");
//! assert!(tracked.removed().contains("A"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ledger_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, IteratorStateError};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "chrono")]
    pub use crate::chrono::{
        ChronoCollection, ChronoList, ChronoMap, ChronoSet, EntrySetMut, KeySetMut, ValuesMut,
    };

    #[cfg(feature = "sync")]
    pub use crate::sync::*;
}

pub mod error;
pub mod splice;

pub use error::{CollectionError, IteratorStateError};

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "chrono")]
pub mod chrono;

#[cfg(feature = "sync")]
pub mod sync;
