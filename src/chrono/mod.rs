//! Change-tracking ("chrono") collections.
//!
//! A chrono collection wraps a live list, set or map and records, relative
//! to a checkpoint, which elements were added and which were removed:
//!
//! - [`ChronoList`]: `Vec` backed, duplicates allowed
//! - [`ChronoSet`]: `HashSet` backed
//! - [`ChronoMap`]: `HashMap` backed; its elements are key-value pairs and
//!   replacing a value counts as removing the old pair and adding the new
//!   one. The derived views [`KeySetMut`], [`EntrySetMut`] and [`ValuesMut`]
//!   reconcile their removals like direct map calls.
//!
//! All three share the cancellation-aware rule of the [`reconcile`]
//! module: re-adding an element recorded as removed clears the record
//! instead of recording an addition, and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::chrono::{ChronoCollection, ChronoSet};
//!
//! let mut set: ChronoSet<&str> = ["X", "Y"].into_iter().collect();
//! set.remove("X");
//! set.insert("Z");
//! set.insert("X");
//!
//! assert!(set.added().contains("Z") && set.added().len() == 1);
//! assert!(set.removed().is_empty());
//!
//! set.reset();
//! assert!(!set.has_changes());
//! ```

mod list;
mod map;
pub mod reconcile;
mod set;

pub use list::ChronoList;
pub use map::ChronoMap;
pub use map::EntrySetMut;
pub use map::KeySetMut;
pub use map::ValuesMut;
pub use set::ChronoSet;

/// A collection that tracks its changes against a checkpoint.
///
/// The delta accessors borrow the collection's own delta stores: they are
/// not snapshots, any later mutation is reflected in them.
pub trait ChronoCollection {
    /// The live collection type.
    type Live;

    /// The type of the `added` and `removed` stores.
    type Delta;

    /// Returns the current contents.
    fn live(&self) -> &Self::Live;

    /// Elements present now that were absent at the checkpoint.
    fn added(&self) -> &Self::Delta;

    /// Elements present at the checkpoint that are absent now.
    fn removed(&self) -> &Self::Delta;

    /// Clears both delta stores, making the current contents the new
    /// checkpoint.
    fn reset(&mut self);

    /// Returns `true` if anything changed since the checkpoint.
    fn has_changes(&self) -> bool;
}
