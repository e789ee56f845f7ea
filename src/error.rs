//! Error types shared by every collection in this crate.
//!
//! All failures are local and immediate: an operation that returns an
//! error has not committed any mutation. Adding a duplicate or removing an
//! absent element is not an error; those report `false`/`None` instead.

use std::fmt;

/// The reason a cursor refused to `remove` or `set`.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::IteratorStateError;
///
/// assert_eq!(
///     format!("{}", IteratorStateError::AlreadyRemoved),
///     "the current element has already been removed"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorStateError {
    /// No element was produced by `next`/`previous` since the cursor was
    /// created or last inserted through.
    NoCurrentElement,
    /// The element produced by the last advance was already removed.
    AlreadyRemoved,
}

impl fmt::Display for IteratorStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCurrentElement => {
                formatter.write_str("next() or previous() must be called before")
            }
            Self::AlreadyRemoved => {
                formatter.write_str("the current element has already been removed")
            }
        }
    }
}

impl std::error::Error for IteratorStateError {}

/// Represents errors that can occur when operating on the collections.
///
/// # Examples
///
/// ```rust
/// use ledger_collections::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 4, len: 2 };
/// assert_eq!(format!("{error}"), "index 4 out of bounds for length 2");
///
/// let error = CollectionError::InvalidRange { begin: 3, end: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "invalid range 3..1: the end index cannot be lower than the begin index"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An index argument fell outside the operation's valid bound.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The length the index was checked against.
        len: usize,
    },
    /// A half-open range whose end lies before its begin.
    InvalidRange {
        /// Start of the rejected range.
        begin: usize,
        /// End of the rejected range.
        end: usize,
    },
    /// The operation is deliberately not offered by this collection.
    Unsupported {
        /// Name of the refused operation.
        operation: &'static str,
    },
    /// A cursor was asked to mutate without a valid current element.
    IteratorState(IteratorStateError),
    /// A configuration value was rejected at build time.
    InvalidConfiguration {
        /// Why the configuration was rejected.
        reason: &'static str,
    },
}

impl CollectionError {
    /// Shorthand for [`CollectionError::IndexOutOfBounds`].
    #[inline]
    #[must_use]
    pub const fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Shorthand for [`CollectionError::Unsupported`].
    #[inline]
    #[must_use]
    pub const fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Returns `true` if this error reports a bad index or range.
    #[must_use]
    pub const fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::InvalidRange { .. }
        )
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(formatter, "index {index} out of bounds for length {len}")
            }
            Self::InvalidRange { begin, end } => write!(
                formatter,
                "invalid range {begin}..{end}: the end index cannot be lower than the begin index"
            ),
            Self::Unsupported { operation } => {
                write!(formatter, "unsupported operation: {operation}")
            }
            Self::IteratorState(error) => write!(formatter, "illegal cursor state: {error}"),
            Self::InvalidConfiguration { reason } => {
                write!(formatter, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IteratorState(error) => Some(error),
            _ => None,
        }
    }
}

impl From<IteratorStateError> for CollectionError {
    fn from(error: IteratorStateError) -> Self {
        Self::IteratorState(error)
    }
}
