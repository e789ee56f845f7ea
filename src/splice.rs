//! Pure splice helpers over slices.
//!
//! Every function leaves its inputs untouched and returns a freshly built
//! `Vec`. Arguments are validated before any copying takes place, so a
//! failing call has no effect at all.
//!
//! # Examples
//!
//! ```rust
//! use ledger_collections::splice;
//!
//! let source = [1, 2, 3, 4, 5];
//! assert_eq!(splice::remove_range(&source, 1, 3), Ok(vec![1, 4, 5]));
//! assert_eq!(splice::insert(&source, 5, 6), Ok(vec![1, 2, 3, 4, 5, 6]));
//! assert!(splice::remove_range(&source, 3, 1).is_err());
//! ```

use crate::error::CollectionError;

/// Validates `[begin, end)` against a sequence of length `len`.
///
/// Bounds are checked before ordering, so `4..9` on five elements is an
/// out-of-bounds error even though it is also well ordered.
pub(crate) fn check_range(begin: usize, end: usize, len: usize) -> Result<(), CollectionError> {
    if begin > len {
        return Err(CollectionError::out_of_bounds(begin, len));
    }
    if end > len {
        return Err(CollectionError::out_of_bounds(end, len));
    }
    if end < begin {
        return Err(CollectionError::InvalidRange { begin, end });
    }
    Ok(())
}

/// Returns a copy of `source` with the half-open range `[begin, end)` removed.
///
/// # Errors
///
/// - [`CollectionError::IndexOutOfBounds`] if `begin` or `end` exceeds `source.len()`
/// - [`CollectionError::InvalidRange`] if `end < begin`
///
/// # Examples
///
/// ```rust
/// use ledger_collections::splice::remove_range;
///
/// assert_eq!(remove_range(&["a", "b", "c"], 0, 2), Ok(vec!["c"]));
/// assert_eq!(remove_range(&["a", "b", "c"], 1, 1), Ok(vec!["a", "b", "c"]));
/// ```
pub fn remove_range<T: Clone>(
    source: &[T],
    begin: usize,
    end: usize,
) -> Result<Vec<T>, CollectionError> {
    check_range(begin, end, source.len())?;
    let mut result = Vec::with_capacity(source.len() - (end - begin));
    result.extend_from_slice(&source[..begin]);
    result.extend_from_slice(&source[end..]);
    Ok(result)
}

/// Returns a copy of `source` without the element at `index`.
///
/// # Errors
///
/// [`CollectionError::IndexOutOfBounds`] if `index >= source.len()`.
pub fn remove_at<T: Clone>(source: &[T], index: usize) -> Result<Vec<T>, CollectionError> {
    if index >= source.len() {
        return Err(CollectionError::out_of_bounds(index, source.len()));
    }
    remove_range(source, index, index + 1)
}

/// Returns a copy of `source` with `values[begin..end]` inserted at `at`.
///
/// `at == source.len()` appends.
///
/// # Errors
///
/// - [`CollectionError::IndexOutOfBounds`] if `at > source.len()` or the
///   range exceeds `values.len()`
/// - [`CollectionError::InvalidRange`] if `end < begin`
///
/// # Examples
///
/// ```rust
/// use ledger_collections::splice::insert_range;
///
/// let merged = insert_range(&[1, 5], 1, &[0, 2, 3, 4, 9], 1, 4);
/// assert_eq!(merged, Ok(vec![1, 2, 3, 4, 5]));
/// ```
pub fn insert_range<T: Clone>(
    source: &[T],
    at: usize,
    values: &[T],
    begin: usize,
    end: usize,
) -> Result<Vec<T>, CollectionError> {
    if at > source.len() {
        return Err(CollectionError::out_of_bounds(at, source.len()));
    }
    check_range(begin, end, values.len())?;
    let mut result = Vec::with_capacity(source.len() + (end - begin));
    result.extend_from_slice(&source[..at]);
    result.extend_from_slice(&values[begin..end]);
    result.extend_from_slice(&source[at..]);
    Ok(result)
}

/// Returns a copy of `source` with `value` inserted at `at`.
///
/// # Errors
///
/// [`CollectionError::IndexOutOfBounds`] if `at > source.len()`.
pub fn insert<T: Clone>(source: &[T], at: usize, value: T) -> Result<Vec<T>, CollectionError> {
    if at > source.len() {
        return Err(CollectionError::out_of_bounds(at, source.len()));
    }
    let mut result = Vec::with_capacity(source.len() + 1);
    result.extend_from_slice(&source[..at]);
    result.push(value);
    result.extend_from_slice(&source[at..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, vec![])]
    #[case(0, 0, vec![1, 2, 3, 4, 5])]
    #[case(5, 5, vec![1, 2, 3, 4, 5])]
    #[case(4, 5, vec![1, 2, 3, 4])]
    #[case(1, 4, vec![1, 5])]
    fn test_remove_range(#[case] begin: usize, #[case] end: usize, #[case] expected: Vec<i32>) {
        assert_eq!(remove_range(&[1, 2, 3, 4, 5], begin, end), Ok(expected));
    }

    #[rstest]
    fn test_remove_range_checks_bounds_before_order() {
        assert_eq!(
            remove_range(&[1, 2, 3], 4, 1),
            Err(CollectionError::out_of_bounds(4, 3))
        );
        assert_eq!(
            remove_range(&[1, 2, 3], 2, 1),
            Err(CollectionError::InvalidRange { begin: 2, end: 1 })
        );
    }

    #[rstest]
    fn test_remove_at_rejects_len() {
        assert_eq!(remove_at(&[1, 2], 2), Err(CollectionError::out_of_bounds(2, 2)));
        assert_eq!(remove_at(&[1, 2], 0), Ok(vec![2]));
    }

    #[rstest]
    fn test_insert_range_rejects_value_range() {
        assert_eq!(
            insert_range(&[1], 0, &[2, 3], 0, 3),
            Err(CollectionError::out_of_bounds(3, 2))
        );
        assert_eq!(
            insert_range(&[1], 2, &[2, 3], 0, 1),
            Err(CollectionError::out_of_bounds(2, 1))
        );
    }

    #[rstest]
    fn test_insert_into_empty() {
        assert_eq!(insert(&[], 0, 'x'), Ok(vec!['x']));
        assert_eq!(insert(&[] as &[char], 1, 'x'), Err(CollectionError::out_of_bounds(1, 0)));
    }
}
