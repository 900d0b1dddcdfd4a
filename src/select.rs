//! Positional selection and pagination.
//!
//! Accessors borrow from the input slice; pagination helpers return owned
//! copies so the result outlives the caller's sequence.

/// The first and last elements of a sequence.
///
/// Both fields are `None` for an empty sequence and point to the same
/// element when the sequence has length 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstAndLast<'a, T> {
    pub first: Option<&'a T>,
    pub last: Option<&'a T>,
}

/// Returns the first element, or `None` if `data` is empty.
pub fn first<T>(data: &[T]) -> Option<&T> {
    data.first()
}

/// Returns the last element, or `None` if `data` is empty.
pub fn last<T>(data: &[T]) -> Option<&T> {
    data.last()
}

/// Returns the first and last elements together.
///
/// # Examples
/// ```
/// use u_seq::select::first_and_last;
/// let ends = first_and_last(&[1, 2, 3]);
/// assert_eq!((ends.first, ends.last), (Some(&1), Some(&3)));
///
/// let empty = first_and_last::<i32>(&[]);
/// assert_eq!((empty.first, empty.last), (None, None));
/// ```
pub fn first_and_last<T>(data: &[T]) -> FirstAndLast<'_, T> {
    FirstAndLast {
        first: data.first(),
        last: data.last(),
    }
}

/// Returns a copy of the first `min(n, len)` elements.
///
/// # Examples
/// ```
/// use u_seq::select::take;
/// assert_eq!(take(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(take(&[1, 2, 3], 10), vec![1, 2, 3]);
/// assert!(take(&[1, 2, 3], 0).is_empty());
/// ```
pub fn take<T: Clone>(data: &[T], n: usize) -> Vec<T> {
    data[..n.min(data.len())].to_vec()
}

/// Returns a copy of everything after the first `n` elements.
///
/// `n >= len` yields an empty vector.
///
/// # Examples
/// ```
/// use u_seq::select::skip;
/// assert_eq!(skip(&[1, 2, 3], 1), vec![2, 3]);
/// assert!(skip(&[1, 2, 3], 5).is_empty());
/// ```
pub fn skip<T: Clone>(data: &[T], n: usize) -> Vec<T> {
    data[n.min(data.len())..].to_vec()
}
