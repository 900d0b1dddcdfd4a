//! Order and shape transforms: reverse, flatten, chunk, compact.
//!
//! All functions copy; the input slice is never reordered.

use crate::error::{Result, SeqError};

/// Returns a reversed copy of `data`.
pub fn reversed<T: Clone>(data: &[T]) -> Vec<T> {
    data.iter().rev().cloned().collect()
}

/// One level of optional nesting.
///
/// Lets a single sequence mix plain elements with sub-sequences; both
/// become individual elements under [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain element, passed through unchanged.
    Leaf(T),
    /// A sub-sequence, spliced into the result.
    Seq(Vec<T>),
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Nested::Leaf(item) => vec![item].into_iter(),
            Nested::Seq(items) => items.into_iter(),
        }
    }
}

/// Flattens exactly one level of nesting.
///
/// Works for any element that iterates, such as `Vec<T>` or [`Nested<T>`].
/// Deeper structure is preserved: flattening `Vec<Vec<Vec<T>>>` yields
/// `Vec<Vec<T>>`.
///
/// # Examples
/// ```
/// use u_seq::collections::{flatten, Nested};
/// assert_eq!(flatten(&[vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
///
/// let mixed = [Nested::Leaf(1), Nested::Seq(vec![2, 3]), Nested::Leaf(4)];
/// assert_eq!(flatten(&mixed), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<I>(data: &[I]) -> Vec<I::Item>
where
    I: Clone + IntoIterator,
{
    data.iter().cloned().flatten().collect()
}

/// Splits `data` into consecutive chunks of at most `size` elements.
///
/// Every chunk except possibly the last has exactly `size` elements.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `size` is 0.
///
/// # Examples
/// ```
/// use u_seq::collections::chunk;
/// assert_eq!(
///     chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
///     vec![vec![1, 2], vec![3, 4], vec![5]]
/// );
/// assert!(chunk(&[1, 2], 0).is_err());
/// ```
pub fn chunk<T: Clone>(data: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        log::debug!("rejecting chunk size 0 for sequence of length {}", data.len());
        return Err(SeqError::InvalidArgument(
            "chunk size must be greater than 0".into(),
        ));
    }
    Ok(data.chunks(size).map(<[T]>::to_vec).collect())
}

/// Values that count as "empty" for [`compact`].
///
/// The falsy set is `false`, numeric zero, NaN, the empty string and
/// `None`. `Some(v)` is falsy exactly when `v` is. Containers are never
/// falsy, even when empty.
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! impl_falsy_int {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_float {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_falsy_float!(f32, f64);

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_falsy(),
        }
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

/// Returns a copy of `data` without its falsy elements.
///
/// # Examples
/// ```
/// use u_seq::collections::compact;
/// assert_eq!(compact(&[0, 1, 0, 2]), vec![1, 2]);
/// assert_eq!(compact(&[Some("a"), None, Some("")]), vec![Some("a")]);
/// ```
pub fn compact<T: Falsy + Clone>(data: &[T]) -> Vec<T> {
    compact_by(data, |x| !x.is_falsy())
}

/// Returns a copy of `data` keeping only elements for which `keep` is true.
pub fn compact_by<T, F>(data: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.iter().filter(|x| keep(x)).cloned().collect()
}
