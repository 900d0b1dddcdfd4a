//! Deduplication, removal and union.
//!
//! Equality is `Hash + Eq`, so two elements are duplicates exactly when a
//! `HashSet` would treat them as the same entry. Output order is always
//! the order of first occurrence.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// Returns the distinct elements of `data` in order of first occurrence.
///
/// # Examples
/// ```
/// use u_seq::collections::unique;
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique<T: Hash + Eq + Clone>(data: &[T]) -> Vec<T> {
    data.iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Returns `true` if no two elements of `data` are equal.
///
/// Stops at the first repeated element.
pub fn is_unique<T: Hash + Eq>(data: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(data.len());
    data.iter().all(|x| seen.insert(x))
}

/// Deduplicates by a computed key, keeping the **last** element per key.
///
/// Output is ordered by the first appearance of each key; a later element
/// with the same key replaces the earlier one in place.
///
/// # Examples
/// ```
/// use u_seq::collections::distinct_by;
/// let rows = [(1, "a"), (2, "x"), (1, "b")];
/// assert_eq!(distinct_by(&rows, |r| r.0), vec![(1, "b"), (2, "x")]);
/// ```
pub fn distinct_by<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut latest: IndexMap<K, &T> = IndexMap::with_capacity(data.len());
    for item in data {
        latest.insert(key(item), item);
    }
    latest.into_values().cloned().collect()
}

/// Returns a copy of `data` with every element equal to `value` removed.
pub fn remove<T: PartialEq + Clone>(data: &[T], value: &T) -> Vec<T> {
    data.iter().filter(|x| *x != value).cloned().collect()
}

/// Set union of two sequences, ordered by first occurrence across `a` then `b`.
///
/// # Examples
/// ```
/// use u_seq::collections::union;
/// assert_eq!(union(&[1, 2, 3], &[2, 3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn union<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .chain(b)
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unique_has_each_value_once(data in proptest::collection::vec(0_u8..20, 0..60)) {
            let out = unique(&data);
            prop_assert!(is_unique(&out));
            for x in &data {
                prop_assert!(out.contains(x));
            }
            // first-occurrence order
            let positions: Vec<usize> = out
                .iter()
                .map(|x| data.iter().position(|y| y == x).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn union_is_unique_of_concat(
            a in proptest::collection::vec(0_u8..10, 0..20),
            b in proptest::collection::vec(0_u8..10, 0..20),
        ) {
            let concat: Vec<u8> = a.iter().chain(&b).copied().collect();
            prop_assert_eq!(union(&a, &b), unique(&concat));
        }

        #[test]
        fn remove_leaves_no_match(
            data in proptest::collection::vec(0_u8..5, 0..40),
            value in 0_u8..5,
        ) {
            let out = remove(&data, &value);
            prop_assert!(!out.contains(&value));
            prop_assert_eq!(out.len(), data.iter().filter(|&&x| x != value).count());
        }
    }
}
