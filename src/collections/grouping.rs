//! Grouping and counting by a key function.
//!
//! Both operations return an [`IndexMap`], so iteration yields keys in the
//! order they were first produced.

use std::hash::Hash;

use indexmap::IndexMap;

/// Groups elements by the key `key` computes for each.
///
/// Elements keep their relative order within each group.
///
/// # Examples
/// ```
/// use u_seq::collections::group_by;
/// let groups = group_by(&[1, 2, 3, 4, 5], |x| x % 2 == 0);
/// assert_eq!(groups[&false], vec![1, 3, 5]);
/// assert_eq!(groups[&true], vec![2, 4]);
/// ```
pub fn group_by<T, K, F>(data: &[T], mut key: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in data {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Counts elements per computed key.
///
/// # Examples
/// ```
/// use u_seq::collections::count_by;
/// let counts = count_by(&["apple", "avocado", "banana"], |s| s.chars().next());
/// assert_eq!(counts[&Some('a')], 2);
/// assert_eq!(counts[&Some('b')], 1);
/// ```
pub fn count_by<T, K, F>(data: &[T], mut key: F) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for item in data {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}
