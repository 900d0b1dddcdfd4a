//! Random selection and shuffling.
//!
//! Every randomized operation comes in two forms: a `*_with` function that
//! takes an injected generator (`R: Rng`), and a convenience function that
//! draws from the thread-local generator returned by [`rand::rng`]. Each
//! thread owns its generator, so concurrent callers never share state.
//!
//! # Reproducibility
//!
//! For reproducible results, pass a generator from [`create_rng`] with a
//! fixed seed. The underlying algorithm (SmallRng) is deterministic for a
//! given seed on the same platform.

use num_traits::PrimInt;
use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_seq::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    log::trace!("seeding SmallRng with {seed}");
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Iterates backwards, swapping each position with a uniformly chosen
/// earlier (or same) position. Each of the n! permutations is equally
/// likely given an unbiased generator.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a uniformly shuffled copy of `data`, leaving `data` untouched.
///
/// # Examples
/// ```
/// use u_seq::random::{create_rng, shuffled_with};
/// let data = [1, 2, 3, 4, 5];
/// let mut rng = create_rng(7);
/// let mut out = shuffled_with(&data, &mut rng);
/// out.sort();
/// assert_eq!(out, data);
/// ```
pub fn shuffled_with<T: Clone, R: Rng>(data: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = data.to_vec();
    shuffle(&mut copy, rng);
    copy
}

/// [`shuffled_with`] using the thread-local generator.
pub fn shuffled<T: Clone>(data: &[T]) -> Vec<T> {
    shuffled_with(data, &mut rand::rng())
}

/// Picks one element uniformly at random.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_seq::random::{create_rng, choose_with};
/// let mut rng = create_rng(1);
/// let picked = choose_with(&["a", "b", "c"], &mut rng).unwrap();
/// assert!(["a", "b", "c"].contains(picked));
/// assert_eq!(choose_with::<i32, _>(&[], &mut rng), None);
/// ```
pub fn choose_with<'a, T, R: Rng>(data: &'a [T], rng: &mut R) -> Option<&'a T> {
    if data.is_empty() {
        return None;
    }
    data.get(rng.random_range(0..data.len()))
}

/// [`choose_with`] using the thread-local generator.
pub fn choose<T>(data: &[T]) -> Option<&T> {
    choose_with(data, &mut rand::rng())
}

/// Draws an integer uniformly from the inclusive span `[min(data), max(data)]`.
///
/// This samples the numeric range covered by the sequence, not the
/// sequence itself: with `data = [1, 10]` every value from 1 to 10 is
/// equally likely. Use [`choose_with`] to pick an existing element.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_seq::random::{create_rng, random_int_in_range_with};
/// let mut rng = create_rng(3);
/// let x = random_int_in_range_with(&[10, 2, 6], &mut rng).unwrap();
/// assert!((2..=10).contains(&x));
/// ```
pub fn random_int_in_range_with<T, R>(data: &[T], rng: &mut R) -> Option<T>
where
    T: PrimInt + SampleUniform,
    R: Rng,
{
    let lo = *data.iter().min()?;
    let hi = *data.iter().max()?;
    Some(rng.random_range(lo..=hi))
}

/// [`random_int_in_range_with`] using the thread-local generator.
pub fn random_int_in_range<T>(data: &[T]) -> Option<T>
where
    T: PrimInt + SampleUniform,
{
    random_int_in_range_with(data, &mut rand::rng())
}

/// Draws an integer uniformly from `[ceil(min(data)), floor(max(data))]`.
///
/// The real-valued counterpart of [`random_int_in_range_with`], for the
/// same `&[f64]` sequences the [`stats`](crate::stats) functions take.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN, if no integer lies between
///   the minimum and maximum (e.g. `[0.2, 0.7]`), or if the span reaches
///   beyond the `i64` range.
///
/// # Examples
/// ```
/// use u_seq::random::{create_rng, random_int_in_span_with};
/// let mut rng = create_rng(4);
/// let x = random_int_in_span_with(&[0.5, 3.9, 2.0], &mut rng).unwrap();
/// assert!((1..=3).contains(&x));
/// assert_eq!(random_int_in_span_with(&[0.2, 0.7], &mut rng), None);
/// ```
pub fn random_int_in_span_with<R: Rng>(data: &[f64], rng: &mut R) -> Option<i64> {
    let lo = crate::stats::min(data)?.ceil();
    let hi = crate::stats::max(data)?.floor();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if lo > hi || lo < i64::MIN as f64 || hi >= i64::MAX as f64 {
        return None;
    }
    Some(rng.random_range(lo as i64..=hi as i64))
}

/// [`random_int_in_span_with`] using the thread-local generator.
pub fn random_int_in_span(data: &[f64]) -> Option<i64> {
    random_int_in_span_with(data, &mut rand::rng())
}

// ============================================================================
// Tests
// ============================================================================
