//! Arithmetic aggregates over numeric sequences.
//!
//! Empty input is a defined outcome, not an error: additive aggregates
//! (`sum`, `average`) return `0.0`, order statistics (`median`, `min`,
//! `max`) return `None`.
//!
//! # Algorithms
//!
//! - **Sum/Average**: Neumaier compensated summation, so the result does
//!   not drift with sequence length.
//! - **Median**: sorts a private copy; the caller's slice keeps its order.

/// Returns the total of all elements, or `0.0` for an empty slice.
///
/// NaN and infinities propagate as in ordinary `f64` addition.
///
/// # Examples
/// ```
/// use u_seq::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    kahan_sum(data)
}

/// Returns the arithmetic mean, or `0.0` for an empty slice.
///
/// The empty case is mathematically undefined; `0.0` is returned so callers
/// never have to pre-check for emptiness.
///
/// # Examples
/// ```
/// use u_seq::stats::average;
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(average(&[]), 0.0);
/// ```
pub fn average(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    kahan_sum(data) / data.len() as f64
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_seq::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// assert_eq!(min(&[]), None);
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    extreme(data, f64::min)
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_seq::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(5.0));
/// ```
pub fn max(data: &[f64]) -> Option<f64> {
    extreme(data, f64::max)
}

/// Folds `data` with `pick`, seeded by the first element.
///
/// `None` for empty input or as soon as a NaN is seen.
fn extreme(data: &[f64], pick: fn(f64, f64) -> f64) -> Option<f64> {
    let (&head, rest) = data.split_first()?;
    if head.is_nan() {
        return None;
    }
    rest.iter()
        .try_fold(head, |best, &x| (!x.is_nan()).then(|| pick(best, x)))
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy ascending, then returns the middle element, or the mean of
/// the two middle elements for even-length data.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_seq::stats::median;
/// assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(midpoint(sorted[mid - 1], sorted[mid]))
    }
}

/// Mean of two values that stays within `[lo, hi]` when `lo + hi` overflows.
fn midpoint(lo: f64, hi: f64) -> f64 {
    let total = lo + hi;
    if total.is_finite() {
        total / 2.0
    } else {
        lo / 2.0 + hi / 2.0
    }
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation.
///
/// A running compensation term recovers the low-order bits lost when adding
/// operands of very different magnitude, in either order. Once the running
/// total leaves the finite range the compensation is meaningless, so the
/// plain total (`±inf` or NaN) is returned as ordinary addition would.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_seq::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
/// assert_eq!(kahan_sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let (total, lost) = data.iter().fold((0.0_f64, 0.0_f64), |(total, lost), &x| {
        let next = total + x;
        let (big, small) = if total.abs() >= x.abs() {
            (total, x)
        } else {
            (x, total)
        };
        (next, lost + ((big - next) + small))
    });
    if total.is_finite() {
        total + lost
    } else {
        total
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- sum ---

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_negative() {
        assert_eq!(sum(&[-1.5, 0.5, -2.0]), -3.0);
    }

    #[test]
    fn test_sum_nan_propagates() {
        assert!(sum(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_sum_infinite() {
        assert_eq!(sum(&[f64::INFINITY]), f64::INFINITY);
        assert_eq!(sum(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert_eq!(sum(&[f64::NEG_INFINITY, -3.0]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert_eq!(sum(&[-f64::MAX, -f64::MAX]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sum_opposite_infinities() {
        assert!(sum(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_sum_precision() {
        // Naive left-to-right addition loses the 1.0
        let result = sum(&[1e16, 1.0, -1e16]);
        assert!((result - 1.0).abs() < 1e-10, "got {result}");
    }

    // --- average ---

    #[test]
    fn test_average_basic() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average_infinite() {
        let data = [f64::INFINITY, 1.0];
        assert_eq!(average(&data), f64::INFINITY);
        assert!(min(&data).unwrap() <= average(&data));
        assert!(average(&data) <= max(&data).unwrap());
    }

    #[test]
    fn test_average_single() {
        assert_eq!(average(&[-7.0]), -7.0);
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(9.0));
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_min_max_nan() {
        assert_eq!(min(&[1.0, f64::NAN]), None);
        assert_eq!(max(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn test_min_max_single() {
        assert_eq!(min(&[-0.5]), Some(-0.5));
        assert_eq!(max(&[-0.5]), Some(-0.5));
        assert_eq!(min(&[f64::NAN]), None);
    }

    #[test]
    fn test_min_max_infinite() {
        let v = [f64::NEG_INFINITY, 0.0, f64::INFINITY];
        assert_eq!(min(&v), Some(f64::NEG_INFINITY));
        assert_eq!(max(&v), Some(f64::INFINITY));
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_median_large_middle_values() {
        assert_eq!(median(&[f64::MAX, f64::MAX]), Some(f64::MAX));
        assert_eq!(median(&[f64::MAX, -f64::MAX]), Some(0.0));
        let tiny = f64::from_bits(1);
        assert_eq!(median(&[tiny, tiny]), Some(tiny));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_nan() {
        assert_eq!(median(&[1.0, f64::NAN, 3.0]), None);
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![5.0, 1.0, 4.0];
        let _ = median(&data);
        assert_eq!(data, vec![5.0, 1.0, 4.0]);
    }
}
