use crate::util::error::CapacityOverflow;

/// The capacity used when growing a Vector that has never allocated.
pub const MIN_CAP: usize = 1;

/// The multiplier applied to the length of a full Vector when it grows.
pub const GROWTH_FACTOR: usize = 2;

/// Calculates the capacity a full Vector should grow to before accepting one more element.
///
/// - A Vector with no capacity grows to [`MIN_CAP`].
/// - Any other Vector grows to [`GROWTH_FACTOR`] times its current *length*.
///
/// Growth is keyed on length rather than capacity. The two are equal whenever a push or insert
/// needs to grow, but the function itself doesn't assume it: `next_cap(3, 100)` is `6`, which
/// is smaller than the capacity it started from. Callers must only ask for growth when
/// `len == cap`.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the new capacity can't be represented.
///
/// # Examples
/// ```
/// # use simple_vector::collections::contiguous::vector::next_cap;
/// assert_eq!(next_cap(0, 0), Ok(1));
/// assert_eq!(next_cap(1, 1), Ok(2));
/// assert_eq!(next_cap(4, 4), Ok(8));
/// assert_eq!(next_cap(3, 100), Ok(6));
/// assert!(next_cap(usize::MAX, usize::MAX).is_err());
/// ```
pub const fn next_cap(len: usize, cap: usize) -> Result<usize, CapacityOverflow> {
    if cap == 0 {
        return Ok(MIN_CAP);
    }

    match len.checked_mul(GROWTH_FACTOR) {
        Some(new_cap) => Ok(new_cap),
        None => Err(CapacityOverflow),
    }
}
