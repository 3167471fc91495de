use num_traits::{CheckedRem, PrimInt, WrappingMul};

use crate::util::panic::{EmptyInputPanic, Panic};

/// Returns the greatest common divisor of `a` and `b`, using the Euclidean algorithm.
///
/// `gcd(0, 0)` is 0. Signed inputs never panic: `x % -1` is taken as 0, so
/// `gcd(i32::MIN, -1)` is -1.
///
/// # Examples
/// ```
/// # use toolkit::num::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0_u32, 5), 5);
/// ```
pub fn gcd<T: PrimInt + CheckedRem>(mut a: T, mut b: T) -> T {
    if a < b {
        (a, b) = (b, a);
    }

    while !b.is_zero() {
        (a, b) = (b, a.checked_rem(&b).unwrap_or_else(T::zero));
    }

    a
}

/// Returns the greatest common divisor of all items in `nums`.
///
/// # Panics
/// Panics if `nums` is empty.
#[track_caller]
pub fn gcd_all<T: PrimInt + CheckedRem>(nums: &[T]) -> T {
    match nums.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &v| gcd(v, acc)),
        None => EmptyInputPanic("gcd_all").panic(),
    }
}

/// Returns the least common multiple of `a` and `b`. `lcm(0, 0)` is 0.
///
/// `b` is divided by the GCD before multiplying by `a`, so the result only overflows if the LCM
/// itself doesn't fit in `T`. An LCM that doesn't fit wraps around instead of panicking.
///
/// # Examples
/// ```
/// # use toolkit::num::lcm;
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(0, 0), 0);
/// ```
pub fn lcm<T: PrimInt + CheckedRem + WrappingMul>(a: T, b: T) -> T {
    if a.is_zero() && b.is_zero() {
        return T::zero();
    }

    // Only `MIN / -1` can overflow, and it wraps back to `MIN`.
    let quotient = b.checked_div(&gcd(a, b)).unwrap_or(b);
    a.wrapping_mul(&quotient)
}

/// Returns the least common multiple of all items in `nums`.
///
/// # Panics
/// Panics if `nums` is empty.
#[track_caller]
pub fn lcm_all<T: PrimInt + CheckedRem + WrappingMul>(nums: &[T]) -> T {
    match nums.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &v| lcm(v, acc)),
        None => EmptyInputPanic("lcm_all").panic(),
    }
}
