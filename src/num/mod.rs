//! Numeric helpers: the [`Number`] bound shared by the summing functions, [`abs`], and the GCD/LCM
//! family for integers.

mod gcd;

pub use gcd::*;

use num_traits::Num;

/// Every primitive integer and float type.
pub trait Number: Num + Copy + PartialOrd {}

impl<T: Num + Copy + PartialOrd> Number for T {}

/// Returns the absolute value of `a`. For unsigned types this is always `a`.
///
/// Like `-a`, this overflows for the minimum value of a signed integer.
///
/// # Examples
/// ```
/// # use toolkit::num::abs;
/// assert_eq!(abs(-3), 3);
/// assert_eq!(abs(2.5), 2.5);
/// assert_eq!(abs(7_u8), 7);
/// ```
pub fn abs<T: Number>(a: T) -> T {
    if a < T::zero() {
        T::zero() - a
    } else {
        a
    }
}
