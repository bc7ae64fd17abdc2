//!
//! Subtraction algorithms for decimal digits
//!

use crate::*;


/// Subtract `b` from `a` in place, trimming the result
///
/// The numeric value of `a` must be greater than or equal to `b`.
/// This is checked only in debug builds; violating it in release
/// builds leaves an unspecified value in `a`. Use [`checked_subtract`]
/// when the ordering is not known.
///
/// ```
/// let mut a = decmul::parse("1000").unwrap();
/// let b = decmul::parse("1").unwrap();
/// decmul::subtract(&mut a, &b);
/// assert_eq!(a.digits(), &[9, 9, 9]);
/// ```
///
pub fn subtract(a: &mut DigitVec, b: &DigitVec) {
    debug_assert!(*a >= *b, "subtract requires a >= b ({:?} < {:?})", a, b);
    sub_assign_digits(&mut a.digits, &b.digits);
}

/// Return `a - b`, or None if `b` is greater than `a`
pub fn checked_subtract(a: &DigitVec, b: &DigitVec) -> Option<DigitVec> {
    if a < b {
        return None;
    }
    let mut diff = a.clone();
    sub_assign_digits(&mut diff.digits, &b.digits);
    Some(diff)
}

/// Subtract digit slice `b` from digit vector `a` with borrow
///
/// Requires value(a) >= value(b). Digits of `b` beyond the length
/// of `a` must be zero.
pub(crate) fn sub_assign_digits(a: &mut Vec<u8>, b: &[u8]) {
    debug_assert!(b.iter().skip(a.len()).all(|&d| d == 0));

    let mut borrow = 0u8;
    let mut b_digits = b.iter();
    for dest in a.iter_mut() {
        let rhs = match b_digits.next() {
            Some(&d) => d + borrow,
            None if borrow == 0 => break,
            None => borrow,
        };
        if *dest >= rhs {
            *dest -= rhs;
            borrow = 0;
        } else {
            *dest = *dest + 10 - rhs;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "subtraction underflow");

    crate::digitvec::trim_significant_zeros(a);
}


#[cfg(test)]
mod test_subtract {
    use super::*;

    include!("subtraction.tests.rs");
}
