//! Fixed-width baselines
//!
//! Operands that fit in a machine word are multiplied in the double
//! width type, which cannot overflow. Useful as a reference point when
//! comparing the digit-vector algorithms.
//!

use crate::*;


/// Multiply operands that fit in `u32`, computing in `u64`
///
/// Returns None if either operand exceeds `u32::MAX`.
pub fn multiply_native_u32(a: &DigitVec, b: &DigitVec) -> Option<DigitVec> {
    let x = u64::from(a.to_u32()?);
    let y = u64::from(b.to_u32()?);
    Some(DigitVec::from(x * y))
}

/// Multiply operands that fit in `u64`, computing in `u128`
///
/// Returns None if either operand exceeds `u64::MAX`.
///
/// ```
/// let a = decmul::parse("18446744073709551615").unwrap();
/// let square = decmul::multiply_native_u64(&a, &a).unwrap();
/// assert_eq!(square, decmul::multiply_karatsuba(&a, &a));
/// ```
pub fn multiply_native_u64(a: &DigitVec, b: &DigitVec) -> Option<DigitVec> {
    let x = u128::from(a.to_u64()?);
    let y = u128::from(b.to_u64()?);
    Some(DigitVec::from(x * y))
}
