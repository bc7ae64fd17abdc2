//!
//! Addition algorithms for decimal digits
//!

use crate::*;

use num_integer::div_rem;


/// Add `b` into `a` in place
///
/// `a` is extended with zeros to the length of `b`, and by one more
/// digit if a final carry remains. The result is not trimmed.
///
/// ```
/// let mut a = decmul::parse("999").unwrap();
/// let b = decmul::parse("1").unwrap();
/// decmul::add(&mut a, &b);
/// assert_eq!(a.digits(), &[0, 0, 0, 1]);
/// ```
///
pub fn add(a: &mut DigitVec, b: &DigitVec) {
    add_assign_digits(&mut a.digits, &b.digits);
}

/// Add digit slice `b` into digit vector `a` with carry
pub(crate) fn add_assign_digits(a: &mut Vec<u8>, b: &[u8]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut carry = 0u8;
    let mut b_digits = b.iter();
    for dest in a.iter_mut() {
        let b_digit = match b_digits.next() {
            Some(&d) => d,
            // b has ended and there is nothing left to carry
            None if carry == 0 => break,
            None => 0,
        };
        let (hi, lo) = div_rem(*dest + b_digit + carry, 10);
        *dest = lo;
        carry = hi;
    }

    if carry != 0 {
        a.push(carry);
    }
}
