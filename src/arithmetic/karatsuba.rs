//! Karatsuba multiplication
//!
//! Operands longer than the threshold are split at `half = n / 2`:
//!
//! ```text
//! a = a1 * 10^half + a0
//! b = b1 * 10^half + b0
//!
//! p0 = a0 * b0
//! p1 = a1 * b1
//! p2 = (a0 + a1) * (b0 + b1) - p0 - p1      (= a0*b1 + a1*b0)
//!
//! a * b = p1 * 10^(2*half) + p2 * 10^half + p0
//! ```
//!
//! Three half-size products replace four. Each call owns fresh copies
//! of its halves and sums, so sibling calls share nothing.
//!

use crate::*;
use super::addition::add_assign_digits;
use super::subtraction::sub_assign_digits;
use super::multiplication::multiply_digit_slices;


/// Shape of one Karatsuba call tree
///
/// Collected per call by [`multiply_karatsuba_traced`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KaratsubaTrace {
    /// Deepest recursion level reached (0 = no split)
    pub max_depth: usize,
    /// Number of calls that split their operands
    pub splits: usize,
    /// Number of calls answered by schoolbook multiplication
    pub base_cases: usize,
}


/// Multiply using [`DEFAULT_KARATSUBA_THRESHOLD`]
pub fn multiply_karatsuba(a: &DigitVec, b: &DigitVec) -> DigitVec {
    multiply_karatsuba_with_threshold(a, b, DEFAULT_KARATSUBA_THRESHOLD)
}

/// Multiply, falling back to schoolbook when the longer operand has
/// at most `threshold` digits
///
/// A threshold of zero is treated as one. The threshold affects
/// only the recursion depth, never the product.
///
pub fn multiply_karatsuba_with_threshold(a: &DigitVec, b: &DigitVec, threshold: usize) -> DigitVec {
    multiply_karatsuba_traced(a, b, threshold).0
}

/// Multiply and report the shape of the recursion
///
/// ```
/// let a = decmul::parse(&"12".repeat(32)).unwrap();
/// let (product, trace) = decmul::multiply_karatsuba_traced(&a, &a, 32);
///
/// assert_eq!(product, decmul::multiply_schoolbook(&a, &a));
/// assert_eq!(trace.max_depth, 1);
/// assert_eq!(trace.base_cases, 3);
/// ```
pub fn multiply_karatsuba_traced(a: &DigitVec, b: &DigitVec, threshold: usize) -> (DigitVec, KaratsubaTrace) {
    let mut trace = KaratsubaTrace::default();
    let digits = karatsuba(&a.digits, &b.digits, cmp::max(threshold, 1), 0, &mut trace);
    (DigitVec::from_vec(digits), trace)
}


fn karatsuba(
    a: &[u8],
    b: &[u8],
    threshold: usize,
    depth: usize,
    trace: &mut KaratsubaTrace,
) -> Vec<u8> {
    trace.max_depth = cmp::max(trace.max_depth, depth);

    let n = cmp::max(a.len(), b.len());
    if n <= threshold {
        trace.base_cases += 1;
        return multiply_digit_slices(a, b);
    }

    trace.splits += 1;
    let half = n / 2;

    let (a0, a1) = super::split_low_high(a, half);
    let (b0, b1) = super::split_low_high(b, half);

    let p0 = karatsuba(&a0, &b0, threshold, depth + 1, trace);
    let p1 = karatsuba(&a1, &b1, threshold, depth + 1, trace);

    // halves are owned by this call, so they become the sums
    let mut sum_a = a0;
    add_assign_digits(&mut sum_a, &a1);
    let mut sum_b = b0;
    add_assign_digits(&mut sum_b, &b1);

    let mut p2 = karatsuba(&sum_a, &sum_b, threshold, depth + 1, trace);
    // (a0 + a1)(b0 + b1) >= p0 + p1, so neither subtraction underflows
    sub_assign_digits(&mut p2, &p0);
    sub_assign_digits(&mut p2, &p1);

    let mut result = Accumulator::zeros(p0.len() + 2 * half);
    result.add_digits_at(0, &p0);
    result.add_digits_at(half, &p2);
    result.add_digits_at(2 * half, &p1);

    result.into_digit_vec().into_vec()
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("karatsuba.tests.rs");
}
