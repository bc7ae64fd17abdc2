//! Schoolbook multiplication
//!
//! Every digit pair `a[i] * b[j]` is accumulated into position `i + j`.
//! Carries are either resolved immediately after each update
//! ([`CarryMode::Inline`]) or left in wide accumulator cells and
//! resolved by a single normalization pass ([`CarryMode::Deferred`]).
//!

use crate::*;
use crate::tables::{table_add_at, table_mul};

use num_integer::div_rem;


/// How single-digit products are computed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitProduct {
    /// Machine multiplication
    Direct,
    /// Lookup in the 10x10 multiply table; inline carries use the
    /// 10x10 addition table
    Table,
}

impl Default for DigitProduct {
    fn default() -> Self {
        DigitProduct::Direct
    }
}

/// When carries are propagated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarryMode {
    /// After every cell update; cells never leave `0..=9`
    Inline,
    /// One pass after all partial products are summed
    Deferred,
}

impl Default for CarryMode {
    fn default() -> Self {
        CarryMode::Inline
    }
}


/// Multiply with direct digit products and inline carries
///
/// ```
/// let a = decmul::parse("123").unwrap();
/// let b = decmul::parse("456").unwrap();
/// assert_eq!(decmul::multiply_schoolbook(&a, &b).to_string(), "56088");
/// ```
pub fn multiply_schoolbook(a: &DigitVec, b: &DigitVec) -> DigitVec {
    DigitVec::from_vec(multiply_digit_slices(&a.digits, &b.digits))
}

/// Multiply using the given digit-product and carry strategies
///
/// All combinations produce the same canonical product.
pub fn multiply_schoolbook_with(
    a: &DigitVec,
    b: &DigitVec,
    product: DigitProduct,
    carry: CarryMode,
) -> DigitVec {
    match (product, carry) {
        (DigitProduct::Direct, CarryMode::Inline) => multiply_schoolbook(a, b),
        (DigitProduct::Table, CarryMode::Inline) => {
            DigitVec::from_vec(multiply_digit_slices_table(&a.digits, &b.digits))
        }
        (product, CarryMode::Deferred) => {
            accumulate_digit_products(&a.digits, &b.digits, product).into_digit_vec()
        }
    }
}


pub(crate) fn multiply_digit_slices(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    multiply_digit_slices_into(a, b, &mut result);
    return result;
}

/// Fill result with trimmed product of a and b, resolving carries inline
#[inline]
pub(crate) fn multiply_digit_slices_into(a: &[u8], b: &[u8], result: &mut Vec<u8>) {
    result.clear();
    result.resize(a.len() + b.len(), 0);
    for (ia, &digit_a) in a.iter().enumerate() {
        if digit_a == 0 {
            continue;
        }

        for (ib, &digit_b) in b.iter().enumerate() {
            if digit_b == 0 {
                continue;
            }
            let mut idx = ia + ib;

            // at most 81 + 9
            let (mut carry, digit) = div_rem(digit_a * digit_b + result[idx], 10);
            result[idx] = digit;

            while carry != 0 {
                idx += 1;
                let (hi, lo) = div_rem(result[idx] + carry, 10);
                result[idx] = lo;
                carry = hi;
            }
        }
    }

    crate::digitvec::trim_significant_zeros(result);
}

/// Product using the multiply table, carries resolved through the addition table
pub(crate) fn multiply_digit_slices_table(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = vec![0; a.len() + b.len()];
    for (ia, &digit_a) in a.iter().enumerate() {
        for (ib, &digit_b) in b.iter().enumerate() {
            let prod = table_mul(digit_a, digit_b);
            table_add_at(&mut result, ia + ib, u64::from(prod));
        }
    }
    crate::digitvec::trim_significant_zeros(&mut result);
    return result;
}

/// Sum all digit products into an unnormalized accumulator
pub(crate) fn accumulate_digit_products(a: &[u8], b: &[u8], product: DigitProduct) -> Accumulator {
    let mut acc = Accumulator::zeros(a.len() + b.len());
    for (ia, &digit_a) in a.iter().enumerate() {
        for (ib, &digit_b) in b.iter().enumerate() {
            let prod = match product {
                DigitProduct::Direct => digit_a * digit_b,
                DigitProduct::Table => table_mul(digit_a, digit_b),
            };
            acc.add_at(ia + ib, u64::from(prod));
        }
    }
    acc
}
