//! Table-driven "Vedic" (vertically and crosswise) multiplication
//!
//! Two explicit sweeps:
//!
//! 1. *multiply-and-accumulate*: each output column `k` receives the sum
//!    of the table products `a[j] * b[k - j]`, leaving an unnormalized
//!    column buffer.
//! 2. *carry*: each column sum is folded into the result one decimal
//!    digit at a time through the addition table, counting every
//!    addition that overflows.
//!
//! The operation counts are returned with the product; nothing is
//! shared between calls.
//!

use crate::*;
use crate::tables::{table_add_at, table_mul};

use num_integer::div_rem;


/// Single-digit operation counts of one [`multiply_vedic`] call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MetricCounts {
    /// Table multiplications; always `n * m` for operands of
    /// length `n` and `m`
    pub multiply_count: usize,
    /// Additions combining the products within each column
    /// (`n * m - (n + m - 1)`)
    ///
    /// A column of `t` products takes `t - 1` additions. This is used
    /// instead of the cruder `multiply_count - 2`, which goes negative
    /// for single-digit operands.
    pub base_add_count: usize,
    /// Additions in the carry sweep that produced a carry
    pub carry_add_count: usize,
}

/// Product and operation counts returned by [`multiply_vedic`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VedicProduct {
    pub product: DigitVec,
    pub counts: MetricCounts,
}

impl From<VedicProduct> for (DigitVec, MetricCounts) {
    fn from(v: VedicProduct) -> Self {
        (v.product, v.counts)
    }
}


/// Multiply with lookup tables, reporting single-digit operation counts
///
/// Operand lengths are taken as stored, most-significant zeros included.
///
/// ```
/// let a = decmul::parse("123").unwrap();
/// let b = decmul::parse("456").unwrap();
/// let result = decmul::multiply_vedic(&a, &b);
///
/// assert_eq!(result.product.to_string(), "56088");
/// assert_eq!(result.counts.multiply_count, 9);
/// assert_eq!(result.counts.base_add_count, 4);
/// assert_eq!(result.counts.carry_add_count, 1);
/// ```
pub fn multiply_vedic(a: &DigitVec, b: &DigitVec) -> VedicProduct {
    let mut counts = MetricCounts::default();
    let columns = accumulate_columns(&a.digits, &b.digits, &mut counts);
    let product = propagate_column_carries(columns, &mut counts);
    VedicProduct { product, counts }
}

/// First sweep: sum crosswise table products per output column
fn accumulate_columns(a: &[u8], b: &[u8], counts: &mut MetricCounts) -> Accumulator {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return Accumulator::zeros(1);
    }

    let mut columns = Accumulator::zeros(n + m - 1);
    for k in 0..(n + m - 1) {
        let lo = k.saturating_sub(m - 1);
        let hi = cmp::min(k, n - 1);

        let sum: u64 = (lo..=hi).map(|j| u64::from(table_mul(a[j], b[k - j]))).sum();
        columns.add_at(k, sum);

        let terms = hi - lo + 1;
        counts.multiply_count += terms;
        counts.base_add_count += terms - 1;
    }
    columns
}

/// Second sweep: fold column sums into decimal digits
fn propagate_column_carries(columns: Accumulator, counts: &mut MetricCounts) -> DigitVec {
    let mut digits = vec![0u8; columns.len() + 1];
    for (k, &sum) in columns.cells().iter().enumerate() {
        counts.carry_add_count += table_add_at(&mut digits, k, sum);
    }
    counts.carry_add_count += sweep_wide_digits(&mut digits);
    debug_assert!(digits.iter().all(|&d| d < 10));

    crate::digitvec::trim_significant_zeros(&mut digits);
    DigitVec::from_vec(digits)
}

/// Final check: reduce any cell still holding 10 or more
///
/// Returns the number of cells that passed a carry upward. The table
/// pass leaves every cell in range, so this finds nothing there.
fn sweep_wide_digits(digits: &mut Vec<u8>) -> usize {
    let mut carries = 0;
    let mut idx = 0;
    while idx < digits.len() {
        if digits[idx] >= 10 {
            let (hi, lo) = div_rem(digits[idx], 10);
            digits[idx] = lo;
            if idx + 1 == digits.len() {
                digits.push(0);
            }
            digits[idx + 1] += hi;
            carries += 1;
        }
        idx += 1;
    }
    carries
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("vedic.tests.rs");
}
