//! Precomputed single-digit multiply and add tables

use crate::stdlib::vec::Vec;

/// `MUL_TABLE[a][b] == a * b` for decimal digits
pub(crate) static MUL_TABLE: [[u8; 10]; 10] = [
    [0, 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [0, 1,  2,  3,  4,  5,  6,  7,  8,  9],
    [0, 2,  4,  6,  8, 10, 12, 14, 16, 18],
    [0, 3,  6,  9, 12, 15, 18, 21, 24, 27],
    [0, 4,  8, 12, 16, 20, 24, 28, 32, 36],
    [0, 5, 10, 15, 20, 25, 30, 35, 40, 45],
    [0, 6, 12, 18, 24, 30, 36, 42, 48, 54],
    [0, 7, 14, 21, 28, 35, 42, 49, 56, 63],
    [0, 8, 16, 24, 32, 40, 48, 56, 64, 72],
    [0, 9, 18, 27, 36, 45, 54, 63, 72, 81],
];

/// `ADD_TABLE[a][b] == a + b` for decimal digits
pub(crate) static ADD_TABLE: [[u8; 10]; 10] = [
    [0,  1,  2,  3,  4,  5,  6,  7,  8,  9],
    [1,  2,  3,  4,  5,  6,  7,  8,  9, 10],
    [2,  3,  4,  5,  6,  7,  8,  9, 10, 11],
    [3,  4,  5,  6,  7,  8,  9, 10, 11, 12],
    [4,  5,  6,  7,  8,  9, 10, 11, 12, 13],
    [5,  6,  7,  8,  9, 10, 11, 12, 13, 14],
    [6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
    [7,  8,  9, 10, 11, 12, 13, 14, 15, 16],
    [8,  9, 10, 11, 12, 13, 14, 15, 16, 17],
    [9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
];

#[inline]
pub(crate) fn table_mul(a: u8, b: u8) -> u8 {
    MUL_TABLE[a as usize][b as usize]
}

/// Add `value` into `digits` starting at position `idx`, one decimal
/// digit at a time through the addition table
///
/// Digits of `digits` must already be in `0..=9`; they stay in range.
/// The vector grows if the sum runs past its most significant digit.
///
/// Returns the number of table additions that produced a carry.
///
pub(crate) fn table_add_at(digits: &mut Vec<u8>, mut idx: usize, mut value: u64) -> usize {
    let mut carries = 0;
    while value != 0 {
        if idx == digits.len() {
            digits.push(0);
        }
        let digit = (value % 10) as usize;
        let sum = ADD_TABLE[digits[idx] as usize][digit];
        value /= 10;
        if sum >= 10 {
            carries += 1;
            digits[idx] = sum - 10;
            value += 1;
        } else {
            digits[idx] = sum;
        }
        idx += 1;
    }
    carries
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mul_table_matches_arithmetic() {
        for a in 0..10u8 {
            for b in 0..10u8 {
                assert_eq!(table_mul(a, b), a * b);
                assert_eq!(ADD_TABLE[a as usize][b as usize], a + b);
            }
        }
    }

    #[test]
    fn table_add_at_no_carry() {
        let mut digits = vec![1, 2, 3];
        let carries = table_add_at(&mut digits, 1, 54);
        assert_eq!(digits, vec![1, 6, 8]);
        assert_eq!(carries, 0);
    }

    #[test]
    fn table_add_at_carry_chain() {
        // 999 + 1
        let mut digits = vec![9, 9, 9];
        let carries = table_add_at(&mut digits, 0, 1);
        assert_eq!(digits, vec![0, 0, 0, 1]);
        assert_eq!(carries, 3);
    }

    #[test]
    fn table_add_at_zero_is_noop() {
        let mut digits = vec![7, 0];
        assert_eq!(table_add_at(&mut digits, 0, 0), 0);
        assert_eq!(digits, vec![7, 0]);
    }

    #[test]
    fn table_add_at_wide_value() {
        let mut digits = vec![0; 2];
        let carries = table_add_at(&mut digits, 1, 81 * 7);
        assert_eq!(digits, vec![0, 7, 6, 5]);
        assert_eq!(carries, 0);
    }
}
