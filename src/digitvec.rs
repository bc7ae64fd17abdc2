//! Vector of decimal digits, least significant first

use crate::*;


/// Non-negative integer stored as base-10 digits
///
/// `digits[0]` is the ones place, `digits[1]` the tens, and so on.
/// Every digit is in the range `0..=9`.
///
/// A vector is *canonical* when it has no zero digits at the
/// most-significant end, except the value zero which is exactly `[0]`.
/// Vectors produced by [`parse`] keep any leading zeros of the input
/// (as most-significant zero digits); every multiplier returns
/// canonical vectors.
///
/// Equality, ordering, and hashing compare numeric values, so
/// `[4, 2]` and `[4, 2, 0]` are equal.
///
#[derive(Clone)]
pub struct DigitVec {
    pub(crate) digits: Vec<u8>,
}

impl DigitVec {
    pub const RADIX: u8 = 10;

    /// construct from trusted vector of digits
    ///
    /// An empty vector becomes zero.
    pub(crate) fn from_vec(mut v: Vec<u8>) -> Self {
        debug_assert!(validate_digits(&v));
        if v.is_empty() {
            v.push(0);
        }
        Self { digits: v }
    }

    /// Construct from digits ordered least-significant first
    ///
    /// Returns None if the vector is empty or any digit is greater than 9.
    /// Most-significant zeros are kept.
    ///
    pub fn from_le_digits(digits: Vec<u8>) -> Option<Self> {
        if digits.is_empty() || !validate_digits(&digits) {
            return None;
        }
        Some(Self { digits })
    }

    /// Number of stored digits, including most-significant zeros
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Borrow the digits, least-significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Convert to inner vector
    pub fn into_vec(self) -> Vec<u8> {
        self.digits
    }

    /// Slice of digits with most-significant zeros removed
    ///
    /// Empty if the value is zero.
    pub(crate) fn significant_digits(&self) -> &[u8] {
        match self.digits.iter().rposition(|&d| d != 0) {
            Some(idx) => &self.digits[..=idx],
            None => &[],
        }
    }

    /// True if there are no superfluous most-significant zeros
    pub fn is_canonical(&self) -> bool {
        match self.digits.split_last() {
            None => false,
            Some((&0, rest)) => rest.is_empty(),
            Some(_) => true,
        }
    }

    /// Remove most-significant zeros, leaving at least one digit
    pub fn trim(&mut self) {
        trim_significant_zeros(&mut self.digits);
    }

    /// Return canonical version of this vector
    pub fn trimmed(mut self) -> Self {
        self.trim();
        self
    }
}

impl fmt::Debug for DigitVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitVec(\"")?;
        for d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        write!(f, "\")")
    }
}

/// Check every value is a decimal digit
pub(crate) fn validate_digits(v: &[u8]) -> bool {
    v.iter().all(|&d| d < DigitVec::RADIX)
}

/// Truncate most-significant zeros, keeping a single zero for zero
///
/// An empty vector is filled with a single zero.
pub(crate) fn trim_significant_zeros(v: &mut Vec<u8>) {
    let len = v.iter().rposition(|&d| d != 0).map(|idx| idx + 1).unwrap_or(1);
    v.truncate(len);
    if v.is_empty() {
        v.push(0);
    }
}
