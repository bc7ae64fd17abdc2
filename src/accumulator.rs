//! Unnormalized wide-cell accumulator and the carry normalization pass
//!
//! Partial products are summed into cells that may transiently exceed 9.
//! The only way out of an [`Accumulator`] is a normalization pass, which
//! returns a canonical [`DigitVec`].
//!

use crate::*;

use num_integer::div_rem;


/// Sequence of wide cells, least significant first, with values not yet
/// reduced to decimal digits
///
/// Cells are summed with plain `u64` addition; callers bound their
/// inputs (at most `81 * min(n, m)` per cell for digit products).
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Accumulator {
    cells: Vec<u64>,
}

impl Accumulator {
    /// allocate with n cells and fill with zeros
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            cells: vec![0; n],
        }
    }

    /// Number of cells
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Borrow the raw cell values
    pub(crate) fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Add value into cell at idx, growing the accumulator if needed
    pub(crate) fn add_at(&mut self, idx: usize, value: u64) {
        if idx >= self.cells.len() {
            self.cells.resize(idx + 1, 0);
        }
        self.cells[idx] += value;
    }

    /// Add each digit into the cells starting at offset
    pub(crate) fn add_digits_at(&mut self, offset: usize, digits: &[u8]) {
        let end = offset + digits.len();
        if end > self.cells.len() {
            self.cells.resize(end, 0);
        }
        for (cell, &d) in self.cells[offset..end].iter_mut().zip(digits) {
            *cell += u64::from(d);
        }
    }

    /// Run the normalization pass, discarding the carry count
    pub(crate) fn into_digit_vec(self) -> DigitVec {
        self.normalize().0
    }

    /// Reduce every cell to a decimal digit
    ///
    /// Single sweep from least to most significant cell: each cell
    /// absorbs the incoming carry, keeps the ones digit, and passes
    /// the rest upward. Remaining carry extends the result.
    ///
    /// Returns the canonical digits and the number of positions that
    /// passed a carry upward. An already normalized accumulator comes
    /// back unchanged with zero carries.
    ///
    pub(crate) fn normalize(self) -> (DigitVec, usize) {
        let mut digits = Vec::with_capacity(self.cells.len() + 1);
        let mut carries = 0;
        // a full u64 cell plus carry does not fit in u64
        let mut carry = 0u128;

        for cell in self.cells {
            let (hi, lo) = div_rem(u128::from(cell) + carry, 10);
            digits.push(lo as u8);
            if hi != 0 {
                carries += 1;
            }
            carry = hi;
        }

        while carry != 0 {
            let (hi, lo) = div_rem(carry, 10);
            digits.push(lo as u8);
            carry = hi;
        }

        crate::digitvec::trim_significant_zeros(&mut digits);
        (DigitVec::from_vec(digits), carries)
    }
}

impl From<&DigitVec> for Accumulator {
    fn from(v: &DigitVec) -> Self {
        Self {
            cells: v.digits.iter().map(|&d| u64::from(d)).collect(),
        }
    }
}

impl From<Vec<u64>> for Accumulator {
    fn from(cells: Vec<u64>) -> Self {
        Self { cells }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: [$($c:literal),*] => $expected:literal, carries $carries:literal) => {
            paste! {
                #[test]
                fn [< normalize_ $name >]() {
                    let cells: Vec<u64> = vec![$($c),*];
                    let acc = Accumulator::from(cells);
                    let (digits, carries) = acc.normalize();
                    assert_eq!(format(&digits), $expected);
                    assert!(digits.is_canonical());
                    assert_eq!(carries, $carries);
                }
            }
        };
    }

    impl_case!(empty: [] => "0", carries 0);
    impl_case!(zeros: [0, 0, 0] => "0", carries 0);
    impl_case!(already_normal: [8, 8, 0, 6, 5] => "56088", carries 0);
    // 123 * 456 column sums
    impl_case!(columns_123_456: [18, 27, 28, 13, 4, 0] => "56088", carries 4);
    impl_case!(single_large_cell: [81] => "81", carries 1);
    impl_case!(chain: [90, 9, 9] => "1080", carries 3);
    impl_case!(wide: [123456789] => "123456789", carries 1);

    #[test]
    fn normalize_is_idempotent() {
        let acc = Accumulator::from(vec![99u64, 14, 0, 27]);
        let (once, _) = acc.normalize();
        let (twice, carries) = Accumulator::from(&once).normalize();
        assert_eq!(once.digits(), twice.digits());
        assert_eq!(carries, 0);
    }

    #[test]
    fn normalize_full_width_cells() {
        let acc = Accumulator::from(vec![u64::MAX, u64::MAX]);
        let (digits, carries) = acc.normalize();
        // u64::MAX * 11
        assert_eq!(format(&digits), "202914184810805067765");
        assert_eq!(carries, 2);
    }

    #[test]
    fn add_at_grows() {
        let mut acc = Accumulator::zeros(2);
        acc.add_at(4, 7);
        assert_eq!(acc.cells(), &[0, 0, 0, 0, 7]);
    }

    #[test]
    fn add_digits_at_offset() {
        let mut acc = Accumulator::zeros(3);
        acc.add_digits_at(0, &[9, 9, 9]);
        acc.add_digits_at(2, &[9, 9]);
        assert_eq!(acc.cells(), &[9, 9, 18, 9]);
        assert_eq!(format(&acc.into_digit_vec()), "10899");
    }
}
