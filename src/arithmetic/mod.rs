//! arithmetic routines
//!
//! Primitives ([`add`], [`subtract`]) and the multiplication strategies.
//! Internal routines work on little-endian digit slices; the public
//! functions wrap them for [`DigitVec`].

use crate::*;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod karatsuba;
pub(crate) mod vedic;
pub(crate) mod native;

pub use self::addition::add;
pub use self::subtraction::{subtract, checked_subtract};
pub use self::multiplication::{
    multiply_schoolbook,
    multiply_schoolbook_with,
    DigitProduct,
    CarryMode,
};
pub use self::karatsuba::{
    multiply_karatsuba,
    multiply_karatsuba_with_threshold,
    multiply_karatsuba_traced,
    KaratsubaTrace,
};
pub use self::vedic::{multiply_vedic, VedicProduct, MetricCounts};
pub use self::native::{multiply_native_u32, multiply_native_u64};


/// Split digits into fresh (low, high) vectors at position `at`
///
/// If the slice is shorter than `at` the high part is empty.
pub(crate) fn split_low_high(digits: &[u8], at: usize) -> (Vec<u8>, Vec<u8>) {
    let at = cmp::min(at, digits.len());
    let (lo, hi) = digits.split_at(at);
    (lo.to_vec(), hi.to_vec())
}


#[cfg(test)]
mod test_split_low_high {
    use super::*;

    #[test]
    fn split_middle() {
        let (lo, hi) = split_low_high(&[1, 2, 3, 4, 5], 2);
        assert_eq!(lo, vec![1, 2]);
        assert_eq!(hi, vec![3, 4, 5]);
    }

    #[test]
    fn split_past_end() {
        let (lo, hi) = split_low_high(&[1, 2], 5);
        assert_eq!(lo, vec![1, 2]);
        assert!(hi.is_empty());
    }
}
