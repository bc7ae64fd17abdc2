//! Implementation of comparison operations
//!
//! DigitVecs compare by numeric value: most-significant zero digits
//! are ignored, so `parse("007") == parse("7")`.
//!

use crate::*;


impl PartialEq for DigitVec {
    fn eq(&self, rhs: &DigitVec) -> bool {
        self.significant_digits() == rhs.significant_digits()
    }
}

impl Eq for DigitVec {}

impl PartialOrd for DigitVec {
    #[inline]
    fn partial_cmp(&self, other: &DigitVec) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitVec {
    fn cmp(&self, other: &DigitVec) -> Ordering {
        cmp_digit_slices(self.significant_digits(), other.significant_digits())
    }
}

impl Hash for DigitVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
    }
}

/// Compare two digit slices without most-significant zeros
pub(crate) fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
     .cmp(&b.len())
     .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal $op:tt $b:literal) => {
            #[test]
            fn $name() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();
                assert!(a $op b);
            }
        };
    }

    impl_case!(case_0_eq_000: "0" == "000");
    impl_case!(case_7_eq_007: "7" == "007");
    impl_case!(case_10_ne_1: "10" != "1");
    impl_case!(case_9_lt_10: "9" < "10");
    impl_case!(case_0099_lt_100: "0099" < "100");
    impl_case!(case_123_lt_124: "123" < "124");
    impl_case!(case_321_gt_123: "321" > "123");
    impl_case!(case_1000_gt_0999: "1000" > "0999");
    impl_case!(case_5_ge_005: "5" >= "005");

    #[cfg(feature = "std")]
    #[test]
    fn hash_ignores_significant_zeros() {
        use crate::stdlib::DefaultHasher;

        let hash = |v: &DigitVec| {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        };

        let a = parse("00123").unwrap();
        let b = parse("123").unwrap();
        assert_eq!(hash(&a), hash(&b));
    }
}
