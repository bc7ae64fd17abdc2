//! Code for num_traits

use crate::*;


impl Zero for DigitVec {
    #[inline]
    fn zero() -> Self {
        DigitVec::from_vec(vec![0])
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
    }
}

impl One for DigitVec {
    #[inline]
    fn one() -> Self {
        DigitVec::from_vec(vec![1])
    }

    #[inline]
    fn is_one(&self) -> bool {
        matches!(self.significant_digits(), [1])
    }
}

impl ToPrimitive for DigitVec {
    fn to_u64(&self) -> Option<u64> {
        self.significant_digits()
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
    }

    fn to_u128(&self) -> Option<u128> {
        self.significant_digits()
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(u128::from(d)))
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| n.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| n.to_i128())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert!(DigitVec::zero().is_zero());
        assert!(parse("0000").unwrap().is_zero());
        assert!(!parse("10").unwrap().is_zero());
        assert!(DigitVec::one().is_one());
        assert!(parse("001").unwrap().is_one());
        assert!(!parse("11").unwrap().is_one());
    }

    #[test]
    fn set_zero() {
        let mut v = parse("987").unwrap();
        v.set_zero();
        assert_eq!(v.digits(), &[0]);
    }

    mod to_primitive {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => u64 $u:expr, u128 $w:expr, i64 $i:expr) => {
                #[test]
                fn $name() {
                    let v = parse($input).unwrap();
                    assert_eq!(v.to_u64(), $u);
                    assert_eq!(v.to_u128(), $w);
                    assert_eq!(v.to_i64(), $i);
                }
            };
        }

        impl_case!(case_0: "0" => u64 Some(0), u128 Some(0), i64 Some(0));
        impl_case!(case_00042: "00042" => u64 Some(42), u128 Some(42), i64 Some(42));
        impl_case!(case_i64_max: "9223372036854775807"
            => u64 Some(9223372036854775807), u128 Some(9223372036854775807), i64 Some(i64::MAX));
        impl_case!(case_i64_max_plus_1: "9223372036854775808"
            => u64 Some(9223372036854775808), u128 Some(9223372036854775808), i64 None);
        impl_case!(case_u64_max: "18446744073709551615"
            => u64 Some(u64::MAX), u128 Some(18446744073709551615), i64 None);
        impl_case!(case_u64_max_plus_1: "18446744073709551616"
            => u64 None, u128 Some(18446744073709551616), i64 None);
        impl_case!(case_leading_zeros_fit: "0000000000000000000000000001"
            => u64 Some(1), u128 Some(1), i64 Some(1));
        impl_case!(case_40_digits: "1000000000000000000000000000000000000000"
            => u64 None, u128 None, i64 None);
    }
}
