//! Code for implementing From/To DigitVecs

use crate::*;

use num_integer::div_rem;


macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for DigitVec {
            fn from(mut n: $t) -> Self {
                let mut digits = Vec::new();
                loop {
                    let (hi, lo) = div_rem(n, 10);
                    digits.push(lo as u8);
                    n = hi;
                    if n == 0 {
                        break;
                    }
                }
                DigitVec::from_vec(digits)
            }
        }

        impl From<&$t> for DigitVec {
            fn from(n: &$t) -> Self {
                DigitVec::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);


impl From<&BigUint> for DigitVec {
    fn from(n: &BigUint) -> Self {
        // zero produces [0]
        DigitVec::from_vec(n.to_radix_le(10))
    }
}

impl From<BigUint> for DigitVec {
    fn from(n: BigUint) -> Self {
        DigitVec::from(&n)
    }
}

impl From<&DigitVec> for BigUint {
    fn from(v: &DigitVec) -> Self {
        match BigUint::from_radix_le(&v.digits, 10) {
            Some(n) => n,
            None => unreachable!("DigitVec holds only decimal digits"),
        }
    }
}

impl From<DigitVec> for BigUint {
    fn from(v: DigitVec) -> Self {
        BigUint::from(&v)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($t:ident: $n:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< from_ $t _ $n >]() {
                    let n: $t = $n;
                    let v = DigitVec::from(n);
                    assert!(v.is_canonical());
                    assert_eq!(format(&v), $expected);
                }
            }
        };
    }

    impl_case!(u8: 0 => "0");
    impl_case!(u8: 255 => "255");
    impl_case!(u16: 1000 => "1000");
    impl_case!(u32: 4294967295 => "4294967295");
    impl_case!(u64: 18446744073709551615 => "18446744073709551615");
    impl_case!(u128: 340282366920938463463374607431768211455 => "340282366920938463463374607431768211455");
    impl_case!(usize: 56088 => "56088");

    #[test]
    fn biguint_round_trip() {
        let s = "999999999999999999999999999998000000000000000000000000000001";
        let n: BigUint = s.parse().unwrap();
        let v = DigitVec::from(&n);
        assert_eq!(format(&v), s);
        assert_eq!(BigUint::from(&v), n);
    }

    #[test]
    fn biguint_zero() {
        let v = DigitVec::from(BigUint::zero());
        assert_eq!(v.digits(), &[0]);
        assert!(BigUint::from(parse("000").unwrap()).is_zero());
    }
}
