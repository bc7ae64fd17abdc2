//! Implement math operations: Add, Mul
//!
//! Operators return canonical vectors. Multiplication uses Karatsuba
//! with the default threshold.

use crate::*;


impl AddAssign<&DigitVec> for DigitVec {
    fn add_assign(&mut self, rhs: &DigitVec) {
        arithmetic::add(self, rhs);
        self.trim();
    }
}

impl AddAssign<DigitVec> for DigitVec {
    #[inline]
    fn add_assign(&mut self, rhs: DigitVec) {
        *self += &rhs;
    }
}

impl Add<&DigitVec> for DigitVec {
    type Output = DigitVec;

    #[inline]
    fn add(mut self, rhs: &DigitVec) -> DigitVec {
        self += rhs;
        self
    }
}

impl Add<DigitVec> for DigitVec {
    type Output = DigitVec;

    #[inline]
    fn add(self, rhs: DigitVec) -> DigitVec {
        self + &rhs
    }
}

impl Add<&DigitVec> for &DigitVec {
    type Output = DigitVec;

    #[inline]
    fn add(self, rhs: &DigitVec) -> DigitVec {
        self.clone() + rhs
    }
}

impl Mul<&DigitVec> for &DigitVec {
    type Output = DigitVec;

    #[inline]
    fn mul(self, rhs: &DigitVec) -> DigitVec {
        multiply_karatsuba(self, rhs)
    }
}

impl Mul<DigitVec> for DigitVec {
    type Output = DigitVec;

    #[inline]
    fn mul(self, rhs: DigitVec) -> DigitVec {
        &self * &rhs
    }
}

impl Mul<&DigitVec> for DigitVec {
    type Output = DigitVec;

    #[inline]
    fn mul(self, rhs: &DigitVec) -> DigitVec {
        &self * rhs
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal = $c:literal) => {
            #[test]
            fn $name() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();

                let sum = &a + &b;
                assert!(sum.is_canonical());
                assert_eq!(format(&sum), $c);

                let mut s = b.clone();
                s += a;
                assert_eq!(format(&s), $c);
            }
        };
        ($name:ident: $a:literal * $b:literal = $c:literal) => {
            #[test]
            fn $name() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();

                let prod = &a * &b;
                assert!(prod.is_canonical());
                assert_eq!(format(&prod), $c);
                assert_eq!(format(&(b * a)), $c);
            }
        };
    }

    impl_case!(case_add_0_0: "0" + "0" = "0");
    impl_case!(case_add_999_1: "999" + "1" = "1000");
    impl_case!(case_add_0050_0050: "0050" + "0050" = "100");
    impl_case!(case_add_000_000: "000" + "000" = "0");

    impl_case!(case_mul_123_456: "123" * "456" = "56088");
    impl_case!(case_mul_007_6: "007" * "6" = "42");
    impl_case!(case_mul_0_5: "0" * "5" = "0");
}
