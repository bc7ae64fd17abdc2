//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;


/// Render digits most-significant first
///
/// Most-significant zero digits are skipped; a value of zero is
/// rendered as `"0"`.
///
pub fn format(v: &DigitVec) -> String {
    let digits = v.significant_digits();
    if digits.is_empty() {
        return "0".to_string();
    }
    digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

impl fmt::Display for DigitVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &format(self))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident : [$($d:literal),*] => $ex:literal) => {
            #[test]
            fn $name() {
                let v = DigitVec::from_le_digits(vec![$($d),*]).unwrap();
                assert_eq!(format(&v), $ex);
                assert_eq!(v.to_string(), $ex);
            }
        };
    }

    impl_case!(case_0: [0] => "0");
    impl_case!(case_000: [0, 0, 0] => "0");
    impl_case!(case_1: [1] => "1");
    impl_case!(case_42: [2, 4] => "42");
    impl_case!(case_00042: [2, 4, 0, 0, 0] => "42");
    impl_case!(case_1000: [0, 0, 0, 1] => "1000");
    impl_case!(case_56088: [8, 8, 0, 6, 5] => "56088");

    #[test]
    fn display_respects_width() {
        let v = parse("42").unwrap();
        assert_eq!(format!("{:>6}", v), "    42");
        assert_eq!(format!("{:06}", v), "000042");
        assert_eq!(format!("{:<4}|", v), "42  |");
    }

    #[test]
    fn round_trip_strips_leading_zeros() {
        for (input, expected) in &[
            ("00042", "42"),
            ("0", "0"),
            ("0000", "0"),
            ("10", "10"),
            ("0010100", "10100"),
            ("999999999999999999999999", "999999999999999999999999"),
        ] {
            let v = parse(input).unwrap();
            assert_eq!(&format(&v), expected);
        }
    }
}
