use crate::*;

impl FromStr for DigitVec {
    type Err = ParseDigitsError;

    #[inline]
    fn from_str(s: &str) -> Result<DigitVec, ParseDigitsError> {
        // implemented in parsing.rs
        parse(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let v = DigitVec::from_str($input).unwrap();
                assert_eq!(v.len(), $input.len());
                assert_eq!(format(&v), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_007: "007" => "7");
    impl_case!(case_1331107: "1331107" => "1331107");
    impl_case!(case_31862140830686979: "31862140830686979" => "31862140830686979");
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                DigitVec::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty : "" => "EmptyInput");

    impl_case!(case_bad_string_hello : "hello" => "InvalidDigit");
    impl_case!(case_bad_string_negative : "-123" => "InvalidDigit");
    impl_case!(case_bad_string_decimal : "1.5" => "InvalidDigit");
    impl_case!(case_bad_string_exponent : "12e4" => "InvalidDigit");
    impl_case!(case_bad_string_hex : "0xCafeBeef" => "InvalidDigit");
    impl_case!(case_bad_string_trailing_space : "12 " => "InvalidDigit");
}
