// tests included by parsing.rs

macro_rules! impl_case {
    ($name:ident: $input:literal => [$($d:literal),*]) => {
        paste! {
            #[test]
            fn [< parse_ $name >]() {
                let v = parse($input).unwrap();
                let expected: &[u8] = &[$($d),*];
                assert_eq!(v.digits(), expected);
                assert_eq!(v.len(), $input.len());
            }
        }
    };
    ($name:ident: $input:literal => $err:expr) => {
        paste! {
            #[test]
            fn [< parse_ $name >]() {
                let err = parse($input).unwrap_err();
                assert_eq!(err, $err);
            }
        }
    };
}

impl_case!(case_0: "0" => [0]);
impl_case!(case_123: "123" => [3, 2, 1]);
impl_case!(case_00042: "00042" => [2, 4, 0, 0, 0]);
impl_case!(case_000: "000" => [0, 0, 0]);
impl_case!(case_1000: "1000" => [0, 0, 0, 1]);

impl_case!(case_empty: "" => ParseDigitsError::EmptyInput);
impl_case!(case_minus: "-12" => ParseDigitsError::InvalidDigit { index: 0, found: '-' });
impl_case!(case_decimal_point: "12.5" => ParseDigitsError::InvalidDigit { index: 2, found: '.' });
impl_case!(case_space: "1 2" => ParseDigitsError::InvalidDigit { index: 1, found: ' ' });
impl_case!(case_hex: "0xCafe" => ParseDigitsError::InvalidDigit { index: 1, found: 'x' });
impl_case!(case_underscore: "1_000" => ParseDigitsError::InvalidDigit { index: 1, found: '_' });
impl_case!(case_arabic_indic: "1٣" => ParseDigitsError::InvalidDigit { index: 1, found: '٣' });
impl_case!(case_first_bad_reported: "9a9b" => ParseDigitsError::InvalidDigit { index: 1, found: 'a' });

#[test]
fn error_messages() {
    assert_eq!(ParseDigitsError::EmptyInput.to_string(), "Failed to parse empty string");
    let err = parse("12z").unwrap_err();
    assert_eq!(err.to_string(), "invalid digit 'z' at position 2");
}
