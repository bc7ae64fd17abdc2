// tests included by multiplication.rs

const MODES: [(DigitProduct, CarryMode); 4] = [
    (DigitProduct::Direct, CarryMode::Inline),
    (DigitProduct::Table, CarryMode::Inline),
    (DigitProduct::Direct, CarryMode::Deferred),
    (DigitProduct::Table, CarryMode::Deferred),
];

macro_rules! impl_case {
    ($name:ident: $a:literal * $b:literal == $c:literal) => {
        paste! {
            #[test]
            fn [< schoolbook_ $name >]() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();
                for &(product, carry) in MODES.iter() {
                    let prod = multiply_schoolbook_with(&a, &b, product, carry);
                    assert!(prod.is_canonical(), "{:?} {:?}", product, carry);
                    assert_eq!(format(&prod), $c, "{:?} {:?}", product, carry);

                    let commutes = multiply_schoolbook_with(&b, &a, product, carry);
                    assert_eq!(prod, commutes);
                }
            }
        }
    };
}

impl_case!(case_0_0: "0" * "0" == "0");
impl_case!(case_5_5: "5" * "5" == "25");
impl_case!(case_1_1: "1" * "1" == "1");
impl_case!(case_7_22: "7" * "22" == "154");
impl_case!(case_123_456: "123" * "456" == "56088");
impl_case!(case_254_791: "254" * "791" == "200914");
impl_case!(case_0_999999999999999999: "0" * "999999999999999999" == "0");
impl_case!(case_7_22_leading_zeros: "07" * "00022" == "154");
impl_case!(case_99_99: "99" * "99" == "9801");
impl_case!(case_209504545595_605739580991:
    "209504545595" * "605739580991" == "126905195664425154784645");
impl_case!(case_30_nines_squared:
    "999999999999999999999999999999" * "999999999999999999999999999999"
    == "999999999999999999999999999998000000000000000000000000000001");

#[test]
fn multiply_digit_slices_trims() {
    let v = multiply_digit_slices(&[7, 0], &[2, 2, 0, 0]);
    assert_eq!(v, vec![4, 5, 1]);
}

#[test]
fn multiply_digit_slices_empty_operand_is_zero() {
    assert_eq!(multiply_digit_slices(&[], &[1, 2, 3]), vec![0]);
    assert_eq!(multiply_digit_slices(&[], &[]), vec![0]);
}

#[test]
fn deferred_accumulator_holds_column_sums() {
    // 99 * 99: columns 81, 81 + 81, 81
    let acc = accumulate_digit_products(&[9, 9], &[9, 9], DigitProduct::Table);
    assert_eq!(acc.cells(), &[81, 162, 81, 0]);
    assert_eq!(format(&acc.into_digit_vec()), "9801");
}

#[test]
fn inputs_are_not_modified() {
    let a = parse("000123").unwrap();
    let b = parse("456").unwrap();
    for &(product, carry) in MODES.iter() {
        multiply_schoolbook_with(&a, &b, product, carry);
    }
    assert_eq!(a.digits(), &[3, 2, 1, 0, 0, 0]);
    assert_eq!(b.digits(), &[6, 5, 4]);
}

#[test]
fn default_modes() {
    assert_eq!(DigitProduct::default(), DigitProduct::Direct);
    assert_eq!(CarryMode::default(), CarryMode::Inline);
}
