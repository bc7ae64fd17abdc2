// tests included by subtraction.rs

macro_rules! impl_test {
    ($name:ident: $a:literal - $b:literal == $c:literal) => {
        #[test]
        fn $name() {
            let mut a = parse($a).unwrap();
            let b = parse($b).unwrap();

            let checked = checked_subtract(&a, &b).unwrap();
            assert_eq!(format(&checked), $c);

            subtract(&mut a, &b);
            assert!(a.is_canonical());
            assert_eq!(format(&a), $c);
        }
    };
}

impl_test!(test_0_0: "0" - "0" == "0");
impl_test!(test_5_5: "5" - "5" == "0");
impl_test!(test_10_1: "10" - "1" == "9");
impl_test!(test_1000_1: "1000" - "1" == "999");
impl_test!(test_56088_6088: "56088" - "6088" == "50000");
impl_test!(test_1000000_999999: "1000000" - "999999" == "1");
impl_test!(test_00100_0099: "00100" - "0099" == "1");
impl_test!(test_leading_zero_subtrahend: "42" - "0000012" == "30");
impl_test!(test_9000_8001: "9000" - "8001" == "999");

#[test]
fn checked_subtract_underflow() {
    let a = parse("99").unwrap();
    let b = parse("100").unwrap();
    assert_eq!(checked_subtract(&a, &b), None);
}

#[test]
fn checked_subtract_leaves_input() {
    let a = parse("00500").unwrap();
    let b = parse("1").unwrap();
    let diff = checked_subtract(&a, &b).unwrap();
    assert_eq!(format(&diff), "499");
    assert_eq!(a.digits(), &[0, 0, 5, 0, 0]);
}

#[test]
fn subtract_trims_to_single_zero() {
    let mut a = parse("000123").unwrap();
    let b = parse("123").unwrap();
    subtract(&mut a, &b);
    assert_eq!(a.digits(), &[0]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "subtract requires a >= b")]
fn subtract_underflow_panics_in_debug() {
    let mut a = parse("1").unwrap();
    let b = parse("2").unwrap();
    subtract(&mut a, &b);
}
