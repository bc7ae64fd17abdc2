// tests included by vedic.rs

macro_rules! impl_case {
    ($name:ident: $a:expr, $b:expr => $c:literal, mul $mul:literal, add $add:literal, carry $carry:literal) => {
        paste! {
            #[test]
            fn [< vedic_ $name >]() {
                let a = parse(&$a).unwrap();
                let b = parse(&$b).unwrap();
                let result = multiply_vedic(&a, &b);

                assert!(result.product.is_canonical());
                assert_eq!(format(&result.product), $c);
                assert_eq!(result.counts, MetricCounts {
                    multiply_count: $mul,
                    base_add_count: $add,
                    carry_add_count: $carry,
                });
                assert_eq!(result.product, multiply_schoolbook(&a, &b));
            }
        }
    };
}

impl_case!(case_123_456: "123", "456" => "56088", mul 9, add 4, carry 1);
impl_case!(case_0_18_nines: "0", "999999999999999999" => "0", mul 18, add 0, carry 0);
impl_case!(case_1_1: "1", "1" => "1", mul 1, add 0, carry 0);
impl_case!(case_5_5: "5", "5" => "25", mul 1, add 0, carry 0);
impl_case!(case_99_99: "99", "99" => "9801", mul 4, add 1, carry 1);
impl_case!(case_0042_10: "0042", "10" => "420", mul 8, add 3, carry 0);
impl_case!(case_30_nines: "9".repeat(30), "9".repeat(30)
    => "999999999999999999999999999998000000000000000000000000000001",
    mul 900, add 841, carry 58);
impl_case!(case_20_digits: "12345678901234567890", "98765432109876543210"
    => "1219326311370217952237463801111263526900",
    mul 400, add 361, carry 19);

#[test]
fn multiply_count_is_n_times_m() {
    for n in 1..12 {
        for m in 1..12 {
            let a = parse(&"7".repeat(n)).unwrap();
            let b = parse(&"3".repeat(m)).unwrap();
            let counts = multiply_vedic(&a, &b).counts;
            assert_eq!(counts.multiply_count, n * m);
            assert_eq!(counts.base_add_count, n * m - (n + m - 1));
        }
    }
}

#[test]
fn counts_are_per_call() {
    let a = parse("99").unwrap();
    let first = multiply_vedic(&a, &a);
    let second = multiply_vedic(&a, &a);
    assert_eq!(first, second);
}

#[test]
fn into_tuple() {
    let a = parse("12").unwrap();
    let b = parse("34").unwrap();
    let (product, counts): (DigitVec, MetricCounts) = multiply_vedic(&a, &b).into();
    assert_eq!(format(&product), "408");
    assert_eq!(counts.multiply_count, 4);
}

#[test]
fn empty_slices_are_zero() {
    let mut counts = MetricCounts::default();
    let columns = accumulate_columns(&[], &[1, 2], &mut counts);
    let product = propagate_column_carries(columns, &mut counts);
    assert_eq!(product.digits(), &[0]);
    assert_eq!(counts, MetricCounts::default());
}

mod wide_digit_sweep {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($d:literal),*] => [$($e:literal),*], carries $carries:literal) => {
            #[test]
            fn $name() {
                let mut digits: Vec<u8> = vec![$($d),*];
                let carries = sweep_wide_digits(&mut digits);
                let expected: Vec<u8> = vec![$($e),*];
                assert_eq!(digits, expected);
                assert_eq!(carries, $carries);
            }
        };
    }

    impl_case!(case_in_range: [8, 8, 0, 6, 5] => [8, 8, 0, 6, 5], carries 0);
    impl_case!(case_low_cell: [12, 9] => [2, 0, 1], carries 2);
    impl_case!(case_top_cell: [9, 15] => [9, 5, 1], carries 1);
    impl_case!(case_chain: [10, 9, 9] => [0, 0, 0, 1], carries 3);
}

#[test]
fn single_digit_base_add_count_is_zero() {
    for a in 0..10u8 {
        let x = DigitVec::from(a);
        let counts = multiply_vedic(&x, &DigitVec::from(9u8)).counts;
        assert_eq!(counts.multiply_count, 1);
        assert_eq!(counts.base_add_count, 0);
    }
}
