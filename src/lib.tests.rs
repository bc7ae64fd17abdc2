// tests of the public multiplication entry points

macro_rules! impl_case {
    ($name:ident : $a:expr, $b:expr => $expected:expr) => {
        paste! {
            #[test]
            fn [< $name _schoolbook >]() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();
                assert_eq!(format(&multiply_schoolbook(&a, &b)), $expected);
            }

            #[test]
            fn [< $name _karatsuba >]() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();
                assert_eq!(format(&multiply_karatsuba(&a, &b)), $expected);
            }

            #[test]
            fn [< $name _vedic >]() {
                let a = parse($a).unwrap();
                let b = parse($b).unwrap();
                assert_eq!(format(&multiply_vedic(&a, &b).product), $expected);
            }

            #[test]
            fn [< $name _context >]() {
                let ctx = Context::default();
                for &algorithm in Algorithm::ALL.iter() {
                    assert_eq!(ctx.multiply_str(algorithm, $a, $b).unwrap(), $expected);
                }
            }
        }
    };
}

impl_case!(case_123_456: "123", "456" => "56088");
impl_case!(case_30_nines_squared:
    "999999999999999999999999999999",
    "999999999999999999999999999999"
    => "999999999999999999999999999998000000000000000000000000000001");
impl_case!(case_zero_times_18_nines: "0", "999999999999999999" => "0");
impl_case!(case_1_1: "1", "1" => "1");
impl_case!(case_leading_zeros: "00042", "0010" => "420");
impl_case!(case_uneven_lengths: "7", "123456789012345678901234567890123456789" => "864197523086419752308641975230864197523");
impl_case!(case_powers_of_ten: "1000000000000000000000", "100000000000000" => "100000000000000000000000000000000000");


#[test]
fn parse_then_format_strips_leading_zeros() {
    let v = parse("00042").unwrap();
    assert_eq!(v.len(), 5);
    assert_eq!(format(&v), "42");
}

#[test]
fn products_are_canonical() {
    let a = parse("000123").unwrap();
    let b = parse("0456").unwrap();
    assert!(multiply_schoolbook(&a, &b).is_canonical());
    assert!(multiply_karatsuba_with_threshold(&a, &b, 1).is_canonical());
    assert!(multiply_vedic(&a, &b).product.is_canonical());
    for &product in [DigitProduct::Direct, DigitProduct::Table].iter() {
        for &carry in [CarryMode::Inline, CarryMode::Deferred].iter() {
            assert!(multiply_schoolbook_with(&a, &b, product, carry).is_canonical());
        }
    }
}

#[test]
fn identity_and_zero_laws() {
    let zero = DigitVec::zero();
    let one = DigitVec::one();
    let x = parse("00031415926535897932384626433832795028841971").unwrap();
    let canonical_x = x.clone().trimmed();

    let ctx = Context::default();
    for &algorithm in Algorithm::ALL.iter() {
        assert!(ctx.multiply(algorithm, &x, &zero).is_zero(), "{}", algorithm);
        assert!(ctx.multiply(algorithm, &zero, &x).is_zero(), "{}", algorithm);

        let by_one = ctx.multiply(algorithm, &x, &one);
        assert_eq!(by_one.digits(), canonical_x.digits(), "{}", algorithm);
    }
}

#[test]
fn commutativity() {
    let x = parse("98765432109876543210987654321").unwrap();
    let y = parse("1234567").unwrap();

    let ctx = Context::default();
    for &algorithm in Algorithm::ALL.iter() {
        assert_eq!(
            ctx.multiply(algorithm, &x, &y).digits(),
            ctx.multiply(algorithm, &y, &x).digits(),
        );
    }
}

#[test]
fn threshold_invariance() {
    let x = parse(&"31".repeat(70)).unwrap();
    let y = parse(&"27".repeat(45)).unwrap();
    let expected = multiply_schoolbook(&x, &y);

    let mut depths = Vec::new();
    for &threshold in [8usize, 32, 128].iter() {
        let (product, trace) = multiply_karatsuba_traced(&x, &y, threshold);
        assert_eq!(product.digits(), expected.digits(), "threshold {}", threshold);
        depths.push(trace.max_depth);
    }
    // smaller thresholds recurse deeper
    assert!(depths[0] > depths[1]);
    assert!(depths[1] > depths[2]);
    assert_eq!(depths, vec![5, 3, 1]);
}

#[test]
fn karatsuba_64_digits_one_level() {
    let a = parse(&"12".repeat(32)).unwrap();
    let b = parse(&"34".repeat(32)).unwrap();
    let (product, trace) = multiply_karatsuba_traced(&a, &b, 32);

    assert_eq!(product, multiply_schoolbook(&a, &b));
    assert_eq!(trace, KaratsubaTrace { max_depth: 1, splits: 1, base_cases: 3 });
}

#[test]
fn vedic_metrics_use_stored_lengths() {
    let a = parse("0042").unwrap();
    let b = parse("10").unwrap();
    let (product, counts): (DigitVec, MetricCounts) = multiply_vedic(&a, &b).into();
    assert_eq!(product, DigitVec::from(420u32));
    assert_eq!(counts.multiply_count, 8);
}

#[test]
fn multiply_str_does_not_touch_inputs() {
    let a = String::from("12");
    let b = String::from("3x4");
    let ctx = Context::default();

    for &algorithm in Algorithm::ALL.iter() {
        let err = ctx.multiply_str(algorithm, &a, &b).unwrap_err();
        assert_eq!(err, ParseDigitsError::InvalidDigit { index: 1, found: 'x' });
    }
    assert_eq!(a, "12");
    assert_eq!(b, "3x4");
}

#[test]
fn parse_error_display() {
    assert_eq!(ParseDigitsError::EmptyInput.to_string(), "Failed to parse empty string");
    assert_eq!(
        parse("12 3").unwrap_err().to_string(),
        "invalid digit ' ' at position 2"
    );
}

#[test]
fn agrees_with_biguint() {
    let a = parse("340282366920938463463374607431768211457").unwrap();
    let b = parse("18446744073709551629").unwrap();
    let expected = BigUint::from(&a) * BigUint::from(&b);

    let ctx = Context::default();
    for &algorithm in Algorithm::ALL.iter() {
        let product = ctx.multiply(algorithm, &a, &b);
        assert_eq!(BigUint::from(&product), expected, "{}", algorithm);
    }
}

#[test]
fn types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<DigitVec>();
    assert_send_sync::<Accumulator>();
    assert_send_sync::<Context>();
    assert_send_sync::<VedicProduct>();
}
