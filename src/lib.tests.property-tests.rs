// Property tests to be included by lib.rs (if enabled)

fn biguint_of(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
}

fn canonical(s: &str) -> &str {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}


mod equivalence {
    use super::*;

    proptest! {
        #[test]
        fn schoolbook_matches_biguint(a in "[0-9]{1,120}", b in "[0-9]{1,120}") {
            let x = parse(&a).unwrap();
            let y = parse(&b).unwrap();
            let expected = (biguint_of(&a) * biguint_of(&b)).to_str_radix(10);

            for &product in [DigitProduct::Direct, DigitProduct::Table].iter() {
                for &carry in [CarryMode::Inline, CarryMode::Deferred].iter() {
                    let result = multiply_schoolbook_with(&x, &y, product, carry);
                    prop_assert!(result.is_canonical());
                    prop_assert_eq!(format(&result), expected.as_str());
                }
            }
        }

        #[test]
        fn karatsuba_matches_biguint(a in "[0-9]{1,200}", b in "[0-9]{1,200}") {
            let x = parse(&a).unwrap();
            let y = parse(&b).unwrap();
            let expected = (biguint_of(&a) * biguint_of(&b)).to_str_radix(10);

            for &threshold in [1usize, 8, 32, 128].iter() {
                let result = multiply_karatsuba_with_threshold(&x, &y, threshold);
                prop_assert!(result.is_canonical());
                prop_assert_eq!(format(&result), expected.as_str());
            }
        }

        #[test]
        fn vedic_matches_biguint(a in "[0-9]{1,120}", b in "[0-9]{1,120}") {
            let x = parse(&a).unwrap();
            let y = parse(&b).unwrap();
            let expected = (biguint_of(&a) * biguint_of(&b)).to_str_radix(10);

            let result = multiply_vedic(&x, &y);
            prop_assert!(result.product.is_canonical());
            prop_assert_eq!(format(&result.product), expected.as_str());
        }

        #[test]
        fn native_baselines_match(a: u32, b: u32, c: u64, d: u64) {
            let expected = DigitVec::from(u64::from(a) * u64::from(b));
            let product = multiply_native_u32(&DigitVec::from(a), &DigitVec::from(b));
            prop_assert_eq!(product, Some(expected));

            let expected = DigitVec::from(u128::from(c) * u128::from(d));
            let product = multiply_native_u64(&DigitVec::from(c), &DigitVec::from(d));
            prop_assert_eq!(product, Some(expected));
        }
    }
}


mod laws {
    use super::*;

    proptest! {
        #[test]
        fn commutative(a in "[0-9]{1,80}", b in "[0-9]{1,80}") {
            let ctx = Context::default();
            for &algorithm in Algorithm::ALL.iter() {
                prop_assert_eq!(
                    ctx.multiply_str(algorithm, &a, &b).unwrap(),
                    ctx.multiply_str(algorithm, &b, &a).unwrap()
                );
            }
        }

        #[test]
        fn zero_and_one(a in "[0-9]{1,80}") {
            let ctx = Context::default();
            for &algorithm in Algorithm::ALL.iter() {
                prop_assert_eq!(ctx.multiply_str(algorithm, &a, "0").unwrap(), "0");
                prop_assert_eq!(ctx.multiply_str(algorithm, &a, "1").unwrap(), canonical(&a));
            }
        }

        #[test]
        fn format_parse_round_trip(s in "[0-9]{1,100}") {
            let v = parse(&s).unwrap();
            prop_assert_eq!(v.len(), s.len());
            prop_assert_eq!(format(&v), canonical(&s));
        }

        #[test]
        fn vedic_multiply_count(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
            let counts = multiply_vedic(&parse(&a).unwrap(), &parse(&b).unwrap()).counts;
            prop_assert_eq!(counts.multiply_count, a.len() * b.len());
            prop_assert_eq!(counts.base_add_count, a.len() * b.len() - (a.len() + b.len() - 1));
        }

        #[test]
        fn add_then_subtract(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
            let x = parse(&a).unwrap();
            let y = parse(&b).unwrap();

            let mut sum = x.clone();
            add(&mut sum, &y);
            prop_assert_eq!(BigUint::from(&sum), biguint_of(&a) + biguint_of(&b));

            let diff = checked_subtract(&sum, &y);
            prop_assert_eq!(diff, Some(x.clone()));
            prop_assert_eq!(checked_subtract(&x, &sum).is_some(), y.is_zero());
        }
    }
}
