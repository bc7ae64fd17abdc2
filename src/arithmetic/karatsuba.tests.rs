// tests included by karatsuba.rs

macro_rules! impl_case {
    ($name:ident: $a:expr, $b:expr) => {
        paste! {
            #[test]
            fn [< karatsuba_matches_schoolbook_ $name >]() {
                let a = parse(&$a).unwrap();
                let b = parse(&$b).unwrap();
                let expected = multiply_schoolbook(&a, &b);
                for &threshold in [1usize, 2, 3, 8, 32, 128].iter() {
                    let prod = multiply_karatsuba_with_threshold(&a, &b, threshold);
                    assert!(prod.is_canonical(), "threshold {}", threshold);
                    assert_eq!(prod, expected, "threshold {}", threshold);

                    let commutes = multiply_karatsuba_with_threshold(&b, &a, threshold);
                    assert_eq!(commutes, expected, "threshold {}", threshold);
                }
            }
        }
    };
}

impl_case!(single_digits: "7", "8");
impl_case!(zero_long: "0", "9".repeat(100));
impl_case!(nines_30: "9".repeat(30), "9".repeat(30));
impl_case!(nines_65: "9".repeat(65), "9".repeat(65));
impl_case!(nines_200: "9".repeat(200), "9".repeat(200));
impl_case!(uneven_lengths: "9".repeat(150), "123456789");
impl_case!(very_uneven: "3", "31415926535897932384626433832795028841971693993751".repeat(3));
impl_case!(leading_zeros: format!("0000{}", "7".repeat(70)), "00012345678901234567890");
impl_case!(powers_of_ten: format!("1{}", "0".repeat(99)), format!("1{}", "0".repeat(45)));
impl_case!(mixed: "314159265358979323846264338327950288419716939937510582097494459230781640628620899",
                  "271828182845904523536028747135266249775724709369995957496696762772407663035354759");

#[test]
fn scenario_30_nines_squared() {
    let a = parse(&"9".repeat(30)).unwrap();
    let prod = multiply_karatsuba(&a, &a);
    assert_eq!(
        format(&prod),
        "999999999999999999999999999998000000000000000000000000000001"
    );
}

#[test]
fn below_threshold_is_a_single_base_case() {
    let a = parse("123").unwrap();
    let b = parse("456").unwrap();
    let (prod, trace) = multiply_karatsuba_traced(&a, &b, 32);
    assert_eq!(format(&prod), "56088");
    assert_eq!(trace, KaratsubaTrace { max_depth: 0, splits: 0, base_cases: 1 });
}

#[test]
fn sixty_four_digits_recurses_one_level() {
    // halves "1212..12" sum to "2424..24" without carry,
    // so all three sub-products have exactly 32 digits
    let a = parse(&"12".repeat(32)).unwrap();
    let b = parse(&"34".repeat(32)).unwrap();
    assert_eq!(a.len(), 64);

    let (prod, trace) = multiply_karatsuba_traced(&a, &b, 32);
    assert_eq!(prod, multiply_schoolbook(&a, &b));
    assert_eq!(trace, KaratsubaTrace { max_depth: 1, splits: 1, base_cases: 3 });
}

#[test]
fn smaller_threshold_recurses_deeper() {
    let a = parse(&"12".repeat(32)).unwrap();
    let (_, shallow) = multiply_karatsuba_traced(&a, &a, 32);
    let (_, deep) = multiply_karatsuba_traced(&a, &a, 8);
    assert!(deep.max_depth > shallow.max_depth);
    assert!(deep.base_cases > shallow.base_cases);
}

#[test]
fn zero_threshold_treated_as_one() {
    let a = parse("98765").unwrap();
    let b = parse("4321").unwrap();
    let prod = multiply_karatsuba_with_threshold(&a, &b, 0);
    assert_eq!(format(&prod), "426763565");
}

#[test]
fn inputs_are_not_modified() {
    let a = parse(&"9".repeat(80)).unwrap();
    let b = parse(&"0".repeat(3)).unwrap();
    let a_before = a.digits().to_vec();
    let prod = multiply_karatsuba_with_threshold(&a, &b, 4);
    assert_eq!(prod.digits(), &[0]);
    assert_eq!(a.digits(), a_before.as_slice());
    assert_eq!(b.digits(), &[0, 0, 0]);
}
