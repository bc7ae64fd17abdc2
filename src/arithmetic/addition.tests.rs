// tests included by addition.rs

macro_rules! impl_test {
    ($name:ident: [$($a:literal),*] + [$($b:literal),*] == [$($c:literal),*]) => {
        #[test]
        fn $name() {
            let mut a = DigitVec::from_le_digits(vec![$($a),*]).unwrap();
            let b = DigitVec::from_le_digits(vec![$($b),*]).unwrap();
            add(&mut a, &b);
            let expected: &[u8] = &[$($c),*];
            assert_eq!(a.digits(), expected);
        }
    };
}

impl_test!(test_0_0: [0] + [0] == [0]);
impl_test!(test_1_9: [1] + [9] == [0, 1]);
impl_test!(test_5_4: [5] + [4] == [9]);
impl_test!(test_999_1: [9, 9, 9] + [1] == [0, 0, 0, 1]);
impl_test!(test_1_999: [1] + [9, 9, 9] == [0, 0, 0, 1]);
impl_test!(test_12_3400: [2, 1] + [0, 0, 4, 3] == [2, 1, 4, 3]);
impl_test!(test_not_trimmed: [2, 1, 0, 0] + [3] == [5, 1, 0, 0]);
impl_test!(test_carry_into_padding: [9, 0, 0] + [1] == [0, 1, 0]);
impl_test!(test_58_67: [8, 5] + [7, 6] == [5, 2, 1]);

#[test]
fn add_assign_digits_commutes() {
    let a = [3, 9, 9, 2];
    let b = [8, 4];

    let mut ab = a.to_vec();
    add_assign_digits(&mut ab, &b);

    let mut ba = b.to_vec();
    add_assign_digits(&mut ba, &a);

    assert_eq!(ab, ba);
    assert_eq!(ab, vec![1, 4, 0, 3]);
}

#[test]
fn add_assign_empty() {
    let mut a = Vec::new();
    add_assign_digits(&mut a, &[]);
    assert!(a.is_empty());

    add_assign_digits(&mut a, &[7, 1]);
    assert_eq!(a, vec![7, 1]);
}
