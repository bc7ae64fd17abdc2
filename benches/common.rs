//! common routines to be included by benches

use decmul::{parse, DigitVec};


/// Random string of `len` decimal digits with nonzero leading digit
pub fn random_digit_string(rng: &mut oorandom::Rand32, len: usize) -> String {
    (0..len)
        .map(|i| {
            let lo = if i == 0 { 1 } else { 0 };
            let d = rng.rand_range(lo..10) as u8;
            char::from(b'0' + d)
        })
        .collect()
}

/// Random pair of digit vectors, both of length `len`
pub fn random_operand_pair(rng: &mut oorandom::Rand32, len: usize) -> (DigitVec, DigitVec) {
    let a = random_digit_string(rng, len);
    let b = random_digit_string(rng, len);
    (parse(&a).unwrap(), parse(&b).unwrap())
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
