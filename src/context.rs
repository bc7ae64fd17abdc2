// \file src/context.rs

//! A `Context` object holds the parameters of a multiplication request
//! that are not part of the operands: currently the Karatsuba fallback
//! threshold.

use crate::*;
use crate::stdlib::num::NonZeroUsize;


/// Multiplication strategy
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Algorithm {
    /// Quadratic digit-pair accumulation
    Schoolbook,
    /// Divide and conquer with schoolbook base case
    Karatsuba,
    /// Table driven, split summation and carry sweeps
    Vedic,
}

impl Algorithm {
    /// Every algorithm, in order of declaration
    pub const ALL: [Algorithm; 3] = [Algorithm::Schoolbook, Algorithm::Karatsuba, Algorithm::Vedic];

    /// Lowercase name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Schoolbook => "schoolbook",
            Algorithm::Karatsuba => "karatsuba",
            Algorithm::Vedic => "vedic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        match s.to_ascii_lowercase().as_str() {
            "schoolbook" | "long" => Ok(Algorithm::Schoolbook),
            "karatsuba" => Ok(Algorithm::Karatsuba),
            "vedic" => Ok(Algorithm::Vedic),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Unrecognized algorithm name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown multiplication algorithm {:?}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAlgorithmError {}


/// Settings used by multiplication requests
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// operand length at or below which Karatsuba uses schoolbook
    karatsuba_threshold: NonZeroUsize,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            karatsuba_threshold: default_karatsuba_threshold(),
        }
    }
}

impl Context {
    /// Create context with given Karatsuba threshold
    pub fn new(karatsuba_threshold: NonZeroUsize) -> Self {
        Context { karatsuba_threshold }
    }

    /// Copy of this context with a different Karatsuba threshold
    pub fn with_karatsuba_threshold(&self, karatsuba_threshold: NonZeroUsize) -> Self {
        Context { karatsuba_threshold, ..*self }
    }

    /// Operand length at or below which Karatsuba falls back to schoolbook
    pub fn karatsuba_threshold(&self) -> usize {
        self.karatsuba_threshold.get()
    }

    /// Multiply two digit vectors with the given algorithm
    pub fn multiply(&self, algorithm: Algorithm, a: &DigitVec, b: &DigitVec) -> DigitVec {
        match algorithm {
            Algorithm::Schoolbook => multiply_schoolbook(a, b),
            Algorithm::Karatsuba => {
                multiply_karatsuba_with_threshold(a, b, self.karatsuba_threshold())
            }
            Algorithm::Vedic => multiply_vedic(a, b).product,
        }
    }

    /// Parse both operands, multiply, and format the product
    ///
    /// Fails with the first conversion error; nothing is multiplied in
    /// that case.
    ///
    /// ```
    /// use decmul::{Algorithm, Context};
    ///
    /// let ctx = Context::default();
    /// assert_eq!(ctx.multiply_str(Algorithm::Vedic, "123", "456").unwrap(), "56088");
    /// assert!(ctx.multiply_str(Algorithm::Karatsuba, "12", "x").is_err());
    /// ```
    pub fn multiply_str(&self, algorithm: Algorithm, a: &str, b: &str) -> Result<String, ParseDigitsError> {
        let a = parse(a)?;
        let b = parse(b)?;
        Ok(format(&self.multiply(algorithm, &a, &b)))
    }
}

fn default_karatsuba_threshold() -> NonZeroUsize {
    match NonZeroUsize::new(DEFAULT_KARATSUBA_THRESHOLD) {
        Some(n) => n,
        // build script only writes non-zero values
        None => unreachable!(),
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn default_threshold() {
        let ctx = Context::default();
        assert_eq!(ctx.karatsuba_threshold(), DEFAULT_KARATSUBA_THRESHOLD);
    }

    #[test]
    fn with_threshold() {
        let eight = NonZeroUsize::new(8).unwrap();
        let ctx = Context::default().with_karatsuba_threshold(eight);
        assert_eq!(ctx.karatsuba_threshold(), 8);
        assert_eq!(ctx, Context::new(eight));
    }

    #[test]
    fn every_algorithm_agrees() {
        let a = parse(&"9".repeat(40)).unwrap();
        let b = parse(&"8".repeat(35)).unwrap();
        let expected = multiply_schoolbook(&a, &b);

        for &threshold in [1usize, 8, 32, 128].iter() {
            let ctx = Context::new(NonZeroUsize::new(threshold).unwrap());
            for &algorithm in Algorithm::ALL.iter() {
                assert_eq!(ctx.multiply(algorithm, &a, &b), expected, "{} @ {}", algorithm, threshold);
            }
        }
    }

    #[test]
    fn multiply_str_reports_first_error() {
        let ctx = Context::default();
        assert_eq!(
            ctx.multiply_str(Algorithm::Schoolbook, "", "12"),
            Err(ParseDigitsError::EmptyInput)
        );
        assert_eq!(
            ctx.multiply_str(Algorithm::Schoolbook, "1-2", "x"),
            Err(ParseDigitsError::InvalidDigit { index: 1, found: '-' })
        );
        assert_eq!(
            ctx.multiply_str(Algorithm::Schoolbook, "12", "4.5"),
            Err(ParseDigitsError::InvalidDigit { index: 1, found: '.' })
        );
    }
}
