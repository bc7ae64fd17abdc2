// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary precision decimal multiplication
//!
//! Non-negative integers are stored as a [`DigitVec`]: a vector of base-10
//! digits ordered from least to most significant. Three multiplication
//! strategies operate on that representation:
//!
//! * [`multiply_schoolbook`] - quadratic digit-pair accumulation, with
//!   direct or lookup-table digit products and inline or deferred carries
//!   (see [`multiply_schoolbook_with`])
//! * [`multiply_karatsuba`] - divide and conquer, falling back to schoolbook
//!   at or below [`DEFAULT_KARATSUBA_THRESHOLD`] digits
//! * [`multiply_vedic`] - table driven, with the column summation sweep
//!   split from the carry sweep, reporting [`MetricCounts`]
//!
//! All strategies produce identical, canonical products.
//!
//! # Example
//!
//! ```
//! use decmul::{parse, format, multiply_karatsuba, multiply_vedic};
//!
//! let a = parse("123").unwrap();
//! let b = parse("456").unwrap();
//!
//! let product = multiply_karatsuba(&a, &b);
//! assert_eq!(format(&product), "56088");
//!
//! let vedic = multiply_vedic(&a, &b);
//! assert_eq!(vedic.product, product);
//! assert_eq!(vedic.counts.multiply_count, 9);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::{self, Ordering};
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::ops::{Add, AddAssign, Mul};
use self::stdlib::str::FromStr;
use self::stdlib::string::{String, ToString};
use self::stdlib::vec::Vec;
use self::stdlib::fmt;

use num_bigint::BigUint;
pub use num_traits::{One, ToPrimitive, Zero};


// const DEFAULT_KARATSUBA_THRESHOLD: usize = ${RUST_DECMUL_KARATSUBA_THRESHOLD} or 32;
include!(concat!(env!("OUT_DIR"), "/default_karatsuba_threshold.rs"));

mod digitvec;
pub use digitvec::DigitVec;

mod accumulator;
pub(crate) use accumulator::Accumulator;

// single-digit multiply & add lookup tables
mod tables;

// string <-> DigitVec
mod parsing;
pub use parsing::parse;
mod impl_fmt;
pub use impl_fmt::format;
mod impl_trait_from_str;

// PartialEq, Ord, Hash
mod impl_cmp;

// From<T>, BigUint conversions
mod impl_convert;

// Implementations of num_traits
mod impl_num;

// Add<T>, Mul<T>
mod impl_ops;

#[cfg(feature = "serde")]
mod impl_serde;

pub mod arithmetic;
pub use arithmetic::{
    add,
    subtract,
    checked_subtract,
    multiply_schoolbook,
    multiply_schoolbook_with,
    DigitProduct,
    CarryMode,
    multiply_karatsuba,
    multiply_karatsuba_with_threshold,
    multiply_karatsuba_traced,
    KaratsubaTrace,
    multiply_vedic,
    VedicProduct,
    MetricCounts,
    multiply_native_u32,
    multiply_native_u64,
};

// Multiplication settings
mod context;
pub use context::{Algorithm, Context, ParseAlgorithmError};


/// Errors produced when converting text into a [`DigitVec`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDigitsError {
    /// Input string was empty
    EmptyInput,
    /// Character at byte offset `index` is not an ASCII decimal digit
    InvalidDigit {
        index: usize,
        found: char,
    },
}

impl fmt::Display for ParseDigitsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitsError::*;

        match *self {
            EmptyInput => f.write_str("Failed to parse empty string"),
            InvalidDigit { index, found } => {
                write!(f, "invalid digit {:?} at position {}", found, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDigitsError {}


#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;

    include!("lib.tests.rs");
}


#[cfg(all(test, not(any(target_arch = "wasm32", target_arch = "wasm64"))))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
