//!
//! Support for serde implementations
//!
//! A [`DigitVec`] serializes as its canonical decimal string.
//! Strings and unsigned integers are accepted when deserializing.
//!
use crate::*;
use serde::{de, ser};


impl ser::Serialize for DigitVec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a DigitVec
struct DigitVecVisitor;

impl<'de> de::Visitor<'de> for DigitVecVisitor {
    type Value = DigitVec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or string of decimal digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<DigitVec, E>
    where
        E: de::Error,
    {
        parse(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<DigitVec, E>
    where
        E: de::Error,
    {
        Ok(DigitVec::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<DigitVec, E>
    where
        E: de::Error,
    {
        Ok(DigitVec::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<DigitVec, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(de::Error::invalid_value(de::Unexpected::Signed(value), &self));
        }
        Ok(DigitVec::from(value as u64))
    }
}

impl<'de> de::Deserialize<'de> for DigitVec {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DigitVecVisitor)
    }
}
