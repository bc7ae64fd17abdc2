//! Routines for parsing decimal strings into DigitVecs

use crate::*;


/// Parse a string of ASCII decimal digits
///
/// The result has exactly one digit per input character, least
/// significant first. Leading zeros in the text are kept as
/// most-significant zero digits; call [`DigitVec::trim`] to remove them.
///
/// ```
/// let v = decmul::parse("00042").unwrap();
/// assert_eq!(v.digits(), &[2, 4, 0, 0, 0]);
/// assert_eq!(decmul::format(&v), "42");
/// ```
///
pub fn parse(text: &str) -> Result<DigitVec, ParseDigitsError> {
    if text.is_empty() {
        return Err(ParseDigitsError::EmptyInput);
    }

    if let Some((index, found)) = text.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
        return Err(ParseDigitsError::InvalidDigit { index, found });
    }

    // all characters are single-byte
    let digits = text.bytes().rev().map(|b| b - b'0').collect();
    Ok(DigitVec::from_vec(digits))
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("parsing.tests.rs");
}
