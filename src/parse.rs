use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::error::Error;

// Implemented ourselves (copying the shape of the std implementation) because
// `IntErrorKind` is non-exhaustive and carries no range information.
pub(crate) const fn from_ascii_radix(src: &[u8], radix: u32) -> Result<i128, ParseError> {
    assert!(
        2 <= radix && radix <= 36,
        "from_str_radix: radix must lie in the range `[2, 36]`",
    );

    let (positive, digits) = match *src {
        [b'+', ref digits @ ..] => (true, digits),
        [b'-', ref digits @ ..] => (false, digits),
        ref digits => (true, digits),
    };

    if digits.is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::NoDigits,
        });
    }

    let overflow_kind = if positive {
        ParseErrorKind::AboveMax
    } else {
        ParseErrorKind::BelowMin
    };

    let mut result: i128 = 0;

    let mut i = 0;
    while i < digits.len() {
        let digit = digits[i];

        let Some(digit_value) = (digit as char).to_digit(radix) else {
            return Err(ParseError {
                kind: ParseErrorKind::InvalidDigit,
            });
        };

        let Some(new_result) = result.checked_mul(radix as i128) else {
            return Err(ParseError {
                kind: overflow_kind,
            });
        };

        let Some(new_result) = (if positive {
            new_result.checked_add(digit_value as i128)
        } else {
            new_result.checked_sub(digit_value as i128)
        }) else {
            return Err(ParseError {
                kind: overflow_kind,
            });
        };

        result = new_result;

        i += 1;
    }

    Ok(result)
}

/// An error which can be returned when parsing a ranged integer.
///
/// This is the error type of [`Ranged::from_str_radix`](crate::Ranged::from_str_radix)
/// as well as the [`FromStr`](core::str::FromStr) implementation.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    /// Gives the cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ParseErrorKind::NoDigits => f.write_str("no digits found"),
            ParseErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
            ParseErrorKind::AboveMax => f.write_str("number too high to fit in target range"),
            ParseErrorKind::BelowMin => f.write_str("number too low to fit in target range"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
impl Error for ParseError {}

/// The cause of the failure to parse the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// No digits were found in the input string.
    ///
    /// This happens when the input is an empty string, or when it only contains a `+` or `-`.
    #[non_exhaustive]
    NoDigits,
    /// An invalid digit was found in the input.
    #[non_exhaustive]
    InvalidDigit,
    /// The integer is too high to fit in the target range.
    #[non_exhaustive]
    AboveMax,
    /// The integer is too low to fit in the target range.
    #[non_exhaustive]
    BelowMin,
}

#[must_use]
pub(crate) const fn error_below_min() -> ParseError {
    ParseError {
        kind: ParseErrorKind::BelowMin,
    }
}
#[must_use]
pub(crate) const fn error_above_max() -> ParseError {
    ParseError {
        kind: ParseErrorKind::AboveMax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        assert_eq!(from_ascii_radix(b"0", 10).unwrap(), 0);
        assert_eq!(from_ascii_radix(b"+42", 10).unwrap(), 42);
        assert_eq!(from_ascii_radix(b"-42", 10).unwrap(), -42);
        assert_eq!(
            from_ascii_radix(b"170141183460469231731687303715884105727", 10).unwrap(),
            i128::MAX,
        );
        assert_eq!(
            from_ascii_radix(b"-170141183460469231731687303715884105728", 10).unwrap(),
            i128::MIN,
        );
    }

    #[test]
    fn other_radices() {
        assert_eq!(from_ascii_radix(b"ff", 16).unwrap(), 255);
        assert_eq!(from_ascii_radix(b"-101", 2).unwrap(), -5);
        assert_eq!(from_ascii_radix(b"zz", 36).unwrap(), 35 * 36 + 35);
    }

    #[test]
    fn errors() {
        assert_eq!(
            from_ascii_radix(b"", 10).unwrap_err().kind(),
            ParseErrorKind::NoDigits,
        );
        assert_eq!(
            from_ascii_radix(b"+", 10).unwrap_err().kind(),
            ParseErrorKind::NoDigits,
        );
        assert_eq!(
            from_ascii_radix(b"12a", 10).unwrap_err().kind(),
            ParseErrorKind::InvalidDigit,
        );
        assert_eq!(
            from_ascii_radix(b"170141183460469231731687303715884105728", 10)
                .unwrap_err()
                .kind(),
            ParseErrorKind::AboveMax,
        );
        assert_eq!(
            from_ascii_radix(b"-170141183460469231731687303715884105729", 10)
                .unwrap_err()
                .kind(),
            ParseErrorKind::BelowMin,
        );
    }
}
