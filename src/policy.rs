//! Strategies for admitting an unconstrained integer into an interval.
//!
//! Arithmetic between ranged values never needs one of these: the operators
//! compute result intervals that already contain every possible value. A
//! policy only acts at the boundary, when a bare `i128` (user input, wire
//! data, a narrowing conversion) has to be fitted into `[min, max]`.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::error::Error;

/// An error returned when a value cannot enter the requested interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    value: i128,
    min: i128,
    max: i128,
    kind: RangeErrorKind,
}

/// Which bound of the interval the value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeErrorKind {
    /// The value is less than the interval's lower bound.
    BelowMin,
    /// The value is greater than the interval's upper bound.
    AboveMax,
}

impl RangeError {
    pub(crate) const fn new(value: i128, min: i128, max: i128) -> Self {
        let kind = if value < min {
            RangeErrorKind::BelowMin
        } else {
            RangeErrorKind::AboveMax
        };
        Self {
            value,
            min,
            max,
            kind,
        }
    }

    /// The offending value.
    #[must_use]
    pub const fn value(&self) -> i128 {
        self.value
    }

    /// The lower bound of the interval the value missed.
    #[must_use]
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// The upper bound of the interval the value missed.
    #[must_use]
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Gives the cause of the error.
    #[must_use]
    pub const fn kind(&self) -> RangeErrorKind {
        self.kind
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            RangeErrorKind::BelowMin => write!(
                f,
                "{} is below the minimum of the range [{}, {}]",
                self.value, self.min, self.max,
            ),
            RangeErrorKind::AboveMax => write!(
                f,
                "{} is above the maximum of the range [{}, {}]",
                self.value, self.min, self.max,
            ),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
impl Error for RangeError {}

/// A strategy for fitting an unconstrained `i128` into an interval.
///
/// Implementations must be the identity on in-range values.
pub trait OverflowPolicy {
    /// Fits `value` into `[min, max]`, or reports that it cannot.
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError>;
}

/// Panics on out-of-range values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panic;

impl OverflowPolicy for Panic {
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError> {
        if value < min || value > max {
            panic!("value out of range");
        }
        Ok(value)
    }
}

/// Returns an error for out-of-range values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reject;

impl OverflowPolicy for Reject {
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError> {
        if value < min || value > max {
            Err(RangeError::new(value, min, max))
        } else {
            Ok(value)
        }
    }
}

/// Clamps out-of-range values to the violated bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Saturate;

impl OverflowPolicy for Saturate {
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError> {
        Ok(if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        })
    }
}

/// Wraps out-of-range values into the interval with modular arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wrap;

impl OverflowPolicy for Wrap {
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError> {
        Ok(wrap_into(value, min, max))
    }
}

/// `value` wrapped into `[min, max]` with modular arithmetic, using `u128`
/// intermediates so intervals near the edges of `i128` stay exact.
pub(crate) const fn wrap_into(value: i128, min: i128, max: i128) -> i128 {
    let range_sub_one = max.abs_diff(min);
    let Some(range) = range_sub_one.checked_add(1) else {
        // The range spans all of i128, so wrapping is the identity.
        return value;
    };

    // Work in the residues mod `range`; the distance from min's residue to
    // value's residue is the offset of the wrapped value above min.
    let value_rem = rem_euclid_unsigned(value, range);
    let min_rem = rem_euclid_unsigned(min, range);
    let offset = if value_rem >= min_rem {
        value_rem - min_rem
    } else {
        range - (min_rem - value_rem)
    };

    // offset <= range - 1 = max - min, so this cannot overflow.
    match min.checked_add_unsigned(offset) {
        Some(v) => v,
        None => panic!("wrapped offset exceeded the range"),
    }
}

/// `n mod range` in `[0, range)`, without widening past `u128`.
const fn rem_euclid_unsigned(n: i128, range: u128) -> u128 {
    if n >= 0 {
        n as u128 % range
    } else {
        let m = n.unsigned_abs() % range;
        if m == 0 {
            0
        } else {
            range - m
        }
    }
}

/// Narrows the interval at runtime before delegating to an inner policy.
///
/// The effective interval is the intersection of the static `[min, max]` and
/// this policy's own `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dynamic<P> {
    low: i128,
    high: i128,
    inner: P,
}

impl<P> Dynamic<P> {
    /// Creates a policy restricting values to `[low, high]`, handling
    /// violations with `inner`.
    #[must_use]
    pub const fn new(low: i128, high: i128, inner: P) -> Self {
        assert!(low <= high, "dynamic bounds are inverted");
        Self { low, high, inner }
    }

    /// The runtime lower bound.
    #[must_use]
    pub const fn low(&self) -> i128 {
        self.low
    }

    /// The runtime upper bound.
    #[must_use]
    pub const fn high(&self) -> i128 {
        self.high
    }
}

impl<P: OverflowPolicy> OverflowPolicy for Dynamic<P> {
    fn fit(&self, value: i128, min: i128, max: i128) -> Result<i128, RangeError> {
        let min = if self.low > min { self.low } else { min };
        let max = if self.high < max { self.high } else { max };
        self.inner.fit(value, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject() {
        assert_eq!(Reject.fit(5, 0, 10), Ok(5));
        let err = Reject.fit(-1, 0, 10).unwrap_err();
        assert_eq!(err.kind(), RangeErrorKind::BelowMin);
        assert_eq!(err.value(), -1);
        let err = Reject.fit(11, 0, 10).unwrap_err();
        assert_eq!(err.kind(), RangeErrorKind::AboveMax);
        assert_eq!((err.min(), err.max()), (0, 10));
    }

    #[test]
    fn saturate() {
        assert_eq!(Saturate.fit(-100, 0, 10), Ok(0));
        assert_eq!(Saturate.fit(100, 0, 10), Ok(10));
        assert_eq!(Saturate.fit(7, 0, 10), Ok(7));
    }

    #[test]
    fn wrap() {
        assert_eq!(Wrap.fit(11, 0, 10), Ok(0));
        assert_eq!(Wrap.fit(-1, 0, 10), Ok(10));
        assert_eq!(Wrap.fit(7, 0, 10), Ok(7));
        assert_eq!(Wrap.fit(5, -3, 4), Ok(-3));
    }

    #[test]
    #[should_panic = "value out of range"]
    fn panic_policy() {
        let _ = Panic.fit(11, 0, 10);
    }

    #[test]
    fn dynamic_intersects() {
        let policy = Dynamic::new(2, 5, Reject);
        assert_eq!(policy.fit(3, 0, 10), Ok(3));
        assert!(policy.fit(7, 0, 10).is_err());
        let clamping = Dynamic::new(2, 5, Saturate);
        assert_eq!(clamping.fit(7, 0, 10), Ok(5));
        assert_eq!(clamping.fit(-7, 0, 10), Ok(2));
    }
}
