use core::borrow::Borrow;
use core::cmp;
use core::fmt;
use core::str::FromStr;

use crate::bounds;
use crate::parse::{self, ParseError};
use crate::policy::{OverflowPolicy, RangeError};
use crate::{Assert, IsTrue};

/// An integer known to lie in the closed interval `[MIN, MAX]`.
///
/// The bounds are part of the type, so arithmetic between `Ranged` values
/// (see the operator impls) produces *differently bounded* results carrying
/// the exact interval of the operation.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, Eq, Ord)]
#[cfg_attr(feature = "zerocopy", derive(zerocopy::IntoBytes))]
pub struct Ranged<const MIN: i128, const MAX: i128>(i128);

impl<const MIN: i128, const MAX: i128> Ranged<MIN, MAX> {
    /// The smallest value this ranged integer can contain.
    pub const MIN_VALUE: i128 = MIN;
    /// The largest value this ranged integer can contain.
    pub const MAX_VALUE: i128 = MAX;

    /// The smallest value of the ranged integer.
    pub const MIN: Self = {
        assert!(MIN <= MAX);
        Self(MIN)
    };
    /// The largest value of the ranged integer.
    pub const MAX: Self = {
        assert!(MIN <= MAX);
        Self(MAX)
    };

    /// Creates a ranged integer without checking the value.
    ///
    /// # Safety
    ///
    /// The value must not be less than [`MIN_VALUE`](Self::MIN_VALUE) or
    /// greater than [`MAX_VALUE`](Self::MAX_VALUE).
    #[must_use]
    pub const unsafe fn new_unchecked(n: i128) -> Self {
        debug_assert!(Self::in_range(n));
        Self(n)
    }

    /// Checks whether the given value is in the range of the ranged integer.
    #[must_use]
    #[inline]
    pub const fn in_range(n: i128) -> bool {
        n >= Self::MIN_VALUE && n <= Self::MAX_VALUE
    }

    /// Creates a ranged integer if the given value is within the range
    /// [[`MIN`](Self::MIN), [`MAX`](Self::MAX)].
    #[must_use]
    #[inline]
    pub const fn new(n: i128) -> Option<Self> {
        if Self::in_range(n) {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Creates a ranged integer, reporting which bound the value violated on
    /// failure.
    #[inline]
    pub const fn try_new(n: i128) -> Result<Self, RangeError> {
        if Self::in_range(n) {
            Ok(Self(n))
        } else {
            Err(RangeError::new(n, MIN, MAX))
        }
    }

    /// Creates a ranged integer by setting the value to [`MIN`](Self::MIN) or
    /// [`MAX`](Self::MAX) if it is too low or too high respectively.
    #[must_use]
    #[inline]
    pub const fn new_saturating(n: i128) -> Self {
        if n < Self::MIN_VALUE {
            Self::MIN
        } else if n > Self::MAX_VALUE {
            Self::MAX
        } else {
            Self(n)
        }
    }

    /// Creates a ranged integer by wrapping using modular arithmetic.
    ///
    /// For `n` in range this is an identity function; for `n` out of range it
    /// wraps around the interval, so `Self::MAX_VALUE + 1` wraps to
    /// `Self::MIN`.
    #[must_use]
    pub const fn new_wrapping(n: i128) -> Self {
        Self(crate::policy::wrap_into(n, MIN, MAX))
    }

    /// Creates a ranged integer by applying an overflow policy to the value.
    ///
    /// In-range values pass through untouched under every policy.
    #[inline]
    pub fn new_with<P: OverflowPolicy>(policy: &P, n: i128) -> Result<Self, RangeError> {
        match policy.fit(n, MIN, MAX) {
            Ok(v) => Ok(Self(v)),
            Err(e) => Err(e),
        }
    }

    /// Creates a ranged integer from a value checked at compile time.
    ///
    /// Using a `VALUE` outside `[MIN, MAX]` is a compile error, not a panic.
    #[must_use]
    #[inline]
    pub const fn from_const<const VALUE: i128>() -> Self
    where
        Assert<{ bounds::range_within(VALUE, VALUE, MIN, MAX) }>: IsTrue,
    {
        Self(VALUE)
    }

    /// Converts a string slice in a given base to the ranged integer.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is below 2 or above 36.
    pub const fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseError> {
        let value = match parse::from_ascii_radix(src.as_bytes(), radix) {
            Ok(value) => value,
            Err(e) => return Err(e),
        };
        if value < Self::MIN_VALUE {
            Err(parse::error_below_min())
        } else if value > Self::MAX_VALUE {
            Err(parse::error_above_max())
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the value of the ranged integer as a primitive type.
    #[must_use]
    #[inline]
    pub const fn get(self) -> i128 {
        self.0
    }

    /// Returns a shared reference to the value of the ranged integer.
    #[must_use]
    #[inline]
    pub const fn get_ref(&self) -> &i128 {
        &self.0
    }

    /// Checked integer addition.
    #[must_use]
    #[inline]
    pub const fn checked_add(self, rhs: i128) -> Option<Self> {
        match self.get().checked_add(rhs) {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Saturating integer addition.
    #[must_use]
    #[inline]
    pub const fn saturating_add(self, rhs: i128) -> Self {
        Self::new_saturating(self.get().saturating_add(rhs))
    }

    /// Checked integer subtraction.
    #[must_use]
    #[inline]
    pub const fn checked_sub(self, rhs: i128) -> Option<Self> {
        match self.get().checked_sub(rhs) {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Saturating integer subtraction.
    #[must_use]
    #[inline]
    pub const fn saturating_sub(self, rhs: i128) -> Self {
        Self::new_saturating(self.get().saturating_sub(rhs))
    }

    /// Checked integer multiplication.
    #[must_use]
    #[inline]
    pub const fn checked_mul(self, rhs: i128) -> Option<Self> {
        match self.get().checked_mul(rhs) {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Saturating integer multiplication.
    #[must_use]
    #[inline]
    pub const fn saturating_mul(self, rhs: i128) -> Self {
        Self::new_saturating(self.get().saturating_mul(rhs))
    }

    /// Checked integer division.
    #[must_use]
    #[inline]
    pub const fn checked_div(self, rhs: i128) -> Option<Self> {
        match self.get().checked_div(rhs) {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Checked integer remainder.
    #[must_use]
    #[inline]
    pub const fn checked_rem(self, rhs: i128) -> Option<Self> {
        match self.get().checked_rem(rhs) {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Checked negation.
    #[must_use]
    #[inline]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.get().checked_neg() {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Saturating negation.
    #[must_use]
    #[inline]
    pub const fn saturating_neg(self) -> Self {
        Self::new_saturating(self.get().saturating_neg())
    }

    /// Checked absolute value.
    #[must_use]
    #[inline]
    pub const fn checked_abs(self) -> Option<Self> {
        match self.get().checked_abs() {
            Some(val) => Self::new(val),
            None => None,
        }
    }

    /// Saturating absolute value.
    #[must_use]
    #[inline]
    pub const fn saturating_abs(self) -> Self {
        Self::new_saturating(self.get().saturating_abs())
    }
}

// === Comparisons ===

impl<const MIN: i128, const MAX: i128> PartialEq<i128> for Ranged<MIN, MAX> {
    #[inline]
    fn eq(&self, other: &i128) -> bool {
        self.get() == *other
    }
}
impl<const MIN: i128, const MAX: i128> PartialEq<Ranged<MIN, MAX>> for i128 {
    #[inline]
    fn eq(&self, other: &Ranged<MIN, MAX>) -> bool {
        *self == other.get()
    }
}
impl<const A_MIN: i128, const A_MAX: i128, const B_MIN: i128, const B_MAX: i128>
    PartialEq<Ranged<B_MIN, B_MAX>> for Ranged<A_MIN, A_MAX>
{
    #[inline]
    fn eq(&self, other: &Ranged<B_MIN, B_MAX>) -> bool {
        self.get() == other.get()
    }
}

impl<const MIN: i128, const MAX: i128> PartialOrd<i128> for Ranged<MIN, MAX> {
    #[inline]
    fn partial_cmp(&self, other: &i128) -> Option<cmp::Ordering> {
        self.get().partial_cmp(other)
    }
}
impl<const MIN: i128, const MAX: i128> PartialOrd<Ranged<MIN, MAX>> for i128 {
    #[inline]
    fn partial_cmp(&self, other: &Ranged<MIN, MAX>) -> Option<cmp::Ordering> {
        self.partial_cmp(&other.get())
    }
}
impl<const A_MIN: i128, const A_MAX: i128, const B_MIN: i128, const B_MAX: i128>
    PartialOrd<Ranged<B_MIN, B_MAX>> for Ranged<A_MIN, A_MAX>
{
    #[inline]
    fn partial_cmp(&self, other: &Ranged<B_MIN, B_MAX>) -> Option<cmp::Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

// === AsRef, Borrow ===

impl<const MIN: i128, const MAX: i128> AsRef<i128> for Ranged<MIN, MAX> {
    #[inline]
    fn as_ref(&self) -> &i128 {
        self.get_ref()
    }
}
impl<const MIN: i128, const MAX: i128> Borrow<i128> for Ranged<MIN, MAX> {
    #[inline]
    fn borrow(&self) -> &i128 {
        self.get_ref()
    }
}

// === Parsing ===

impl<const MIN: i128, const MAX: i128> FromStr for Ranged<MIN, MAX> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// === Formatting ===

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => { $(
        impl<const MIN: i128, const MAX: i128> fmt::$trait for Ranged<MIN, MAX> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::$trait::fmt(&self.get(), f)
            }
        }
    )* }
}

impl_fmt_traits!(Binary, Display, LowerExp, LowerHex, Octal, UpperExp, UpperHex);

// === Arbitrary ===

#[cfg(feature = "arbitrary1")]
use arbitrary1::{Arbitrary, Unstructured};

#[cfg(feature = "arbitrary1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "arbitrary1")))]
impl<'a, const MIN: i128, const MAX: i128> Arbitrary<'a> for Ranged<MIN, MAX> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary1::Result<Self> {
        let n = u.int_in_range(MIN..=MAX)?;
        Ok(Self(n))
    }

    #[inline]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <i128 as Arbitrary<'a>>::size_hint(depth)
    }
}

// === Bytemuck ===

#[cfg(feature = "bytemuck1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "bytemuck1")))]
unsafe impl<const MIN: i128, const MAX: i128> bytemuck1::Contiguous for Ranged<MIN, MAX> {
    type Int = i128;
    const MAX_VALUE: i128 = MAX;
    const MIN_VALUE: i128 = MIN;
}

// === Num ===

#[cfg(feature = "num-traits02")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
impl<const MIN: i128, const MAX: i128> num_traits02::Bounded for Ranged<MIN, MAX> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

// The other `Checked*`/`Saturating*` traits all have an `Op<Self, Output =
// Self>` supertrait, which a type whose operators change the bounds cannot
// satisfy. The inherent `checked_*`/`saturating_*` methods cover that ground.
#[cfg(feature = "num-traits02")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
impl<const MIN: i128, const MAX: i128> num_traits02::CheckedNeg for Ranged<MIN, MAX> {
    fn checked_neg(&self) -> Option<Self> {
        Self::checked_neg(*self)
    }
}

#[cfg(feature = "num-traits02")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
impl<const MIN: i128, const MAX: i128> num_traits02::ToPrimitive for Ranged<MIN, MAX> {
    fn to_i64(&self) -> Option<i64> {
        self.get().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.get().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        Some(self.get())
    }

    fn to_u128(&self) -> Option<u128> {
        self.get().to_u128()
    }
}

// === Serde ===

#[cfg(feature = "serde1")]
use serde1::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde1")))]
impl<const MIN: i128, const MAX: i128> Serialize for Ranged<MIN, MAX> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde1")))]
impl<'de, const MIN: i128, const MAX: i128> Deserialize<'de> for Ranged<MIN, MAX> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(i128::deserialize(deserializer)?).ok_or_else(|| {
            D::Error::custom(format_args!(
                "integer out of range, expected it to be between {} and {}",
                Self::MIN_VALUE,
                Self::MAX_VALUE,
            ))
        })
    }
}
