use core::fmt;

use crate::bounds;
use crate::{Assert, IsTrue, Ranged};

/// An optional [`Ranged`] that is the same size as the `Ranged` itself.
///
/// "None" is stored as a spare bit pattern adjacent to the interval, so no
/// discriminant is needed. The type is only constructible when such a
/// pattern exists, i.e. when the interval does not cover all of `i128`.
#[repr(transparent)]
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct OptionRanged<const MIN: i128, const MAX: i128>(i128);

impl<const MIN: i128, const MAX: i128> OptionRanged<MIN, MAX> {
    // The value just below the interval, or just above it when MIN sits on
    // the edge of i128. Referenced only after a constructor proved a spare
    // pattern exists.
    const NICHE: i128 = {
        assert!(MIN <= MAX);
        if MIN > i128::MIN {
            MIN - 1
        } else {
            MAX + 1
        }
    };

    /// The empty `OptionRanged`.
    #[must_use]
    #[inline]
    pub const fn none() -> Self
    where
        Assert<{ bounds::has_niche(MIN, MAX) }>: IsTrue,
    {
        Self(Self::NICHE)
    }

    /// An `OptionRanged` holding the given value.
    #[must_use]
    #[inline]
    pub const fn some(value: Ranged<MIN, MAX>) -> Self
    where
        Assert<{ bounds::has_niche(MIN, MAX) }>: IsTrue,
    {
        Self(value.get())
    }

    /// Unpacks into an ordinary [`Option`].
    #[must_use]
    #[inline]
    pub const fn get(self) -> Option<Ranged<MIN, MAX>> {
        if self.0 == Self::NICHE {
            None
        } else {
            // SAFETY: every non-niche pattern was stored by `some` from a
            // valid `Ranged`.
            Some(unsafe { Ranged::new_unchecked(self.0) })
        }
    }

    /// Whether a value is present.
    #[must_use]
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != Self::NICHE
    }

    /// Whether no value is present.
    #[must_use]
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NICHE
    }

    /// The contained value, or `default` when empty.
    #[must_use]
    #[inline]
    pub const fn unwrap_or(self, default: Ranged<MIN, MAX>) -> Ranged<MIN, MAX> {
        match self.get() {
            Some(v) => v,
            None => default,
        }
    }
}

impl<const MIN: i128, const MAX: i128> Default for OptionRanged<MIN, MAX>
where
    Assert<{ bounds::has_niche(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<const MIN: i128, const MAX: i128> From<Ranged<MIN, MAX>> for OptionRanged<MIN, MAX>
where
    Assert<{ bounds::has_niche(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn from(value: Ranged<MIN, MAX>) -> Self {
        Self::some(value)
    }
}

impl<const MIN: i128, const MAX: i128> From<Option<Ranged<MIN, MAX>>> for OptionRanged<MIN, MAX>
where
    Assert<{ bounds::has_niche(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn from(value: Option<Ranged<MIN, MAX>>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::none(),
        }
    }
}

impl<const MIN: i128, const MAX: i128> From<OptionRanged<MIN, MAX>> for Option<Ranged<MIN, MAX>> {
    #[inline]
    fn from(value: OptionRanged<MIN, MAX>) -> Self {
        value.get()
    }
}

impl<const MIN: i128, const MAX: i128> fmt::Debug for OptionRanged<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}
