use crate::bounds;
use crate::policy::RangeError;
use crate::{Assert, IsTrue, Ranged};

/// A ranged integer holding exactly `VALUE`, as the singleton type
/// `Ranged<VALUE, VALUE>`.
///
/// Combining constants with the arithmetic operators keeps intervals tight:
/// `constant::<60>() * minutes` has bounds scaled by exactly 60.
#[must_use]
#[inline]
pub const fn constant<const VALUE: i128>() -> Ranged<VALUE, VALUE> {
    // SAFETY: VALUE lies in [VALUE, VALUE].
    unsafe { Ranged::new_unchecked(VALUE) }
}

impl<const MIN: i128, const MAX: i128> Ranged<MIN, MAX> {
    /// Rebounds the value to a superset interval.
    ///
    /// Checked at compile time: the new interval must contain `[MIN, MAX]`.
    #[must_use]
    #[inline]
    pub const fn expand<const NEW_MIN: i128, const NEW_MAX: i128>(
        self,
    ) -> Ranged<NEW_MIN, NEW_MAX>
    where
        Assert<{ bounds::range_within(MIN, MAX, NEW_MIN, NEW_MAX) }>: IsTrue,
    {
        // SAFETY: [MIN, MAX] is contained in [NEW_MIN, NEW_MAX].
        unsafe { Ranged::new_unchecked(self.get()) }
    }

    /// Rebounds the value to an arbitrary interval, checking the value at
    /// runtime.
    #[inline]
    pub const fn narrow<const NEW_MIN: i128, const NEW_MAX: i128>(
        self,
    ) -> Result<Ranged<NEW_MIN, NEW_MAX>, RangeError> {
        Ranged::<NEW_MIN, NEW_MAX>::try_new(self.get())
    }
}

impl<const MIN: i128, const MAX: i128> From<Ranged<MIN, MAX>> for i128 {
    #[inline]
    fn from(n: Ranged<MIN, MAX>) -> Self {
        n.get()
    }
}

impl<const MIN: i128, const MAX: i128> TryFrom<i128> for Ranged<MIN, MAX> {
    type Error = RangeError;

    #[inline]
    fn try_from(n: i128) -> Result<Self, Self::Error> {
        Self::try_new(n)
    }
}

// Infallible narrowing into a primitive exists exactly when the interval
// provably fits it.
macro_rules! ranged_into_primitive {
    ($($prim:ident: ($lo:expr, $hi:expr),)*) => { $(
        impl<const MIN: i128, const MAX: i128> From<Ranged<MIN, MAX>> for $prim
        where
            Assert<{ bounds::range_within(MIN, MAX, $lo, $hi) }>: IsTrue,
        {
            #[inline]
            fn from(n: Ranged<MIN, MAX>) -> Self {
                n.get() as $prim
            }
        }
    )* }
}

ranged_into_primitive! {
    i8: (i8::MIN as i128, i8::MAX as i128),
    i16: (i16::MIN as i128, i16::MAX as i128),
    i32: (i32::MIN as i128, i32::MAX as i128),
    i64: (i64::MIN as i128, i64::MAX as i128),
    isize: (isize::MIN as i128, isize::MAX as i128),
    u8: (0, u8::MAX as i128),
    u16: (0, u16::MAX as i128),
    u32: (0, u32::MAX as i128),
    u64: (0, u64::MAX as i128),
    usize: (0, usize::MAX as i128),
    u128: (0, i128::MAX),
}

// The reverse direction: a primitive enters an interval infallibly when the
// interval covers the primitive's whole range. `i128` itself goes through
// `TryFrom` above instead (an unconditional `From<i128>` would collide with
// it through the blanket `TryFrom` impl).
macro_rules! primitive_into_ranged {
    ($($prim:ident: ($lo:expr, $hi:expr),)*) => { $(
        impl<const MIN: i128, const MAX: i128> From<$prim> for Ranged<MIN, MAX>
        where
            Assert<{ bounds::range_within($lo, $hi, MIN, MAX) }>: IsTrue,
        {
            #[inline]
            fn from(n: $prim) -> Self {
                // SAFETY: the primitive's whole range lies in [MIN, MAX].
                unsafe { Self::new_unchecked(n as i128) }
            }
        }
    )* }
}

primitive_into_ranged! {
    i8: (i8::MIN as i128, i8::MAX as i128),
    i16: (i16::MIN as i128, i16::MAX as i128),
    i32: (i32::MIN as i128, i32::MAX as i128),
    i64: (i64::MIN as i128, i64::MAX as i128),
    isize: (isize::MIN as i128, isize::MAX as i128),
    u8: (0, u8::MAX as i128),
    u16: (0, u16::MAX as i128),
    u32: (0, u32::MAX as i128),
    u64: (0, u64::MAX as i128),
    usize: (0, usize::MAX as i128),
}

#[cfg(test)]
mod tests {
    use super::constant;
    use crate::{Ranged, RangeErrorKind};

    #[test]
    fn constants() {
        let sixty = constant::<60>();
        assert_eq!(sixty.get(), 60);
        assert_eq!(Ranged::<60, 60>::MIN, sixty);
    }

    #[test]
    fn expand_keeps_value() {
        let small: Ranged<3, 10> = Ranged::new(7).unwrap();
        let wide: Ranged<-100, 100> = small.expand();
        assert_eq!(wide.get(), 7);
    }

    #[test]
    fn narrow_checks_value() {
        let wide: Ranged<-100, 100> = Ranged::new(7).unwrap();
        let small: Ranged<0, 10> = wide.narrow().unwrap();
        assert_eq!(small.get(), 7);
        let err = wide.narrow::<0, 5>().unwrap_err();
        assert_eq!(err.kind(), RangeErrorKind::AboveMax);
        assert_eq!(err.value(), 7);
    }

    #[test]
    fn primitive_conversions() {
        let n: Ranged<0, 200> = Ranged::new(150).unwrap();
        assert_eq!(u8::from(n), 150);
        assert_eq!(i16::from(n), 150);
        assert_eq!(i128::from(n), 150);

        let from_byte: Ranged<-10, 300> = 250u8.into();
        assert_eq!(from_byte.get(), 250);

        let tried: Ranged<0, 10> = 7i128.try_into().unwrap();
        assert_eq!(tried.get(), 7);
        assert!(Ranged::<0, 10>::try_from(11).is_err());
    }
}
