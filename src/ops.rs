//! Operators whose output type carries the exact interval of the result.
//!
//! Each binary impl names its output bounds as const expressions over the
//! operand bounds, evaluated by [`bounds`]. The trivially satisfied `Sized`
//! bound on the output type is what lets the const expressions appear in the
//! impl at all. The runtime bodies are plain `i128` arithmetic: the output
//! interval already contains every reachable value, so they cannot overflow.

use core::ops::{Add, BitAnd, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use crate::bounds;
use crate::Ranged;

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Add<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<{ bounds::add_min(LMIN, RMIN) }, { bounds::add_max(LMAX, RMAX) }>: Sized,
{
    type Output = Ranged<{ bounds::add_min(LMIN, RMIN) }, { bounds::add_max(LMAX, RMAX) }>;

    #[inline]
    fn add(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the sum.
        unsafe { Ranged::new_unchecked(self.get() + rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Sub<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<{ bounds::sub_min(LMIN, RMAX) }, { bounds::sub_max(LMAX, RMIN) }>: Sized,
{
    type Output = Ranged<{ bounds::sub_min(LMIN, RMAX) }, { bounds::sub_max(LMAX, RMIN) }>;

    #[inline]
    fn sub(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the difference.
        unsafe { Ranged::new_unchecked(self.get() - rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Mul<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::mul_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::mul_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::mul_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::mul_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    #[inline]
    fn mul(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the product.
        unsafe { Ranged::new_unchecked(self.get() * rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Div<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::div_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::div_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::div_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::div_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. A divisor whose interval excludes zero never
    /// panics.
    #[inline]
    fn div(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the quotient.
        unsafe { Ranged::new_unchecked(self.get() / rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Rem<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::rem_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::rem_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::rem_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::rem_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn rem(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // wrapping_rem for the single overflowing case, i128::MIN % -1,
        // whose true remainder is the wrapped result 0.
        // SAFETY: the output bounds are the interval of the remainder.
        unsafe { Ranged::new_unchecked(self.get().wrapping_rem(rhs.get())) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Shl<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::shl_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::shl_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::shl_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::shl_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    #[inline]
    fn shl(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the shift.
        unsafe { Ranged::new_unchecked(self.get() << rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    Shr<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::shr_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::shr_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::shr_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::shr_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    #[inline]
    fn shr(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: the output bounds are the interval of the shift.
        unsafe { Ranged::new_unchecked(self.get() >> rhs.get()) }
    }
}

impl<const LMIN: i128, const LMAX: i128, const RMIN: i128, const RMAX: i128>
    BitAnd<Ranged<RMIN, RMAX>> for Ranged<LMIN, LMAX>
where
    Ranged<
        { bounds::bitand_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::bitand_max(LMIN, LMAX, RMIN, RMAX) },
    >: Sized,
{
    type Output = Ranged<
        { bounds::bitand_min(LMIN, LMAX, RMIN, RMAX) },
        { bounds::bitand_max(LMIN, LMAX, RMIN, RMAX) },
    >;

    #[inline]
    fn bitand(self, rhs: Ranged<RMIN, RMAX>) -> Self::Output {
        // SAFETY: x & y of nonnegative values lies in [0, min(x, y)].
        unsafe { Ranged::new_unchecked(self.get() & rhs.get()) }
    }
}

impl<const MIN: i128, const MAX: i128> Neg for Ranged<MIN, MAX>
where
    Ranged<{ bounds::neg_min(MAX) }, { bounds::neg_max(MIN) }>: Sized,
{
    type Output = Ranged<{ bounds::neg_min(MAX) }, { bounds::neg_max(MIN) }>;

    #[inline]
    fn neg(self) -> Self::Output {
        // SAFETY: the output bounds are the negated interval.
        unsafe { Ranged::new_unchecked(-self.get()) }
    }
}

impl<const MIN: i128, const MAX: i128> Ranged<MIN, MAX> {
    /// The absolute value, with bounds narrowed to the reachable magnitudes.
    #[must_use]
    #[inline]
    pub fn abs(self) -> Ranged<{ bounds::abs_min(MIN, MAX) }, { bounds::abs_max(MIN, MAX) }>
    where
        Ranged<{ bounds::abs_min(MIN, MAX) }, { bounds::abs_max(MIN, MAX) }>: Sized,
    {
        // SAFETY: the output bounds are the interval of the magnitudes.
        unsafe { Ranged::new_unchecked(self.get().abs()) }
    }
}

// Mixed arithmetic with a bare integer strips the bounds: an unconstrained
// operand would force the worst-case interval anyway, so the result is the
// plain primitive and any re-entry into a range is an explicit construction.
macro_rules! mixed_bin_op {
    ($($op:ident::$method:ident,)*) => { $(
        impl<const MIN: i128, const MAX: i128> $op<i128> for Ranged<MIN, MAX> {
            type Output = i128;
            #[inline]
            fn $method(self, rhs: i128) -> i128 {
                self.get().$method(rhs)
            }
        }
        impl<const MIN: i128, const MAX: i128> $op<Ranged<MIN, MAX>> for i128 {
            type Output = i128;
            #[inline]
            fn $method(self, rhs: Ranged<MIN, MAX>) -> i128 {
                self.$method(rhs.get())
            }
        }
    )* }
}

mixed_bin_op! {
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    Rem::rem,
    BitAnd::bitand,
}

/// The smaller of two ranged values, bounded by the pointwise minimum of the
/// operand intervals.
#[must_use]
#[inline]
pub fn min<const AMIN: i128, const AMAX: i128, const BMIN: i128, const BMAX: i128>(
    a: Ranged<AMIN, AMAX>,
    b: Ranged<BMIN, BMAX>,
) -> Ranged<{ bounds::min(AMIN, BMIN) }, { bounds::min(AMAX, BMAX) }>
where
    Ranged<{ bounds::min(AMIN, BMIN) }, { bounds::min(AMAX, BMAX) }>: Sized,
{
    let v = if a.get() <= b.get() { a.get() } else { b.get() };
    // SAFETY: min(a, b) lies in [min(AMIN, BMIN), min(AMAX, BMAX)].
    unsafe { Ranged::new_unchecked(v) }
}

/// The larger of two ranged values, bounded by the pointwise maximum of the
/// operand intervals.
#[must_use]
#[inline]
pub fn max<const AMIN: i128, const AMAX: i128, const BMIN: i128, const BMAX: i128>(
    a: Ranged<AMIN, AMAX>,
    b: Ranged<BMIN, BMAX>,
) -> Ranged<{ bounds::max(AMIN, BMIN) }, { bounds::max(AMAX, BMAX) }>
where
    Ranged<{ bounds::max(AMIN, BMIN) }, { bounds::max(AMAX, BMAX) }>: Sized,
{
    let v = if a.get() >= b.get() { a.get() } else { b.get() };
    // SAFETY: max(a, b) lies in [max(AMIN, BMIN), max(AMAX, BMAX)].
    unsafe { Ranged::new_unchecked(v) }
}
