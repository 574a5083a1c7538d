//! The interval arithmetic engine.
//!
//! Every function here is a pure `const fn` mapping the endpoints of the
//! operand intervals to one endpoint of the result interval. They are
//! evaluated at compile time inside the const-generic expressions of the
//! operator impls on [`Ranged`](crate::Ranged), so the result type of e.g.
//! `Ranged<1, 4> * Ranged<-3, 2>` is `Ranged<-12, 8>`. For the arithmetic
//! operators and the shifts that interval is exact; the bitwise-and bound
//! `[0, min(lmax, rmax)]` is a safe over-approximation.
//!
//! A bound computation that cannot be represented in `i128` panics, which in
//! const evaluation is a compile error at the offending instantiation.

/// The smaller of two bounds.
#[must_use]
pub const fn min(a: i128, b: i128) -> i128 {
    if a <= b {
        a
    } else {
        b
    }
}

/// The larger of two bounds.
#[must_use]
pub const fn max(a: i128, b: i128) -> i128 {
    if a >= b {
        a
    } else {
        b
    }
}

/// Whether `[min, max]` lies entirely within `[lo, hi]`.
#[must_use]
pub const fn range_within(min: i128, max: i128, lo: i128, hi: i128) -> bool {
    lo <= min && max <= hi
}

/// Whether every value of `[min, max]` is a valid `usize`.
#[must_use]
pub const fn fits_usize(min: i128, max: i128) -> bool {
    0 <= min && max <= usize::MAX as i128
}

/// Whether `[min, max]` leaves at least one spare `i128` bit pattern.
#[must_use]
pub const fn has_niche(min: i128, max: i128) -> bool {
    i128::MIN < min || max < i128::MAX
}

// === Addition ===

/// The lower bound of `[lhs_min, _] + [rhs_min, _]`.
#[must_use]
pub const fn add_min(lhs_min: i128, rhs_min: i128) -> i128 {
    match lhs_min.checked_add(rhs_min) {
        Some(n) => n,
        None => panic!("addition bounds require a larger type than i128"),
    }
}

/// The upper bound of `[_, lhs_max] + [_, rhs_max]`.
#[must_use]
pub const fn add_max(lhs_max: i128, rhs_max: i128) -> i128 {
    match lhs_max.checked_add(rhs_max) {
        Some(n) => n,
        None => panic!("addition bounds require a larger type than i128"),
    }
}

// === Subtraction ===

/// The lower bound of `[lhs_min, _] - [_, rhs_max]`.
#[must_use]
pub const fn sub_min(lhs_min: i128, rhs_max: i128) -> i128 {
    match lhs_min.checked_sub(rhs_max) {
        Some(n) => n,
        None => panic!("subtraction bounds require a larger type than i128"),
    }
}

/// The upper bound of `[_, lhs_max] - [rhs_min, _]`.
#[must_use]
pub const fn sub_max(lhs_max: i128, rhs_min: i128) -> i128 {
    match lhs_max.checked_sub(rhs_min) {
        Some(n) => n,
        None => panic!("subtraction bounds require a larger type than i128"),
    }
}

// === Multiplication ===

const fn product(a: i128, b: i128) -> i128 {
    match a.checked_mul(b) {
        Some(n) => n,
        None => panic!("multiplication bounds require a larger type than i128"),
    }
}

/// The lower bound of the product of two intervals: the least of the four
/// endpoint products.
#[must_use]
pub const fn mul_min(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    min(
        min(product(lhs_min, rhs_min), product(lhs_min, rhs_max)),
        min(product(lhs_max, rhs_min), product(lhs_max, rhs_max)),
    )
}

/// The upper bound of the product of two intervals: the greatest of the four
/// endpoint products.
#[must_use]
pub const fn mul_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    max(
        max(product(lhs_min, rhs_min), product(lhs_min, rhs_max)),
        max(product(lhs_max, rhs_min), product(lhs_max, rhs_max)),
    )
}

// === Division ===

const fn quotient(dividend: i128, divisor: i128) -> i128 {
    match dividend.checked_div(divisor) {
        Some(q) => q,
        None => panic!("division bounds require a larger type than i128"),
    }
}

// The extreme quotients are always produced by a dividend endpoint combined
// with either a divisor endpoint or the smallest-magnitude divisor of each
// sign (1 and -1 when the divisor interval contains them). Zero is never a
// divisor, so a zero endpoint is skipped rather than divided by.
const fn div_extreme(
    lhs_min: i128,
    lhs_max: i128,
    rhs_min: i128,
    rhs_max: i128,
    want_max: bool,
) -> i128 {
    assert!(lhs_min <= lhs_max && rhs_min <= rhs_max, "interval is inverted");
    assert!(
        rhs_min != 0 || rhs_max != 0,
        "division is not defined for a divisor interval of only zero",
    );

    let dividends = [lhs_min, lhs_max];
    let divisors = [rhs_min, rhs_max, 1, -1];

    let mut extreme = if want_max { i128::MIN } else { i128::MAX };
    let mut i = 0;
    while i < 2 {
        let mut j = 0;
        while j < 4 {
            let divisor = divisors[j];
            // Endpoints must be nonzero; 1 and -1 only count when the
            // interval contains them.
            let usable = match j {
                0 | 1 => divisor != 0,
                _ => rhs_min <= divisor && divisor <= rhs_max,
            };
            if usable {
                let q = quotient(dividends[i], divisor);
                if (want_max && q > extreme) || (!want_max && q < extreme) {
                    extreme = q;
                }
            }
            j += 1;
        }
        i += 1;
    }
    extreme
}

/// The lower bound of the quotient of two intervals.
///
/// The divisor interval may touch zero (the zero divisor itself cannot occur
/// at runtime without a panic), but must not be exactly `[0, 0]`.
#[must_use]
pub const fn div_min(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    div_extreme(lhs_min, lhs_max, rhs_min, rhs_max, false)
}

/// The upper bound of the quotient of two intervals.
#[must_use]
pub const fn div_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    div_extreme(lhs_min, lhs_max, rhs_min, rhs_max, true)
}

// === Remainder ===

// Remainder bounds for a nonpositive dividend interval over a negative
// divisor interval, unioning the per-divisor remainder intervals. Operating
// on nonpositive magnitudes means `i128::MIN` never needs negating.
//
// `least_dividend` is the endpoint closer to zero, `greatest_divisor` the
// most negative divisor. Returns `(upper, lower)`, both nonpositive.
const fn sign_free_rem(
    least_dividend: i128,
    most_dividend: i128,
    greatest_divisor: i128,
    least_divisor: i128,
) -> (i128, i128) {
    // Every divisor magnitude exceeds every dividend magnitude, so the
    // remainder is the dividend itself.
    if least_divisor < most_dividend {
        return (least_dividend, most_dividend);
    }

    let mut upper = i128::MIN;
    let mut lower = i128::MAX;
    // Smallest magnitude first; the union usually saturates long before the
    // large divisors are reached.
    let mut divisor = least_divisor;
    loop {
        // When both dividend endpoints share a quotient the remainder is
        // monotonic over the interval; otherwise it wrapped past zero
        // somewhere inside, so the full `[divisor + 1, 0]` is reachable.
        let (round_upper, round_lower) = if divisor == -1 {
            // Everything is divisible by -1. Special-cased to keep
            // `i128::MIN / -1` out of the quotient comparison.
            (0, 0)
        } else if least_dividend / divisor == most_dividend / divisor {
            (least_dividend % divisor, most_dividend % divisor)
        } else {
            (0, divisor + 1)
        };
        if round_upper > upper {
            upper = round_upper;
        }
        if round_lower < lower {
            lower = round_lower;
        }
        // The union cannot grow past [greatest_divisor + 1, 0], and no round
        // reaches below the most negative dividend.
        if upper == 0 && (lower <= greatest_divisor + 1 || lower == most_dividend) {
            break;
        }
        if divisor == greatest_divisor {
            break;
        }
        divisor -= 1;
    }
    (upper, lower)
}

const fn rem_range(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> (i128, i128) {
    assert!(lhs_min <= lhs_max && rhs_min <= rhs_max, "interval is inverted");
    assert!(
        rhs_min != 0 || rhs_max != 0,
        "remainder is not defined for a divisor interval of only zero",
    );

    // The sign of the result equals the sign of the dividend; the divisor's
    // sign is irrelevant, so fold the divisor interval onto the negatives.
    let greatest_divisor = if rhs_max < 0 {
        rhs_min
    } else {
        min(rhs_min, min(-rhs_max, -1))
    };
    let least_divisor = if rhs_min > 0 {
        -rhs_min
    } else if rhs_max < 0 {
        rhs_max
    } else {
        -1
    };

    let has_negative = lhs_min <= 0;
    let has_positive = lhs_max > 0;

    let negative = if has_negative {
        let least = if lhs_max < 0 { lhs_max } else { max(lhs_min, 0) };
        sign_free_rem(least, lhs_min, greatest_divisor, least_divisor)
    } else {
        (0, 0)
    };
    let positive = if has_positive {
        let least = if lhs_min > 0 { lhs_min } else { min(lhs_max, 0) };
        sign_free_rem(-least, -lhs_max, greatest_divisor, least_divisor)
    } else {
        (0, 0)
    };

    let lower = if !has_positive {
        negative.1
    } else if !has_negative {
        -positive.0
    } else {
        min(negative.1, -positive.0)
    };
    let upper = if !has_positive {
        negative.0
    } else if !has_negative {
        -positive.1
    } else {
        max(negative.0, -positive.1)
    };
    (lower, upper)
}

/// The lower bound of the remainder of two intervals (truncated division
/// remainder, so the result takes the dividend's sign).
#[must_use]
pub const fn rem_min(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    rem_range(lhs_min, lhs_max, rhs_min, rhs_max).0
}

/// The upper bound of the remainder of two intervals.
#[must_use]
pub const fn rem_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    rem_range(lhs_min, lhs_max, rhs_min, rhs_max).1
}

// === Shifts ===

const fn shift_preconditions(lhs_min: i128, rhs_min: i128, rhs_max: i128) {
    assert!(lhs_min >= 0, "shifts are not defined for negative values");
    assert!(rhs_min >= 0, "shifts by negative amounts are not defined");
    assert!(rhs_max <= 127, "cannot shift by the width of i128 or more");
}

const fn shifted(value: i128, amount: i128) -> i128 {
    if value == 0 {
        return 0;
    }
    if amount >= 127 {
        panic!("left shift bounds require a larger type than i128");
    }
    product(value, 1 << amount)
}

/// The lower bound of `[lhs_min, _] << [rhs_min, _]`.
///
/// Both operand intervals must be nonnegative and the shift interval must
/// stay below the width of `i128`.
#[must_use]
pub const fn shl_min(lhs_min: i128, _lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    shift_preconditions(lhs_min, rhs_min, rhs_max);
    shifted(lhs_min, rhs_min)
}

/// The upper bound of `[_, lhs_max] << [_, rhs_max]`.
#[must_use]
pub const fn shl_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    shift_preconditions(lhs_min, rhs_min, rhs_max);
    shifted(lhs_max, rhs_max)
}

/// The lower bound of `[lhs_min, _] >> [_, rhs_max]`.
#[must_use]
pub const fn shr_min(lhs_min: i128, _lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    shift_preconditions(lhs_min, rhs_min, rhs_max);
    lhs_min >> rhs_max
}

/// The upper bound of `[_, lhs_max] >> [rhs_min, _]`.
#[must_use]
pub const fn shr_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    shift_preconditions(lhs_min, rhs_min, rhs_max);
    lhs_max >> rhs_min
}

// === Bitwise and ===

/// The lower bound of the bitwise and of two nonnegative intervals: zero.
#[must_use]
pub const fn bitand_min(lhs_min: i128, _lhs_max: i128, rhs_min: i128, _rhs_max: i128) -> i128 {
    assert!(
        lhs_min >= 0 && rhs_min >= 0,
        "bitwise and bounds are only defined for nonnegative values",
    );
    0
}

/// The upper bound of the bitwise and of two nonnegative intervals:
/// `x & y` never exceeds either operand.
#[must_use]
pub const fn bitand_max(lhs_min: i128, lhs_max: i128, rhs_min: i128, rhs_max: i128) -> i128 {
    assert!(
        lhs_min >= 0 && rhs_min >= 0,
        "bitwise and bounds are only defined for nonnegative values",
    );
    min(lhs_max, rhs_max)
}

// === Negation and absolute value ===

/// The lower bound of the negation of an interval: `-max`.
#[must_use]
pub const fn neg_min(max: i128) -> i128 {
    match max.checked_neg() {
        Some(n) => n,
        None => panic!("negation bounds require a larger type than i128"),
    }
}

/// The upper bound of the negation of an interval: `-min`.
#[must_use]
pub const fn neg_max(min: i128) -> i128 {
    match min.checked_neg() {
        Some(n) => n,
        None => panic!("negation bounds require a larger type than i128"),
    }
}

/// The lower bound of the absolute value of an interval.
#[must_use]
pub const fn abs_min(lo: i128, hi: i128) -> i128 {
    if lo >= 0 {
        lo
    } else if hi <= 0 {
        neg_min(hi)
    } else {
        0
    }
}

/// The upper bound of the absolute value of an interval.
#[must_use]
pub const fn abs_max(lo: i128, hi: i128) -> i128 {
    max(neg_max(lo), hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_subtraction() {
        assert_eq!(add_min(-5, 3), -2);
        assert_eq!(add_max(10, 7), 17);
        assert_eq!(sub_min(-5, 7), -12);
        assert_eq!(sub_max(10, 3), 7);
    }

    #[test]
    fn multiplication_picks_extreme_products() {
        assert_eq!(mul_min(50, 100, 10, 20), 500);
        assert_eq!(mul_max(50, 100, 10, 20), 2000);
        assert_eq!(mul_min(-50, 100, -10, 20), -1000);
        assert_eq!(mul_max(-50, 100, -10, 20), 2000);
        assert_eq!(mul_min(-100, -50, -20, -10), 500);
        assert_eq!(mul_max(-100, -50, -20, -10), 2000);
    }

    #[test]
    fn division_uses_smallest_magnitude_divisors() {
        assert_eq!(div_min(10, 100, 2, 5), 2);
        assert_eq!(div_max(10, 100, 2, 5), 50);
        // A divisor interval spanning zero reaches both +-1.
        assert_eq!(div_min(10, 100, -5, 5), -100);
        assert_eq!(div_max(10, 100, -5, 5), 100);
        // Zero endpoints are skipped, not divided by.
        assert_eq!(div_min(10, 100, 0, 5), 2);
        assert_eq!(div_max(10, 100, 0, 5), 100);
        assert_eq!(div_min(-9, -9, -3, 0), 3);
        assert_eq!(div_max(-9, -9, -3, 0), 9);
    }

    #[test]
    fn division_exhaustive_small() {
        // Brute-force oracle over small intervals.
        let mut lo = -6i128;
        while lo <= 6 {
            for hi in lo..=6 {
                for dlo in -4i128..=4 {
                    for dhi in dlo..=4 {
                        if dlo == 0 && dhi == 0 {
                            continue;
                        }
                        let mut true_min = i128::MAX;
                        let mut true_max = i128::MIN;
                        for a in lo..=hi {
                            for b in dlo..=dhi {
                                if b != 0 {
                                    true_min = true_min.min(a / b);
                                    true_max = true_max.max(a / b);
                                }
                            }
                        }
                        assert_eq!(div_min(lo, hi, dlo, dhi), true_min, "{lo}..{hi} / {dlo}..{dhi}");
                        assert_eq!(div_max(lo, hi, dlo, dhi), true_max, "{lo}..{hi} / {dlo}..{dhi}");
                    }
                }
            }
            lo += 1;
        }
    }

    #[test]
    fn remainder_single_dividend() {
        // 7 % anything in [10, 20] is exactly 7.
        assert_eq!(rem_min(7, 7, 10, 20), 7);
        assert_eq!(rem_max(7, 7, 10, 20), 7);
    }

    #[test]
    fn remainder_takes_dividend_sign() {
        assert_eq!(rem_min(0, 10, 3, 3), 0);
        assert_eq!(rem_max(0, 10, 3, 3), 2);
        assert_eq!(rem_min(-10, 0, 3, 3), -2);
        assert_eq!(rem_max(-10, 0, 3, 3), 0);
        assert_eq!(rem_min(-10, 10, -3, 3), -2);
        assert_eq!(rem_max(-10, 10, -3, 3), 2);
    }

    #[test]
    fn remainder_exhaustive_small() {
        let mut lo = -7i128;
        while lo <= 7 {
            for hi in lo..=7 {
                for dlo in -5i128..=5 {
                    for dhi in dlo..=5 {
                        if dlo == 0 && dhi == 0 {
                            continue;
                        }
                        let mut true_min = i128::MAX;
                        let mut true_max = i128::MIN;
                        for a in lo..=hi {
                            for b in dlo..=dhi {
                                if b != 0 {
                                    true_min = true_min.min(a % b);
                                    true_max = true_max.max(a % b);
                                }
                            }
                        }
                        let got_min = rem_min(lo, hi, dlo, dhi);
                        let got_max = rem_max(lo, hi, dlo, dhi);
                        assert_eq!(got_min, true_min, "{lo}..{hi} % {dlo}..{dhi}");
                        assert_eq!(got_max, true_max, "{lo}..{hi} % {dlo}..{dhi}");
                    }
                }
            }
            lo += 1;
        }
    }

    #[test]
    fn remainder_huge_divisor_interval_terminates() {
        // The early exit must kick in long before the divisor interval is
        // walked to its end.
        assert_eq!(rem_min(-100, 100, 1, i128::MAX), -100);
        assert_eq!(rem_max(-100, 100, 1, i128::MAX), 100);
    }

    #[test]
    fn shifts() {
        assert_eq!(shl_min(1, 4, 0, 3), 1);
        assert_eq!(shl_max(1, 4, 0, 3), 32);
        assert_eq!(shr_min(16, 64, 1, 3), 2);
        assert_eq!(shr_max(16, 64, 1, 3), 32);
        assert_eq!(shl_min(0, 0, 127, 127), 0);
    }

    #[test]
    fn bitand() {
        assert_eq!(bitand_min(0, 255, 0, 15), 0);
        assert_eq!(bitand_max(0, 255, 0, 15), 15);
    }

    #[test]
    fn negation_and_abs() {
        assert_eq!(neg_min(25), -25);
        assert_eq!(neg_max(-2), 2);
        assert_eq!(abs_min(-5, 10), 0);
        assert_eq!(abs_max(-50, 10), 50);
        assert_eq!(abs_min(3, 10), 3);
        assert_eq!(abs_min(-10, -3), 3);
    }
}
