use core::iter::FusedIterator;

use crate::Ranged;

/// An iterator over a contiguous run of ranged integers.
///
/// Stored as an inclusive span so the run can end at `i128::MAX` without the
/// exclusive end overflowing.
#[derive(Debug, Clone)]
pub struct IntegerRange<const MIN: i128, const MAX: i128> {
    next: i128,
    last: i128,
    done: bool,
}

/// Iterates over the half-open span `[first, last)`.
///
/// Yields nothing when `first >= last`.
#[must_use]
pub fn integer_range<const MIN: i128, const MAX: i128>(
    first: Ranged<MIN, MAX>,
    last: Ranged<MIN, MAX>,
) -> IntegerRange<MIN, MAX> {
    if first.get() >= last.get() {
        IntegerRange {
            next: first.get(),
            last: first.get(),
            done: true,
        }
    } else {
        IntegerRange {
            next: first.get(),
            last: last.get() - 1,
            done: false,
        }
    }
}

impl<const MIN: i128, const MAX: i128> Ranged<MIN, MAX> {
    /// Iterates over every value of the interval, smallest first.
    #[must_use]
    pub fn values() -> IntegerRange<MIN, MAX> {
        IntegerRange {
            next: MIN,
            last: MAX,
            done: false,
        }
    }
}

impl<const MIN: i128, const MAX: i128> Iterator for IntegerRange<MIN, MAX> {
    type Item = Ranged<MIN, MAX>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let value = self.next;
        if value == self.last {
            self.done = true;
        } else {
            self.next = value + 1;
        }
        // SAFETY: the span was built from values already in [MIN, MAX].
        Some(unsafe { Ranged::new_unchecked(value) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // The span length can exceed usize on huge intervals.
        match usize::try_from(self.last.abs_diff(self.next)) {
            Ok(n) if n < usize::MAX => (n + 1, Some(n + 1)),
            _ => (usize::MAX, None),
        }
    }
}

impl<const MIN: i128, const MAX: i128> DoubleEndedIterator for IntegerRange<MIN, MAX> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let value = self.last;
        if value == self.next {
            self.done = true;
        } else {
            self.last = value - 1;
        }
        // SAFETY: the span was built from values already in [MIN, MAX].
        Some(unsafe { Ranged::new_unchecked(value) })
    }
}

impl<const MIN: i128, const MAX: i128> FusedIterator for IntegerRange<MIN, MAX> {}

#[cfg(test)]
mod tests {
    use super::integer_range;
    use crate::Ranged;

    type Digit = Ranged<0, 9>;

    #[test]
    fn forward() {
        let collected: [i128; 4] = [2, 3, 4, 5];
        let mut i = 0;
        for v in integer_range(Digit::new(2).unwrap(), Digit::new(6).unwrap()) {
            assert_eq!(v, collected[i]);
            i += 1;
        }
        assert_eq!(i, 4);
    }

    #[test]
    fn empty_when_first_not_below_last() {
        let five = Digit::new(5).unwrap();
        assert!(integer_range(five, five).next().is_none());
        assert!(integer_range(Digit::MAX, Digit::MIN).next().is_none());
    }

    #[test]
    fn backward() {
        let mut it = integer_range(Digit::MIN, Digit::new(3).unwrap());
        assert_eq!(it.next_back().unwrap(), 2);
        assert_eq!(it.next_back().unwrap(), 1);
        assert_eq!(it.next().unwrap(), 0);
        assert!(it.next().is_none());
        assert!(it.next_back().is_none());
    }

    #[test]
    fn whole_interval() {
        let mut count = 0;
        let mut sum = 0i128;
        for v in Digit::values() {
            count += 1;
            sum += v.get();
        }
        assert_eq!(count, 10);
        assert_eq!(sum, 45);

        let mut singleton = Ranged::<7, 7>::values();
        assert_eq!(singleton.next().unwrap(), 7);
        assert!(singleton.next().is_none());
    }

    #[test]
    fn size_hints() {
        let it = integer_range(Digit::MIN, Digit::MAX);
        assert_eq!(it.size_hint(), (9, Some(9)));
        let huge = Ranged::<{ i128::MIN }, { i128::MAX }>::values();
        assert_eq!(huge.size_hint(), (usize::MAX, None));
    }
}
