use core::ops::RangeInclusive;

/// An inclusive range of raw token indices.
///
/// Both ends name buffer positions; `stop < start` is an empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Interval {
    pub start: usize,
    pub stop: usize,
}

impl Interval {
    #[inline]
    pub const fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Number of indices covered.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.stop < self.start {
            0
        } else {
            self.stop - self.start + 1
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.stop < self.start
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.stop
    }
}

impl From<RangeInclusive<usize>> for Interval {
    #[inline]
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<(usize, usize)> for Interval {
    #[inline]
    fn from((start, stop): (usize, usize)) -> Self {
        Self::new(start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, 1; "single")]
    #[test_case(2, 5, 4; "several")]
    #[test_case(5, 2, 0; "inverted is empty")]
    fn test_interval_len(start: usize, stop: usize, expected: usize) {
        let interval = Interval::new(start, stop);
        assert_eq!(interval.len(), expected);
        assert_eq!(interval.is_empty(), expected == 0);
    }

    #[test]
    fn test_interval_from_range() {
        assert_eq!(Interval::from(1..=4), Interval::new(1, 4));
        assert!(Interval::from((3, 1)).is_empty());
        assert!(Interval::new(1, 4).contains(4));
        assert!(!Interval::new(1, 4).contains(0));
    }
}
