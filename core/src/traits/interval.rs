use core::ops::RangeInclusive;

use crate::Interval;

/// Anything that can name the inclusive range of tokens it was built from.
///
/// Parse-tree nodes implement this so the stream can reconstruct their
/// source text. A node that matched no tokens returns `None`.
pub trait SourceInterval {
    fn source_interval(&self) -> Option<Interval>;
}

impl SourceInterval for Interval {
    #[inline]
    fn source_interval(&self) -> Option<Interval> {
        Some(*self)
    }
}

impl SourceInterval for RangeInclusive<usize> {
    #[inline]
    fn source_interval(&self) -> Option<Interval> {
        Some(Interval::new(*self.start(), *self.end()))
    }
}

impl SourceInterval for (usize, usize) {
    #[inline]
    fn source_interval(&self) -> Option<Interval> {
        Some(Interval::new(self.0, self.1))
    }
}

impl<T: SourceInterval> SourceInterval for Option<T> {
    #[inline]
    fn source_interval(&self) -> Option<Interval> {
        self.as_ref().and_then(SourceInterval::source_interval)
    }
}

impl<T: SourceInterval + ?Sized> SourceInterval for &T {
    #[inline]
    fn source_interval(&self) -> Option<Interval> {
        (**self).source_interval()
    }
}
