//! Streak-based "most common" aggregation.
//!
//! Values are counted as maximal runs of equal values in title order, not as
//! global frequencies: two tracks by the same artist separated by another
//! artist's track form two streaks of one. Ties keep the earliest streak.

/// Running state of the in-order fold.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Streaks<'a> {
    current: Option<(&'a str, usize)>,
    best: Option<(&'a str, usize)>,
}

impl<'a> Streaks<'a> {
    fn push(self, value: &'a str) -> Self {
        let current = match self.current {
            Some((v, n)) if v == value => (v, n + 1),
            _ => (value, 1),
        };
        let best = match self.best {
            Some((_, n)) if n >= current.1 => self.best,
            _ => Some(current),
        };
        Self {
            current: Some(current),
            best,
        }
    }
}

/// Longest streak of equal values, compared ordinally, in iteration order.
pub(super) fn longest_streak<'a, I>(values: I) -> Option<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .fold(Streaks::default(), Streaks::push)
        .best
        .map(|(value, count)| (value.to_string(), count))
}
