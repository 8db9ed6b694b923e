use std::fmt::{self, Display};

use crate::util::sort_pair;

/// An unordered pair of values that compares and hashes equal regardless of element order.
///
/// This is how edges of an undirected graph are represented: `(a, b)` and
/// `(b, a)` produce the same `SortedPair`, which always stores the smaller
/// value first.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct SortedPair<T>(T, T);

impl<T: Ord> SortedPair<T> {
    /// Create a new `SortedPair` from two pre-sorted values.
    pub fn from_sorted(a: T, b: T) -> Self {
        debug_assert!(a <= b, "Values are not in sorted order");
        Self(a, b)
    }
}

impl<T: PartialEq> SortedPair<T> {
    /// The smaller of the two values.
    pub fn first(&self) -> &T {
        &self.0
    }

    /// The larger of the two values.
    pub fn second(&self) -> &T {
        &self.1
    }

    /// True if `value` is one of the ends.
    pub fn contains(&self, value: &T) -> bool {
        self.0 == *value || self.1 == *value
    }

    /// Given one end, returns the other one.  Returns `None` if `value` is
    /// not an end of this pair.
    pub fn other(&self, value: &T) -> Option<&T> {
        if self.0 == *value {
            Some(&self.1)
        } else if self.1 == *value {
            Some(&self.0)
        } else {
            None
        }
    }

    /// True if both ends are the same value.
    pub fn is_self_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<T: Ord> From<(T, T)> for SortedPair<T> {
    fn from(pair: (T, T)) -> Self {
        let (first, second) = sort_pair(pair.0, pair.1);
        Self(first, second)
    }
}

impl<T> From<SortedPair<T>> for (T, T) {
    fn from(pair: SortedPair<T>) -> Self {
        (pair.0, pair.1)
    }
}

impl<T: Display> Display for SortedPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}
