//! Shell sort with a fixed Ciura-like gap sequence.
//!
//! The sort is unstable, in-place and never allocates. Every entry point funnels into the same
//! gapped insertion routine, parameterized only by an `is_less` predicate.

use core::cmp::Ordering;

mod gapped;

/// Base gap sequence, largest first. Only the gaps strictly smaller than the slice length are
/// used.
pub const GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Ordering directive applied uniformly to every comparison of one sort call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns `true` if `a` must be placed before `b` under this direction.
    #[inline(always)]
    pub fn is_less<K: Ord + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            Direction::Ascending => a.lt(b),
            Direction::Descending => b.lt(a),
        }
    }
}

impl From<bool> for Direction {
    /// `true` selects descending order, mirroring a `reverse` flag.
    fn from(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Sorts the slice in ascending order, but might not preserve the order of equal elements.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
///
/// shellsort::sort(&mut v);
/// assert!(v == [1, 2, 3, 5, 8, 9]);
/// ```
#[inline(always)]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shellsort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice in the given direction, comparing elements directly.
#[inline(always)]
pub fn sort_by_direction<T>(v: &mut [T], direction: Direction)
where
    T: Ord,
{
    shellsort(v, &mut |a: &T, b: &T| direction.is_less(a, b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the slice still
/// holds exactly the elements it held before the call.
#[inline(always)]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shellsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts the slice by the key extracted with `f`, in the given direction.
///
/// `f` is called once per side of every comparison. It must be deterministic and free of side
/// effects, otherwise the resulting order is unspecified.
///
/// # Examples
///
/// ```
/// use shellsort::Direction;
///
/// let mut v = [("A", 30), ("B", 10), ("C", 20)];
///
/// shellsort::sort_by_key(&mut v, |p| p.1, Direction::Ascending);
/// assert!(v == [("B", 10), ("C", 20), ("A", 30)]);
/// ```
#[inline(always)]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F, direction: Direction)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    shellsort(v, &mut |a: &T, b: &T| direction.is_less(&f(a), &f(b)));
}

/// Returns the gaps used to sort a slice of length `len`, largest first.
///
/// The returned list always ends in exactly one `1`, including for lengths where no base gap is
/// smaller than `len`.
pub fn gaps(len: usize) -> &'static [usize] {
    // GAPS is descending, so the usable gaps form a suffix.
    let start = GAPS.iter().position(|&gap| gap < len).unwrap_or(GAPS.len() - 1);
    &GAPS[start..]
}

fn shellsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    for &gap in gaps(v.len()) {
        gapped::insertion_sort_gapped(v, gap, is_less);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_for_small_lengths() {
        assert_eq!(gaps(0), &[1]);
        assert_eq!(gaps(1), &[1]);
        assert_eq!(gaps(2), &[1]);
        assert_eq!(gaps(4), &[1]);
        assert_eq!(gaps(5), &[4, 1]);
        assert_eq!(gaps(11), &[10, 4, 1]);
    }

    #[test]
    fn gaps_for_large_lengths() {
        assert_eq!(gaps(701), &[301, 132, 57, 23, 10, 4, 1]);
        assert_eq!(gaps(702), &GAPS);
        assert_eq!(gaps(1_000_000), &GAPS);
    }

    #[test]
    fn gaps_end_in_single_one() {
        for len in 0..2_000 {
            let gaps = gaps(len);
            assert_eq!(gaps.last(), Some(&1));
            assert_eq!(gaps.iter().filter(|&&gap| gap == 1).count(), 1);
            assert!(gaps.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from(false), Direction::Ascending);
        assert_eq!(Direction::from(true), Direction::Descending);
        assert_eq!(Direction::default(), Direction::Ascending);
    }

    #[test]
    fn direction_is_less() {
        assert!(Direction::Ascending.is_less(&1, &2));
        assert!(!Direction::Ascending.is_less(&2, &2));
        assert!(Direction::Descending.is_less(&2, &1));
        assert!(!Direction::Descending.is_less(&2, &2));
    }
}
