use std::time::Instant;

use log::trace;
use shellsort::Direction;

use crate::data::{Dataset, Person};
use crate::rust_shellsort;

/// Runs `sort_fn` on a private copy of `data` and returns the elapsed wall-clock time in
/// milliseconds.
///
/// `data` itself is left untouched, so repeated runs against the same source are comparable. The
/// copy is made before the clock starts.
pub fn measure_with<T, S>(data: &[T], sort_fn: S) -> f64
where
    T: Clone,
    S: FnOnce(&mut [T]),
{
    let mut copy = data.to_vec();

    let start = Instant::now();
    sort_fn(copy.as_mut_slice());
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    trace!("sorted {} elements in {elapsed_ms:.3} ms", copy.len());

    elapsed_ms
}

/// Times a key sort of a copy of `data`, see [`measure_with`].
pub fn measure<T, K, F>(data: &[T], key_fn: F, direction: Direction) -> f64
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    measure_with(data, |v| rust_shellsort::sort_by_key(v, key_fn, direction))
}

/// Times a copy of `data` sorted by the key its element kind uses.
pub fn measure_dataset(data: &Dataset, direction: Direction) -> f64 {
    match data {
        Dataset::Numbers(v) => measure_with(v, |v| shellsort::sort_by_direction(v, direction)),
        Dataset::Strings(v) => measure_with(v, |v| shellsort::sort_by_direction(v, direction)),
        Dataset::People(v) => measure(v, Person::age, direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_not_mutated() {
        let data = vec![5, 3, 8, 1, 9, 2];
        let ms = measure(&data, |&x| x, Direction::Ascending);
        assert!(ms >= 0.0);
        assert_eq!(data, [5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn measure_with_sorts_the_copy() {
        let data = vec![3, 1, 2];
        measure_with(&data, |v| {
            shellsort::sort(v);
            assert_eq!(v, [1, 2, 3]);
        });
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn dataset_source_is_not_mutated() {
        let data = Dataset::Strings(vec!["B".into(), "A".into()]);
        let ms = measure_dataset(&data, Direction::Descending);
        assert!(ms.is_finite() && ms >= 0.0);
        assert_eq!(data, Dataset::Strings(vec!["B".into(), "A".into()]));
    }
}
