use std::cmp::Ordering;

use shellsort::Direction;

sort_impl!("rust_shellsort_ciura");

pub fn sort<T: Ord>(data: &mut [T]) {
    shellsort::sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    shellsort::sort_by(data, compare);
}

pub fn sort_by_key<T, K: Ord, F: FnMut(&T) -> K>(data: &mut [T], f: F, direction: Direction) {
    shellsort::sort_by_key(data, f, direction);
}
