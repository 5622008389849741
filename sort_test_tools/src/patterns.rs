use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Environment variable that fixes the seed used by every random pattern.
pub const SEED_ENV_VAR: &str = "SORT_TEST_SEED";

/// Returns the seed shared by all random patterns of this process.
///
/// Taken from `SORT_TEST_SEED` if set, otherwise drawn once and reused, so a failing run can be
/// replayed.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn ascending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let saw_len = saw_len.max(1);
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn descending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let saw_len = saw_len.max(1);
    (0..len).map(|i| (saw_len - 1 - (i % saw_len)) as i32).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..len)
        .map(|i| if i < half { i } else { len - 1 - i } as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed() {
        assert_eq!(random_init_seed(), random_init_seed());
        assert_eq!(random(20), random(20));
    }

    #[test]
    fn shapes() {
        assert_eq!(ascending(4), [0, 1, 2, 3]);
        assert_eq!(descending(4), [3, 2, 1, 0]);
        assert_eq!(ascending_saw(5, 2), [0, 1, 0, 1, 0]);
        assert_eq!(descending_saw(5, 2), [1, 0, 1, 0, 1]);
        assert_eq!(pipe_organ(5), [0, 1, 2, 1, 0]);
        assert!(random_uniform(100, 0..3).iter().all(|v| (0..3).contains(v)));
    }
}
